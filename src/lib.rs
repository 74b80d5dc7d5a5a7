//! Scorekeeping HTTP service.
//!
//! Keeps one running aggregate of submitted game results (play count, best
//! score, average score, latest session) in memory and serves it over three
//! JSON endpoints:
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/getStats` | Zero or one aggregate record, as a list |
//! | POST | `/api/saveScore` | Fold a submission into the aggregate |
//! | DELETE | `/api/clearScores` | Drop the aggregate and restart ids |

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

pub use app::build_router;
