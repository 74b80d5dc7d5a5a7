use serde::{Deserialize, Serialize};

/// One finished game session as posted by the client.
///
/// Fields are taken as-is: negative scores or out-of-order timestamps are
/// folded in like any other submission. Only `score` is required; the other
/// fields fall back to zero or an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    pub score: i64,
    #[serde(default)]
    pub moves: i64,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub created_at: String,
}

/// Running summary of every submission since the last reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub id: u64,
    pub best_score: i64,
    pub average_score: f64,
    pub play_count: u64,
    pub latest_score: i64,
    pub moves: i64,
    pub time: i64,
    pub created_at: String,
}

impl AggregateRecord {
    /// Builds the record for the first submission after an empty store.
    pub fn first(id: u64, submission: ScoreSubmission) -> Self {
        Self {
            id,
            best_score: submission.score,
            average_score: submission.score as f64,
            play_count: 1,
            latest_score: submission.score,
            moves: submission.moves,
            time: submission.time,
            created_at: submission.created_at,
        }
    }

    /// Folds one more submission into the record in place.
    ///
    /// The prior total is rebuilt as `average_score * play_count` on every call
    /// instead of being kept as an exact sum, so rounding error can build up
    /// over a very long run of submissions.
    pub fn fold(&mut self, submission: ScoreSubmission) {
        let prior_total = self.average_score * self.play_count as f64;
        self.play_count += 1;
        let new_total = prior_total + submission.score as f64;
        self.average_score = new_total / self.play_count as f64;
        self.best_score = self.best_score.max(submission.score);

        self.latest_score = submission.score;
        self.moves = submission.moves;
        self.time = submission.time;
        self.created_at = submission.created_at;
    }
}

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
