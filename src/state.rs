use std::sync::Arc;

use crate::store::ScoreStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ScoreStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self { store }
    }
}
