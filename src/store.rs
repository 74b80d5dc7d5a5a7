use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::models::{AggregateRecord, ScoreSubmission};

const INITIAL_ID: u64 = 1;

#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Current aggregate as a list of zero or one records.
    async fn fetch(&self) -> Vec<AggregateRecord>;
    async fn submit(&self, submission: ScoreSubmission) -> AggregateRecord;
    async fn reset(&self);
}

#[derive(Debug)]
struct StoreState {
    record: Option<AggregateRecord>,
    next_id: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            record: None,
            next_id: INITIAL_ID,
        }
    }
}

/// Process-local store. Record and id counter share one lock, so every
/// operation sees and leaves a consistent pair.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    state: Mutex<StoreState>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreStore for InMemoryScoreStore {
    async fn fetch(&self) -> Vec<AggregateRecord> {
        let state = self.state.lock().await;
        debug!(populated = state.record.is_some(), "fetching stats");
        state.record.iter().cloned().collect()
    }

    async fn submit(&self, submission: ScoreSubmission) -> AggregateRecord {
        let mut state = self.state.lock().await;

        let updated = match state.record.take() {
            Some(mut record) => {
                record.fold(submission);
                record
            }
            None => {
                let record = AggregateRecord::first(state.next_id, submission);
                state.next_id += 1;
                record
            }
        };
        state.record = Some(updated.clone());

        info!(
            id = updated.id,
            play_count = updated.play_count,
            best_score = updated.best_score,
            average_score = updated.average_score,
            "score saved"
        );

        updated
    }

    async fn reset(&self) {
        *self.state.lock().await = StoreState::default();
        info!("all scores cleared");
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex as StdMutex},
    };

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<StdMutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            let bytes = self.0.lock().expect("log buffer lock").clone();
            String::from_utf8(bytes).expect("logs are utf-8")
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn submission(score: i64) -> ScoreSubmission {
        ScoreSubmission {
            score,
            moves: 10,
            time: 45,
            created_at: format!("2024-01-01T00:00:{:02}Z", score.rem_euclid(60)),
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryScoreStore::new();
        assert!(store.fetch().await.is_empty());
    }

    #[tokio::test]
    async fn submit_creates_then_updates_single_record() {
        let store = InMemoryScoreStore::new();

        let first = store.submit(submission(100)).await;
        assert_eq!(first.id, 1);
        assert_eq!(first.play_count, 1);

        let second = store.submit(submission(200)).await;
        assert_eq!(second.id, 1);
        assert_eq!(second.play_count, 2);
        assert_eq!(second.average_score, 150.0);

        let stored = store.fetch().await;
        assert_eq!(stored, vec![second]);
    }

    #[tokio::test]
    async fn reset_is_idempotent_and_restarts_ids() {
        let store = InMemoryScoreStore::new();
        for score in [5, 15, 25] {
            store.submit(submission(score)).await;
        }

        store.reset().await;
        assert!(store.fetch().await.is_empty());
        store.reset().await;
        assert!(store.fetch().await.is_empty());

        let recreated = store.submit(submission(8)).await;
        assert_eq!(recreated.id, 1);
        assert_eq!(recreated.play_count, 1);
        assert_eq!(recreated.best_score, 8);
        assert_eq!(recreated.average_score, 8.0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_submits_do_not_lose_updates() {
        let store = Arc::new(InMemoryScoreStore::new());

        let handles = (1..=200)
            .map(|score| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.submit(submission(score)).await })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.await.expect("submit task should not panic");
        }

        let records = store.fetch().await;
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, 1);
        assert_eq!(record.play_count, 200);
        assert_eq!(record.best_score, 200);
        assert!((record.average_score - 100.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn operations_log_fetch_and_saved_id() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let store = InMemoryScoreStore::new();
        store.fetch().await;
        store.submit(submission(100)).await;

        let output = logs.contents();
        assert!(output.contains("fetching stats"), "{output}");
        assert!(output.contains("score saved"), "{output}");
        assert!(output.contains("id=1"), "{output}");
        assert!(output.contains("play_count=1"), "{output}");
    }
}
