//! # JSON Feeding Log Repository
//!
//! File-backed feeding log store. All feeds live in a single document,
//! `{data_directory}/feeding_logs.json`, holding a pretty-printed JSON array.
//!
//! ## Record Format
//!
//! ```json
//! [
//!   {
//!     "id": "6f1c…",
//!     "feedType": "formula",
//!     "amountMl": 120.0,
//!     "amountOz": 4.0,
//!     "durationMinutes": 20,
//!     "isBottleFed": true,
//!     "startTime": 1700000000000,
//!     "endTime": 1700001200000,
//!     "timestamp": 1700001200000,
//!     "nextFeedTime": 1700012000000
//!   }
//! ]
//! ```
//!
//! Every record is re-normalized on load, so older documents with missing
//! or malformed fields still load. The next-feed time is resolved against
//! the interval configured at load time.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::connection::JsonConnection;
use crate::domain::clock::Clock;
use crate::domain::models::coerce;
use crate::domain::models::feeding_log::sort_newest_first;
use crate::domain::models::{FeedingLog, FeedingLogDraft};
use crate::storage::error::StorageError;
use crate::storage::traits::{FeedingLogStorage, SettingsProvider};

pub const FEEDING_LOGS_DOCUMENT: &str = "feeding_logs.json";

#[derive(Clone)]
pub struct FeedingLogRepository {
    connection: JsonConnection,
    settings: Arc<dyn SettingsProvider>,
    clock: Arc<dyn Clock>,
}

impl FeedingLogRepository {
    pub fn new(
        connection: JsonConnection,
        settings: Arc<dyn SettingsProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            connection,
            settings,
            clock,
        }
    }

    async fn normalize(&self, draft: FeedingLogDraft) -> FeedingLog {
        let interval = self.settings.default_feed_interval_minutes().await;
        draft.normalize(self.clock.now_millis(), interval)
    }
}

#[async_trait]
impl FeedingLogStorage for FeedingLogRepository {
    async fn load_logs(&self) -> Vec<FeedingLog> {
        let records = self.connection.read_records(FEEDING_LOGS_DOCUMENT).await;
        if records.is_empty() {
            return Vec::new();
        }

        let now = self.clock.now_millis();
        let interval = self.settings.default_feed_interval_minutes().await;

        let mut logs: Vec<FeedingLog> = records
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match FeedingLogDraft::from_value(raw) {
                Some(mut draft) => {
                    draft
                        .id
                        .get_or_insert_with(|| coerce::derived_identifier(raw, index));
                    Some(draft.normalize(now, interval))
                }
                None => {
                    warn!("Skipping feeding record that is not an object: {}", raw);
                    None
                }
            })
            .collect();

        sort_newest_first(&mut logs);
        debug!("Loaded {} feeding logs", logs.len());
        logs
    }

    async fn save_logs(&self, logs: &[FeedingLog]) -> Result<(), StorageError> {
        self.connection
            .write_records(FEEDING_LOGS_DOCUMENT, logs)
            .await
    }

    async fn add_log(&self, log: FeedingLogDraft) -> Result<FeedingLog, StorageError> {
        let log = self.normalize(log).await;
        info!("Adding feeding log {}", log.id);

        let mut logs = self.load_logs().await;
        let before = logs.len();
        logs.retain(|existing| existing.id != log.id);
        if logs.len() < before {
            info!("Replacing stored feeding log with the same id");
        }
        logs.push(log.clone());
        sort_newest_first(&mut logs);
        self.save_logs(&logs).await?;

        Ok(log)
    }

    async fn get_log(&self, id: &str) -> Option<FeedingLog> {
        self.load_logs().await.into_iter().find(|log| log.id == id)
    }

    async fn update_log(&self, log: FeedingLog) -> Result<FeedingLog, StorageError> {
        let mut logs = self.load_logs().await;

        let index = logs
            .iter()
            .position(|existing| existing.id == log.id)
            .ok_or_else(|| StorageError::LogNotFound(log.id.clone()))?;

        let updated = self.normalize(FeedingLogDraft::from(log)).await;
        info!("Updating feeding log {}", updated.id);

        logs[index] = updated.clone();
        sort_newest_first(&mut logs);
        self.save_logs(&logs).await?;

        Ok(updated)
    }

    async fn delete_log(&self, id: &str) -> Result<(), StorageError> {
        let logs = self.load_logs().await;
        let before = logs.len();

        let remaining: Vec<FeedingLog> = logs.into_iter().filter(|log| log.id != id).collect();
        if remaining.len() == before {
            debug!("No feeding log {} to delete", id);
            return Ok(());
        }

        info!("Deleting feeding log {}", id);
        self.save_logs(&remaining).await
    }
}
