//! # JSON Diaper Log Repository
//!
//! File-backed diaper log store over `{data_directory}/diaper_logs.json`.
//! Records are re-normalized on every load: missing ids are regenerated and
//! stool attributes are cleared on changes not marked dirty.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::connection::JsonConnection;
use crate::domain::clock::Clock;
use crate::domain::models::coerce;
use crate::domain::models::diaper_log::sort_newest_first;
use crate::domain::models::{DiaperLog, DiaperLogDraft};
use crate::storage::error::StorageError;
use crate::storage::traits::DiaperLogStorage;

pub const DIAPER_LOGS_DOCUMENT: &str = "diaper_logs.json";

#[derive(Clone)]
pub struct DiaperLogRepository {
    connection: JsonConnection,
    clock: Arc<dyn Clock>,
}

impl DiaperLogRepository {
    pub fn new(connection: JsonConnection, clock: Arc<dyn Clock>) -> Self {
        Self { connection, clock }
    }
}

#[async_trait]
impl DiaperLogStorage for DiaperLogRepository {
    async fn load_logs(&self) -> Vec<DiaperLog> {
        let records = self.connection.read_records(DIAPER_LOGS_DOCUMENT).await;
        let now = self.clock.now_millis();

        let mut logs: Vec<DiaperLog> = records
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match DiaperLogDraft::from_value(raw) {
                Some(mut draft) => {
                    draft
                        .id
                        .get_or_insert_with(|| coerce::derived_identifier(raw, index));
                    Some(draft.normalize(now))
                }
                None => {
                    warn!("Skipping diaper record that is not an object: {}", raw);
                    None
                }
            })
            .collect();

        sort_newest_first(&mut logs);
        debug!("Loaded {} diaper logs", logs.len());
        logs
    }

    async fn save_logs(&self, logs: &[DiaperLog]) -> Result<(), StorageError> {
        self.connection
            .write_records(DIAPER_LOGS_DOCUMENT, logs)
            .await
    }

    async fn add_log(&self, log: DiaperLogDraft) -> Result<DiaperLog, StorageError> {
        let log = log.normalize(self.clock.now_millis());
        info!("Adding diaper log {}", log.id);

        let mut logs = self.load_logs().await;
        let before = logs.len();
        logs.retain(|existing| existing.id != log.id);
        if logs.len() < before {
            info!("Replacing stored diaper log with the same id");
        }
        logs.push(log.clone());
        sort_newest_first(&mut logs);
        self.save_logs(&logs).await?;

        Ok(log)
    }

    async fn delete_log(&self, id: &str) -> Result<(), StorageError> {
        let logs = self.load_logs().await;
        let before = logs.len();

        let remaining: Vec<DiaperLog> = logs.into_iter().filter(|log| log.id != id).collect();
        if remaining.len() == before {
            debug!("No diaper log {} to delete", id);
            return Ok(());
        }

        info!("Deleting diaper log {}", id);
        self.save_logs(&remaining).await
    }
}
