use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::clock::Clock;
use crate::domain::commands::feeding::{
    CreateFeedingCommand, FeedingListQuery, FeedingListResult, FeedingResult, NextFeedResult,
    UpdateFeedingCommand,
};
use crate::domain::models::{FeedingLog, FeedingLogDraft};
use crate::domain::next_feed::NextFeedStatus;
use crate::domain::validation::ValidationError;
use crate::storage::{FeedingLogStorage, SettingsProvider, StorageError};

/// Service for recording and editing feeds.
///
/// Mutations go through `write_gate` so that two requests never
/// read-modify-write the feeding document at the same time.
#[derive(Clone)]
pub struct FeedingService {
    storage: Arc<dyn FeedingLogStorage>,
    settings: Arc<dyn SettingsProvider>,
    clock: Arc<dyn Clock>,
    write_gate: Arc<Mutex<()>>,
}

impl FeedingService {
    pub fn new(
        storage: Arc<dyn FeedingLogStorage>,
        settings: Arc<dyn SettingsProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            storage,
            settings,
            clock,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Feeds newest first, optionally capped at `limit`
    pub async fn list_feedings(&self, query: FeedingListQuery) -> Result<FeedingListResult> {
        info!("Listing feeding logs: limit={:?}", query.limit);

        let mut feeding_logs = self.storage.load_logs().await;
        if let Some(limit) = query.limit {
            feeding_logs.truncate(limit as usize);
        }

        debug!("Returning {} feeding logs", feeding_logs.len());
        Ok(FeedingListResult { feeding_logs })
    }

    pub async fn create_feeding(&self, command: CreateFeedingCommand) -> Result<FeedingResult> {
        info!("Creating feeding log");

        let _guard = self.write_gate.lock().await;
        let feeding_log = self
            .storage
            .add_log(command.log)
            .await
            .context("Failed to save new feeding log")?;

        info!(
            "Created feeding log {} ({} ml {})",
            feeding_log.id, feeding_log.amount_ml, feeding_log.feed_type
        );

        Ok(FeedingResult {
            success_message: format!("Logged {} feed", feeding_log.feed_type),
            feeding_log,
        })
    }

    pub async fn get_feeding(&self, id: &str) -> Result<Option<FeedingLog>> {
        info!("Getting feeding log: {}", id);

        let feeding_log = self.storage.get_log(id).await;
        if feeding_log.is_none() {
            warn!("Feeding log not found: {}", id);
        }

        Ok(feeding_log)
    }

    /// Apply the fields present in `command` on top of the stored feed.
    ///
    /// Derived values follow the edited ones: moving the start or end time
    /// recomputes the duration unless one is given, a new duration moves the
    /// start time, and a new end time recomputes the next-feed time.
    pub async fn update_feeding(&self, command: UpdateFeedingCommand) -> Result<FeedingResult> {
        info!("Updating feeding log: {}", command.id);

        if command.id.trim().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }

        let _guard = self.write_gate.lock().await;

        let existing = self
            .storage
            .get_log(&command.id)
            .await
            .ok_or_else(|| StorageError::LogNotFound(command.id.clone()))?;

        let draft = Self::apply_update(existing.into(), &command);
        let interval = self.settings.default_feed_interval_minutes().await;
        let updated = draft.normalize(self.clock.now_millis(), interval);

        let feeding_log = self.storage.update_log(updated).await?;
        info!("Updated feeding log {}", feeding_log.id);

        Ok(FeedingResult {
            feeding_log,
            success_message: "Feeding log updated".to_string(),
        })
    }

    /// Remove a feed. Removing an id that does not exist succeeds.
    pub async fn delete_feeding(&self, id: &str) -> Result<()> {
        info!("Deleting feeding log: {}", id);

        let _guard = self.write_gate.lock().await;
        self.storage
            .delete_log(id)
            .await
            .with_context(|| format!("Failed to delete feeding log {}", id))
    }

    /// Status of the next feed relative to the most recent one
    pub async fn next_feed(&self) -> Result<NextFeedResult> {
        debug!("Computing next feed status");

        let logs = self.storage.load_logs().await;
        let status = NextFeedStatus::from_latest(logs.first(), self.clock.now_millis());

        Ok(NextFeedResult { status })
    }

    fn apply_update(mut draft: FeedingLogDraft, command: &UpdateFeedingCommand) -> FeedingLogDraft {
        if let Some(feed_type) = command.feed_type {
            draft.feed_type = Some(feed_type);
        }
        if let Some(amount_ml) = command.amount_ml {
            draft.amount_ml = Some(amount_ml);
        }
        if let Some(amount_oz) = command.amount_oz {
            draft.amount_oz = Some(amount_oz);
        }
        if let Some(is_bottle_fed) = command.is_bottle_fed {
            draft.is_bottle_fed = Some(is_bottle_fed);
        }
        if let Some(timestamp) = command.timestamp {
            draft.timestamp = Some(timestamp);
        }

        if let Some(start_time) = command.start_time {
            draft.start_time = Some(start_time);
        }
        if let Some(end_time) = command.end_time {
            draft.end_time = Some(end_time);
            draft.next_feed_time = None;
        }

        match command.duration_minutes {
            Some(minutes) => {
                draft.duration_minutes = Some(f64::from(minutes));
                if command.start_time.is_none() {
                    draft.start_time = None;
                }
            }
            None if command.start_time.is_some() || command.end_time.is_some() => {
                draft.duration_minutes = None;
            }
            None => {}
        }

        if let Some(next_feed_time) = command.next_feed_time {
            draft.next_feed_time = Some(next_feed_time);
        }

        draft
    }
}
