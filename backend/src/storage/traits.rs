//! # Storage Traits
//!
//! The seams between the domain services and the file-backed stores. Each
//! store owns exactly one document and rewrites it in full on every
//! mutation.
//!
//! Stores do no locking of their own: two overlapping mutations on the same
//! store can both read the old collection, and the later write wins.
//! Callers that may issue concurrent mutations serialize them.

use async_trait::async_trait;
use shared::ThemePreference;

use super::error::StorageError;
use crate::domain::models::{AppSettings, DiaperLog, DiaperLogDraft, FeedingLog, FeedingLogDraft};

/// Feeding log store
#[async_trait]
pub trait FeedingLogStorage: Send + Sync {
    /// All feeds, normalized, newest first. Empty when the document is
    /// missing, blank, or unreadable.
    async fn load_logs(&self) -> Vec<FeedingLog>;

    /// Overwrite the document with exactly `logs`
    async fn save_logs(&self, logs: &[FeedingLog]) -> Result<(), StorageError>;

    /// Normalize and append a feed, returning the stored record.
    /// A stored feed with the same id is replaced.
    async fn add_log(&self, log: FeedingLogDraft) -> Result<FeedingLog, StorageError>;

    async fn get_log(&self, id: &str) -> Option<FeedingLog>;

    /// Replace the feed with the same id.
    /// Fails with `StorageError::LogNotFound` when no such feed exists.
    async fn update_log(&self, log: FeedingLog) -> Result<FeedingLog, StorageError>;

    /// Remove a feed. A missing id is not an error.
    async fn delete_log(&self, id: &str) -> Result<(), StorageError>;
}

/// Diaper log store. Edits are modelled by callers as delete + add.
#[async_trait]
pub trait DiaperLogStorage: Send + Sync {
    /// All diaper changes, normalized, newest first
    async fn load_logs(&self) -> Vec<DiaperLog>;

    async fn save_logs(&self, logs: &[DiaperLog]) -> Result<(), StorageError>;

    /// Normalize a possibly partial record and append it, replacing any
    /// stored change with the same id
    async fn add_log(&self, log: DiaperLogDraft) -> Result<DiaperLog, StorageError>;

    /// Remove a diaper change. A missing id is not an error.
    async fn delete_log(&self, id: &str) -> Result<(), StorageError>;
}

/// Read side of the user preferences
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    async fn settings(&self) -> AppSettings;

    async fn default_feed_interval_minutes(&self) -> u32 {
        self.settings().await.feed_interval_minutes()
    }

    async fn theme(&self) -> ThemePreference {
        self.settings().await.theme
    }
}

/// Write side of the user preferences
#[async_trait]
pub trait SettingsStorage: SettingsProvider {
    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError>;
}
