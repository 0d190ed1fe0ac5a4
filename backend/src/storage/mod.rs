//! # Storage Module
//!
//! Persistence for feeding logs, diaper logs, and user settings. Each store
//! exclusively owns one document in the data directory and rewrites it in
//! full on every mutation; there is no schema version, so compatibility
//! with older documents comes entirely from normalizing records on load.

pub mod error;
pub mod json;
pub mod memory;
pub mod traits;

pub use error::StorageError;
pub use json::{DiaperLogRepository, FeedingLogRepository, JsonConnection, SettingsRepository};
pub use memory::InMemorySettings;
pub use traits::{DiaperLogStorage, FeedingLogStorage, SettingsProvider, SettingsStorage};
