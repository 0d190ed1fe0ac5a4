//! # Settings Repository
//!
//! User preferences in a single YAML file at the root of the data directory.
//!
//! ```yaml
//! default_feed_interval_minutes: 180
//! theme: system
//! notifications_enabled: true
//! preferred_unit: ml
//! ```
//!
//! Like the log stores, reads fail open (defaults) and writes fail closed.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::connection::JsonConnection;
use crate::domain::models::AppSettings;
use crate::storage::error::StorageError;
use crate::storage::traits::{SettingsProvider, SettingsStorage};

pub const SETTINGS_DOCUMENT: &str = "settings.yaml";

#[derive(Debug, Clone)]
pub struct SettingsRepository {
    connection: JsonConnection,
}

impl SettingsRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl SettingsProvider for SettingsRepository {
    async fn settings(&self) -> AppSettings {
        let contents = match self.connection.read_document(SETTINGS_DOCUMENT).await {
            Ok(Some(contents)) if !contents.trim().is_empty() => contents,
            Ok(_) => {
                debug!("No saved settings, using defaults");
                return AppSettings::default();
            }
            Err(e) => {
                warn!("Failed to read {}: {}. Using defaults.", SETTINGS_DOCUMENT, e);
                return AppSettings::default();
            }
        };

        match serde_yaml::from_str::<AppSettings>(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Invalid {}: {}. Using defaults.", SETTINGS_DOCUMENT, e);
                AppSettings::default()
            }
        }
    }
}

#[async_trait]
impl SettingsStorage for SettingsRepository {
    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        let yaml = serde_yaml::to_string(settings)?;
        self.connection.write_document(SETTINGS_DOCUMENT, &yaml).await?;

        info!(
            "Saved settings (feed interval {} min, theme {:?})",
            settings.default_feed_interval_minutes, settings.theme
        );
        Ok(())
    }
}
