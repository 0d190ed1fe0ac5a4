use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::commands::settings::{SettingsResult, UpdateSettingsCommand};
use crate::domain::validation::ValidationError;
use crate::storage::{SettingsProvider, SettingsStorage};

/// Reads and updates the user preferences
#[derive(Clone)]
pub struct SettingsService {
    storage: Arc<dyn SettingsStorage>,
    write_gate: Arc<Mutex<()>>,
}

impl SettingsService {
    pub fn new(storage: Arc<dyn SettingsStorage>) -> Self {
        Self {
            storage,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    pub async fn get_settings(&self) -> Result<SettingsResult> {
        info!("Getting settings");
        Ok(SettingsResult {
            settings: self.storage.settings().await,
        })
    }

    /// Apply the preferences present in `command`, leaving the rest alone
    pub async fn update_settings(&self, command: UpdateSettingsCommand) -> Result<SettingsResult> {
        info!("Updating settings: {:?}", command);

        if command.default_feed_interval_minutes == Some(0) {
            return Err(ValidationError::ZeroFeedInterval.into());
        }

        let _guard = self.write_gate.lock().await;
        let mut settings = self.storage.settings().await;

        if let Some(minutes) = command.default_feed_interval_minutes {
            settings.default_feed_interval_minutes = minutes;
        }
        if let Some(theme) = command.theme {
            settings.theme = theme;
        }
        if let Some(enabled) = command.notifications_enabled {
            settings.notifications_enabled = enabled;
        }
        if let Some(unit) = command.preferred_unit {
            settings.preferred_unit = unit;
        }

        self.storage
            .save_settings(&settings)
            .await
            .context("Failed to save settings")?;

        Ok(SettingsResult { settings })
    }
}
