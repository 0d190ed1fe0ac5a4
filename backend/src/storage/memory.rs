//! In-memory settings, for tests and for embedding the stores without a
//! settings file.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::StorageError;
use super::traits::{SettingsProvider, SettingsStorage};
use crate::domain::models::AppSettings;

#[derive(Debug, Default)]
pub struct InMemorySettings {
    settings: RwLock<AppSettings>,
}

impl InMemorySettings {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    pub async fn set_feed_interval(&self, minutes: u32) {
        self.settings.write().await.default_feed_interval_minutes = minutes;
    }
}

#[async_trait]
impl SettingsProvider for InMemorySettings {
    async fn settings(&self) -> AppSettings {
        self.settings.read().await.clone()
    }
}

#[async_trait]
impl SettingsStorage for InMemorySettings {
    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        *self.settings.write().await = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_interval_can_be_changed() {
        let settings = InMemorySettings::default();
        assert_eq!(settings.default_feed_interval_minutes().await, 180);

        settings.set_feed_interval(45).await;
        assert_eq!(settings.default_feed_interval_minutes().await, 45);
    }
}
