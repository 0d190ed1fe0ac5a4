//! Domain model for user preferences stored in `settings.yaml`.
use serde::{Deserialize, Serialize};
use shared::{ThemePreference, VolumeUnit};

/// Gap between feeds used when nothing else is configured
pub const DEFAULT_FEED_INTERVAL_MINUTES: u32 = 180;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub default_feed_interval_minutes: u32,
    pub theme: ThemePreference,
    pub notifications_enabled: bool,
    pub preferred_unit: VolumeUnit,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_feed_interval_minutes: DEFAULT_FEED_INTERVAL_MINUTES,
            theme: ThemePreference::System,
            notifications_enabled: true,
            preferred_unit: VolumeUnit::Ml,
        }
    }
}

impl AppSettings {
    /// The configured interval, never less than one minute so that a derived
    /// next-feed time always lies after the feed it follows
    pub fn feed_interval_minutes(&self) -> u32 {
        self.default_feed_interval_minutes.max(1)
    }
}
