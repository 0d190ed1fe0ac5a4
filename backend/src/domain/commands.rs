//! Domain-level command and query types.
//!
//! Services take and return these; the REST layer maps the DTOs in the
//! `shared` crate onto them.

pub mod feeding {
    use shared::FeedType;

    use crate::domain::models::{FeedingLog, FeedingLogDraft};
    use crate::domain::next_feed::NextFeedStatus;

    /// Query parameters for listing feeds
    #[derive(Debug, Clone, Default)]
    pub struct FeedingListQuery {
        pub limit: Option<u32>,
    }

    /// Input for recording a feed. Any field may be missing.
    #[derive(Debug, Clone, Default)]
    pub struct CreateFeedingCommand {
        pub log: FeedingLogDraft,
    }

    /// Partial update of a stored feed
    #[derive(Debug, Clone, Default)]
    pub struct UpdateFeedingCommand {
        pub id: String,
        pub feed_type: Option<FeedType>,
        pub amount_ml: Option<f64>,
        pub amount_oz: Option<f64>,
        pub duration_minutes: Option<u32>,
        pub is_bottle_fed: Option<bool>,
        pub start_time: Option<i64>,
        pub end_time: Option<i64>,
        pub timestamp: Option<i64>,
        pub next_feed_time: Option<i64>,
    }

    #[derive(Debug, Clone)]
    pub struct FeedingListResult {
        pub feeding_logs: Vec<FeedingLog>,
    }

    /// Result of creating or updating a feed
    #[derive(Debug, Clone)]
    pub struct FeedingResult {
        pub feeding_log: FeedingLog,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct NextFeedResult {
        /// `None` until the first feed is logged
        pub status: Option<NextFeedStatus>,
    }
}

pub mod diaper {
    use crate::domain::models::{DiaperLog, DiaperLogDraft};

    #[derive(Debug, Clone, Default)]
    pub struct DiaperListQuery {
        pub limit: Option<u32>,
    }

    #[derive(Debug, Clone, Default)]
    pub struct CreateDiaperCommand {
        pub log: DiaperLogDraft,
    }

    /// Replace a stored diaper change. The stored id is kept.
    #[derive(Debug, Clone, Default)]
    pub struct ReplaceDiaperCommand {
        pub id: String,
        pub log: DiaperLogDraft,
    }

    #[derive(Debug, Clone)]
    pub struct DiaperListResult {
        pub diaper_logs: Vec<DiaperLog>,
    }

    #[derive(Debug, Clone)]
    pub struct DiaperResult {
        pub diaper_log: DiaperLog,
        pub success_message: String,
    }
}

pub mod settings {
    use shared::{ThemePreference, VolumeUnit};

    use crate::domain::models::AppSettings;

    /// Partial update of the user preferences
    #[derive(Debug, Clone, Default)]
    pub struct UpdateSettingsCommand {
        pub default_feed_interval_minutes: Option<u32>,
        pub theme: Option<ThemePreference>,
        pub notifications_enabled: Option<bool>,
        pub preferred_unit: Option<VolumeUnit>,
    }

    #[derive(Debug, Clone)]
    pub struct SettingsResult {
        pub settings: AppSettings,
    }
}

pub mod summary {
    use crate::domain::summary::{DailyDiaperTotals, DailyFeedingTotals};

    /// Days ending today covered when no count is given
    pub const DEFAULT_SUMMARY_DAYS: u32 = 7;

    #[derive(Debug, Clone, Default)]
    pub struct DailySummaryQuery {
        pub days: Option<u32>,
        pub utc_offset_minutes: Option<i32>,
    }

    #[derive(Debug, Clone)]
    pub struct DailySummaryResult {
        pub feedings: Vec<DailyFeedingTotals>,
        pub diapers: Vec<DailyDiaperTotals>,
    }
}
