//! Domain models persisted by the log stores.

pub mod coerce;
pub mod diaper_log;
pub mod feeding_log;
pub mod settings;

pub use diaper_log::{DiaperLog, DiaperLogDraft};
pub use feeding_log::{FeedingLog, FeedingLogDraft, DEFAULT_FEED_DURATION_MINUTES};
pub use settings::AppSettings;
