use serde::{Deserialize, Serialize};
use std::fmt;

/// What the baby was fed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedType {
    Formula,
    Milk,
}

impl fmt::Display for FeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedType::Formula => write!(f, "formula"),
            FeedType::Milk => write!(f, "milk"),
        }
    }
}

/// A single completed feed as returned to the front end.
///
/// All times are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingLog {
    pub id: String,
    pub feed_type: FeedType,
    pub amount_ml: f64,
    pub amount_oz: f64,
    pub duration_minutes: u32,
    pub is_bottle_fed: bool,
    pub start_time: i64,
    pub end_time: i64,
    pub timestamp: i64,
    /// When the next feed is due
    pub next_feed_time: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoolColor {
    Yellow,
    Green,
    Brown,
    Black,
    Red,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoolConsistency {
    Watery,
    Seedy,
    Soft,
    Pasty,
    Formed,
    Mucousy,
}

/// A single diaper change as returned to the front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaperLog {
    pub id: String,
    pub timestamp: i64,
    pub wet: bool,
    pub dirty: bool,
    pub stool_color: Option<StoolColor>,
    pub stool_consistency: Option<StoolConsistency>,
    pub contains_mucus: bool,
    pub contains_blood: bool,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    Ml,
    Oz,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub default_feed_interval_minutes: u32,
    pub theme: ThemePreference,
    pub notifications_enabled: bool,
    pub preferred_unit: VolumeUnit,
}

/// Request body for recording a feed.
///
/// Every field is optional; the store fills in whatever is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedingLogRequest {
    pub id: Option<String>,
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

/// Partial update of an existing feed; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedingLogRequest {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingLogResponse {
    pub feeding_log: FeedingLog,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingLogListResponse {
    pub feeding_logs: Vec<FeedingLog>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextFeedResponse {
    pub last_feed_time: Option<i64>,
    pub next_feed_time: Option<i64>,
    pub minutes_until_next_feed: Option<i64>,
    pub is_overdue: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDiaperLogRequest {
    pub id: Option<String>,
    pub timestamp: Option<i64>,
    pub wet: Option<bool>,
    pub dirty: Option<bool>,
    pub stool_color: Option<StoolColor>,
    pub stool_consistency: Option<StoolConsistency>,
    pub contains_mucus: Option<bool>,
    pub contains_blood: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaperLogResponse {
    pub diaper_log: DiaperLog,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaperLogListResponse {
    pub diaper_logs: Vec<DiaperLog>,
}

/// Query for list endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogListRequest {
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub default_feed_interval_minutes: Option<u32>,
    pub theme: Option<ThemePreference>,
    pub notifications_enabled: Option<bool>,
    pub preferred_unit: Option<VolumeUnit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub settings: AppSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummaryRequest {
    /// Number of days to include, ending today
    pub days: Option<u32>,
    /// Offset of the caller's local time from UTC
    pub utc_offset_minutes: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyFeedingSummary {
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
    pub feed_count: u32,
    pub total_ml: f64,
    pub total_oz: f64,
    pub total_duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDiaperSummary {
    pub date: String,
    pub wet_count: u32,
    pub dirty_count: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummaryResponse {
    pub feedings: Vec<DailyFeedingSummary>,
    pub diapers: Vec<DailyDiaperSummary>,
}
