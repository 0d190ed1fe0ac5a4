//! Domain model for a feeding log entry.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::FeedType;

use super::coerce;
use crate::domain::next_feed::{resolve_next_feed_time, MILLIS_PER_MINUTE};

/// Duration assumed for a feed when neither a duration nor a start time is known
pub const DEFAULT_FEED_DURATION_MINUTES: u32 = 15;

// Keeps start-time arithmetic inside the valid timestamp range.
const MAX_DURATION_MINUTES: f64 = (coerce::MAX_EPOCH_MILLIS / MILLIS_PER_MINUTE) as f64;

/// A fully normalized feeding record, as persisted in `feeding_logs.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingLog {
    pub id: String,
    pub feed_type: FeedType,
    pub amount_ml: f64,
    pub amount_oz: f64,
    pub duration_minutes: u32,
    pub is_bottle_fed: bool,
    pub start_time: i64, // epoch millis
    pub end_time: i64,   // epoch millis
    pub timestamp: i64,  // epoch millis
    pub next_feed_time: i64,
}

impl FeedingLog {
    /// When the feed finished. Normalization always resolves `end_time`
    /// (falling back to `timestamp`), so this is the sort and reminder base.
    pub fn effective_completion_time(&self) -> i64 {
        self.end_time
    }
}

/// Sort feeds newest first by effective completion time
pub fn sort_newest_first(logs: &mut [FeedingLog]) {
    logs.sort_by(|a, b| {
        b.effective_completion_time()
            .cmp(&a.effective_completion_time())
    });
}

/// A possibly partial feeding record, before normalization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedingLogDraft {
    pub id: Option<String>,
    pub feed_type: Option<FeedType>,
    pub amount_ml: Option<f64>,
    pub amount_oz: Option<f64>,
    /// Minutes as entered; fractional values are rounded during normalization
    pub duration_minutes: Option<f64>,
    pub is_bottle_fed: Option<bool>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub timestamp: Option<i64>,
    pub next_feed_time: Option<i64>,
}

impl FeedingLogDraft {
    /// Read a raw persisted record. Returns `None` only when the value is not
    /// a JSON object; individual bad fields are simply left unset.
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;

        Some(Self {
            id: coerce::identifier(record.get("id")),
            feed_type: coerce::tag(record.get("feedType")),
            amount_ml: coerce::finite_number(record.get("amountMl")),
            amount_oz: coerce::finite_number(record.get("amountOz")),
            duration_minutes: coerce::finite_number(record.get("durationMinutes")),
            is_bottle_fed: coerce::boolean(record.get("isBottleFed")),
            start_time: coerce::epoch_millis(record.get("startTime")),
            end_time: coerce::epoch_millis(record.get("endTime")),
            timestamp: coerce::epoch_millis(record.get("timestamp")),
            next_feed_time: coerce::epoch_millis(record.get("nextFeedTime")),
        })
    }

    /// Resolve every missing or invalid field.
    ///
    /// `now` stands in for a missing completion time; `interval_minutes` is
    /// the configured gap between feeds used to derive `next_feed_time`.
    pub fn normalize(self, now: i64, interval_minutes: u32) -> FeedingLog {
        let end_time = self.end_time.or(self.timestamp).unwrap_or(now);

        let known_duration = self
            .duration_minutes
            .filter(|minutes| minutes.is_finite() && *minutes > 0.0 && *minutes <= MAX_DURATION_MINUTES);

        let start_time = self.start_time.unwrap_or_else(|| {
            let minutes = known_duration.unwrap_or(DEFAULT_FEED_DURATION_MINUTES as f64);
            end_time - (minutes * MILLIS_PER_MINUTE as f64).round() as i64
        });

        let duration_minutes = match known_duration {
            Some(minutes) => minutes.round().max(1.0) as u32,
            None => {
                let elapsed = (end_time - start_time) as f64 / MILLIS_PER_MINUTE as f64;
                elapsed.round().max(1.0) as u32
            }
        };

        let timestamp = self.timestamp.unwrap_or(end_time);
        let next_feed_time = resolve_next_feed_time(self.next_feed_time, end_time, interval_minutes);

        FeedingLog {
            id: self
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            feed_type: self.feed_type.unwrap_or(FeedType::Formula),
            amount_ml: non_negative(self.amount_ml),
            amount_oz: non_negative(self.amount_oz),
            duration_minutes,
            is_bottle_fed: self.is_bottle_fed.unwrap_or(false),
            start_time,
            end_time,
            timestamp,
            next_feed_time,
        }
    }
}

impl From<FeedingLog> for FeedingLogDraft {
    fn from(log: FeedingLog) -> Self {
        Self {
            id: Some(log.id),
            feed_type: Some(log.feed_type),
            amount_ml: Some(log.amount_ml),
            amount_oz: Some(log.amount_oz),
            duration_minutes: Some(log.duration_minutes as f64),
            is_bottle_fed: Some(log.is_bottle_fed),
            start_time: Some(log.start_time),
            end_time: Some(log.end_time),
            timestamp: Some(log.timestamp),
            next_feed_time: Some(log.next_feed_time),
        }
    }
}

fn non_negative(amount: Option<f64>) -> f64 {
    amount
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}
