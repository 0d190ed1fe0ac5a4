//! Domain model for a diaper change.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{StoolColor, StoolConsistency};

use super::coerce;

/// A fully normalized diaper record, as persisted in `diaper_logs.json`.
///
/// Stool attributes only carry meaning when `dirty` is set; otherwise they
/// are always `None`/`false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaperLog {
    pub id: String,
    pub timestamp: i64, // epoch millis
    pub wet: bool,
    pub dirty: bool,
    pub stool_color: Option<StoolColor>,
    pub stool_consistency: Option<StoolConsistency>,
    pub contains_mucus: bool,
    pub contains_blood: bool,
    pub notes: String,
}

/// Sort diaper changes newest first
pub fn sort_newest_first(logs: &mut [DiaperLog]) {
    logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// A possibly partial diaper record, before normalization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiaperLogDraft {
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

impl DiaperLogDraft {
    /// Read a raw persisted record; `None` when the value is not an object
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;

        Some(Self {
            id: coerce::identifier(record.get("id")),
            timestamp: coerce::epoch_millis(record.get("timestamp")),
            wet: coerce::boolean(record.get("wet")),
            dirty: coerce::boolean(record.get("dirty")),
            stool_color: coerce::tag(record.get("stoolColor")),
            stool_consistency: coerce::tag(record.get("stoolConsistency")),
            contains_mucus: coerce::boolean(record.get("containsMucus")),
            contains_blood: coerce::boolean(record.get("containsBlood")),
            notes: coerce::string(record.get("notes")),
        })
    }

    /// Fill defaults and apply dirty-gating
    pub fn normalize(self, now: i64) -> DiaperLog {
        let dirty = self.dirty.unwrap_or(false);

        DiaperLog {
            id: self
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            timestamp: self.timestamp.unwrap_or(now),
            wet: self.wet.unwrap_or(true),
            dirty,
            stool_color: self.stool_color.filter(|_| dirty),
            stool_consistency: self.stool_consistency.filter(|_| dirty),
            contains_mucus: dirty && self.contains_mucus.unwrap_or(false),
            contains_blood: dirty && self.contains_blood.unwrap_or(false),
            notes: self.notes.unwrap_or_default(),
        }
    }
}

impl From<DiaperLog> for DiaperLogDraft {
    fn from(log: DiaperLog) -> Self {
        Self {
            id: Some(log.id),
            timestamp: Some(log.timestamp),
            wet: Some(log.wet),
            dirty: Some(log.dirty),
            stool_color: log.stool_color,
            stool_consistency: log.stool_consistency,
            contains_mucus: Some(log.contains_mucus),
            contains_blood: Some(log.contains_blood),
            notes: Some(log.notes),
        }
    }
}
