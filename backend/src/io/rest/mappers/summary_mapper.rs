use shared::{DailyDiaperSummary, DailyFeedingSummary, DailySummaryRequest, DailySummaryResponse};

use crate::domain::commands::summary::{DailySummaryQuery, DailySummaryResult};
use crate::domain::summary::{DailyDiaperTotals, DailyFeedingTotals};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct SummaryMapper;

impl SummaryMapper {
    pub fn to_query(request: DailySummaryRequest) -> DailySummaryQuery {
        DailySummaryQuery {
            days: request.days,
            utc_offset_minutes: request.utc_offset_minutes,
        }
    }

    pub fn feeding_to_dto(totals: DailyFeedingTotals) -> DailyFeedingSummary {
        DailyFeedingSummary {
            date: totals.date.format(DATE_FORMAT).to_string(),
            feed_count: totals.feed_count,
            total_ml: totals.total_ml,
            total_oz: totals.total_oz,
            total_duration_minutes: totals.total_duration_minutes,
        }
    }

    pub fn diaper_to_dto(totals: DailyDiaperTotals) -> DailyDiaperSummary {
        DailyDiaperSummary {
            date: totals.date.format(DATE_FORMAT).to_string(),
            wet_count: totals.wet_count,
            dirty_count: totals.dirty_count,
            total: totals.total,
        }
    }

    pub fn to_response(result: DailySummaryResult) -> DailySummaryResponse {
        DailySummaryResponse {
            feedings: result.feedings.into_iter().map(Self::feeding_to_dto).collect(),
            diapers: result.diapers.into_iter().map(Self::diaper_to_dto).collect(),
        }
    }
}
