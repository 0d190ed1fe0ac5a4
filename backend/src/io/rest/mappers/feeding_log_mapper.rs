use shared::{
    CreateFeedingLogRequest, FeedingLog as SharedFeedingLog, FeedingLogListResponse,
    FeedingLogResponse, NextFeedResponse, UpdateFeedingLogRequest,
};

use crate::domain::commands::feeding::{
    CreateFeedingCommand, FeedingListResult, FeedingResult, NextFeedResult, UpdateFeedingCommand,
};
use crate::domain::models::coerce::bounded_millis;
use crate::domain::models::{FeedingLog as DomainFeedingLog, FeedingLogDraft};

/// Mapper between shared feeding DTOs and domain feeding logs.
///
/// Timestamps outside the supported range are dropped on the way in and
/// left for normalization to fill.
pub struct FeedingLogMapper;

impl FeedingLogMapper {
    pub fn to_dto(domain: DomainFeedingLog) -> SharedFeedingLog {
        SharedFeedingLog {
            id: domain.id,
            feed_type: domain.feed_type,
            amount_ml: domain.amount_ml,
            amount_oz: domain.amount_oz,
            duration_minutes: domain.duration_minutes,
            is_bottle_fed: domain.is_bottle_fed,
            start_time: domain.start_time,
            end_time: domain.end_time,
            timestamp: domain.timestamp,
            next_feed_time: domain.next_feed_time,
        }
    }

    pub fn to_create_command(request: CreateFeedingLogRequest) -> CreateFeedingCommand {
        CreateFeedingCommand {
            log: FeedingLogDraft {
                id: request.id,
                feed_type: request.feed_type,
                amount_ml: request.amount_ml,
                amount_oz: request.amount_oz,
                duration_minutes: request.duration_minutes.map(f64::from),
                is_bottle_fed: request.is_bottle_fed,
                start_time: bounded_millis(request.start_time),
                end_time: bounded_millis(request.end_time),
                timestamp: bounded_millis(request.timestamp),
                next_feed_time: bounded_millis(request.next_feed_time),
            },
        }
    }

    pub fn to_update_command(id: String, request: UpdateFeedingLogRequest) -> UpdateFeedingCommand {
        UpdateFeedingCommand {
            id,
            feed_type: request.feed_type,
            amount_ml: request.amount_ml,
            amount_oz: request.amount_oz,
            duration_minutes: request.duration_minutes,
            is_bottle_fed: request.is_bottle_fed,
            start_time: bounded_millis(request.start_time),
            end_time: bounded_millis(request.end_time),
            timestamp: bounded_millis(request.timestamp),
            next_feed_time: bounded_millis(request.next_feed_time),
        }
    }

    pub fn to_feeding_response(result: FeedingResult) -> FeedingLogResponse {
        FeedingLogResponse {
            feeding_log: Self::to_dto(result.feeding_log),
            success_message: result.success_message,
        }
    }

    pub fn to_list_response(result: FeedingListResult) -> FeedingLogListResponse {
        FeedingLogListResponse {
            feeding_logs: result.feeding_logs.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_next_feed_response(result: NextFeedResult) -> NextFeedResponse {
        match result.status {
            Some(status) => NextFeedResponse {
                last_feed_time: Some(status.last_feed_time),
                next_feed_time: Some(status.next_feed_time),
                minutes_until_next_feed: Some(status.minutes_until_next_feed),
                is_overdue: status.is_overdue,
            },
            None => NextFeedResponse {
                last_feed_time: None,
                next_feed_time: None,
                minutes_until_next_feed: None,
                is_overdue: false,
            },
        }
    }
}
