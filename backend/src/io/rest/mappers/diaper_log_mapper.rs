use shared::{CreateDiaperLogRequest, DiaperLog as SharedDiaperLog, DiaperLogListResponse, DiaperLogResponse};

use crate::domain::commands::diaper::{
    CreateDiaperCommand, DiaperListResult, DiaperResult, ReplaceDiaperCommand,
};
use crate::domain::models::coerce::bounded_millis;
use crate::domain::models::{DiaperLog as DomainDiaperLog, DiaperLogDraft};

pub struct DiaperLogMapper;

impl DiaperLogMapper {
    pub fn to_dto(domain: DomainDiaperLog) -> SharedDiaperLog {
        SharedDiaperLog {
            id: domain.id,
            timestamp: domain.timestamp,
            wet: domain.wet,
            dirty: domain.dirty,
            stool_color: domain.stool_color,
            stool_consistency: domain.stool_consistency,
            contains_mucus: domain.contains_mucus,
            contains_blood: domain.contains_blood,
            notes: domain.notes,
        }
    }

    fn to_draft(request: CreateDiaperLogRequest) -> DiaperLogDraft {
        DiaperLogDraft {
            id: request.id,
            timestamp: bounded_millis(request.timestamp),
            wet: request.wet,
            dirty: request.dirty,
            stool_color: request.stool_color,
            stool_consistency: request.stool_consistency,
            contains_mucus: request.contains_mucus,
            contains_blood: request.contains_blood,
            notes: request.notes,
        }
    }

    pub fn to_create_command(request: CreateDiaperLogRequest) -> CreateDiaperCommand {
        CreateDiaperCommand {
            log: Self::to_draft(request),
        }
    }

    /// The path id wins over any id in the body
    pub fn to_replace_command(id: String, request: CreateDiaperLogRequest) -> ReplaceDiaperCommand {
        ReplaceDiaperCommand {
            id,
            log: Self::to_draft(request),
        }
    }

    pub fn to_diaper_response(result: DiaperResult) -> DiaperLogResponse {
        DiaperLogResponse {
            diaper_log: Self::to_dto(result.diaper_log),
            success_message: result.success_message,
        }
    }

    pub fn to_list_response(result: DiaperListResult) -> DiaperLogListResponse {
        DiaperLogListResponse {
            diaper_logs: result.diaper_logs.into_iter().map(Self::to_dto).collect(),
        }
    }
}
