use shared::{AppSettings as SharedSettings, SettingsResponse, UpdateSettingsRequest};

use crate::domain::commands::settings::{SettingsResult, UpdateSettingsCommand};
use crate::domain::models::AppSettings;

pub struct SettingsMapper;

impl SettingsMapper {
    pub fn to_dto(domain: AppSettings) -> SharedSettings {
        SharedSettings {
            default_feed_interval_minutes: domain.default_feed_interval_minutes,
            theme: domain.theme,
            notifications_enabled: domain.notifications_enabled,
            preferred_unit: domain.preferred_unit,
        }
    }

    pub fn to_update_command(request: UpdateSettingsRequest) -> UpdateSettingsCommand {
        UpdateSettingsCommand {
            default_feed_interval_minutes: request.default_feed_interval_minutes,
            theme: request.theme,
            notifications_enabled: request.notifications_enabled,
            preferred_unit: request.preferred_unit,
        }
    }

    pub fn to_settings_response(result: SettingsResult) -> SettingsResponse {
        SettingsResponse {
            settings: Self::to_dto(result.settings),
        }
    }
}
