use serde::{Deserialize, Serialize};

use streak_domain::check_in::StreakTier;

use super::StreakStatsDto;

/// `POST /check-in`, both outcomes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResultDto {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<StreakTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_message: Option<String>,
    #[serde(flatten)]
    pub stats: StreakStatsDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_eligible_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateCheckInRequest {
    pub date: String,
}

/// `POST /test-checkin`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateCheckInDto {
    pub ok: bool,
    pub message: String,
    #[serde(flatten)]
    pub stats: StreakStatsDto,
    pub check_in_dates: Vec<String>,
}

/// `POST /test-reset`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResultDto {
    pub ok: bool,
    pub message: String,
    pub stats: StreakStatsDto,
}
