use serde::{Deserialize, Serialize};

use streak_domain::check_in::StreakStats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStatsDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_check_in_date: Option<String>, // YYYY-MM-DD
    pub total_check_ins: u32,
    pub is_new_record: bool,
}

impl From<StreakStats> for StreakStatsDto {
    fn from(stats: StreakStats) -> Self {
        Self {
            current_streak: stats.current_streak,
            longest_streak: stats.longest_streak,
            last_check_in_date: stats.last_check_in_date.map(|d| d.to_string()),
            total_check_ins: stats.total_check_ins,
            is_new_record: stats.is_new_record(),
        }
    }
}

/// `GET /streak`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDto {
    #[serde(flatten)]
    pub stats: StreakStatsDto,
    pub can_check_in_today: bool,
    pub check_in_dates: Vec<String>,
}

/// `GET /calendar`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDto {
    pub check_in_dates: Vec<String>,
    pub missed_days: Vec<String>,
    pub current_streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeDto {
    pub from: String,
    pub to: String,
}

/// `GET /missed-days`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissedDaysDto {
    pub missed_days: Vec<String>,
    pub total_missed_days: u32,
    pub date_range: DateRangeDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String, // RFC 3339, UTC
}
