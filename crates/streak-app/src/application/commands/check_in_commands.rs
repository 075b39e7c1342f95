use crate::application::commands::command_handler::Command;
use streak_domain::check_in::{StreakStats, StreakTier};
use streak_domain::CalendarDate;

/// Record a check-in for the clock's current day
#[derive(Debug, Clone, Default)]
pub struct RecordCheckInCommand;

impl Command for RecordCheckInCommand {}

/// Record check-in command result
#[derive(Debug, Clone)]
pub struct RecordCheckInResult {
    pub date: CalendarDate,
    pub stats: StreakStats,
    pub tier: Option<StreakTier>,
}

/// Insert an arbitrary date, bypassing the today-only rule
#[derive(Debug, Clone)]
pub struct SimulateCheckInCommand {
    /// Raw `YYYY-MM-DD` input, validated by the handler
    pub date: String,
}

impl Command for SimulateCheckInCommand {}

#[derive(Debug, Clone)]
pub struct SimulateCheckInResult {
    pub date: CalendarDate,
    pub stats: StreakStats,
    pub check_in_dates: Vec<CalendarDate>,
}

/// Drop every check-in and the longest-streak record
#[derive(Debug, Clone, Default)]
pub struct ResetLogCommand;

impl Command for ResetLogCommand {}

#[derive(Debug, Clone)]
pub struct ResetLogResult {
    pub stats: StreakStats,
}
