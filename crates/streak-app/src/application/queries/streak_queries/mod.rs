use std::sync::Arc;

use crate::application::dtos::{CalendarDto, MissedDaysDto, StatusDto};
use streak_domain::check_in::{CheckInLog, CheckInLogRepository};
use streak_domain::{CalendarDate, Clock, DomainError};

mod calendar;
mod missed_days;
mod status;

/// Read-only reporting over the check-in log.
///
/// Every query normalizes a snapshot against today; the stored log is never
/// written from here.
pub struct StreakQueries {
    repo: Arc<dyn CheckInLogRepository>,
    clock: Arc<dyn Clock>,
    default_window_days: u32,
}

impl StreakQueries {
    pub fn new(
        repo: Arc<dyn CheckInLogRepository>,
        clock: Arc<dyn Clock>,
        default_window_days: u32,
    ) -> Self {
        Self {
            repo,
            clock,
            default_window_days,
        }
    }

    /// Current stats plus whether today is still open
    pub async fn get_status(&self) -> Result<StatusDto, DomainError> {
        let (log, today) = self.snapshot().await?;
        Ok(status::build_status(&log, today))
    }

    /// Check-in dates and missed days in the default window
    pub async fn get_calendar(&self) -> Result<CalendarDto, DomainError> {
        let (log, today) = self.snapshot().await?;
        Ok(calendar::build_calendar(
            &log,
            today,
            self.default_window_days,
        ))
    }

    /// Missed days in the trailing window; `None` uses the configured default
    pub async fn get_missed_days(
        &self,
        window_days: Option<u32>,
    ) -> Result<MissedDaysDto, DomainError> {
        let window_days = missed_days::validate_window(window_days, self.default_window_days)?;
        let (log, today) = self.snapshot().await?;
        Ok(missed_days::build_missed_days(&log, today, window_days))
    }

    async fn snapshot(&self) -> Result<(CheckInLog, CalendarDate), DomainError> {
        let today = self.clock.today();
        let log = self.repo.load().await?.normalized(today);
        Ok((log, today))
    }
}

fn format_dates<'a>(dates: impl IntoIterator<Item = &'a CalendarDate>) -> Vec<String> {
    dates.into_iter().map(|d| d.to_string()).collect()
}
