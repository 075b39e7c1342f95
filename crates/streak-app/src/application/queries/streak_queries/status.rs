use log::info;

use crate::application::dtos::StatusDto;
use streak_domain::check_in::CheckInLog;
use streak_domain::CalendarDate;

use super::format_dates;

/// `log` must already be normalized against `today`
pub(super) fn build_status(log: &CheckInLog, today: CalendarDate) -> StatusDto {
    let stats = log.stats();

    info!(
        "[streak] get_status today={} current={} longest={} total={}",
        today, stats.current_streak, stats.longest_streak, stats.total_check_ins
    );

    StatusDto {
        stats: stats.into(),
        can_check_in_today: log.can_check_in(today),
        check_in_dates: format_dates(log.dates()),
    }
}
