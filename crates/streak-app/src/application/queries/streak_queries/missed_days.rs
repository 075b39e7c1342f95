use log::info;

use crate::application::dtos::{DateRangeDto, MissedDaysDto};
use streak_domain::check_in::{CheckInLog, StreakEngine};
use streak_domain::{CalendarDate, DomainError};

use super::format_dates;

pub(super) fn validate_window(requested: Option<u32>, default: u32) -> Result<u32, DomainError> {
    let window = requested.unwrap_or(default);
    if window == 0 || window > StreakEngine::MAX_MISSED_WINDOW_DAYS {
        return Err(DomainError::Validation(format!(
            "window must be between 1 and {} days, got {}",
            StreakEngine::MAX_MISSED_WINDOW_DAYS,
            window
        )));
    }
    Ok(window)
}

pub(super) fn build_missed_days(
    log: &CheckInLog,
    today: CalendarDate,
    window_days: u32,
) -> MissedDaysDto {
    let missed = log.missed_days(today, window_days);

    info!(
        "[streak] get_missed_days today={} window={} missed={}",
        today,
        window_days,
        missed.len()
    );

    MissedDaysDto {
        total_missed_days: missed.len() as u32,
        missed_days: format_dates(&missed),
        date_range: DateRangeDto {
            from: today.minus_days(window_days).to_string(),
            to: today.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn test_window_defaults_and_bounds() {
        assert_eq!(validate_window(None, 30).unwrap(), 30);
        assert_eq!(validate_window(Some(1), 30).unwrap(), 1);
        assert_eq!(validate_window(Some(365), 30).unwrap(), 365);
        assert!(matches!(
            validate_window(Some(0), 30),
            Err(DomainError::Validation(_))
        ));
        assert!(validate_window(Some(366), 30).is_err());
    }

    #[test]
    fn test_missed_days_range_and_total() {
        let today = date("2024-06-10");
        let log = CheckInLog::restore(vec![date("2024-06-07")], 0).normalized(today);

        let dto = build_missed_days(&log, today, 7);

        assert_eq!(dto.missed_days, vec!["2024-06-08", "2024-06-09"]);
        assert_eq!(dto.total_missed_days, 2);
        assert_eq!(
            dto.date_range,
            DateRangeDto {
                from: "2024-06-03".to_string(),
                to: "2024-06-10".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_log_has_no_missed_days() {
        let today = date("2024-06-10");
        let dto = build_missed_days(&CheckInLog::new(), today, 30);

        assert!(dto.missed_days.is_empty());
        assert_eq!(dto.total_missed_days, 0);
    }
}
