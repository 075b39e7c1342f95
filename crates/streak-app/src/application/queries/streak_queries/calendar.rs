use crate::application::dtos::CalendarDto;
use streak_domain::check_in::CheckInLog;
use streak_domain::CalendarDate;

use super::format_dates;

pub(super) fn build_calendar(log: &CheckInLog, today: CalendarDate, window_days: u32) -> CalendarDto {
    CalendarDto {
        check_in_dates: format_dates(log.dates()),
        missed_days: format_dates(&log.missed_days(today, window_days)),
        current_streak: log.stats().current_streak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn test_calendar_lists_check_ins_and_gaps() {
        let today = date("2024-06-10");
        let log = CheckInLog::restore(
            ["2024-06-01", "2024-06-02", "2024-06-05"].map(date),
            0,
        )
        .normalized(today);

        let dto = build_calendar(&log, today, 30);

        assert_eq!(dto.check_in_dates, vec!["2024-06-01", "2024-06-02", "2024-06-05"]);
        assert_eq!(
            dto.missed_days,
            vec![
                "2024-06-03",
                "2024-06-04",
                "2024-06-06",
                "2024-06-07",
                "2024-06-08",
                "2024-06-09"
            ]
        );
        assert_eq!(dto.current_streak, 0);
    }
}
