use std::collections::BTreeSet;

use crate::calendar::CalendarDate;
use crate::check_in::{Streak, StreakSummary};

/// Domain service for streak recomputation
/// Stateless: every result is derived from the date set and the reference day
pub struct StreakEngine;

impl StreakEngine {
    /// Default trailing window for missed-day reporting
    pub const DEFAULT_MISSED_WINDOW_DAYS: u32 = 30;

    /// Largest window callers may ask for
    pub const MAX_MISSED_WINDOW_DAYS: u32 = 365;

    /// Split the dates into maximal runs of consecutive days, oldest first
    pub fn segment(dates: &BTreeSet<CalendarDate>) -> Vec<Streak> {
        let mut streaks: Vec<Streak> = Vec::new();

        for &date in dates {
            match streaks.last_mut() {
                Some(run) if run.end_date.days_until(date) == 1 => {
                    run.end_date = date;
                    run.length += 1;
                }
                _ => streaks.push(Streak {
                    start_date: date,
                    end_date: date,
                    length: 1,
                }),
            }
        }

        streaks
    }

    /// Derive current and longest streak from scratch
    ///
    /// Only the trailing run can be current, and only while it ends today or
    /// yesterday; a run ending yesterday is still alive because today's
    /// check-in may extend it.
    pub fn compute_streaks(dates: &BTreeSet<CalendarDate>, today: CalendarDate) -> StreakSummary {
        let streaks = Self::segment(dates);

        let Some(last) = streaks.last() else {
            return StreakSummary::default();
        };

        let longest_streak = streaks.iter().map(|s| s.length).max().unwrap_or(0);

        let current_streak = if last.end_date == today || last.end_date == today.pred() {
            last.length
        } else {
            0
        };

        StreakSummary {
            current_streak,
            longest_streak,
        }
    }

    /// Days in the trailing window that had no check-in
    ///
    /// Considers `today - 1` back to `today - window_days`, skipping anything
    /// before the first-ever check-in. Today is never missed. Ascending order.
    pub fn missed_days(
        dates: &BTreeSet<CalendarDate>,
        today: CalendarDate,
        window_days: u32,
    ) -> Vec<CalendarDate> {
        let Some(&first_check_in) = dates.first() else {
            return Vec::new();
        };

        (1..=window_days)
            .rev()
            .map(|offset| today.minus_days(offset))
            .filter(|day| *day >= first_check_in && !dates.contains(day))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn dates(items: &[&str]) -> BTreeSet<CalendarDate> {
        items.iter().map(|s| date(s)).collect()
    }

    #[test]
    fn test_empty_log_has_no_streaks() {
        let today = date("2024-06-10");
        let empty = BTreeSet::new();

        assert_eq!(
            StreakEngine::compute_streaks(&empty, today),
            StreakSummary {
                current_streak: 0,
                longest_streak: 0
            }
        );
        assert!(StreakEngine::missed_days(&empty, today, 30).is_empty());
        assert!(StreakEngine::segment(&empty).is_empty());
    }

    #[test]
    fn test_segment_splits_on_gaps() {
        let runs = StreakEngine::segment(&dates(&[
            "2024-06-01",
            "2024-06-02",
            "2024-06-05",
            "2024-06-07",
            "2024-06-08",
            "2024-06-09",
        ]));

        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].length, 2);
        assert_eq!(runs[0].end_date, date("2024-06-02"));
        assert_eq!(runs[1].start_date, date("2024-06-05"));
        assert_eq!(runs[1].length, 1);
        assert_eq!(runs[2].start_date, date("2024-06-07"));
        assert_eq!(runs[2].end_date, date("2024-06-09"));
        assert_eq!(runs[2].length, 3);
    }

    #[test]
    fn test_segment_across_month_boundary() {
        let runs = StreakEngine::segment(&dates(&["2024-02-28", "2024-02-29", "2024-03-01"]));
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].length, 3);
    }

    #[test]
    fn test_streak_ending_today_is_current() {
        let summary = StreakEngine::compute_streaks(
            &dates(&["2024-06-08", "2024-06-09", "2024-06-10"]),
            date("2024-06-10"),
        );
        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.longest_streak, 3);
    }

    #[test]
    fn test_streak_ending_yesterday_is_still_current() {
        let summary = StreakEngine::compute_streaks(&dates(&["2024-06-09"]), date("2024-06-10"));
        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.longest_streak, 1);
    }

    #[test]
    fn test_streak_ending_before_yesterday_is_broken() {
        let summary = StreakEngine::compute_streaks(
            &dates(&["2024-06-01", "2024-06-02", "2024-06-05"]),
            date("2024-06-10"),
        );
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.longest_streak, 2);
    }

    #[test]
    fn test_only_trailing_run_counts_as_current() {
        let summary = StreakEngine::compute_streaks(
            &dates(&["2024-06-01", "2024-06-02", "2024-06-03", "2024-06-10"]),
            date("2024-06-10"),
        );
        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.longest_streak, 3);
    }

    #[test]
    fn test_two_day_continuity() {
        let summary = StreakEngine::compute_streaks(
            &dates(&["2024-06-05", "2024-06-09", "2024-06-10"]),
            date("2024-06-10"),
        );
        assert_eq!(summary.current_streak, 2);
    }

    #[test]
    fn test_future_dates_break_current_streak() {
        // Normalization strips these; the raw engine just sees a trailing run that is not today/yesterday.
        let summary = StreakEngine::compute_streaks(
            &dates(&["2024-06-09", "2024-06-10", "2024-06-12"]),
            date("2024-06-10"),
        );
        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.longest_streak, 2);
    }

    #[test]
    fn test_missed_days_in_window() {
        let missed = StreakEngine::missed_days(
            &dates(&["2024-06-01", "2024-06-02", "2024-06-05"]),
            date("2024-06-10"),
            30,
        );

        assert_eq!(
            missed,
            vec![
                date("2024-06-03"),
                date("2024-06-04"),
                date("2024-06-06"),
                date("2024-06-07"),
                date("2024-06-08"),
                date("2024-06-09"),
            ]
        );
    }

    #[test]
    fn test_missed_days_never_include_today_or_pre_history() {
        let today = date("2024-06-10");
        let log = dates(&["2024-06-08"]);
        let missed = StreakEngine::missed_days(&log, today, 30);

        assert_eq!(missed, vec![date("2024-06-09")]);
        assert!(!missed.contains(&today));
    }

    #[test]
    fn test_missed_days_window_is_bounded() {
        let today = date("2024-06-10");
        let log = dates(&["2024-01-01"]);

        let missed = StreakEngine::missed_days(&log, today, 30);
        assert_eq!(missed.len(), 30);
        assert_eq!(missed.first(), Some(&date("2024-05-11")));
        assert_eq!(missed.last(), Some(&date("2024-06-09")));

        let narrow = StreakEngine::missed_days(&log, today, 3);
        assert_eq!(
            narrow,
            vec![date("2024-06-07"), date("2024-06-08"), date("2024-06-09")]
        );

        assert!(StreakEngine::missed_days(&log, today, 0).is_empty());
    }

    #[test]
    fn test_missed_days_respect_bounds_property() {
        let today = date("2024-06-10");
        let log = dates(&["2024-05-20", "2024-05-25", "2024-05-26", "2024-06-10"]);
        let first = *log.first().unwrap();

        for day in StreakEngine::missed_days(&log, today, 30) {
            assert!(day >= first);
            assert!(day < today);
            assert!(!log.contains(&day));
        }
    }
}
