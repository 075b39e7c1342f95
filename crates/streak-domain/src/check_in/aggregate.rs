use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::calendar::CalendarDate;
use crate::check_in::{StreakEngine, StreakStats};
use crate::shared::DomainError;

/// The set of days the user checked in, plus the stats derived from it.
///
/// `longest_streak` is a ratchet: recomputation can raise it but never lower
/// it, even when dates are removed out-of-band.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckInLog {
    dates: BTreeSet<CalendarDate>,
    current_streak: u32,
    longest_streak: u32,
    last_check_in_date: Option<CalendarDate>,
}

impl CheckInLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log from stored parts. Derived fields are left stale until
    /// the next `normalize`.
    pub fn restore(dates: impl IntoIterator<Item = CalendarDate>, longest_streak: u32) -> Self {
        let dates: BTreeSet<CalendarDate> = dates.into_iter().collect();
        let last_check_in_date = dates.last().copied();

        Self {
            dates,
            current_streak: 0,
            longest_streak,
            last_check_in_date,
        }
    }

    pub fn dates(&self) -> &BTreeSet<CalendarDate> {
        &self.dates
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn can_check_in(&self, today: CalendarDate) -> bool {
        !self.contains(today)
    }

    pub fn stats(&self) -> StreakStats {
        StreakStats {
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            last_check_in_date: self.last_check_in_date,
            total_check_ins: self.dates.len() as u32,
        }
    }

    /// Restore invariants against `today`: drop future dates, recompute
    /// streaks with the longest-streak ratchet, refresh the last check-in.
    ///
    /// Dedup and ordering come from the set itself.
    pub fn normalize(&mut self, today: CalendarDate) {
        let _future = self.dates.split_off(&today.succ());
        self.recompute(today);
    }

    /// Normalized copy; `self` is untouched.
    pub fn normalized(&self, today: CalendarDate) -> Self {
        let mut copy = self.clone();
        copy.normalize(today);
        copy
    }

    /// Record today's check-in. Fails without mutating the date set when
    /// today is already present.
    pub fn record_check_in(&mut self, today: CalendarDate) -> Result<StreakStats, DomainError> {
        self.normalize(today);

        if self.contains(today) {
            return Err(DomainError::AlreadyCheckedIn {
                date: today,
                stats: self.stats(),
                next_eligible_date: today.succ(),
            });
        }

        self.dates.insert(today);
        self.recompute(today);

        Ok(self.stats())
    }

    /// Insert an arbitrary date, bypassing the today-only rule, then
    /// recompute against `today`. Inserting a present date only recomputes.
    pub fn simulate_check_in(&mut self, date: CalendarDate, today: CalendarDate) -> StreakStats {
        self.dates.insert(date);
        self.recompute(today);
        self.stats()
    }

    /// Drop every date and the longest-streak ratchet.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn missed_days(&self, today: CalendarDate, window_days: u32) -> Vec<CalendarDate> {
        StreakEngine::missed_days(&self.dates, today, window_days)
    }

    fn recompute(&mut self, today: CalendarDate) {
        let summary = StreakEngine::compute_streaks(&self.dates, today);
        self.current_streak = summary.current_streak;
        self.longest_streak = self.longest_streak.max(summary.longest_streak);
        self.last_check_in_date = self.dates.last().copied();
    }
}
