//! Calendar arithmetic on date-only values.
//!
//! Nothing here reads the wall clock directly: "today" always comes from a
//! [`Clock`], so every computation can be replayed against a fixed date.

mod date;


use std::sync::atomic::{AtomicI32, Ordering};

pub use date::CalendarDate;

/// Source of the reference "today".
pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarDate;

    fn yesterday(&self) -> CalendarDate {
        self.today().pred()
    }

    fn tomorrow(&self) -> CalendarDate {
        self.today().succ()
    }

    /// The date `n` days before today; `days_ago(0)` is today.
    fn days_ago(&self, n: u32) -> CalendarDate {
        self.today().minus_days(n)
    }
}

/// Clock pinned to a settable date
///
/// Used to seed scenarios and in tests. Interior mutability lets a shared
/// instance be moved forward while handlers hold it.
#[derive(Debug)]
pub struct FixedClock {
    days_from_ce: AtomicI32,
}

impl FixedClock {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            days_from_ce: AtomicI32::new(today.days_from_ce()),
        }
    }

    pub fn set(&self, today: CalendarDate) {
        self.days_from_ce
            .store(today.days_from_ce(), Ordering::SeqCst);
    }

    pub fn advance(&self, days: u32) {
        let next = self.today().plus_days(days);
        self.set(next);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_days_from_ce(self.days_from_ce.load(Ordering::SeqCst))
    }
}

/// Absolute number of calendar days between `a` and `b`.
pub fn day_difference(a: CalendarDate, b: CalendarDate) -> u32 {
    a.days_until(b).unsigned_abs() as u32
}

/// True iff `value` is a zero-padded `YYYY-MM-DD` naming a real date.
pub fn is_valid(value: &str) -> bool {
    CalendarDate::parse(value).is_ok()
}
