// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod calendar;
pub mod check_in;
pub mod shared;

// Re-exports for convenience
pub use calendar::{CalendarDate, Clock, FixedClock};
pub use shared::DomainError;
