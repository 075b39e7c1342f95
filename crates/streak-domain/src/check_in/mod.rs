mod aggregate;
mod domain_service;
mod repository;
mod value_objects;

#[cfg(test)]
mod value_objects_test;

pub use aggregate::CheckInLog;
pub use domain_service::StreakEngine;
pub use repository::{CheckInLogRepository, CheckInLogTransaction};
pub use value_objects::{Streak, StreakStats, StreakSummary, StreakTier};
