use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use streak_domain::check_in::{CheckInLog, CheckInLogTransaction};
use streak_domain::DomainError;

/// Transaction over the in-memory log.
///
/// Holds the repository lock for its whole lifetime and edits a working copy,
/// so a failed command never leaves a half-applied log behind.
pub struct InMemoryTransaction {
    guard: OwnedMutexGuard<CheckInLog>,
    working: CheckInLog,
}

impl InMemoryTransaction {
    pub(crate) fn new(guard: OwnedMutexGuard<CheckInLog>) -> Self {
        let working = guard.clone();
        Self { guard, working }
    }
}

#[async_trait]
impl CheckInLogTransaction for InMemoryTransaction {
    fn log(&self) -> &CheckInLog {
        &self.working
    }

    fn log_mut(&mut self) -> &mut CheckInLog {
        &mut self.working
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        let InMemoryTransaction { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), DomainError> {
        // Dropping the guard releases the lock; the working copy goes with it.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use streak_domain::CalendarDate;
    use tokio::sync::Mutex;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_commit_writes_back() {
        let shared = Arc::new(Mutex::new(CheckInLog::new()));
        let mut tx = Box::new(InMemoryTransaction::new(shared.clone().lock_owned().await));

        tx.log_mut()
            .record_check_in(date("2024-06-10"))
            .unwrap();
        tx.commit().await.unwrap();

        assert!(shared.lock().await.contains(date("2024-06-10")));
    }

    #[tokio::test]
    async fn test_rollback_discards() {
        let shared = Arc::new(Mutex::new(CheckInLog::new()));
        let mut tx = Box::new(InMemoryTransaction::new(shared.clone().lock_owned().await));

        tx.log_mut()
            .simulate_check_in(date("2024-06-01"), date("2024-06-10"));
        tx.rollback().await.unwrap();

        assert!(shared.lock().await.is_empty());
    }
}
