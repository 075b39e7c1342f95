use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use streak_domain::check_in::{CheckInLog, CheckInLogRepository, CheckInLogTransaction};
use streak_domain::DomainError;

use crate::persistence::InMemoryTransaction;

/// Process-lifetime store for the single check-in log.
///
/// One mutex guards the log; transactions own the guard, so every
/// read-modify-write is serialized and nothing is lost on interleaving.
#[derive(Clone, Default)]
pub struct InMemoryCheckInLogRepository {
    log: Arc<Mutex<CheckInLog>>,
}

impl InMemoryCheckInLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing log, e.g. seeded test data.
    pub fn with_log(log: CheckInLog) -> Self {
        Self {
            log: Arc::new(Mutex::new(log)),
        }
    }
}

#[async_trait]
impl CheckInLogRepository for InMemoryCheckInLogRepository {
    async fn load(&self) -> Result<CheckInLog, DomainError> {
        Ok(self.log.lock().await.clone())
    }

    async fn begin(&self) -> Result<Box<dyn CheckInLogTransaction>, DomainError> {
        let guard = self.log.clone().lock_owned().await;
        Ok(Box::new(InMemoryTransaction::new(guard)))
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.log.lock().await.clear();
        log::info!("[streak] check-in log cleared");
        Ok(())
    }
}
