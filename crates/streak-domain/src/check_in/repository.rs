use async_trait::async_trait;

use super::CheckInLog;
use crate::shared::DomainError;

/// Owner of the single check-in log.
///
/// Read-only callers take a [`load`](Self::load) snapshot. Anything that
/// reads, mutates and writes back must go through [`begin`](Self::begin) so
/// concurrent check-ins are serialized.
#[async_trait]
pub trait CheckInLogRepository: Send + Sync {
    /// Snapshot of the stored log.
    async fn load(&self) -> Result<CheckInLog, DomainError>;

    /// Exclusive access to the log until the transaction is committed,
    /// rolled back or dropped.
    async fn begin(&self) -> Result<Box<dyn CheckInLogTransaction>, DomainError>;

    /// Replace the stored log with an empty one.
    async fn clear(&self) -> Result<(), DomainError>;
}

/// Working copy of the log held under the repository lock.
///
/// Changes become visible only on `commit`; dropping discards them.
#[async_trait]
pub trait CheckInLogTransaction: Send {
    fn log(&self) -> &CheckInLog;

    fn log_mut(&mut self) -> &mut CheckInLog;

    async fn commit(self: Box<Self>) -> Result<(), DomainError>;

    async fn rollback(self: Box<Self>) -> Result<(), DomainError>;
}
