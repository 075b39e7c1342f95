use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::application::commands::check_in_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use streak_domain::check_in::{CheckInLogRepository, StreakTier};
use streak_domain::{Clock, DomainError};

/// Record check-in command handler
pub struct RecordCheckInCommandHandler {
    repo: Arc<dyn CheckInLogRepository>,
    clock: Arc<dyn Clock>,
}

impl RecordCheckInCommandHandler {
    pub fn new(repo: Arc<dyn CheckInLogRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl CommandHandler<RecordCheckInCommand> for RecordCheckInCommandHandler {
    type Result = RecordCheckInResult;

    async fn handle(&self, _cmd: RecordCheckInCommand) -> Result<Self::Result, DomainError> {
        let today = self.clock.today();
        info!("[check-in] Handling RecordCheckInCommand for {}", today);

        // The transaction holds the log lock until commit or rollback
        let mut tx = self.repo.begin().await?;

        match tx.log_mut().record_check_in(today) {
            Ok(stats) => {
                tx.commit().await?;

                info!(
                    "[check-in] recorded date={} current={} longest={} total={}",
                    today, stats.current_streak, stats.longest_streak, stats.total_check_ins
                );

                Ok(RecordCheckInResult {
                    date: today,
                    tier: StreakTier::for_streak(stats.current_streak),
                    stats,
                })
            }
            Err(e) => {
                tx.rollback().await?;
                warn!("[check-in] rejected date={}: {}", today, e);
                Err(e)
            }
        }
    }
}
