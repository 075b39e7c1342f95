use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::check_in_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use streak_domain::check_in::CheckInLogRepository;
use streak_domain::{CalendarDate, Clock, DomainError};

/// Test/debug seeding: inserts any valid date into the log
pub struct SimulateCheckInCommandHandler {
    repo: Arc<dyn CheckInLogRepository>,
    clock: Arc<dyn Clock>,
}

impl SimulateCheckInCommandHandler {
    pub fn new(repo: Arc<dyn CheckInLogRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl CommandHandler<SimulateCheckInCommand> for SimulateCheckInCommandHandler {
    type Result = SimulateCheckInResult;

    async fn handle(&self, cmd: SimulateCheckInCommand) -> Result<Self::Result, DomainError> {
        // Reject before touching the log
        let date = CalendarDate::parse(&cmd.date)?;
        let today = self.clock.today();

        let mut tx = self.repo.begin().await?;
        let stats = tx.log_mut().simulate_check_in(date, today);
        let check_in_dates: Vec<CalendarDate> = tx.log().dates().iter().copied().collect();
        tx.commit().await?;

        info!(
            "[check-in] simulated date={} current={} longest={} total={}",
            date, stats.current_streak, stats.longest_streak, stats.total_check_ins
        );

        Ok(SimulateCheckInResult {
            date,
            stats,
            check_in_dates,
        })
    }
}
