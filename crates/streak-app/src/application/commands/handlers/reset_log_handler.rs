use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::check_in_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use streak_domain::check_in::CheckInLogRepository;
use streak_domain::DomainError;

pub struct ResetLogCommandHandler {
    repo: Arc<dyn CheckInLogRepository>,
}

impl ResetLogCommandHandler {
    pub fn new(repo: Arc<dyn CheckInLogRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CommandHandler<ResetLogCommand> for ResetLogCommandHandler {
    type Result = ResetLogResult;

    async fn handle(&self, _cmd: ResetLogCommand) -> Result<Self::Result, DomainError> {
        self.repo.clear().await?;
        let stats = self.repo.load().await?.stats();

        info!("[check-in] log reset");

        Ok(ResetLogResult { stats })
    }
}
