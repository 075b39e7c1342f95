use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::StreakQueries;

/// Command handlers container
pub struct CommandHandlers {
    pub record_check_in: Arc<RecordCheckInCommandHandler>,
    pub simulate_check_in: Arc<SimulateCheckInCommandHandler>,
    pub reset_log: Arc<ResetLogCommandHandler>,
}

pub struct Queries {
    pub streak: Arc<StreakQueries>,
}

pub struct AppState {
    pub queries: Queries,
    pub command_handlers: CommandHandlers,
}

/// Shared handle passed to every route
pub type SharedState = Arc<AppState>;
