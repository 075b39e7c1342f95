use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::queries::StreakQueries;
use crate::presentation::state::{AppState, CommandHandlers, Queries};
use streak_domain::check_in::CheckInLogRepository;
use streak_domain::Clock;
use streak_infrastructure::clock::SystemClock;
use streak_infrastructure::config::ServerConfig;
use streak_infrastructure::persistence::repositories::InMemoryCheckInLogRepository;

/// Production wiring: empty in-memory log, host local clock
pub fn build_app_state(config: &ServerConfig) -> AppState {
    let started_at = Instant::now();
    let repo: Arc<dyn CheckInLogRepository> = Arc::new(InMemoryCheckInLogRepository::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    info!(
        "✓ Initialized in-memory check-in log, today is {} ({}ms)",
        clock.today(),
        started_at.elapsed().as_millis()
    );

    assemble_app_state(repo, clock, config.missed_window_days)
}

/// Wire handlers and queries around an existing repository and clock
pub fn assemble_app_state(
    repo: Arc<dyn CheckInLogRepository>,
    clock: Arc<dyn Clock>,
    missed_window_days: u32,
) -> AppState {
    let started_at = Instant::now();

    let command_handlers = CommandHandlers {
        record_check_in: Arc::new(RecordCheckInCommandHandler::new(
            repo.clone(),
            clock.clone(),
        )),
        simulate_check_in: Arc::new(SimulateCheckInCommandHandler::new(
            repo.clone(),
            clock.clone(),
        )),
        reset_log: Arc::new(ResetLogCommandHandler::new(repo.clone())),
    };

    let queries = Queries {
        streak: Arc::new(StreakQueries::new(repo, clock, missed_window_days)),
    };

    info!(
        "✓ Command handlers and queries ready, missed-day window {} days ({}ms)",
        missed_window_days,
        started_at.elapsed().as_millis()
    );

    AppState {
        queries,
        command_handlers,
    }
}
