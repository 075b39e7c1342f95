mod record_check_in_handler;
mod reset_log_handler;
mod simulate_check_in_handler;


pub use record_check_in_handler::RecordCheckInCommandHandler;
pub use reset_log_handler::ResetLogCommandHandler;
pub use simulate_check_in_handler::SimulateCheckInCommandHandler;
