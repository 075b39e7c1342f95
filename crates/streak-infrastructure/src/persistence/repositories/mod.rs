pub mod in_memory_check_in_log_repo;

pub use in_memory_check_in_log_repo::InMemoryCheckInLogRepository;
