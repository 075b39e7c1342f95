use std::time::Duration;

use streak_infrastructure::config::LogLevel;
use streak_infrastructure::logging::{get_log_dir, init_logger, LOG_FILE_PREFIX};

#[test]
fn logger_writes_json_lines_and_is_idempotent() {
    let dir = tempfile::tempdir().expect("temp dir");

    init_logger(Some(dir.path()), LogLevel::Info).expect("first init");
    init_logger(Some(dir.path()), LogLevel::Debug).expect("second init is a no-op");
    assert_eq!(get_log_dir().as_deref(), Some(dir.path()));

    log::info!("[streak] logging smoke test");

    // non_blocking writer flushes on its worker thread
    let mut found = false;
    for _ in 0..50 {
        std::thread::sleep(Duration::from_millis(20));
        let contents: String = std::fs::read_dir(dir.path())
            .expect("read log dir")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(LOG_FILE_PREFIX))
            .filter_map(|entry| std::fs::read_to_string(entry.path()).ok())
            .collect();
        if contents.contains("logging smoke test") {
            let line = contents
                .lines()
                .find(|l| l.contains("logging smoke test"))
                .expect("line");
            let json: serde_json::Value = serde_json::from_str(line).expect("json line");
            assert_eq!(json["level"], "INFO");
            assert!(json["timestamp"].is_string());
            assert_eq!(json["message"], "[streak] logging smoke test");
            found = true;
            break;
        }
    }
    assert!(found, "log line was not written");
}
