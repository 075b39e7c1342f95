//! 日志系统模块
//!
//! - 结构化 JSON 日志写入文件，按天轮转，每行一条
//! - 人类可读日志输出到 stdout（debug 构建带颜色）

use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use crate::config::LogLevel;

pub const LOG_FILE_PREFIX: &str = "streakd.log";

/// ISO 8601 带时区，毫秒精度（例如 2025-12-09T10:32:15.123+08:00）
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// 初始化日志系统
///
/// - `log_dir` 为 `Some` 时：JSON 日志写入按天轮转的文件
/// - 始终输出到 stdout（人类可读；仅 debug 构建带颜色）
///
/// `RUST_LOG` 优先于 `level`。重复调用直接返回 Ok。
pub fn init_logger(log_dir: Option<&Path>, level: LogLevel) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    // 将 log crate 的日志转发到 tracing
    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    // JSON 层：写入文件（one-line JSON 格式）
    let json_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let _ = LOG_DIR.set(dir.to_path_buf());

            let file_appender = rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = FILE_GUARD.set(guard);

            Some(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_filter(build_filter(level)),
            )
        }
        None => None,
    };

    // 人类可读层：stdout
    let ansi = cfg!(debug_assertions);
    let stdout_layer = fmt::layer()
        .with_ansi(ansi)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(build_filter(level));

    let subscriber = Registry::default().with(json_layer).with(stdout_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        target: "streakd::logging",
        log_dir = ?log_dir.map(|d| d.display().to_string()),
        level = level.as_str(),
        pid = std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "Debug" } else { "Release" },
        "Logger initialized successfully"
    );

    Ok(())
}

/// 默认使用配置的级别，可通过 RUST_LOG 环境变量覆盖
fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.as_str()))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 获取日志目录路径
pub fn get_log_dir() -> Option<PathBuf> {
    LOG_DIR.get().cloned()
}
