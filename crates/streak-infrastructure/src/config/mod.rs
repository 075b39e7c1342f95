use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use streak_domain::check_in::StreakEngine;

/// Log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(anyhow!("unknown log level '{}'", other)),
        }
    }
}

/// Process configuration, read from the environment at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: LogLevel,
    /// Directory for rolling JSON log files; `None` disables file logging
    pub log_dir: Option<PathBuf>,
    pub missed_window_days: u32,
    /// Keys that were not set and fell back to their default
    pub defaulted: Vec<&'static str>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: LogLevel::Info,
            log_dir: default_log_dir(),
            missed_window_days: StreakEngine::DEFAULT_MISSED_WINDOW_DAYS,
            defaulted: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; missing keys fall back to defaults,
    /// malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut defaulted = Vec::new();

        let missed_window_days = try_load(
            &lookup,
            "STREAK_MISSED_WINDOW_DAYS",
            defaults.missed_window_days,
            &mut defaulted,
        )?;
        if missed_window_days == 0 || missed_window_days > StreakEngine::MAX_MISSED_WINDOW_DAYS {
            return Err(anyhow!(
                "STREAK_MISSED_WINDOW_DAYS must be between 1 and {}",
                StreakEngine::MAX_MISSED_WINDOW_DAYS
            ));
        }

        let log_dir = match lookup("STREAK_LOG_DIR") {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(PathBuf::from(raw)),
            None => {
                defaulted.push("STREAK_LOG_DIR");
                defaults.log_dir
            }
        };

        let host = lookup("HOST").unwrap_or_else(|| {
            defaulted.push("HOST");
            defaults.host
        });
        let port = try_load(&lookup, "PORT", defaults.port, &mut defaulted)?;
        let log_level = try_load(
            &lookup,
            "STREAK_LOG_LEVEL",
            defaults.log_level,
            &mut defaulted,
        )?;

        Ok(Self {
            host,
            port,
            log_level,
            log_dir,
            missed_window_days,
            defaulted,
        })
    }

    /// Log the effective settings. Call once the logger is installed.
    pub fn log_summary(&self) {
        for key in &self.defaulted {
            info!("{key} not set, using default");
        }
        info!(
            bind = %self.bind_address(),
            level = self.log_level.as_str(),
            log_dir = ?self.log_dir,
            missed_window_days = self.missed_window_days,
            "Configuration loaded"
        );
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("streakd").join("logs"))
}

fn try_load<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    defaulted: &mut Vec<&'static str>,
) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("invalid {key} value '{raw}': {e}"))
            .with_context(|| format!("environment variable {key} is misconfigured")),
        None => {
            defaulted.push(key);
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.missed_window_days, 30);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(
            config.defaulted,
            vec![
                "STREAK_MISSED_WINDOW_DAYS",
                "STREAK_LOG_DIR",
                "HOST",
                "PORT",
                "STREAK_LOG_LEVEL"
            ]
        );
    }

    #[test]
    fn test_defaulted_keys_exclude_explicit_ones() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("STREAK_LOG_DIR", ""),
        ]))
        .unwrap();

        assert!(!config.defaulted.contains(&"PORT"));
        assert!(!config.defaulted.contains(&"STREAK_LOG_DIR"));
        assert!(config.defaulted.contains(&"HOST"));
        assert!(config.defaulted.contains(&"STREAK_LOG_LEVEL"));
    }

    #[test]
    fn test_values_are_read_from_lookup() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("STREAK_LOG_LEVEL", "DEBUG"),
            ("STREAK_LOG_DIR", "/tmp/streakd-logs"),
            ("STREAK_MISSED_WINDOW_DAYS", "14"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/streakd-logs")));
        assert_eq!(config.missed_window_days, 14);
        assert!(config.defaulted.is_empty());
    }

    #[test]
    fn test_empty_log_dir_disables_file_logging() {
        let config = ServerConfig::from_lookup(lookup_from(&[("STREAK_LOG_DIR", "")])).unwrap();
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_malformed_values_are_errors() {
        assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).is_err());
        assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
        assert!(ServerConfig::from_lookup(lookup_from(&[("STREAK_LOG_LEVEL", "loud")])).is_err());
        assert!(
            ServerConfig::from_lookup(lookup_from(&[("STREAK_MISSED_WINDOW_DAYS", "0")])).is_err()
        );
        assert!(
            ServerConfig::from_lookup(lookup_from(&[("STREAK_MISSED_WINDOW_DAYS", "400")]))
                .is_err()
        );
    }

    #[test]
    fn test_log_level_round_trip_names() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            assert_eq!(level.as_str().parse::<LogLevel>().unwrap(), level);
        }
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
    }
}
