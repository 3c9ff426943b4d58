//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve logging level and directory from env with build-mode defaults.
//!
//! # Invariants
//! - Resolution never fails; blank or missing values fall back to defaults.
//! - Explicit overrides (CLI flags, FFI args) win over environment values.

use std::path::PathBuf;

use crate::logging::default_log_level;

/// Env var overriding the log level (`trace|debug|info|warn|error`).
pub const ENV_LOG_LEVEL: &str = "METRIC_CLOCK_LOG_LEVEL";
/// Env var overriding the absolute log directory.
pub const ENV_LOG_DIR: &str = "METRIC_CLOCK_LOG_DIR";

const DEFAULT_LOG_DIR_NAME: &str = "metric_clock_logs";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: default_log_dir(),
        }
    }
}

impl ClockConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, one env key at a time.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: non_blank(lookup(ENV_LOG_LEVEL)).unwrap_or(defaults.log_level),
            log_dir: non_blank(lookup(ENV_LOG_DIR))
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
        }
    }

    /// Applies explicit overrides on top of resolved values.
    pub fn with_overrides(mut self, log_level: Option<String>, log_dir: Option<PathBuf>) -> Self {
        if let Some(level) = non_blank(log_level) {
            self.log_level = level;
        }
        if let Some(dir) = log_dir.filter(|dir| !dir.as_os_str().is_empty()) {
            self.log_dir = dir;
        }
        self
    }
}

/// Default log directory under the OS temp dir.
pub fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{default_log_dir, ClockConfig, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::logging::default_log_level;
    use std::path::PathBuf;

    #[test]
    fn missing_env_uses_defaults() {
        let config = ClockConfig::from_lookup(|_| None);
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, default_log_dir());
    }

    #[test]
    fn env_values_are_trimmed_and_blank_ignored() {
        let config = ClockConfig::from_lookup(|key| match key {
            ENV_LOG_LEVEL => Some(" warn ".to_string()),
            ENV_LOG_DIR => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, default_log_dir());
    }

    #[test]
    fn overrides_win_over_env() {
        let config = ClockConfig::from_lookup(|key| match key {
            ENV_LOG_LEVEL => Some("warn".to_string()),
            _ => None,
        })
        .with_overrides(Some("trace".to_string()), Some(PathBuf::from("/var/log/mc")));
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/mc"));
    }
}
