//! Runtime configuration resolved from environment variables.
//!
//! # Invariants
//! - Resolution is a pure function of the lookup it is given.
//! - Blank values are treated as unset.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Database file path.
pub const ENV_DB_PATH: &str = "MOODCONNECT_DB";
/// Log level (`trace|debug|info|warn|error`).
pub const ENV_LOG_LEVEL: &str = "MOODCONNECT_LOG_LEVEL";
/// Absolute directory for rolling log files. File logging is off when unset.
pub const ENV_LOG_DIR: &str = "MOODCONNECT_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "moodconnect.sqlite3";

/// Settings needed to open storage and start logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            db_path: read(ENV_DB_PATH).map_or(defaults.db_path, PathBuf::from),
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ENV_DB_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn empty_lookup_uses_defaults() {
        assert_eq!(CoreConfig::from_lookup(|_| None), CoreConfig::default());
    }

    #[test]
    fn lookup_overrides_and_ignores_blank_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_DB_PATH, "/tmp/mood.db"),
            (ENV_LOG_LEVEL, " warn "),
            (ENV_LOG_DIR, "   "),
        ]);

        let config = CoreConfig::from_lookup(|key| env.get(key).map(|value| value.to_string()));

        assert_eq!(config.db_path, PathBuf::from("/tmp/mood.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
    }
}
