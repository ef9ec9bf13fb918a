//! Core runtime configuration.
//!
//! # Responsibility
//! - Decode the JSON configuration document used by front-ends.
//! - Bridge configuration into logging initialization.
//!
//! # Invariants
//! - Missing fields fall back to defaults; unknown fields are rejected.
//! - Loading configuration never starts logging by itself.

use crate::logging::{default_log_level, init_logging, LoggingError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Configuration failures.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config document: {err}"),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

/// Settings shared by every front-end of the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// One of trace|debug|info|warn|error.
    pub log_level: String,
    /// Absolute directory for rolling log files; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&document)
    }

    /// Starts file logging when `log_dir` is set. Returns whether it did.
    pub fn init_logging(&self) -> Result<bool, ConfigError> {
        let Some(log_dir) = &self.log_dir else {
            return Ok(false);
        };
        init_logging(&self.log_level, &log_dir.to_string_lossy())?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};
    use crate::logging::default_log_level;
    use std::path::PathBuf;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CoreConfig::from_json_str("{}").unwrap();
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn reads_explicit_fields() {
        let config =
            CoreConfig::from_json_str(r#"{"log_level":"warn","log_dir":"/var/log/rolodex"}"#)
                .unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/rolodex")));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = CoreConfig::from_json_str(r#"{"theme":"dark"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn init_logging_is_skipped_without_directory() {
        assert!(!CoreConfig::default().init_logging().unwrap());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = CoreConfig::load("/definitely/not/here/rolodex.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
