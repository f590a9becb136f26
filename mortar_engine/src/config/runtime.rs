// RUNTIME PREFERENCES (User Experience)

use crate::collaborators::ContentId;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Owner id used for nested nodes when no page is being rendered
pub const DEFAULT_FALLBACK_OWNER_CONTEXT_ID: ContentId = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionPreferences {
    /// Owner id for nested nodes when the host reports no current page
    pub fallback_owner_context_id: ContentId,

    /// Whether resolution misses are logged as warnings (debug otherwise)
    pub log_resolution_misses: bool,
}

impl Default for ConversionPreferences {
    fn default() -> Self {
        Self {
            fallback_owner_context_id: env::var(env_vars::CONVERSION_FALLBACK_OWNER_ID)
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_FALLBACK_OWNER_CONTEXT_ID),
            log_resolution_misses: env::var(env_vars::CONVERSION_LOG_MISSES)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level that reaches the configured logger
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.trim().to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub conversion: ConversionPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a runtime configuration document; missing keys fall back to
    /// environment-derived defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a runtime configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Conversion
    pub const CONVERSION_FALLBACK_OWNER_ID: &str = "MORTAR_CONVERSION_FALLBACK_OWNER_ID";
    pub const CONVERSION_LOG_MISSES: &str = "MORTAR_CONVERSION_LOG_MISSES";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "MORTAR_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "MORTAR_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "MORTAR_LOGGING_MIN_LEVEL";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level(" warning "), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_runtime_config_from_toml() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [conversion]
            fallback_owner_context_id = 1050
            log_resolution_misses = true

            [logging]
            min_log_level = "debug"
            use_structured_logging = true
            "#,
        )
        .unwrap();

        assert_eq!(config.conversion.fallback_owner_context_id, 1050);
        assert!(config.conversion.log_resolution_misses);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
        assert!(config.logging.use_structured_logging);
    }

    #[test]
    fn test_runtime_config_rejects_bad_types() {
        let result = RuntimeConfig::from_toml_str("[conversion]\nfallback_owner_context_id = \"home\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_runtime_config_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nmin_log_level = \"error\"").unwrap();

        let config = RuntimeConfig::load(file.path()).unwrap();
        assert_eq!(config.logging.min_log_level, LogLevel::Error);
    }

    #[test]
    fn test_runtime_config_missing_file() {
        let result = RuntimeConfig::load("/definitely/not/here/mortar.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_env_var_names_exist() {
        assert!(env_vars::LOGGING_MIN_LEVEL.starts_with("MORTAR_"));
        assert!(env_vars::CONVERSION_FALLBACK_OWNER_ID.starts_with("MORTAR_"));
    }
}
