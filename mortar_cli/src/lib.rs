//! # Mortar CLI
//!
//! Converts stored grid values against a host fixture and exposes the
//! back-office API from the command line.

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Commands};
pub use errors::{CliError, CliResult};

use mortar_engine::config::{LoggingPreferences, RuntimeConfig};
use mortar_engine::logging::{
    self, LogCrateLogger, LogLevel, Logger, LoggingService, NullLogger, StructuredLogger,
};
use std::path::Path;
use std::sync::Arc;

/// Runtime preferences from `path`, or from the environment when absent
pub fn load_runtime_config(path: Option<&Path>) -> CliResult<RuntimeConfig> {
    match path {
        Some(path) => Ok(RuntimeConfig::load(path)?),
        None => Ok(RuntimeConfig::default()),
    }
}

/// Minimum event level for a `-v` count; without flags the runtime
/// preference applies
pub fn log_level_for(verbose: u8, preferences: &LoggingPreferences) -> LogLevel {
    match verbose {
        0 => preferences.min_log_level.to_events_log_level(),
        1 => LogLevel::Info,
        _ => LogLevel::Debug,
    }
}

fn to_filter(level: LogLevel) -> log::LevelFilter {
    match level {
        LogLevel::Error => log::LevelFilter::Error,
        LogLevel::Warning => log::LevelFilter::Warn,
        LogLevel::Info => log::LevelFilter::Info,
        LogLevel::Debug => log::LevelFilter::Debug,
    }
}

/// Route engine events through `env_logger`, or print them as JSON lines
/// when structured logging is preferred
pub fn init_logging(verbose: u8, preferences: &LoggingPreferences) -> Result<(), String> {
    let level = log_level_for(verbose, preferences);
    let _ = logging::config::init_runtime_preferences(preferences.clone());

    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("mortar", to_filter(level))
        .parse_default_env()
        .try_init();

    let logger: Arc<dyn Logger> = if !preferences.enable_console_logging {
        Arc::new(NullLogger)
    } else if preferences.use_structured_logging {
        Arc::new(StructuredLogger::new(level))
    } else {
        Arc::new(LogCrateLogger)
    };

    logging::init_global_logging_with_service(Arc::new(LoggingService::new(logger, level)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortar_engine::config::runtime::LogLevel as PreferenceLevel;
    use std::io::Write;

    #[test]
    fn test_log_level_for_verbosity() {
        let preferences = LoggingPreferences {
            use_structured_logging: false,
            enable_console_logging: true,
            min_log_level: PreferenceLevel::Error,
        };

        assert_eq!(log_level_for(0, &preferences), LogLevel::Error);
        assert_eq!(log_level_for(1, &preferences), LogLevel::Info);
        assert_eq!(log_level_for(5, &preferences), LogLevel::Debug);
        assert_eq!(to_filter(LogLevel::Warning), log::LevelFilter::Warn);
    }

    #[test]
    fn test_load_runtime_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[conversion]\nfallback_owner_context_id = 1050").unwrap();

        let config = load_runtime_config(Some(file.path())).unwrap();
        assert_eq!(config.conversion.fallback_owner_context_id, 1050);

        let missing = load_runtime_config(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(missing, Err(CliError::Config(_))));
    }
}
