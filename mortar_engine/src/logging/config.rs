//! Logging configuration: compile-time buffer limits plus runtime preferences

use crate::config::compile_time::logging::LOG_BUFFER_SIZE;
use crate::config::runtime::LoggingPreferences;
use crate::logging::events::LogLevel;
use std::sync::OnceLock;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Install runtime preferences; only the first call wins
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime logging preferences already initialized".to_string())
}

fn get_runtime_preferences() -> &'static LoggingPreferences {
    RUNTIME_PREFERENCES.get_or_init(LoggingPreferences::default)
}

/// Minimum level that reaches the logger
pub fn get_min_log_level() -> LogLevel {
    get_runtime_preferences().min_log_level.to_events_log_level()
}

pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

/// Event buffer size for in-memory loggers
pub fn get_log_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Human-readable configuration summary
pub fn get_config_summary() -> String {
    format!(
        "Logging: min_level={} structured={} console={} buffer={}",
        get_min_log_level().as_str(),
        use_structured_logging(),
        use_console_logging(),
        get_log_buffer_size()
    )
}
