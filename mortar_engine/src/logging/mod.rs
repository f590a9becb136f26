//! Global logging module for the Mortar engine
//!
//! Coded events, a process-wide logging service, and a per-thread document
//! label that is attached to every event emitted while a document converts.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
#[cfg(feature = "logging")]
pub use service::LogCrateLogger;
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, NullLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static DOCUMENT_CONTEXT: RefCell<Option<String>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from runtime preferences
pub fn init_global_logging() -> Result<(), String> {
    let service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(service.clone())
        .map_err(|_| "Global logger already initialized".to_string())?;

    service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Initialize with a custom service
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether debug events would be recorded; lets macros skip formatting
pub fn debug_enabled() -> bool {
    try_get_global_logger()
        .map(|logger| logger.should_log(LogLevel::Debug))
        .unwrap_or(false)
}

// ============================================================================
// DOCUMENT CONTEXT MANAGEMENT
// ============================================================================

/// Set the document label for the current thread
pub fn set_document_context(label: impl Into<String>) {
    let label = label.into();
    DOCUMENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(label);
    });
}

/// Clear the document label for the current thread
pub fn clear_document_context() {
    DOCUMENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Run `f` with a document label attached to its events
pub fn with_document_context<F, R>(label: impl Into<String>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let previous = current_document_context();
    set_document_context(label);
    let result = f();
    match previous {
        Some(previous) => set_document_context(previous),
        None => clear_document_context(),
    }
    result
}

pub fn current_document_context() -> Option<String> {
    DOCUMENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

fn emit(mut event: LogEvent, context: Vec<(&str, String)>) {
    for (key, value) in context {
        event = event.with_context(key, &value);
    }

    if let Some(document) = current_document_context() {
        event = event.with_context("document", &document);
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Used by `log_error!`
pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, String)>) {
    emit(LogEvent::error(code, message), context);
}

/// Used by `log_warning!`
pub fn log_warning_with_context(code: Option<Code>, message: &str, context: Vec<(&str, String)>) {
    let event = match code {
        Some(code) => LogEvent::warning_with_code(code, message),
        None => LogEvent::warning(message),
    };
    emit(event, context);
}

/// Used by `log_success!`
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, String)>) {
    emit(LogEvent::success(code, message), context);
}

/// Used by `log_info!`
pub fn log_info_with_context(message: &str, context: Vec<(&str, String)>) {
    emit(LogEvent::info(message), context);
}

/// Used by `log_debug!`
pub fn log_debug_with_context(message: &str, context: Vec<(&str, String)>) {
    emit(LogEvent::debug(message), context);
}

/// Error logging that falls back to stderr when uninitialized
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(LogEvent::error(code, message));
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

/// Diagnostics for the CLI `--verbose` banner
pub fn get_system_diagnostics() -> String {
    let mut diagnostics = String::new();
    diagnostics.push_str("=== Logging System Diagnostics ===\n");
    diagnostics.push_str(&format!("Initialized: {}\n", is_initialized()));
    diagnostics.push_str(&config::get_config_summary());
    diagnostics.push('\n');
    diagnostics.push_str(&crate::config::build_info::source_info());
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_context_management() {
        assert!(current_document_context().is_none());

        set_document_context("home.json");
        assert_eq!(current_document_context().as_deref(), Some("home.json"));

        clear_document_context();
        assert!(current_document_context().is_none());
    }

    #[test]
    fn test_with_document_context_restores_previous() {
        set_document_context("outer");

        let result = with_document_context("inner", || {
            assert_eq!(current_document_context().as_deref(), Some("inner"));
            7
        });

        assert_eq!(result, 7);
        assert_eq!(current_document_context().as_deref(), Some("outer"));
        clear_document_context();
    }

    #[test]
    fn test_safe_logging() {
        // Must not panic whether or not a global logger exists
        safe_log_error(codes::system::INTERNAL_ERROR, "Test error");
    }

    #[test]
    fn test_diagnostics() {
        let diagnostics = get_system_diagnostics();
        assert!(diagnostics.contains("Logging System Diagnostics"));
        assert!(diagnostics.contains("Initialized:"));
    }
}
