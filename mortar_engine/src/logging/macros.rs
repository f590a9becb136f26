//! Type-safe logging macros using Code types with Display support

// ============================================================================
// ERROR LOGGING
// ============================================================================

/// Log error with Code type - accepts Display types for context values
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        $crate::logging::log_error_with_context($code, $message, vec![])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+ $(,)?) => {{
        let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
        $crate::logging::log_error_with_context($code, $message, context)
    }};
}

// ============================================================================
// WARNING LOGGING
// ============================================================================

/// Log warning, optionally with a specific Code
#[macro_export]
macro_rules! log_warning {
    (code = $code:expr, $message:expr) => {
        $crate::logging::log_warning_with_context(Some($code), $message, vec![])
    };

    (code = $code:expr, $message:expr, $($key:expr => $value:expr),+ $(,)?) => {{
        let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
        $crate::logging::log_warning_with_context(Some($code), $message, context)
    }};

    ($message:expr) => {
        $crate::logging::log_warning_with_context(None, $message, vec![])
    };

    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {{
        let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
        $crate::logging::log_warning_with_context(None, $message, context)
    }};
}

// ============================================================================
// SUCCESS / INFO LOGGING
// ============================================================================

/// Log success with Code type
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        $crate::logging::log_success_with_context($code, $message, vec![])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+ $(,)?) => {{
        let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
        $crate::logging::log_success_with_context($code, $message, context)
    }};
}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::log_info_with_context($message, vec![])
    };

    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {{
        let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
        $crate::logging::log_info_with_context($message, context)
    }};
}

// ============================================================================
// DEBUG LOGGING
// ============================================================================

/// Log debug message; context is only formatted when debug is enabled
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        if $crate::logging::debug_enabled() {
            $crate::logging::log_debug_with_context($message, vec![])
        }
    };

    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        if $crate::logging::debug_enabled() {
            let context: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            $crate::logging::log_debug_with_context($message, context)
        }
    };
}
