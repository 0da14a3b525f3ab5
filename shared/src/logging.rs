//! Shared logging utilities for consistent tracing across the workspace

use crate::types::Component;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Default filter level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the filter directive for the workspace crates at `base_level`
pub fn filter_directive(base_level: &str) -> String {
    format!("ledger={base_level},shared={base_level}")
}

/// Initialize the tracing subscriber at the given level
///
/// Log lines go to stderr so command output on stdout stays clean. Calling
/// this more than once is harmless; later calls are ignored.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or(DEFAULT_LOG_LEVEL);
    let env_filter = EnvFilter::new(filter_directive(base_level));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Initialize tracing at the default level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for component-aware info logging
#[macro_export]
macro_rules! ledger_info {
    ($component:expr, $($arg:tt)*) => {
        tracing::info!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware warning logging
#[macro_export]
macro_rules! ledger_warn {
    ($component:expr, $($arg:tt)*) => {
        tracing::warn!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware debug logging
#[macro_export]
macro_rules! ledger_debug {
    ($component:expr, $($arg:tt)*) => {
        tracing::debug!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: Component, details: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: Component, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = %component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: Component, message: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_display() {
        assert_eq!(Component::Manager.to_string(), "manager");
        assert_eq!(Component::Store.to_string(), "store");
        assert_eq!(Component::Cli.to_string(), "cli");
    }

    #[test]
    fn test_filter_directive_covers_workspace_crates() {
        assert_eq!(filter_directive("debug"), "ledger=debug,shared=debug");
    }

    #[test]
    fn test_timestamp_format() {
        let stamp = format_timestamp();
        assert_eq!(stamp.len(), "00:00:00.000".len());
        assert_eq!(stamp.matches(':').count(), 2);
    }

    #[test]
    fn test_repeated_init_is_harmless() {
        init_tracing_with_level(Some("debug"));
        init_tracing();
        crate::ledger_debug!(Component::Manager, "tracing initialized twice");
    }
}
