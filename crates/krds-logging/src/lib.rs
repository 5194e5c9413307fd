// ABOUTME: Public API for KRDS logging infrastructure using tracing
// ABOUTME: Provides centralized configuration and initialization for structured logging

pub mod config;
pub mod layers;
pub mod performance;
pub mod subscriber;

// Re-export tracing macros for convenience
pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

// Re-export configuration types
pub use config::{FileConfig, LogLevel, LoggingConfig, OutputConfig};

// Re-export initialization functions
pub use subscriber::{LoggingGuard, init_subscriber};

// Re-export performance monitoring utilities
pub use performance::PerfTimer;

use anyhow::Result;

/// Initialize logging with custom configuration.
///
/// The returned guard flushes buffered file output when dropped, so binaries
/// should hold it until they exit.
pub fn init_logging_with_config(config: LoggingConfig) -> Result<LoggingGuard> {
    init_subscriber(config)
}
