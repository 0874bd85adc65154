//! Structured logging setup
//!
//! The library only emits `tracing` events; hosts that want to see them call
//! [`init_tracing`] once at startup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const CRATE_TARGET: &str = "algokit";
const LOG_ENV_VAR: &str = "ALGOKIT_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", nodes = graph.node_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Compute the filter directive used when no env override is present
pub fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("{}={}", CRATE_TARGET, level),
        (true, None) => format!("{}=debug", CRATE_TARGET),
        (false, None) => format!("{}=warn", CRATE_TARGET),
    }
}

/// Initialize structured logging on stderr
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = filter_directive(verbose, log_level);

    // RUST_LOG wins, then ALGOKIT_LOG, then the computed directive
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Initialize logging from a loaded [`crate::config::LogConfig`]
pub fn init_from_config(
    config: &crate::config::LogConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(false, config.level.as_deref(), config.json)
}
