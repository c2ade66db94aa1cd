// Logging module for structured logging using the tracing crate

use std::error::Error;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "info";

/// Number of leading characters kept by [`mask_identifier`]
const VISIBLE_PREFIX: usize = 3;

/// Initialize the tracing subscriber for structured logging
///
/// Events are written as JSON lines to stderr, keeping stdout free for
/// command output. The level filter comes from `RUST_LOG` and falls back to
/// `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
///
/// # Examples
///
/// ```
/// use twincdn::logging::init_subscriber;
///
/// init_subscriber().expect("Failed to initialize logging");
/// tracing::info!("Application started");
/// ```
pub fn init_subscriber() -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}

/// Mask an account identifier for log output
///
/// Keeps the first three characters so operators can tell accounts apart,
/// and hides the rest. Short identifiers are hidden entirely.
pub fn mask_identifier(value: &str) -> String {
    if value.chars().count() <= VISIBLE_PREFIX {
        return "***".to_string();
    }
    let prefix: String = value.chars().take(VISIBLE_PREFIX).collect();
    format!("{}***", prefix)
}
