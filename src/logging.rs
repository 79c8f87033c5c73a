use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "info";

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install a process-wide tracing subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`, which falls back to
/// `info` when `None`. Only the first call has an effect.
pub fn init_logging(default_filter: Option<&str>) {
    LOGGING_INITIALIZED.get_or_init(|| {
        let fallback = default_filter.unwrap_or(DEFAULT_LOG_FILTER);
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        let _ = fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
