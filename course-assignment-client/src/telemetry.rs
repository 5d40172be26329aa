use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_LOG_LEVEL: &str = "info,hyper=info";

/// Logs to stdout, filtered by `RUST_LOG`. Calling it twice keeps the first
/// subscriber.
pub fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer();

    let _ = tracing_subscriber::registry()
        .with(
            stdout_log.with_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into()),
            ),
        )
        .try_init();
}
