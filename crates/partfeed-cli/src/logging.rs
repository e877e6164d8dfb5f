use tracing_subscriber::EnvFilter;

/// Initialize human-readable logging with tracing-subscriber.
///
/// Uses the `RUST_LOG` env var if set, otherwise the provided level;
/// falls back to `info` if neither parses.
pub fn init(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
