use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr subscriber. `--debug` wins over the configured level.
/// Safe to call more than once; later calls are ignored.
pub fn init(debug: bool, level: &str) {
    let directive = if debug { "debug" } else { level };
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(debug)
        .try_init();
}
