//! Sets up logging for the command-line tools.

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Install a global subscriber that logs to stderr.
///
/// Directives in the `RUST_LOG` environment variable take precedence, otherwise
/// events at `default_level` and above are logged. Logs go to stderr so that
/// records written to stdout stay machine-readable.
///
/// Does nothing if a global subscriber has already been installed.
pub fn setup_logging(default_level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let stderr_log = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if let Err(error) = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_log)
        .try_init()
    {
        tracing::debug!("Logging was already set up: {error}");
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::setup_logging;

    #[test]
    fn setting_up_twice_does_not_panic() {
        setup_logging(LevelFilter::INFO);
        setup_logging(LevelFilter::DEBUG);
    }
}
