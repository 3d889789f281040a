// src/log.rs
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
/// `RUST_LOG` takes precedence; otherwise `info`, or `debug` when verbose.
/// A second call is a no-op.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
