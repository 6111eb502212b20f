use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr subscriber. Level comes from `RUST_LOG`, defaulting to
/// `boc_yields=info`. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boc_yields=info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
