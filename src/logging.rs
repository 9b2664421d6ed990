use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber for the CLI.
///
/// `RUST_LOG` takes precedence over the `verbose` flag.
pub fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // A subscriber may already be set (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
