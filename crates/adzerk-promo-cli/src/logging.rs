use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout only carries the result. Level from `RUST_LOG`,
/// `info` when unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
