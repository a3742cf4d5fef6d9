use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber used by every binary.
///
/// `RUST_LOG` wins when set; otherwise `design_patterns` logs at `default_level`.
/// Returns `false` when a subscriber was already installed; the first one stays.
pub fn init(default_level: &str) -> bool {
    let fallback = format!("design_patterns={default_level},check_catalog={default_level}");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
