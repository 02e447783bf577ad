//! Diagnostic output setup.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber at a fixed `warn` level.
///
/// The filter is not read from the environment; stdout is reserved for
/// converted output.
pub fn init() {
    // Fails only when a global subscriber is already installed; keep that one.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
