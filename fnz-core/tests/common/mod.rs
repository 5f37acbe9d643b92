//! Shared helpers for integration tests

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber that writes through the test harness.
/// `RUST_LOG` picks the level; later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fnz_core=trace"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
