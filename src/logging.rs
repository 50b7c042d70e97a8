//! `tracing` subscriber setup for binaries and tests embedding the engine.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a global fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// # Errors
///
/// Returns `Err` if a global subscriber was already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).try_init()
}

/// Routes `debug` output to the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("ecu_harvester=debug"))
        .with_test_writer()
        .try_init();
}
