//! Logging setup.
//!
//! The library only emits `tracing` events; hosts decide where they go.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber for a host program.
///
/// Reads the level filter from `RUST_LOG` (default: `info`), e.g.
/// `RUST_LOG=duty_planner=debug` to see every processed slot.
/// Logs go to stderr so stdout stays free for results.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Installs a debug-level subscriber that writes through the test harness.
///
/// Safe to call from several tests; only the first call takes effect.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
