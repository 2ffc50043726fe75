//! Tracing setup for test binaries.
//!
//! The store emits `tracing` events for derived paths, reads and updates.
//! Call [`init_test_logging`] at the top of a test to see them in the
//! captured output; set `RUST_LOG` to change the filter.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "golden=debug";

/// Install a fmt subscriber writing through libtest's capture.
///
/// Safe to call from every test: only the first call installs anything.
/// Returns `true` if this call installed the subscriber.
pub fn init_test_logging() -> bool {
    // Route `log` records from dependencies into tracing as well.
    let _ = tracing_log::LogTracer::init();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
