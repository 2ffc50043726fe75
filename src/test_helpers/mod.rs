// Test doubles for the golden store. This module is compiled for the crate's
// own unit tests and, via the `test-helpers` cargo feature, for downstream
// crates that want to test their golden-file helpers without touching disk.
//
// - `MockFs` is an in-memory `FsHandler` that records every call and can be
//   told to fail a given operation.
// - `RecordingReporter` is a `TestingTb` that records fatal and log messages
//   in order instead of halting the test.

pub mod mock_fs;
pub mod recording;

pub use mock_fs::{FsCall, MockFs};
pub use recording::{RecordingReporter, Report};

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Serialize tests that mutate process environment variables.
///
/// A test that panicked while holding the lock does not poison it for the
/// rest of the suite.
pub fn acquire_env_lock() -> MutexGuard<'static, ()> {
    static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
