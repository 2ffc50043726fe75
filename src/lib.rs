//! Golden files for tests.
//!
//! A test's expected output is kept in `testdata/<test name>.golden` instead
//! of a literal in the test body. Normal runs read the file and compare;
//! runs with `UPDATE_GOLDEN=1` (or `yes`, `on`, `true`, `t`) rewrite it from
//! the output the test just produced.
//!
//! ```no_run
//! use golden::TestReporter;
//!
//! #[test]
//! fn renders_report() {
//!     let tb = TestReporter::current();
//!     let got = b"report body".to_vec();
//!     if golden::update() {
//!         golden::set(&tb, &got);
//!     }
//!     assert_eq!(got, golden::get(&tb));
//! }
//! ```

pub mod config;
pub mod errors;
pub mod fs_op;
pub mod global;
pub mod logging;
pub mod reporter;
pub mod store;
pub mod update;

// Test doubles. Enabled for downstream crates via the `test-helpers`
// feature in Cargo.toml so regular builds don't include them.
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use crate::config::GoldenConfig;
pub use crate::errors::{ConfigError, GoldenError};
pub use crate::fs_op::{FsHandler, Storage};
pub use crate::global::{filename, get, set, sync, update};
pub use crate::reporter::{TestReporter, TestingTb};
pub use crate::store::Store;
pub use crate::update::{EnvVarUpdate, UpdateResolver};
