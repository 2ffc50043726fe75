//! Filesystem boundary for the golden store.
//!
//! The store never touches `std::fs` directly; it goes through the
//! [`FsHandler`] trait so tests can substitute an in-memory double.

pub mod storage;

pub use storage::{FsHandler, Storage};
