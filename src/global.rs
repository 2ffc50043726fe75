//! Free functions backed by one process-wide default [`Store`].
//!
//! The shared store uses the host filesystem, the `testdata/*.golden`
//! layout and the `UPDATE_GOLDEN` variable. It cannot be reconfigured; build
//! a [`Store`] directly when a test needs another filesystem or resolver.

use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::reporter::TestingTb;
use crate::store::Store;

static INSTANCE: Lazy<Store> = Lazy::new(Store::new);

/// The shared default store.
pub fn store() -> &'static Store {
    &INSTANCE
}

pub fn update() -> bool {
    INSTANCE.update()
}

pub fn filename<T: TestingTb + ?Sized>(tb: &T) -> Option<PathBuf> {
    INSTANCE.filename(tb)
}

pub fn get<T: TestingTb + ?Sized>(tb: &T) -> Vec<u8> {
    INSTANCE.get(tb)
}

pub fn set<T: TestingTb + ?Sized>(tb: &T, data: &[u8]) {
    INSTANCE.set(tb, data)
}

pub fn sync<T: TestingTb + ?Sized>(tb: &T, actual: &[u8]) -> Vec<u8> {
    INSTANCE.sync(tb, actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{acquire_env_lock, RecordingReporter};

    #[test]
    fn filename_matches_default_layout() {
        let tb = RecordingReporter::new("MockTestStore_Path/test_case");
        assert_eq!(
            filename(&tb),
            Some(PathBuf::from("testdata/MockTestStore_Path/test_case.golden"))
        );
        assert_eq!(filename(&RecordingReporter::new("")), None);
    }

    #[test]
    fn update_follows_environment() {
        let _guard = acquire_env_lock();
        std::env::set_var("UPDATE_GOLDEN", "t");
        assert!(update());
        std::env::set_var("UPDATE_GOLDEN", "nope");
        assert!(!update());
        std::env::remove_var("UPDATE_GOLDEN");
        assert!(!update());
    }

    #[test]
    fn empty_name_is_fatal_for_get_and_set() {
        let tb = RecordingReporter::new("");
        assert!(get(&tb).is_empty());
        set(&tb, b"x");
        assert_eq!(tb.fatals().len(), 2);
    }

    #[test]
    fn shared_store_is_a_single_instance() {
        assert!(std::ptr::eq(store(), store()));
    }
}
