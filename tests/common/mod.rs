#![allow(dead_code)]

use std::cell::RefCell;
use std::fmt;

use golden::{GoldenConfig, Store, TestingTb};

/// Reporter that keeps messages instead of failing the test, so assertions
/// can inspect what the store reported.
pub struct Captured {
    pub name: String,
    pub fatals: RefCell<Vec<String>>,
    pub logs: RefCell<Vec<String>>,
}

impl Captured {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fatals: RefCell::default(),
            logs: RefCell::default(),
        }
    }
}

impl fmt::Debug for Captured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Captured({:?})", self.name)
    }
}

impl TestingTb for Captured {
    fn name(&self) -> String {
        self.name.clone()
    }
    fn fatal(&self, msg: &str) {
        self.fatals.borrow_mut().push(msg.to_string());
    }
    fn log(&self, msg: &str) {
        self.logs.borrow_mut().push(msg.to_string());
    }
}

/// Store on the real filesystem rooted at `root` instead of `testdata`.
pub fn store_in(root: &std::path::Path) -> Store {
    golden::logging::init_test_logging();
    Store::with_config(GoldenConfig {
        dir: root.to_string_lossy().into_owned(),
        ..GoldenConfig::default()
    })
    .expect("temp root is a valid fixture dir")
}
