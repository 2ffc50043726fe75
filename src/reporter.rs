//! The per-test reporting handle the store talks to.

use std::fmt;

/// What the store needs from the running test.
///
/// `fatal` must end the current test: the store does not touch the value it
/// returns after reporting fatally. `Debug` is required so a handle without a
/// usable name can still be identified in the failure message.
pub trait TestingTb: fmt::Debug {
    /// Stable identity of the running test. Subtests use `Parent/Child`.
    fn name(&self) -> String;
    fn fatal(&self, msg: &str);
    fn log(&self, msg: &str);
}

impl<T: TestingTb + ?Sized> TestingTb for &T {
    fn name(&self) -> String {
        (**self).name()
    }
    fn fatal(&self, msg: &str) {
        (**self).fatal(msg)
    }
    fn log(&self, msg: &str) {
        (**self).log(msg)
    }
}

/// Reporter for tests run by the standard libtest harness.
///
/// libtest names each test thread after the test's path (for example
/// `parser::tests::empty_input`); [`TestReporter::current`] turns that into
/// the identity `parser/tests/empty_input`, so every test gets its own
/// fixture without naming it by hand. `fatal` panics, which is how libtest
/// fails and stops a test. `log` prints to the captured test output, shown
/// when the test fails or with `--nocapture`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReporter {
    name: String,
}

impl TestReporter {
    /// Reporter named after the current test thread. An unnamed thread
    /// yields an empty identity, which the store reports as fatal.
    pub fn current() -> Self {
        let name = std::thread::current()
            .name()
            .map(|n| n.replace("::", "/"))
            .unwrap_or_default();
        Self { name }
    }

    /// Reporter with an explicit identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Reporter for a named case inside this test: `self/child`.
    pub fn subtest(&self, child: &str) -> Self {
        if self.name.is_empty() {
            return Self::new(child);
        }
        Self::new(format!("{}/{}", self.name, child))
    }
}

impl TestingTb for TestReporter {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn fatal(&self, msg: &str) {
        tracing::error!(test = %self.name, "{}", msg);
        panic!("{}", msg);
    }

    fn log(&self, msg: &str) {
        tracing::info!(test = %self.name, "{}", msg);
        println!("{}", msg);
    }
}
