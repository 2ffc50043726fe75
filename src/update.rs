//! Deciding whether a run should rewrite golden files.

use crate::config::DEFAULT_ENV_VAR;

/// Values of the update variable that switch update mode on. Matching is
/// exact and case-sensitive: `"YES"` or `"2"` leave update mode off.
pub const TRUTHY: [&str; 5] = ["yes", "on", "true", "t", "1"];

/// Strategy deciding, at call time, whether fixtures are being recorded.
///
/// Any `Fn() -> bool` closure is a resolver, so tests can pin the mode with
/// `|| true` and callers can wire alternative triggers such as a CLI flag.
pub trait UpdateResolver {
    fn should_update(&self) -> bool;
}

impl<F> UpdateResolver for F
where
    F: Fn() -> bool,
{
    fn should_update(&self) -> bool {
        self()
    }
}

/// Default resolver: reads an environment variable on every call.
///
/// The variable is never cached so a test can flip it mid-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarUpdate {
    var: String,
}

impl EnvVarUpdate {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvVarUpdate {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_VAR)
    }
}

impl UpdateResolver for EnvVarUpdate {
    fn should_update(&self) -> bool {
        // A non-unicode value can't equal any truthy literal.
        match std::env::var(&self.var) {
            Ok(v) => is_truthy(&v),
            Err(_) => false,
        }
    }
}

/// Return `true` if `value` is one of [`TRUTHY`].
pub fn is_truthy(value: &str) -> bool {
    TRUTHY.contains(&value)
}
