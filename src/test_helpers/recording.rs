use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::reporter::TestingTb;

/// One message received by a [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Fatal(String),
    Log(String),
}

/// [`TestingTb`] that records messages instead of halting.
///
/// Because `fatal` returns normally, the store keeps going to its own early
/// return; tests can therefore assert exactly which messages were produced
/// and in which order. Clones share the recorded messages.
#[derive(Clone)]
pub struct RecordingReporter {
    name: String,
    reports: Arc<Mutex<Vec<Report>>>,
}

impl RecordingReporter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reports: Arc::default(),
        }
    }

    pub fn reports(&self) -> Vec<Report> {
        self.lock().clone()
    }

    pub fn fatals(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|r| match r {
                Report::Fatal(m) => Some(m.clone()),
                Report::Log(_) => None,
            })
            .collect()
    }

    pub fn logs(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|r| match r {
                Report::Log(m) => Some(m.clone()),
                Report::Fatal(_) => None,
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Report>> {
        self.reports.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// Only the identity is shown, so the "could not determine golden file path"
// message stays stable regardless of what was recorded.
impl fmt::Debug for RecordingReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingReporter").field("name", &self.name).finish()
    }
}

impl TestingTb for RecordingReporter {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn fatal(&self, msg: &str) {
        self.lock().push(Report::Fatal(msg.to_string()));
    }

    fn log(&self, msg: &str) {
        self.lock().push(Report::Log(msg.to_string()));
    }
}
