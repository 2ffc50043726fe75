use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::fs_op::FsHandler;

/// One recorded call against a [`MockFs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    CreateDirAll { path: PathBuf, mode: u32 },
    ReadFile { path: PathBuf },
    WriteFile { path: PathBuf, data: Vec<u8>, mode: u32 },
}

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    calls: Vec<FsCall>,
    fail_create_dir_all: Option<(io::ErrorKind, String)>,
    fail_read_file: Option<(io::ErrorKind, String)>,
    fail_write_file: Option<(io::ErrorKind, String)>,
}

impl State {
    fn add_dir_tree(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

/// In-memory [`FsHandler`].
///
/// Clones share state, so a test can hand one clone to a store and inspect
/// the recorded calls through another. Directory and file semantics follow
/// the host filesystem closely enough for the store: writes fail with
/// `NotFound` unless the parent directory was created first, and reads of
/// absent files fail with `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    state: Arc<Mutex<State>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its parent directories) without recording a call.
    pub fn with_file(self, path: impl AsRef<Path>, data: impl Into<Vec<u8>>) -> Self {
        {
            let mut st = self.lock();
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                st.add_dir_tree(parent);
            }
            st.files.insert(path.to_path_buf(), data.into());
        }
        self
    }

    pub fn fail_create_dir_all(self, kind: io::ErrorKind, msg: &str) -> Self {
        self.lock().fail_create_dir_all = Some((kind, msg.to_string()));
        self
    }

    pub fn fail_read_file(self, kind: io::ErrorKind, msg: &str) -> Self {
        self.lock().fail_read_file = Some((kind, msg.to_string()));
        self
    }

    pub fn fail_write_file(self, kind: io::ErrorKind, msg: &str) -> Self {
        self.lock().fail_write_file = Some((kind, msg.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<FsCall> {
        self.lock().calls.clone()
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.lock().dirs.contains(path.as_ref())
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FsHandler for MockFs {
    fn create_dir_all(&self, path: &Path, mode: u32) -> io::Result<()> {
        let mut st = self.lock();
        st.calls.push(FsCall::CreateDirAll {
            path: path.to_path_buf(),
            mode,
        });
        if let Some((kind, msg)) = &st.fail_create_dir_all {
            return Err(io::Error::new(*kind, msg.clone()));
        }
        st.add_dir_tree(path);
        Ok(())
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        let mut st = self.lock();
        st.calls.push(FsCall::ReadFile {
            path: path.to_path_buf(),
        });
        if let Some((kind, msg)) = &st.fail_read_file {
            return Err(io::Error::new(*kind, msg.clone()));
        }
        st.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("open {}: no such file or directory", path.display()),
            )
        })
    }

    fn write_file(&self, path: &Path, data: &[u8], mode: u32) -> io::Result<()> {
        let mut st = self.lock();
        st.calls.push(FsCall::WriteFile {
            path: path.to_path_buf(),
            data: data.to_vec(),
            mode,
        });
        if let Some((kind, msg)) = &st.fail_write_file {
            return Err(io::Error::new(*kind, msg.clone()));
        }
        let parent_missing = path
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty() && !st.dirs.contains(p));
        if parent_missing {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("open {}: no such file or directory", path.display()),
            ));
        }
        st.files.insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MockFs::new();
        let file = Path::new("testdata/a/b.golden");
        let err = fs.write_file(file, b"x", 0o644).expect_err("no parent yet");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        fs.create_dir_all(Path::new("testdata/a"), 0o755).expect("mkdir");
        assert!(fs.has_dir("testdata"));
        fs.write_file(file, b"x", 0o644).expect("write");
        assert_eq!(fs.file(file), Some(b"x".to_vec()));
    }

    #[test]
    fn clones_share_recorded_calls() {
        let fs = MockFs::new().with_file("testdata/seed.golden", "seed");
        let other = fs.clone();
        assert_eq!(
            other
                .read_file(Path::new("testdata/seed.golden"))
                .expect("read"),
            b"seed"
        );
        assert_eq!(
            fs.calls(),
            vec![FsCall::ReadFile {
                path: PathBuf::from("testdata/seed.golden")
            }]
        );
    }

    #[test]
    fn injected_failures_are_returned() {
        let fs =
            MockFs::new().fail_read_file(io::ErrorKind::PermissionDenied, "permission denied");
        let err = fs.read_file(Path::new("x")).expect_err("forced failure");
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(err.to_string(), "permission denied");
    }
}
