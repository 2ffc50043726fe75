//! The golden file store: path derivation plus read and update operations.
//!
//! A fixture lives at `<dir>/<test name><ext>`, `testdata/<name>.golden` by
//! default, where `/` in the test name becomes the host path separator so
//! subtests land in nested directories. The name is otherwise used as-is.
//!
//! Typical use from a test:
//!
//! ```no_run
//! use golden::{Store, TestReporter};
//!
//! let store = Store::new();
//! let tb = TestReporter::current();
//! let got = b"rendered output".to_vec();
//! if store.update() {
//!     store.set(&tb, &got);
//! }
//! assert_eq!(got, store.get(&tb));
//! ```

use std::fmt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use crate::config::GoldenConfig;
use crate::errors::{ConfigError, GoldenError};
use crate::fs_op::{FsHandler, Storage};
use crate::reporter::TestingTb;
use crate::update::{EnvVarUpdate, UpdateResolver};

pub struct Store {
    fs: Box<dyn FsHandler + Send + Sync>,
    update: Box<dyn UpdateResolver + Send + Sync>,
    config: GoldenConfig,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Store on the host filesystem, updating when `UPDATE_GOLDEN` is truthy.
    pub fn new() -> Self {
        Self::from_valid_config(GoldenConfig::default())
    }

    /// Store on the host filesystem using `config`'s layout and update
    /// variable.
    ///
    /// The config is validated first: an empty `dir` would put fixtures at
    /// the filesystem root.
    pub fn with_config(config: GoldenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GoldenConfig) -> Self {
        Self {
            fs: Box::new(Storage),
            update: Box::new(EnvVarUpdate::new(config.env_var.clone())),
            config,
        }
    }

    pub fn with_fs(mut self, fs: impl FsHandler + Send + Sync + 'static) -> Self {
        self.set_fs(fs);
        self
    }

    pub fn with_update(
        mut self,
        update: impl UpdateResolver + Send + Sync + 'static,
    ) -> Self {
        self.set_update(update);
        self
    }

    pub fn set_fs(&mut self, fs: impl FsHandler + Send + Sync + 'static) {
        self.fs = Box::new(fs);
    }

    pub fn set_update(&mut self, update: impl UpdateResolver + Send + Sync + 'static) {
        self.update = Box::new(update);
    }

    pub fn config(&self) -> &GoldenConfig {
        &self.config
    }

    /// Whether this run should rewrite fixtures. Asks the resolver every time.
    pub fn update(&self) -> bool {
        self.update.should_update()
    }

    /// Fixture path for a test identity, or `None` for an empty identity.
    pub fn filename_for(&self, identity: &str) -> Option<PathBuf> {
        if identity.is_empty() {
            return None;
        }
        let name = identity.replace('/', MAIN_SEPARATOR_STR);
        Some(PathBuf::from(format!(
            "{}/{}{}",
            self.config.dir, name, self.config.ext
        )))
    }

    /// Fixture path for the test behind `tb`.
    pub fn filename<T: TestingTb + ?Sized>(&self, tb: &T) -> Option<PathBuf> {
        let path = self.filename_for(&tb.name());
        tracing::debug!(?path, "derived golden file path");
        path
    }

    /// Read the fixture for `tb`, returning failures instead of reporting them.
    pub fn try_get<T: TestingTb + ?Sized>(&self, tb: &T) -> Result<Vec<u8>, GoldenError> {
        let path = self.require_filename(tb)?;
        match self.fs.read_file(&path) {
            Ok(data) => {
                tracing::debug!(path = %path.display(), bytes = data.len(), "read golden file");
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "golden file read failed");
                Err(GoldenError::Read(e))
            }
        }
    }

    /// Read the fixture for `tb`.
    ///
    /// Any failure is reported through `tb.fatal`; the empty vector returned
    /// in that case is not meant to be used.
    pub fn get<T: TestingTb + ?Sized>(&self, tb: &T) -> Vec<u8> {
        match self.try_get(tb) {
            Ok(data) => data,
            Err(e) => {
                tb.fatal(&e.to_string());
                Vec::new()
            }
        }
    }

    /// Write `data` as the fixture for `tb`, returning failures instead of
    /// reporting them.
    ///
    /// The "updating .golden file" log line goes to `tb` before any I/O, so
    /// it is visible even when creating the directory or writing fails.
    pub fn try_set<T: TestingTb + ?Sized>(
        &self,
        tb: &T,
        data: &[u8],
    ) -> Result<(), GoldenError> {
        let path = self.require_filename(tb)?;
        let dir = path.parent().unwrap_or(Path::new("."));

        tb.log(&format!("updating .golden file: {}", path.display()));
        tracing::info!(path = %path.display(), bytes = data.len(), "updating golden file");

        if let Err(e) = self.fs.create_dir_all(dir, self.config.dir_mode) {
            tracing::warn!(dir = %dir.display(), error = %e, "golden directory creation failed");
            return Err(GoldenError::CreateDir(e));
        }
        if let Err(e) = self.fs.write_file(&path, data, self.config.file_mode) {
            tracing::warn!(path = %path.display(), error = %e, "golden file write failed");
            return Err(GoldenError::Write(e));
        }
        Ok(())
    }

    /// Write `data` as the fixture for `tb`, reporting any failure through
    /// `tb.fatal`.
    pub fn set<T: TestingTb + ?Sized>(&self, tb: &T, data: &[u8]) {
        if let Err(e) = self.try_set(tb, data) {
            tb.fatal(&e.to_string());
        }
    }

    /// Record `actual` when in update mode, then return the stored fixture.
    ///
    /// Comparing the result with `actual` is left to the caller.
    pub fn sync<T: TestingTb + ?Sized>(&self, tb: &T, actual: &[u8]) -> Vec<u8> {
        if self.update() {
            self.set(tb, actual);
        }
        self.get(tb)
    }

    fn require_filename<T: TestingTb + ?Sized>(&self, tb: &T) -> Result<PathBuf, GoldenError> {
        self.filename(tb).ok_or_else(|| GoldenError::NoPath {
            reporter: format!("{:?}", tb),
        })
    }
}
