//! Layout settings for golden files.
//!
//! The defaults are the on-disk contract: fixtures live at
//! `testdata/<test name>.golden`, are rewritten when `UPDATE_GOLDEN` is
//! truthy, and are created with `0o755` directories and `0o644` files.
//! Other tooling (reviewers diffing fixtures in version control) relies on
//! these values, so only override them for tests of the store itself or for
//! projects with their own fixture layout.

use serde::Deserialize;

use crate::errors::ConfigError;

/// Directory, relative to the working directory, holding all fixtures.
pub const DEFAULT_DIR: &str = "testdata";
/// Extension appended to the normalized test name.
pub const DEFAULT_EXT: &str = ".golden";
/// Environment variable consulted by the default update resolver.
pub const DEFAULT_ENV_VAR: &str = "UPDATE_GOLDEN";
pub const DEFAULT_DIR_MODE: u32 = 0o755;
pub const DEFAULT_FILE_MODE: u32 = 0o644;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GoldenConfig {
    pub dir: String,
    pub ext: String,
    pub env_var: String,
    pub dir_mode: u32,
    pub file_mode: u32,
}

impl Default for GoldenConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_DIR.to_string(),
            ext: DEFAULT_EXT.to_string(),
            env_var: DEFAULT_ENV_VAR.to_string(),
            dir_mode: DEFAULT_DIR_MODE,
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}

impl GoldenConfig {
    /// Parse a TOML fragment. Missing keys fall back to the defaults.
    ///
    /// ```
    /// let cfg = golden::config::GoldenConfig::from_toml_str("dir = \"fixtures\"").unwrap();
    /// assert_eq!(cfg.dir, "fixtures");
    /// assert_eq!(cfg.ext, ".golden");
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: GoldenConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings under which no fixture path could ever be derived.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dir.is_empty() {
            return Err(ConfigError::Invalid("`dir` must not be empty".into()));
        }
        if self.env_var.is_empty() {
            return Err(ConfigError::Invalid("`env_var` must not be empty".into()));
        }
        if self.dir_mode > 0o7777 || self.file_mode > 0o7777 {
            return Err(ConfigError::Invalid(format!(
                "modes must be permission bits, got dir_mode={:o} file_mode={:o}",
                self.dir_mode, self.file_mode
            )));
        }
        Ok(())
    }
}
