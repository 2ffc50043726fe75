use thiserror::Error;

/// Failures of a golden-file operation, one variant per stage.
///
/// The `Display` text of each variant is the exact message reported to the
/// test reporter when the operation runs through [`crate::Store::get`] or
/// [`crate::Store::set`].
#[derive(Error, Debug)]
pub enum GoldenError {
    /// The reporter exposed an empty test name, so no path can be derived.
    #[error("could not determine golden file path for: {reporter}")]
    NoPath { reporter: String },

    #[error("failed reading .golden file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to create .golden directory: {0}")]
    CreateDir(#[source] std::io::Error),

    #[error("failed to update .golden file: {0}")]
    Write(#[source] std::io::Error),
}

/// Errors raised while loading a [`crate::config::GoldenConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid golden config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid golden config: {0}")]
    Invalid(String),
}
