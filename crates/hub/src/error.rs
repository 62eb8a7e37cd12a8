//! CLI error types.

use hub_pipeline::CompileError;
use hub_versions::VersionError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Compile(#[from] CompileError),

    #[error("{0}")]
    Version(#[from] VersionError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
