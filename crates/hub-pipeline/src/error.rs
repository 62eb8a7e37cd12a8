//! Fatal compilation failures.
//!
//! Every variant halts the compilation of the single document that
//! triggered it and names that document; other documents and the shared
//! file cache are unaffected. These are deterministic content defects,
//! never retried.

use std::path::PathBuf;

use hub_includes::ImportError;

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The origin path's leading directory matches no configured book.
    /// Raised at chain-selection time, before any pass runs.
    #[error("no book configuration matches document {origin_path}")]
    ConfigNotFound { origin_path: String },

    /// An include directive resolved to a file that does not exist.
    #[error("{document}: source file not found: {path}")]
    SourceNotFound { document: String, path: PathBuf },

    /// A named anchor never matched in an otherwise-found file. An
    /// authoring defect in the upstream content, never downgraded to a
    /// whole-file import.
    #[error("{document}: anchor `{anchor}` not found in {path}")]
    AnchorNotFound {
        document: String,
        path: PathBuf,
        anchor: String,
    },
}

impl CompileError {
    /// Attach the offending document to an import failure.
    pub(crate) fn from_import(document: &str, err: ImportError) -> Self {
        match err {
            ImportError::SourceNotFound(path) => Self::SourceNotFound {
                document: document.to_owned(),
                path,
            },
            ImportError::AnchorNotFound { path, anchor } => Self::AnchorNotFound {
                document: document.to_owned(),
                path,
                anchor,
            },
        }
    }
}
