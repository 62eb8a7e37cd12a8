//! External code example importing with anchor extraction.
//!
//! Documents request code from source files through two directive
//! dialects — the mdBook fenced `{{#include path:anchor}}` form and the
//! inline `<<< @/path{lang}#anchor` form. Both are normalised into a
//! single [`IncludeDirective`] at detection time; resolution, caching, and
//! extraction all operate on that one shape.
//!
//! An anchor names a begin/end comment pair delimiting the extractable
//! sub-block; `anchor = None` means the whole file. File contents are read
//! at most once per build through an injected [`FileCache`]. The cache
//! keeps a content digest per entry so a long-lived driver can detect
//! on-disk changes between builds ([`FileCache::is_stale`] /
//! [`FileCache::evict`]); this is advisory only — a one-shot build never
//! consults it, and a hit always returns the content of the prior read.
//!
//! A missing source file or a never-matched anchor is a fatal authoring
//! defect ([`ImportError`]), never a silent fallback.

mod anchor;
mod cache;
mod directive;
mod importer;

use std::path::PathBuf;

pub use anchor::extract_anchor;
pub use cache::FileCache;
pub use directive::IncludeDirective;
pub use importer::{import_block, resolve_source_path};

/// Fatal import failure. Aborts the compilation of the offending document.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("anchor `{anchor}` not found in {path}")]
    AnchorNotFound { path: PathBuf, anchor: String },
}
