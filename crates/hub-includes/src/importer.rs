//! Directive resolution against the repository checkout.

use std::path::{Path, PathBuf};

use crate::{extract_anchor, FileCache, ImportError, IncludeDirective};

/// Absolute source path for a directive.
///
/// A `./`-relative path resolves against the directory of the document
/// that carries the directive. Anything else resolves against the book's
/// source root, after discarding the `../` prefixes authors use to climb
/// out of the docs tree — the root is authoritative, not the document.
#[must_use]
pub fn resolve_source_path(
    directive: &IncludeDirective,
    source_root: &Path,
    doc_dir: &Path,
) -> PathBuf {
    if let Some(local) = directive.path.strip_prefix("./") {
        return doc_dir.join(local);
    }

    let mut rest = directive.path.as_str();
    while let Some(stripped) = rest.strip_prefix("../") {
        rest = stripped;
    }
    source_root.join(rest)
}

/// Resolve a directive, read its source through the cache, and extract
/// the requested block.
///
/// # Errors
///
/// [`ImportError::SourceNotFound`] when the resolved file cannot be read,
/// [`ImportError::AnchorNotFound`] when a named anchor never matches.
pub fn import_block(
    directive: &IncludeDirective,
    source_root: &Path,
    doc_dir: &Path,
    cache: &mut FileCache,
) -> Result<String, ImportError> {
    let path = resolve_source_path(directive, source_root, doc_dir);
    let content = cache.read(&path)?;
    extract_anchor(content, directive.anchor.as_deref(), &path)
}
