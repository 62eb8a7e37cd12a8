//! Compilation input.

use hub_versions::VersionSet;

/// One markdown source file awaiting compilation.
///
/// Immutable input to a single compile. The origin path is relative to
/// the version set's checkout root, e.g.
/// `sway/docs/book/src/advanced/structs.md`; its leading directory names
/// the upstream book.
#[derive(Clone, Debug)]
pub struct Document {
    pub raw_content: String,
    pub origin_path: String,
    pub version_set: VersionSet,
}

impl Document {
    #[must_use]
    pub fn new(
        raw_content: impl Into<String>,
        origin_path: impl Into<String>,
        version_set: VersionSet,
    ) -> Self {
        Self {
            raw_content: raw_content.into(),
            origin_path: origin_path.into(),
            version_set,
        }
    }
}
