//! The version-set axis.

use serde::{Deserialize, Serialize};

/// One of the parallel editions of the documentation.
///
/// A version set gates two independent concerns: the link destination
/// prefix ([`link_segment`](Self::link_segment)) and the on-disk checkout
/// root code examples are read from ([`docs_root`](Self::docs_root)). It is
/// always taken from the document's declared value, never inferred from
/// link content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionSet {
    /// The current release.
    #[default]
    Default,
    /// The in-development build.
    Nightly,
    /// The pinned legacy release.
    #[serde(rename = "beta-4")]
    Beta4,
}

impl VersionSet {
    /// Checkout root for this edition, relative to the workspace root.
    #[must_use]
    pub fn docs_root(self) -> &'static str {
        match self {
            Self::Default => "docs",
            Self::Nightly => "docs/nightly",
            Self::Beta4 => "docs/beta-4",
        }
    }

    /// Path segment injected after the `docs/` link prefix, if any.
    ///
    /// The default edition carries no segment.
    #[must_use]
    pub fn link_segment(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Nightly => Some("nightly"),
            Self::Beta4 => Some("beta-4"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_edition_has_no_link_segment() {
        assert_eq!(VersionSet::Default.link_segment(), None);
        assert_eq!(VersionSet::Nightly.link_segment(), Some("nightly"));
        assert_eq!(VersionSet::Beta4.link_segment(), Some("beta-4"));
    }

    #[test]
    fn test_docs_roots_are_distinct() {
        assert_eq!(VersionSet::Default.docs_root(), "docs");
        assert_eq!(VersionSet::Nightly.docs_root(), "docs/nightly");
        assert_eq!(VersionSet::Beta4.docs_root(), "docs/beta-4");
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&VersionSet::Beta4).unwrap();
        assert_eq!(json, r#""beta-4""#);
    }
}
