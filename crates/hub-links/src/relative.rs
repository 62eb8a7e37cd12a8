//! Rule 2: relative resolution against the document's location.
//!
//! Relative URLs resolve against the document's *site* directory — the
//! origin path with the book's doc-root substring stripped — so that moving
//! an upstream checkout on disk never changes link targets.

use crate::context::LinkContext;

/// Outcome of relative resolution.
pub(crate) enum Resolution {
    /// Resolved to an internal site path.
    Internal(String),
    /// Not a relative link this rule handles (in-page anchors, already
    /// site-absolute non-docs paths).
    Skip,
    /// A relative link that escapes the book root; left for the caller to
    /// warn about.
    Unresolvable,
}

/// Resolve a schemeless URL against the document's site directory.
pub(crate) fn resolve(url: &str, ctx: &LinkContext<'_>) -> Resolution {
    // In-page anchors and query-only links have no path to resolve.
    if url.is_empty() || url.starts_with('#') || url.starts_with('?') {
        return Resolution::Skip;
    }

    let (path_part, fragment) = split_fragment(url);

    // Already site-absolute: normalize the page path only.
    if let Some(internal) = path_part.strip_prefix('/') {
        let mut page = normalize_page_path(internal);
        page.insert(0, '/');
        return Resolution::Internal(rejoin(page, fragment));
    }

    let dir = ctx.site_dir();
    let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();

    let mut rest = path_part;
    if let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    } else {
        while let Some(stripped) = rest.strip_prefix("../") {
            if segments.pop().is_none() {
                return Resolution::Unresolvable;
            }
            rest = stripped;
        }
    }

    if rest.is_empty() || !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Resolution::Unresolvable;
    }

    let page = normalize_page_path(rest);
    let mut resolved = String::from("/docs");
    for segment in segments {
        resolved.push('/');
        resolved.push_str(segment);
    }
    resolved.push('/');
    resolved.push_str(&page);

    Resolution::Internal(rejoin(resolved, fragment))
}

/// Strip the page extension and collapse a trailing `/index` to `/`.
fn normalize_page_path(path: &str) -> String {
    let mut page = path
        .strip_suffix(".md")
        .or_else(|| path.strip_suffix(".html"))
        .unwrap_or(path)
        .to_owned();
    if let Some(stripped) = page.strip_suffix("/index") {
        page = format!("{stripped}/");
    } else if page == "index" {
        page = String::new();
    }
    page
}

fn split_fragment(url: &str) -> (&str, Option<&str>) {
    match url.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (url, None),
    }
}

fn rejoin(path: String, fragment: Option<&str>) -> String {
    match fragment {
        Some(fragment) => format!("{path}#{fragment}"),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_versions::{Book, ReleaseTags, VersionSet};
    use pretty_assertions::assert_eq;

    static EMPTY_TAGS: std::sync::LazyLock<ReleaseTags> =
        std::sync::LazyLock::new(ReleaseTags::default);

    fn ctx() -> LinkContext<'static> {
        LinkContext {
            origin_path: "sway/docs/book/src/advanced/structs.md",
            version_set: VersionSet::Default,
            book: Book::Sway,
            tags: &EMPTY_TAGS,
        }
    }

    fn internal(url: &str) -> String {
        match resolve(url, &ctx()) {
            Resolution::Internal(path) => path,
            _ => panic!("expected internal resolution for {url}"),
        }
    }

    #[test]
    fn test_parent_relative() {
        assert_eq!(internal("../basics/variables.md"), "/docs/sway/basics/variables");
    }

    #[test]
    fn test_dot_relative() {
        assert_eq!(internal("./enums.md"), "/docs/sway/advanced/enums");
    }

    #[test]
    fn test_bare_relative() {
        assert_eq!(internal("enums.md"), "/docs/sway/advanced/enums");
    }

    #[test]
    fn test_fragment_preserved() {
        assert_eq!(
            internal("../basics/variables.md#mutability"),
            "/docs/sway/basics/variables#mutability"
        );
    }

    #[test]
    fn test_trailing_index_collapsed() {
        assert_eq!(internal("../basics/index.md"), "/docs/sway/basics/");
    }

    #[test]
    fn test_double_parent() {
        assert_eq!(internal("../../forc/plugins.md"), "/docs/forc/plugins");
    }

    #[test]
    fn test_escaping_book_root_is_unresolvable() {
        assert!(matches!(
            resolve("../../../outside.md", &ctx()),
            Resolution::Unresolvable
        ));
    }

    #[test]
    fn test_anchor_only_is_skipped() {
        assert!(matches!(resolve("#section", &ctx()), Resolution::Skip));
    }
}
