//! Rewrite context.

use hub_versions::{Book, ReleaseTags, VersionSet};

/// The only inputs a rewrite rule may read besides the URL itself.
///
/// Keeping the context this small is what makes the rewrite a pure
/// function: for a fixed `(url, origin_path, version_set, book, tags)` the
/// result is always the same.
#[derive(Clone, Copy, Debug)]
pub struct LinkContext<'a> {
    /// Path of the document being compiled, relative to the checkout root,
    /// e.g. `sway/docs/book/src/advanced/structs.md`.
    pub origin_path: &'a str,
    /// Active version set; decides the injected link segment.
    pub version_set: VersionSet,
    /// Book the document came from; decides doc-root stripping.
    pub book: Book,
    /// Release tags resolved once per build, for `master` pinning.
    pub tags: &'a ReleaseTags,
}

impl LinkContext<'_> {
    /// Directory of the document on the published site, book slug included,
    /// e.g. `sway/advanced` for `sway/docs/book/src/advanced/structs.md`.
    #[must_use]
    pub fn site_dir(&self) -> String {
        let repo_prefix = self.book.repo_dir();
        let rest = self
            .origin_path
            .strip_prefix(repo_prefix)
            .unwrap_or(self.origin_path)
            .trim_start_matches('/');
        let doc_root = self.book.doc_root();
        let rest = rest.strip_prefix(doc_root).unwrap_or(rest).trim_start_matches('/');

        // Drop the file name, keep the directory.
        let dir = match rest.rsplit_once('/') {
            Some((dir, _file)) => dir,
            None => "",
        };

        if dir.is_empty() {
            self.book.slug().to_owned()
        } else {
            format!("{}/{dir}", self.book.slug())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static EMPTY_TAGS: std::sync::LazyLock<ReleaseTags> =
        std::sync::LazyLock::new(ReleaseTags::default);

    fn ctx(origin_path: &str, book: Book) -> LinkContext<'_> {
        LinkContext {
            origin_path,
            version_set: VersionSet::Default,
            book,
            tags: &EMPTY_TAGS,
        }
    }

    #[test]
    fn test_site_dir_strips_doc_root() {
        let context = ctx("sway/docs/book/src/advanced/structs.md", Book::Sway);
        assert_eq!(context.site_dir(), "sway/advanced");
    }

    #[test]
    fn test_site_dir_top_level_document() {
        let context = ctx("sway/docs/book/src/introduction.md", Book::Sway);
        assert_eq!(context.site_dir(), "sway");
    }

    #[test]
    fn test_site_dir_uses_book_slug() {
        let context = ctx("fuel-specs/src/protocol/tx-format.md", Book::Specs);
        assert_eq!(context.site_dir(), "specs/protocol");
    }

    #[test]
    fn test_site_dir_ts_sdk_doc_root() {
        let context = ctx("fuels-ts/apps/docs/src/guide/wallets/access.md", Book::FuelsTs);
        assert_eq!(context.site_dir(), "fuels-ts/guide/wallets");
    }
}
