//! Href adapter for raw inline HTML.
//!
//! Some upstream books embed anchor tags as literal HTML text rather than
//! structured link nodes. This adapter scans the text for `href`
//! attributes and feeds each one through the same rewrite chain, so the
//! rules never have to know about HTML at all.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::context::LinkContext;

static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href\s*=\s*"([^"]*)""#).unwrap());

/// Rewrite every `href` attribute inside a raw HTML fragment.
///
/// Attributes whose URL the chain leaves unchanged are copied through
/// verbatim.
#[must_use]
pub fn rewrite_hrefs(html: &str, ctx: &LinkContext<'_>) -> String {
    HREF.replace_all(html, |caps: &Captures<'_>| {
        let url = &caps[1];
        match crate::rewrite(url, ctx) {
            Some(rewritten) => format!(r#"href="{rewritten}""#),
            None => caps[0].to_owned(),
        }
    })
    .into_owned()
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

    #[test]
    fn test_relative_href_rewritten() {
        let html = r#"See <a href="../basics/variables.md">variables</a>."#;
        assert_eq!(
            rewrite_hrefs(html, &ctx()),
            r#"See <a href="/docs/sway/basics/variables">variables</a>."#
        );
    }

    #[test]
    fn test_multiple_hrefs_rewritten_independently() {
        let html = r#"<a href="./a.md">a</a> <a href="https://example.com">x</a>"#;
        assert_eq!(
            rewrite_hrefs(html, &ctx()),
            r#"<a href="/docs/sway/advanced/a">a</a> <a href="https://example.com">x</a>"#
        );
    }

    #[test]
    fn test_non_anchor_html_untouched() {
        let html = "<img src=\"image.png\">";
        assert_eq!(rewrite_hrefs(html, &ctx()), html);
    }
}
