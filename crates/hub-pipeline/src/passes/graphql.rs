//! GraphQL book raw-anchor pass.
//!
//! The GraphQL book authors its cross-references as raw `<a>` tags with
//! site-absolute hrefs that omit the book segment (`/docs/recipes/...`).
//! This pass splices the book slug — and the version segment for
//! non-default editions — into those hrefs so they land inside the book.

use std::sync::LazyLock;

use hub_tree::{Node, NodeKind};
use hub_versions::{Book, VersionSet};
use regex::{Captures, Regex};

static DOCS_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href\s*=\s*"/docs/([^"]+)""#).unwrap());

pub(crate) fn run(tree: &mut Node, version_set: VersionSet) {
    let slug = Book::GraphQL.slug();
    hub_tree::visit_mut(tree, &mut |node| {
        if node.kind != NodeKind::HtmlInline {
            return;
        }
        let Some(value) = &node.value else { return };
        if !value.contains("href") {
            return;
        }
        let rewritten = DOCS_HREF
            .replace_all(value, |caps: &Captures<'_>| {
                let rest = &caps[1];
                let first = rest.split('/').next().unwrap_or("");
                if first == slug || first == "nightly" || first == "beta-4" {
                    return caps[0].to_owned();
                }
                match version_set.link_segment() {
                    Some(segment) => format!(r#"href="/docs/{segment}/{slug}/{rest}""#),
                    None => format!(r#"href="/docs/{slug}/{rest}""#),
                }
            })
            .into_owned();
        node.value = Some(rewritten);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_tree::parse_markdown;
    use pretty_assertions::assert_eq;

    fn first_html(tree: &Node) -> String {
        let mut found = String::new();
        hub_tree::visit(tree, &mut |node| {
            if node.kind == NodeKind::HtmlInline && found.is_empty() {
                found = node.value.clone().unwrap_or_default();
            }
        });
        found
    }

    #[test]
    fn test_book_segment_spliced() {
        let mut tree = parse_markdown(r#"See <a href="/docs/recipes/transfers">recipes</a>."#);
        run(&mut tree, VersionSet::Default);
        assert_eq!(
            first_html(&tree),
            r#"<a href="/docs/graphql/recipes/transfers">"#
        );
    }

    #[test]
    fn test_version_segment_spliced_for_nightly() {
        let mut tree = parse_markdown(r#"See <a href="/docs/recipes/transfers">recipes</a>."#);
        run(&mut tree, VersionSet::Nightly);
        assert_eq!(
            first_html(&tree),
            r#"<a href="/docs/nightly/graphql/recipes/transfers">"#
        );
    }

    #[test]
    fn test_already_qualified_href_untouched() {
        let mut tree = parse_markdown(r#"<a href="/docs/graphql/overview">x</a> after"#);
        run(&mut tree, VersionSet::Default);
        assert_eq!(first_html(&tree), r#"<a href="/docs/graphql/overview">"#);
    }
}
