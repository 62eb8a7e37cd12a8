//! Version-placeholder substitution.
//!
//! The SDK books reference their own release versions in prose through
//! placeholder tokens; substituting the resolved tags at compile time
//! keeps installation snippets accurate without upstream edits. A
//! placeholder whose tag was not resolved is left as written.

use hub_tree::{Node, NodeKind};
use hub_versions::{Book, ReleaseTags};

pub(crate) fn run(tree: &mut Node, book: Book, tags: &ReleaseTags) {
    let substitutions = substitutions_for(book, tags);
    if substitutions.is_empty() {
        return;
    }

    hub_tree::visit_mut(tree, &mut |node| {
        if !matches!(
            node.kind,
            NodeKind::Text | NodeKind::InlineCode | NodeKind::CodeBlock
        ) {
            return;
        }
        if let Some(value) = &mut node.value {
            for (placeholder, replacement) in &substitutions {
                if value.contains(placeholder) {
                    *value = value.replace(placeholder, replacement);
                }
            }
        }
    });
}

/// Placeholder table for one book. The Rust SDK writes the bare version,
/// the TS SDK writes `v`-prefixed tags.
fn substitutions_for(book: Book, tags: &ReleaseTags) -> Vec<(&'static str, String)> {
    let mut subs = Vec::new();
    match book {
        Book::FuelsRs => {
            if let Some(tag) = tags.get(Book::FuelsRs) {
                let bare = tag.strip_prefix('v').unwrap_or(tag);
                subs.push(("{{versions.fuels}}", bare.to_owned()));
            }
        }
        Book::FuelsTs => {
            if let Some(tag) = tags.get(Book::Sway) {
                subs.push(("v{{forc}}", tag.to_owned()));
            }
            if let Some(tag) = tags.get(Book::FuelsTs) {
                subs.push(("v{{fuels}}", tag.to_owned()));
            }
        }
        _ => {}
    }
    subs
}
