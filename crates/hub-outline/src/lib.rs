//! Heading id assignment and outline extraction.
//!
//! A single walk over the final tree gives every heading a slug id
//! (collision-adjusted, with one reserved-token remap) and collects the
//! rank-2 / rank-3 headings into a two-level [`Outline`] for the in-page
//! table of contents. Headings at other ranks still get ids so in-page
//! anchors keep working, they just never appear in the outline.

use std::collections::HashMap;

use hub_tree::{Node, NodeKind};
use serde::{Deserialize, Serialize};

/// Slug that collides with a reserved runtime token, and its replacement.
/// Observed for a heading literally titled "on".
const RESERVED_ID: (&str, &str) = ("on", "fuel-on");

/// One outline entry: a rank-2 heading and its rank-3 children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub title: String,
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<OutlineEntry>,
}

/// Two-level heading outline, in document order.
pub type Outline = Vec<OutlineEntry>;

/// Assign ids to every heading and build the document outline.
///
/// Rank-2 headings become top-level entries; rank-3 headings attach to
/// the most recently seen rank-2 entry (or are dropped from the outline
/// when no rank-2 heading precedes them).
pub fn assign_ids_and_outline(root: &mut Node) -> Outline {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut outline = Outline::new();

    hub_tree::visit_mut(root, &mut |node| {
        if node.kind != NodeKind::Heading {
            return;
        }
        let title = node.text_content();
        let id = assign_id(&title, &mut seen);
        node.props.insert("id".to_owned(), id.clone());

        match node.depth {
            Some(2) => outline.push(OutlineEntry {
                title,
                id,
                children: Vec::new(),
            }),
            Some(3) => {
                if let Some(section) = outline.last_mut() {
                    section.children.push(OutlineEntry {
                        title,
                        id,
                        children: Vec::new(),
                    });
                }
            }
            _ => {}
        }
    });

    outline
}

fn assign_id(title: &str, seen: &mut HashMap<String, usize>) -> String {
    let mut id = slugify(title);
    if id == RESERVED_ID.0 {
        id = RESERVED_ID.1.to_owned();
    }
    let count = seen.entry(id.clone()).or_insert(0);
    *count += 1;
    if *count > 1 {
        format!("{id}-{}", *count - 1)
    } else {
        id
    }
}

/// Lowercased, alphanumerics kept, runs of everything else collapsed to
/// single hyphens.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
