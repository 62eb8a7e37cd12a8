//! Code-group folding.
//!
//! Upstream documents wrap a run of fenced code blocks in
//! `::: code-group` / `:::` marker lines to request a tabbed widget, one
//! tab per block. Folding is structural: the whole delimited range is
//! replaced with a single [`NodeKind::TabGroup`] node carrying the blocks
//! as children.

use hub_tree::{Node, NodeKind};
use tracing::warn;

const OPEN_MARKER: &str = "::: code-group";
const CLOSE_MARKER: &str = ":::";

/// Fold every `::: code-group` … `:::` delimited run in the tree.
///
/// A group whose close marker never appears is left exactly as authored,
/// marker included, and logged at warn level.
pub fn fold_code_groups(node: &mut Node) {
    for child in &mut node.children {
        fold_code_groups(child);
    }

    let mut folded = Vec::with_capacity(node.children.len());
    let mut index = 0;
    let children = std::mem::take(&mut node.children);

    while index < children.len() {
        let child = &children[index];
        if !is_marker(child, OPEN_MARKER) {
            folded.push(children[index].clone());
            index += 1;
            continue;
        }

        let Some(close) = children[index + 1..]
            .iter()
            .position(|sibling| is_marker(sibling, CLOSE_MARKER))
            .map(|offset| index + 1 + offset)
        else {
            warn!("unterminated code group; leaving blocks ungrouped");
            folded.push(children[index].clone());
            index += 1;
            continue;
        };

        let mut group = Node::new(NodeKind::TabGroup);
        for block in &children[index + 1..close] {
            if block.kind == NodeKind::CodeBlock {
                let mut tab = block.clone();
                if let Some(lang) = &tab.lang {
                    tab.props.insert("tab".to_owned(), lang.clone());
                }
                group.children.push(tab);
            }
        }
        folded.push(group);
        index = close + 1;
    }

    node.children = folded;
}

/// A paragraph (or bare text node) whose entire content is the marker.
fn is_marker(node: &Node, marker: &str) -> bool {
    matches!(node.kind, NodeKind::Paragraph | NodeKind::Text)
        && node.text_content().trim() == marker
}
