//! Depth-first tree visitors.
//!
//! Passes either read the tree ([`visit`]) or rewrite nodes in place
//! ([`visit_mut`]). Structural edits that splice sibling ranges (code-group
//! folding) work directly on `children` vectors instead.

use crate::node::Node;

/// Visit every node depth-first, parents before children.
pub fn visit(node: &Node, f: &mut impl FnMut(&Node)) {
    f(node);
    for child in &node.children {
        visit(child, f);
    }
}

/// Visit every node mutably, depth-first, parents before children.
///
/// The callback may freely rewrite a node's fields; it must not rely on
/// sibling order changing under it.
pub fn visit_mut(node: &mut Node, f: &mut impl FnMut(&mut Node)) {
    f(node);
    for child in &mut node.children {
        visit_mut(child, f);
    }
}
