//! Document tree model and markdown parsing for the docs hub.
//!
//! Every transformation pass in the hub operates on [`Node`], a generic
//! tagged tree node. Documents arrive as markdown/MDX text and are parsed
//! once into a `Node` tree via [`parse_markdown`]; the passes rewrite the
//! tree in place and the renderer consumes the final shape.
//!
//! # Example
//!
//! ```
//! use hub_tree::{parse_markdown, NodeKind};
//!
//! let tree = parse_markdown("# Hello\n\nSome [link](./other.md).");
//! assert_eq!(tree.kind, NodeKind::Root);
//! assert_eq!(tree.children[0].kind, NodeKind::Heading);
//! ```

mod node;
mod parse;
mod visit;

pub use node::{Node, NodeKind};
pub use parse::parse_markdown;
pub use visit::{visit, visit_mut};
