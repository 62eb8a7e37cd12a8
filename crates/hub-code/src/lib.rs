//! Code block post-processing.
//!
//! Three independent concerns over the post-import tree:
//!
//! - **Grouping** ([`fold_code_groups`]): runs of fenced blocks delimited
//!   by `::: code-group` / `:::` marker lines fold into one tab-group
//!   node, one tab per block. An unterminated group is left as plain
//!   sequential blocks and logged, never an error.
//! - **Language normalization** ([`normalize_language`]): declared fence
//!   languages pass through a fixed alias table so every block names a
//!   grammar the highlighter actually has.
//! - **Highlighting and line metadata** ([`highlight_block`]): spans for
//!   exactly one [`Theme`] are baked into the block, numbered lines get a
//!   1-based index, and the plain text is captured verbatim for the
//!   copy-to-clipboard affordance.

mod group;
mod highlight;
mod language;

pub use group::fold_code_groups;
pub use highlight::{capture_raw, highlight_block, number_lines, Theme};
pub use language::{normalize_language, NormalizedLanguage};
