//! Per-repository compilation orchestrator.
//!
//! A [`Document`] is one markdown source file plus the context that
//! determines how it compiles: its origin path (relative-link resolution
//! and book inference) and its version set (link prefixes and code-source
//! roots). The [`Compiler`] selects a pass chain by book, threads the
//! shared read-only context into every pass, and produces a
//! [`CompiledPage`]: the transformed tree, highlighted for exactly one
//! theme, plus the heading outline.
//!
//! Pass order is fixed: example imports run before link rewriting (an
//! imported block must never be link-rewritten), code post-processing
//! runs over the post-import tree, and outline extraction walks the final
//! tree last. Repository-specific passes (version placeholders, wallet
//! media paths, GraphQL raw anchors) are gated on the book and appended
//! to the chain, never special-cased inside the generic passes.

mod compiler;
mod document;
mod error;
mod passes;

pub use compiler::{CompiledPage, Compiler};
pub use document::Document;
pub use error::CompileError;
