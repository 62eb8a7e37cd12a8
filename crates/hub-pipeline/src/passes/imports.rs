//! Example-import pass.
//!
//! Replaces include directives with the code they name, before any link
//! or code pass sees the tree. Both directive dialects are handled: the
//! fenced form is a code block whose entire content is the directive, the
//! inline form is a paragraph whose text is the directive.

use std::path::Path;

use hub_includes::{import_block, FileCache, IncludeDirective};
use hub_tree::{Node, NodeKind};
use hub_versions::Book;

use crate::error::CompileError;

/// TS SDK directive paths that actually live under `apps/` in the
/// checkout; authors write them relative to the docs app instead.
const TS_APP_PREFIXES: &[&str] = &["docs-snippets", "demo-fuels", "demo-typegen"];

pub(crate) fn run(
    tree: &mut Node,
    book: Book,
    document: &str,
    source_root: &Path,
    doc_dir: &Path,
    cache: &mut FileCache,
) -> Result<(), CompileError> {
    for child in &mut tree.children {
        match directive_in(child) {
            Some(mut directive) => {
                fixup_path(book, &mut directive);
                let imported = import_block(&directive, source_root, doc_dir, cache)
                    .map_err(|err| CompileError::from_import(document, err))?;
                let lang = child
                    .lang
                    .clone()
                    .or_else(|| directive.language())
                    .unwrap_or_default();
                *child = Node::code_block(Some(&lang), imported);
            }
            None => run(child, book, document, source_root, doc_dir, cache)?,
        }
    }
    Ok(())
}

/// The directive a node carries, if it is a directive node at all.
fn directive_in(node: &Node) -> Option<IncludeDirective> {
    match node.kind {
        NodeKind::CodeBlock => {
            IncludeDirective::parse_fenced(node.value.as_deref()?.trim())
        }
        NodeKind::Paragraph | NodeKind::Text => {
            IncludeDirective::parse_inline(node.text_content().trim())
        }
        _ => None,
    }
}

fn fixup_path(book: Book, directive: &mut IncludeDirective) {
    if book != Book::FuelsTs {
        return;
    }
    let first = directive.path.split('/').next().unwrap_or("");
    if TS_APP_PREFIXES.contains(&first) {
        directive.path = format!("apps/{}", directive.path);
    }
}
