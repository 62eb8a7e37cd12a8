//! Pass-chain selection and execution.

use std::path::PathBuf;

use hub_code::Theme;
use hub_includes::FileCache;
use hub_links::LinkContext;
use hub_outline::Outline;
use hub_tree::Node;
use hub_versions::{Book, ReleaseTags, VersionSet};
use serde::Serialize;

use crate::document::Document;
use crate::error::CompileError;
use crate::passes;

/// Output of one document compilation: the transformed tree highlighted
/// for one theme, plus the heading outline. Both are handed to the
/// renderer as-is.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledPage {
    pub book: Book,
    pub version_set: VersionSet,
    pub theme: Theme,
    pub outline: Outline,
    pub tree: Node,
}

/// Compiles documents against one docs checkout.
///
/// Owns the build-scoped [`FileCache`], so repeated imports across
/// documents share reads; release tags are resolved once by the caller
/// and threaded read-only into link rewriting.
pub struct Compiler {
    root: PathBuf,
    tags: ReleaseTags,
    cache: FileCache,
}

impl Compiler {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, tags: ReleaseTags) -> Self {
        Self {
            root: root.into(),
            tags,
            cache: FileCache::new(),
        }
    }

    /// Compile one document for one theme.
    ///
    /// The same document compiles once per theme because highlight spans
    /// are baked in; everything else about the output is theme-independent.
    ///
    /// # Errors
    ///
    /// [`CompileError::ConfigNotFound`] when the origin path matches no
    /// book; [`CompileError::SourceNotFound`] / [`CompileError::AnchorNotFound`]
    /// for import defects.
    pub fn compile(
        &mut self,
        document: &Document,
        theme: Theme,
    ) -> Result<CompiledPage, CompileError> {
        let book = Book::from_origin_path(&document.origin_path).ok_or_else(|| {
            CompileError::ConfigNotFound {
                origin_path: document.origin_path.clone(),
            }
        })?;

        tracing::debug!(
            book = book.repo_dir(),
            origin = document.origin_path,
            "compiling document"
        );
        let mut tree = hub_tree::parse_markdown(&document.raw_content);

        let checkout = self.root.join(document.version_set.docs_root());
        let source_root = checkout.join(book.repo_dir());
        let doc_dir = checkout
            .join(&document.origin_path)
            .parent()
            .map(std::path::Path::to_path_buf)
            .unwrap_or(checkout);
        passes::imports::run(
            &mut tree,
            book,
            &document.origin_path,
            &source_root,
            &doc_dir,
            &mut self.cache,
        )?;

        passes::placeholders::run(&mut tree, book, &self.tags);
        if book == Book::FuelsWallet {
            passes::media::run(&mut tree);
        }
        if book == Book::GraphQL {
            passes::graphql::run(&mut tree, document.version_set);
        }

        let ctx = LinkContext {
            origin_path: &document.origin_path,
            version_set: document.version_set,
            book,
            tags: &self.tags,
        };
        hub_tree::visit_mut(&mut tree, &mut |node| {
            hub_links::rewrite_node(node, &ctx);
        });

        hub_code::fold_code_groups(&mut tree);
        hub_tree::visit_mut(&mut tree, &mut |node| {
            hub_code::highlight_block(node, theme);
        });

        let outline = hub_outline::assign_ids_and_outline(&mut tree);

        Ok(CompiledPage {
            book,
            version_set: document.version_set,
            theme,
            outline,
            tree,
        })
    }
}
