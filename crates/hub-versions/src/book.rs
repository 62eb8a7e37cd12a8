//! Upstream book identities.

use serde::{Deserialize, Serialize};

/// An upstream repository whose documentation is aggregated into the hub.
///
/// Each book carries its checkout directory name, the sub-path of its doc
/// sources within that checkout (the "doc root"), and the short section
/// slug it is published under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Book {
    /// The Sway language book.
    Sway,
    /// The fuelup toolchain manager book.
    Fuelup,
    /// The Rust SDK book.
    FuelsRs,
    /// The TypeScript SDK book.
    FuelsTs,
    /// The wallet book.
    FuelsWallet,
    /// The GraphQL API docs.
    GraphQL,
    /// The protocol specifications.
    Specs,
    /// The indexer book.
    Indexer,
}

/// All books, in sidebar order.
pub const ALL_BOOKS: [Book; 8] = [
    Book::Sway,
    Book::Fuelup,
    Book::FuelsRs,
    Book::FuelsTs,
    Book::FuelsWallet,
    Book::GraphQL,
    Book::Specs,
    Book::Indexer,
];

impl Book {
    /// Checkout directory name of the upstream repository.
    #[must_use]
    pub fn repo_dir(self) -> &'static str {
        match self {
            Self::Sway => "sway",
            Self::Fuelup => "fuelup",
            Self::FuelsRs => "fuels-rs",
            Self::FuelsTs => "fuels-ts",
            Self::FuelsWallet => "fuels-wallet",
            Self::GraphQL => "fuel-graphql-docs",
            Self::Specs => "fuel-specs",
            Self::Indexer => "fuel-indexer",
        }
    }

    /// Sub-path of the markdown sources within the checkout.
    #[must_use]
    pub fn doc_root(self) -> &'static str {
        match self {
            Self::Sway => "docs/book/src",
            Self::FuelsTs => "apps/docs/src",
            Self::Specs => "src",
            Self::Fuelup | Self::FuelsRs | Self::FuelsWallet | Self::GraphQL | Self::Indexer => {
                "docs/src"
            }
        }
    }

    /// Short section slug the book is published under.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Sway => "sway",
            Self::Fuelup => "fuelup",
            Self::FuelsRs => "fuels-rs",
            Self::FuelsTs => "fuels-ts",
            Self::FuelsWallet => "wallet",
            Self::GraphQL => "graphql",
            Self::Specs => "specs",
            Self::Indexer => "indexer",
        }
    }

    /// Infer the book from a document's origin path.
    ///
    /// The origin path is relative to the checkout root, e.g.
    /// `sway/docs/book/src/advanced/structs.md`. Returns `None` when the
    /// leading directory matches no known book.
    #[must_use]
    pub fn from_origin_path(origin_path: &str) -> Option<Self> {
        let first = origin_path.split('/').next()?;
        ALL_BOOKS.into_iter().find(|book| book.repo_dir() == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_origin_path() {
        assert_eq!(
            Book::from_origin_path("sway/docs/book/src/advanced/structs.md"),
            Some(Book::Sway)
        );
        assert_eq!(
            Book::from_origin_path("fuels-ts/apps/docs/src/guide/index.md"),
            Some(Book::FuelsTs)
        );
        assert_eq!(Book::from_origin_path("unknown-repo/docs/page.md"), None);
    }

    #[test]
    fn test_books_sort_in_sidebar_order() {
        let mut books = vec![Book::Specs, Book::Sway, Book::FuelsTs];
        books.sort();
        assert_eq!(books, vec![Book::Sway, Book::FuelsTs, Book::Specs]);
    }

    #[test]
    fn test_doc_roots() {
        assert_eq!(Book::Sway.doc_root(), "docs/book/src");
        assert_eq!(Book::FuelsTs.doc_root(), "apps/docs/src");
        assert_eq!(Book::Specs.doc_root(), "src");
        assert_eq!(Book::Fuelup.doc_root(), "docs/src");
    }

    #[test]
    fn test_slugs_shorten_repo_names() {
        assert_eq!(Book::GraphQL.slug(), "graphql");
        assert_eq!(Book::Specs.slug(), "specs");
        assert_eq!(Book::FuelsWallet.slug(), "wallet");
    }
}
