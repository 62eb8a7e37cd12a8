//! Release-tag resolution from upstream project manifests.
//!
//! Unpinned `…/master/…` source links are retargeted to the release tag the
//! active version set actually ships. The tag comes from each upstream's own
//! manifest inside the checkout for that version set: a `Cargo.toml` for the
//! Rust repositories, a `package.json` for the TypeScript ones. Manifests
//! are read once per build.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::book::Book;
use crate::version_set::VersionSet;

/// Error reading or interpreting an upstream project manifest.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    #[error("manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("failed to parse manifest {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    #[error("manifest {path} has no version field")]
    MissingVersion { path: PathBuf },
}

/// Resolved release tags per book, for one version set.
///
/// Passed read-only into link rewriting so that the rewrite stays a pure
/// function of its inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReleaseTags {
    tags: BTreeMap<Book, String>,
}

impl ReleaseTags {
    /// Tag for a book, if one was resolved.
    #[must_use]
    pub fn get(&self, book: Book) -> Option<&str> {
        self.tags.get(&book).map(String::as_str)
    }

    /// Insert a tag. Mostly useful for tests.
    pub fn insert(&mut self, book: Book, tag: impl Into<String>) {
        self.tags.insert(book, tag.into());
    }
}

/// Books whose `master` links are left untouched.
///
/// fuelup's tags predate the `v{semver}` scheme, so substituting a manifest
/// version would produce dead links. Tracked as a compatibility exception.
pub(crate) const MASTER_EXEMPT: [Book; 1] = [Book::Fuelup];

/// Reads upstream manifests and resolves release tags.
///
/// Rooted at the workspace directory that contains the `docs/`,
/// `docs/nightly/`, and `docs/beta-4/` checkouts.
pub struct VersionResolver {
    root: PathBuf,
}

#[derive(Deserialize)]
struct CargoManifest {
    package: Option<PackageTable>,
    workspace: Option<WorkspaceTable>,
}

#[derive(Deserialize)]
struct WorkspaceTable {
    package: Option<PackageTable>,
}

#[derive(Deserialize)]
struct PackageTable {
    version: Option<String>,
}

#[derive(Deserialize)]
struct PackageJson {
    version: Option<String>,
}

impl VersionResolver {
    /// Create a resolver rooted at the workspace directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve tags for every book that has a manifest, for one version set.
    ///
    /// Books without a manifest (the pure-markdown books) simply get no
    /// entry; their `master` links are never substituted.
    pub fn resolve_all(&self, version_set: VersionSet) -> Result<ReleaseTags, VersionError> {
        let mut tags = ReleaseTags::default();
        for book in [Book::Sway, Book::FuelsRs, Book::FuelsTs, Book::FuelsWallet] {
            let tag = self.resolve(book, version_set)?;
            debug!(book = book.repo_dir(), %tag, "resolved release tag");
            tags.insert(book, tag);
        }
        // Fixed override: fuelup's manifest predates the tagging scheme.
        tags.insert(Book::Fuelup, "latest");
        Ok(tags)
    }

    /// Resolve the release tag for a single book.
    pub fn resolve(&self, book: Book, version_set: VersionSet) -> Result<String, VersionError> {
        let docs_dir = self.root.join(version_set.docs_root());
        let version = match book {
            Book::Sway => self.cargo_version(&docs_dir.join("sway/forc-pkg/Cargo.toml"))?,
            Book::FuelsRs => self.cargo_version(&docs_dir.join("fuels-rs/Cargo.toml"))?,
            Book::FuelsTs => {
                self.package_json_version(&docs_dir.join("fuels-ts/packages/fuels/package.json"))?
            }
            Book::FuelsWallet => self
                .package_json_version(&docs_dir.join("fuels-wallet/packages/sdk/package.json"))?,
            Book::Fuelup => return Ok("latest".to_owned()),
            Book::GraphQL | Book::Specs | Book::Indexer => {
                return Err(VersionError::ManifestNotFound(docs_dir.join(book.repo_dir())));
            }
        };
        Ok(format!("v{version}"))
    }

    /// Version from a Cargo manifest, preferring `[workspace.package]`.
    fn cargo_version(&self, path: &Path) -> Result<String, VersionError> {
        let text = std::fs::read_to_string(path)
            .map_err(|_| VersionError::ManifestNotFound(path.to_path_buf()))?;
        let manifest: CargoManifest =
            toml::from_str(&text).map_err(|err| VersionError::ManifestParse {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
        manifest
            .workspace
            .and_then(|ws| ws.package)
            .and_then(|pkg| pkg.version)
            .or_else(|| manifest.package.and_then(|pkg| pkg.version))
            .ok_or_else(|| VersionError::MissingVersion {
                path: path.to_path_buf(),
            })
    }

    /// Version from a `package.json`.
    fn package_json_version(&self, path: &Path) -> Result<String, VersionError> {
        let text = std::fs::read_to_string(path)
            .map_err(|_| VersionError::ManifestNotFound(path.to_path_buf()))?;
        let manifest: PackageJson =
            serde_json::from_str(&text).map_err(|err| VersionError::ManifestParse {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
        manifest.version.ok_or_else(|| VersionError::MissingVersion {
            path: path.to_path_buf(),
        })
    }
}

/// Whether a book's `master` source links are exempt from tag substitution.
#[must_use]
pub fn is_master_exempt(book: Book) -> bool {
    MASTER_EXEMPT.contains(&book)
}
