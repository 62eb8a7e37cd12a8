//! Version sets, book identities, and upstream release resolution.
//!
//! The docs hub compiles the same documentation under three parallel
//! editions ([`VersionSet`]): the current release, the nightly build, and
//! one pinned legacy release. The version set decides two independent
//! things — which on-disk checkout feeds code imports, and which version
//! segment internal links carry.
//!
//! [`Book`] identifies which upstream repository a document came from;
//! [`VersionResolver`] reads each upstream's project manifest once per
//! build and produces the [`ReleaseTags`] used to pin `…/master/…` source
//! links to concrete release tags.

mod book;
mod resolver;
mod version_set;

pub use book::{Book, ALL_BOOKS};
pub use resolver::{is_master_exempt, ReleaseTags, VersionError, VersionResolver};
pub use version_set::VersionSet;
