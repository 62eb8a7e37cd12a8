//! Link normalization and retargeting for the docs hub.
//!
//! Every hyperlink in an aggregated document is rewritten through an
//! ordered rule chain so that heterogeneous upstream link conventions all
//! land on the hub's internal URL scheme:
//!
//! 1. externally hosted reference-doc URLs become internal `/docs/…` paths;
//! 2. relative links resolve against the document's location, with the
//!    book's doc root stripped so moving a checkout never changes targets;
//! 3. table-driven per-book path fix-ups;
//! 4. non-default version sets get their segment injected after `/docs/`;
//! 5. unpinned `…/master/…` source links are pinned to the resolved
//!    release tag;
//! 6. duplicated API categories are retargeted to their namespaced form.
//!
//! Rewriting is a pure function of `(url, LinkContext)`. It is **not**
//! idempotent: the chain is specified for a single application over a raw
//! upstream URL, and re-running it over its own output is undefined.

mod context;
mod external;
mod fixups;
mod html;
mod relative;
mod version;

use hub_tree::{Node, NodeKind};
use tracing::warn;

pub use context::LinkContext;
pub use html::rewrite_hrefs;

/// Rewrite a single URL. Returns `None` to mean "leave unchanged".
///
/// The literal URL `..` is never processed; it guards against malformed
/// parent-directory links with no target.
#[must_use]
pub fn rewrite(url: &str, ctx: &LinkContext<'_>) -> Option<String> {
    if url == ".." {
        return None;
    }

    let mut current: Option<String> = None;

    // Rule 1: externally hosted reference docs.
    if external::is_reference_docs_url(url) {
        if external::is_absolute_only(url) {
            return None;
        }
        current = external::rewrite_reference_docs(url);
    }

    // Rule 2: relative resolution against the document's location.
    if current.is_none() && !has_scheme(url) {
        match relative::resolve(url, ctx) {
            relative::Resolution::Internal(path) => current = Some(path),
            relative::Resolution::Skip => {}
            relative::Resolution::Unresolvable => {
                warn!(
                    document = ctx.origin_path,
                    url, "unresolvable relative link left unchanged"
                );
                return None;
            }
        }
    }

    // Rule 3: per-book fix-up tables.
    if let Some(path) = current.as_mut() {
        fixups::apply(path);
    }

    // Rule 4: version-set segment injection.
    if let Some(path) = current.as_mut() {
        version::inject_version(path, ctx.version_set);
    }

    // Rule 5: pin unpinned upstream source links to the release tag.
    if current.is_none() {
        current = version::pin_source_link(url, ctx).or_else(|| fixups::fix_absolute(url));
    }

    // Rule 6: duplicated API categories.
    if let Some(path) = current.as_mut() {
        fixups::retarget_duplicate_categories(path);
    }

    // Normalizing to the input means no change.
    match current {
        Some(rewritten) if rewritten != url => Some(rewritten),
        _ => None,
    }
}

/// Apply [`rewrite`] to a tree node.
///
/// Structured `link` and `definition` nodes are rewritten through their
/// `url` field; raw inline HTML is handed to the href adapter.
pub fn rewrite_node(node: &mut Node, ctx: &LinkContext<'_>) {
    match node.kind {
        NodeKind::Link | NodeKind::Definition => {
            if let Some(url) = &node.url
                && let Some(rewritten) = rewrite(url, ctx)
            {
                node.url = Some(rewritten);
            }
        }
        NodeKind::HtmlInline => {
            if let Some(value) = &node.value
                && value.contains("<a ")
            {
                node.value = Some(rewrite_hrefs(value, ctx));
            }
        }
        _ => {}
    }
}

/// Whether the URL carries a scheme (absolute, never resolved relatively).
fn has_scheme(url: &str) -> bool {
    url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("mailto:")
        || url.contains("://")
}
