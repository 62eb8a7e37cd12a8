//! Rule 1: externally hosted reference-doc URLs.
//!
//! The upstream books link into the project's public reference-doc host
//! (per-repository generated API docs). Those pages are all mirrored under
//! the hub's own `/docs/…` tree, so the absolute URLs are folded back into
//! internal paths. A small denylist of pages exists only on the public
//! host and must stay absolute.

use std::sync::LazyLock;

use regex::Regex;

/// Public host of the externally generated reference docs.
const REFERENCE_DOCS_HOST: &str = "fuellabs.github.io";

/// Paths that exist only on the public host.
const ABSOLUTE_ONLY: &[&str] = &["/sway/master/std/", "/fuel-indexer/master/fuel_indexer/"];

/// A version-pinned path segment such as `/v0.19.2/`.
static SEMVER_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/v\d+\.\d+\.\d+(/|$)").unwrap());

/// Whether the URL points at the public reference-doc host.
#[must_use]
pub(crate) fn is_reference_docs_url(url: &str) -> bool {
    url.contains(REFERENCE_DOCS_HOST)
}

/// Whether the URL is on the stay-absolute denylist.
#[must_use]
pub(crate) fn is_absolute_only(url: &str) -> bool {
    host_path(url).is_some_and(|path| ABSOLUTE_ONLY.iter().any(|deny| path.starts_with(deny)))
}

/// Fold a reference-doc URL into an internal `/docs/…` path.
///
/// Strips the host, collapses `/master/` and pinned `/vX.Y.Z/` segments to
/// the unversioned form, drops `.html`, drops a `/nightly` segment, folds
/// the mdBook `/book/` convention, and collapses `/index` to `/`.
#[must_use]
pub(crate) fn rewrite_reference_docs(url: &str) -> Option<String> {
    let path = host_path(url)?;

    let mut path = path.replace("/master/", "/");
    path = SEMVER_SEGMENT.replace_all(&path, "$1").into_owned();
    if path.is_empty() {
        path.push('/');
    }
    path = path.replace(".html", "");
    path = path.replace("/nightly/", "/");
    if let Some(stripped) = path.strip_suffix("/nightly") {
        path = stripped.to_owned();
    }
    path = path.replace("/book/", "/");
    if let Some(stripped) = path.strip_suffix("/index") {
        path = format!("{stripped}/");
    }

    Some(format!("/docs{path}"))
}

/// Path portion after the reference-doc host.
fn host_path(url: &str) -> Option<&str> {
    let idx = url.find(REFERENCE_DOCS_HOST)?;
    let path = &url[idx + REFERENCE_DOCS_HOST.len()..];
    Some(if path.is_empty() { "/" } else { path })
}
