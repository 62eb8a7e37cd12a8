//! Rules 4 and 5: version-set injection and source-link pinning.

use hub_versions::{Book, is_master_exempt};

use crate::context::LinkContext;

/// Code-hosting prefix of the upstream repositories.
const UPSTREAM_HOST: &str = "github.com/FuelLabs/";

/// Rule 4: inject the version segment into an internal docs path.
///
/// Applies only to non-default version sets, only to `/docs/…` paths, and
/// only when the path does not already carry a version segment.
pub(crate) fn inject_version(path: &mut String, version_set: hub_versions::VersionSet) {
    let Some(segment) = version_set.link_segment() else {
        return;
    };
    let Some(rest) = path.strip_prefix("/docs/") else {
        return;
    };
    if rest.starts_with("nightly/") || rest.starts_with("beta-4/") {
        return;
    }
    path.insert_str("/docs/".len(), &format!("{segment}/"));
}

/// Rule 5: pin an unpinned upstream source link to the release tag.
///
/// Links into the upstream repository's own hosting (not its rendered
/// docs) that reference `master` get the concrete tag the active version
/// set ships, unless the repository is exempt.
#[must_use]
pub(crate) fn pin_source_link(url: &str, ctx: &LinkContext<'_>) -> Option<String> {
    let idx = url.find(UPSTREAM_HOST)?;
    if !url.contains("/master/") {
        return None;
    }

    let rest = &url[idx + UPSTREAM_HOST.len()..];
    let repo = rest.split('/').next()?;
    let book = book_for_repo(repo)?;
    if is_master_exempt(book) {
        return None;
    }

    let tag = ctx.tags.get(book)?;
    Some(url.replace("/master/", &format!("/{tag}/")))
}

fn book_for_repo(repo: &str) -> Option<Book> {
    hub_versions::Book::from_origin_path(repo)
}
