//! Rules 3 and 6: table-driven path fix-ups.
//!
//! The per-book exceptions between an upstream's internal link scheme and
//! the hub's URL scheme are not a closed algorithm; they are kept as
//! explicit ordered tables so each entry is independently testable and the
//! tables themselves document the known exceptions.

/// Section renames: upstream repository names folded into the shorter
/// published slugs.
const SECTION_RENAMES: &[(&str, &str)] = &[
    ("/fuel-graphql-docs/", "/graphql/"),
    ("/fuel-specs/", "/specs/"),
    ("/fuel-indexer/", "/indexer/"),
    ("/fuels-wallet/", "/wallet/"),
];

/// Sub-directory flattenings: the forc docs are published as their own
/// top-level section, the `forc_client` plugin sub-directory is folded
/// into its parent, and the structural checkout directories (`guide/`,
/// `packages/`, `apps/`) never appear in published URLs.
const FLATTEN: &[(&str, &str)] = &[
    ("/sway/forc/", "/forc/"),
    ("/forc_client/", "/"),
    ("/guide/", "/"),
    ("/packages/", "/"),
    ("/apps/", "/"),
];

/// Duplicated API categories in the TS SDK generated reference: the legacy
/// flat namespace and the namespaced one both exist; links are retargeted
/// to the namespaced form.
const DUPLICATE_API_CATEGORIES: &[(&str, &str)] = &[
    ("/fuels-ts/api/Interfaces", "/fuels-ts/api/fuels/Interfaces"),
    ("/fuels-ts/api/Enums", "/fuels-ts/api/fuels/Enums"),
    ("/fuels-ts/api/Classes", "/fuels-ts/api/fuels/Classes"),
];

/// Apply the rule-3 tables to an internal path, in table order.
pub(crate) fn apply(path: &mut String) {
    for (pattern, replacement) in SECTION_RENAMES.iter().chain(FLATTEN) {
        if path.contains(pattern) {
            *path = path.replace(pattern, replacement);
        }
    }
    collapse_same_name_page(path);
}

/// Rule 6: retarget legacy duplicate API category paths.
pub(crate) fn retarget_duplicate_categories(path: &mut String) {
    for (legacy, namespaced) in DUPLICATE_API_CATEGORIES {
        if path.contains(legacy) && !path.contains(namespaced) {
            *path = path.replace(legacy, namespaced);
            return;
        }
    }
}

/// Fix-ups for absolute URLs that rules 1 and 5 leave alone.
///
/// The upstream contribution guides link `…/CONTRIBUTING` without the
/// extension, which 404s on the code host.
pub(crate) fn fix_absolute(url: &str) -> Option<String> {
    if url.contains("github.com") && url.ends_with("CONTRIBUTING") {
        return Some(format!("{url}.md"));
    }
    None
}

/// mdBook folders that use a same-name file instead of `index.md` collapse
/// to the category page: `a/b/b` becomes `a/b/`.
fn collapse_same_name_page(path: &mut String) {
    let trimmed = path.trim_end_matches('/');
    let mut segments = trimmed.rsplit('/');
    let (Some(last), Some(parent)) = (segments.next(), segments.next()) else {
        return;
    };
    if !last.is_empty() && last == parent {
        let new_len = trimmed.len() - last.len();
        path.truncate(new_len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn applied(path: &str) -> String {
        let mut path = path.to_owned();
        apply(&mut path);
        path
    }

    #[test]
    fn test_forc_docs_moved_to_own_section() {
        assert_eq!(applied("/docs/sway/forc/plugins"), "/docs/forc/plugins");
    }

    #[test]
    fn test_forc_client_subdirectory_flattened() {
        assert_eq!(
            applied("/docs/forc/forc_client/forc-deploy"),
            "/docs/forc/forc-deploy"
        );
    }

    #[test]
    fn test_structural_segments_shortened() {
        assert_eq!(
            applied("/docs/fuels-ts/guide/wallets/access"),
            "/docs/fuels-ts/wallets/access"
        );
        assert_eq!(applied("/docs/wallet/packages/sdk"), "/docs/wallet/sdk");
        assert_eq!(applied("/docs/fuels-ts/apps/demo"), "/docs/fuels-ts/demo");
    }

    #[test]
    fn test_section_renames() {
        assert_eq!(applied("/docs/fuel-specs/protocol/tx"), "/docs/specs/protocol/tx");
        assert_eq!(applied("/docs/fuel-graphql-docs/overview"), "/docs/graphql/overview");
        assert_eq!(applied("/docs/fuel-indexer/getting-started"), "/docs/indexer/getting-started");
    }

    #[test]
    fn test_same_name_page_collapsed() {
        assert_eq!(applied("/docs/fuelup/installation/installation"), "/docs/fuelup/installation/");
    }

    #[test]
    fn test_unrelated_path_untouched() {
        assert_eq!(applied("/docs/sway/basics/variables"), "/docs/sway/basics/variables");
    }

    #[test]
    fn test_duplicate_category_retargeted() {
        let mut path = "/docs/fuels-ts/api/Interfaces/BaseProvider".to_owned();
        retarget_duplicate_categories(&mut path);
        assert_eq!(path, "/docs/fuels-ts/api/fuels/Interfaces/BaseProvider");
    }

    #[test]
    fn test_namespaced_category_not_doubled() {
        let mut path = "/docs/fuels-ts/api/fuels/Enums/TransactionType".to_owned();
        retarget_duplicate_categories(&mut path);
        assert_eq!(path, "/docs/fuels-ts/api/fuels/Enums/TransactionType");
    }

    #[test]
    fn test_contributing_link_gets_extension() {
        assert_eq!(
            fix_absolute("https://github.com/FuelLabs/sway/blob/master/CONTRIBUTING").as_deref(),
            Some("https://github.com/FuelLabs/sway/blob/master/CONTRIBUTING.md")
        );
        assert_eq!(fix_absolute("https://example.com/CONTRIBUTING"), None);
    }
}
