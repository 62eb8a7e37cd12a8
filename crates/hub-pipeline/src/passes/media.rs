//! Wallet book media pass.
//!
//! The wallet book embeds screenshots and screen recordings as paths
//! relative to its own checkout; the site serves them through media API
//! routes instead. Image nodes and the `src` literals of `Player` /
//! `Demo` components are rewritten to `/api/image/...` or
//! `/api/video/...`, with the original path segments joined by `&&` so
//! the route handler can reconstruct the file path from one URL segment.

use std::sync::LazyLock;

use hub_tree::{Node, NodeKind};
use regex::{Captures, Regex};

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov"];

static COMPONENT_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src\s*=\s*"([^"]*)""#).unwrap());

pub(crate) fn run(tree: &mut Node) {
    hub_tree::visit_mut(tree, &mut |node| match node.kind {
        NodeKind::Image => {
            if let Some(url) = &node.url
                && let Some(rewritten) = media_api_path(url)
            {
                node.url = Some(rewritten);
            }
        }
        NodeKind::HtmlInline => {
            if let Some(value) = &node.value
                && (value.contains("<Player") || value.contains("<Demo"))
            {
                let rewritten = COMPONENT_SRC
                    .replace_all(value, |caps: &Captures<'_>| {
                        match media_api_path(&caps[1]) {
                            Some(path) => format!(r#"src="{path}""#),
                            None => caps[0].to_owned(),
                        }
                    })
                    .into_owned();
                node.value = Some(rewritten);
            }
        }
        _ => {}
    });
}

/// API path for a checkout-relative media asset, or `None` for URLs the
/// pass must not touch (already absolute, or external).
fn media_api_path(url: &str) -> Option<String> {
    if url.starts_with("http") || url.starts_with("/api/") {
        return None;
    }
    let segments: Vec<&str> = url
        .split('/')
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .collect();
    let file = segments.last()?;
    let extension = file.rsplit_once('.')?.1.to_ascii_lowercase();
    let route = if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        "video"
    } else {
        "image"
    };
    Some(format!("/api/{route}/{}", segments.join("&&")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_tree::parse_markdown;
    use pretty_assertions::assert_eq;

    fn image_url(tree: &Node) -> Option<String> {
        let mut found = None;
        hub_tree::visit(tree, &mut |node| {
            if node.kind == NodeKind::Image {
                found = node.url.clone();
            }
        });
        found
    }

    #[test]
    fn test_image_rewritten_to_api_path() {
        let mut tree = parse_markdown("![setup](../../assets/setup.png)");
        run(&mut tree);
        assert_eq!(
            image_url(&tree).as_deref(),
            Some("/api/image/assets&&setup.png")
        );
    }

    #[test]
    fn test_player_src_rewritten_to_video_route() {
        let mut tree = parse_markdown(r#"<Player src="./media/connect.mp4" />"#);
        run(&mut tree);
        let mut html = None;
        hub_tree::visit(&tree, &mut |node| {
            if node.kind == NodeKind::HtmlInline {
                html = node.value.clone();
            }
        });
        assert_eq!(
            html.as_deref().map(str::trim_end),
            Some(r#"<Player src="/api/video/media&&connect.mp4" />"#)
        );
    }

    #[test]
    fn test_external_urls_untouched() {
        let mut tree = parse_markdown("![logo](https://example.com/logo.png)");
        run(&mut tree);
        assert_eq!(
            image_url(&tree).as_deref(),
            Some("https://example.com/logo.png")
        );
    }
}
