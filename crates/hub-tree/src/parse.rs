//! Markdown to tree parsing.
//!
//! Built on pulldown-cmark events. The event stream is folded into a
//! [`Node`] tree with a simple open-tag stack; text inside fenced code
//! blocks accumulates into the block's `value` instead of becoming child
//! nodes, matching how the downstream passes expect code content.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::node::{Node, NodeKind};

/// Parse markdown text into a document tree rooted at a [`NodeKind::Root`] node.
#[must_use]
pub fn parse_markdown(input: &str) -> Node {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(input, options);
    let mut stack: Vec<Node> = vec![Node::new(NodeKind::Root)];

    for event in parser {
        match event {
            Event::Start(tag) => {
                if let Some(node) = open_tag(&tag) {
                    stack.push(node);
                }
            }
            Event::End(tag) => {
                if closes_node(&tag) && stack.len() > 1 {
                    let node = stack.pop().unwrap_or_else(|| Node::new(NodeKind::Root));
                    attach(&mut stack, node);
                }
            }
            Event::Text(text) => push_text(&mut stack, &text),
            Event::Code(text) => {
                let mut node = Node::new(NodeKind::InlineCode);
                node.value = Some(text.into_string());
                attach(&mut stack, node);
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                let mut node = Node::new(NodeKind::HtmlInline);
                node.value = Some(html.into_string());
                attach(&mut stack, node);
            }
            Event::SoftBreak | Event::HardBreak => push_text(&mut stack, "\n"),
            Event::Rule => attach(&mut stack, Node::new(NodeKind::ThematicBreak)),
            Event::TaskListMarker(_) | Event::FootnoteReference(_) => {}
            Event::DisplayMath(text) | Event::InlineMath(text) => {
                push_text(&mut stack, &text);
            }
        }
    }

    // Unterminated containers (possible with malformed input) collapse into
    // their parents rather than being dropped.
    while stack.len() > 1 {
        let node = stack.pop().unwrap_or_else(|| Node::new(NodeKind::Root));
        attach(&mut stack, node);
    }
    stack.pop().unwrap_or_else(|| Node::new(NodeKind::Root))
}

/// Map an opening tag to a tree node. Returns `None` for tags that do not
/// open a node of their own (html blocks, metadata).
fn open_tag(tag: &Tag<'_>) -> Option<Node> {
    let node = match tag {
        Tag::Paragraph => Node::new(NodeKind::Paragraph),
        Tag::Heading { level, .. } => {
            let mut node = Node::new(NodeKind::Heading);
            node.depth = Some(*level as u8);
            node
        }
        Tag::BlockQuote(_) => Node::new(NodeKind::BlockQuote),
        Tag::CodeBlock(kind) => {
            let lang = match kind {
                CodeBlockKind::Fenced(info) => {
                    let info = info.trim();
                    if info.is_empty() {
                        None
                    } else {
                        // Fence info up to the first space; attribute lists
                        // after the language token are not interpreted here.
                        Some(info.split_whitespace().next().unwrap_or(info))
                    }
                }
                CodeBlockKind::Indented => None,
            };
            Node::code_block(lang, String::new())
        }
        Tag::List(_) => Node::new(NodeKind::List),
        Tag::Item => Node::new(NodeKind::ListItem),
        Tag::Emphasis => Node::new(NodeKind::Emphasis),
        Tag::Strong => Node::new(NodeKind::Strong),
        Tag::Strikethrough => Node::new(NodeKind::Strikethrough),
        Tag::Table(_) => Node::new(NodeKind::Table),
        Tag::TableHead => Node::new(NodeKind::TableHead),
        Tag::TableRow => Node::new(NodeKind::TableRow),
        Tag::TableCell => Node::new(NodeKind::TableCell),
        Tag::Link { dest_url, .. } => {
            let mut node = Node::new(NodeKind::Link);
            node.url = Some(dest_url.to_string());
            node
        }
        Tag::Image { dest_url, .. } => {
            let mut node = Node::new(NodeKind::Image);
            node.url = Some(dest_url.to_string());
            node
        }
        _ => return None,
    };
    Some(node)
}

/// Whether an end tag pops a node opened by [`open_tag`].
fn closes_node(tag: &TagEnd) -> bool {
    !matches!(
        tag,
        TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) | TagEnd::FootnoteDefinition
    )
}

/// Attach a finished node to the current top of the stack.
fn attach(stack: &mut Vec<Node>, node: Node) {
    if let Some(top) = stack.last_mut() {
        top.children.push(node);
    }
}

/// Append text to the open code block, or push/merge a text child.
fn push_text(stack: &mut Vec<Node>, text: &str) {
    let Some(top) = stack.last_mut() else { return };

    if top.kind == NodeKind::CodeBlock {
        top.value.get_or_insert_with(String::new).push_str(text);
        return;
    }

    // Merge consecutive text nodes so passes see whole values.
    if let Some(last) = top.children.last_mut()
        && last.kind == NodeKind::Text
        && let Some(value) = &mut last.value
    {
        value.push_str(text);
        return;
    }
    top.children.push(Node::text(text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_heading_with_depth() {
        let tree = parse_markdown("## Variables");
        assert_eq!(tree.children.len(), 1);
        let heading = &tree.children[0];
        assert_eq!(heading.kind, NodeKind::Heading);
        assert_eq!(heading.depth, Some(2));
        assert_eq!(heading.text_content(), "Variables");
    }

    #[test]
    fn test_parse_link_url() {
        let tree = parse_markdown("See [variables](../basics/variables.md).");
        let paragraph = &tree.children[0];
        let link = paragraph
            .children
            .iter()
            .find(|n| n.kind == NodeKind::Link)
            .unwrap();
        assert_eq!(link.url.as_deref(), Some("../basics/variables.md"));
        assert_eq!(link.text_content(), "variables");
    }

    #[test]
    fn test_parse_fenced_code_block() {
        let tree = parse_markdown("```rust\nfn main() {}\n```");
        let code = &tree.children[0];
        assert_eq!(code.kind, NodeKind::CodeBlock);
        assert_eq!(code.lang.as_deref(), Some("rust"));
        assert_eq!(code.value.as_deref(), Some("fn main() {}\n"));
        assert!(code.children.is_empty());
    }

    #[test]
    fn test_parse_untyped_fence_has_no_lang() {
        let tree = parse_markdown("```\nforc build\n```");
        let code = &tree.children[0];
        assert_eq!(code.lang, None);
    }

    #[test]
    fn test_parse_fence_info_keeps_suffix() {
        let tree = parse_markdown("```ts:line-numbers\nconst x = 1;\n```");
        assert_eq!(tree.children[0].lang.as_deref(), Some("ts:line-numbers"));
    }

    #[test]
    fn test_parse_inline_html_preserved() {
        let tree = parse_markdown("Go <a href=\"/docs/intro\">here</a> now.");
        let paragraph = &tree.children[0];
        let html: Vec<_> = paragraph
            .children
            .iter()
            .filter(|n| n.kind == NodeKind::HtmlInline)
            .collect();
        assert!(!html.is_empty());
        assert!(html[0].value.as_deref().unwrap().contains("href"));
    }

    #[test]
    fn test_parse_merges_adjacent_text() {
        let tree = parse_markdown("line one\nline two");
        let paragraph = &tree.children[0];
        assert_eq!(paragraph.children.len(), 1);
        assert_eq!(paragraph.children[0].value.as_deref(), Some("line one\nline two"));
    }

    #[test]
    fn test_parse_image_url() {
        let tree = parse_markdown("![logo](/wallet/assets/logo.png)");
        let paragraph = &tree.children[0];
        let image = paragraph
            .children
            .iter()
            .find(|n| n.kind == NodeKind::Image)
            .unwrap();
        assert_eq!(image.url.as_deref(), Some("/wallet/assets/logo.png"));
    }
}
