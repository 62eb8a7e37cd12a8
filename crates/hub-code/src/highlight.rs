//! Compile-time highlight annotation.
//!
//! Highlighting is baked into the tree at compile time, one theme per
//! compiled output, so the renderer never runs a tokenizer. Each code
//! block gets three attachments:
//!
//! - `raw` — the verbatim plain text, for the copy-to-clipboard affordance;
//! - `theme` — which palette the spans were coloured for;
//! - `spans` — JSON line records, each with its colour spans and (when the
//!   fence asked for numbering) a 1-based line number.

use std::sync::LazyLock;

use hub_tree::{Node, NodeKind};
use regex::Regex;
use serde::Serialize;

use crate::language::normalize_language;

/// Visual theme a compiled output is highlighted for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn color(self, token: TokenKind) -> &'static str {
        match (self, token) {
            (Self::Light, TokenKind::Keyword) => "#8250df",
            (Self::Light, TokenKind::String) => "#0a3069",
            (Self::Light, TokenKind::Comment) => "#6e7781",
            (Self::Light, TokenKind::Number) => "#0550ae",
            (Self::Dark, TokenKind::Keyword) => "#d2a8ff",
            (Self::Dark, TokenKind::String) => "#a5d6ff",
            (Self::Dark, TokenKind::Comment) => "#8b949e",
            (Self::Dark, TokenKind::Number) => "#79c0ff",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenKind {
    Keyword,
    String,
    Comment,
    Number,
}

/// One coloured byte range within a line.
#[derive(Debug, Serialize)]
struct Span {
    start: usize,
    end: usize,
    color: &'static str,
}

/// One line of a highlighted block.
#[derive(Debug, Serialize)]
struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<usize>,
    spans: Vec<Span>,
}

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    // Order matters: comments swallow the rest of the line, strings beat
    // the word rule, words beat bare numbers.
    Regex::new(r#"//.*|#.*|"[^"]*"|'[^']*'|[A-Za-z_][A-Za-z0-9_]*|\b\d+(\.\d+)?\b"#).unwrap()
});

const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "else", "enum", "fn", "for", "if", "impl", "let",
    "loop", "match", "mod", "mut", "pub", "return", "self", "static", "struct", "trait",
    "true", "false", "use", "while",
];

const TYPESCRIPT_KEYWORDS: &[&str] = &[
    "async", "await", "class", "const", "else", "export", "extends", "for", "from",
    "function", "if", "import", "interface", "let", "new", "return", "type", "var",
    "while", "true", "false",
];

const SH_KEYWORDS: &[&str] = &[
    "if", "then", "else", "fi", "for", "do", "done", "while", "case", "esac", "export",
];

fn keywords(grammar: &str) -> &'static [&'static str] {
    match grammar {
        "rust" => RUST_KEYWORDS,
        "typescript" | "javascript" => TYPESCRIPT_KEYWORDS,
        "sh" => SH_KEYWORDS,
        _ => &[],
    }
}

fn line_comment_prefix(grammar: &str) -> &'static str {
    match grammar {
        "sh" | "toml" | "yaml" | "graphql" => "#",
        _ => "//",
    }
}

/// Annotate a code block for one theme.
///
/// Normalizes the fence language, captures the raw text, tokenizes every
/// line into colour spans, and numbers lines when the fence asked for it.
/// Non-code nodes are ignored.
pub fn highlight_block(block: &mut Node, theme: Theme) {
    if block.kind != NodeKind::CodeBlock {
        return;
    }

    let normalized = normalize_language(block.lang.as_deref());
    block.lang = Some(normalized.grammar.clone());

    capture_raw(block);
    if normalized.numbered {
        number_lines(block);
    }

    let text = block.value.clone().unwrap_or_default();
    let keyword_set = keywords(&normalized.grammar);
    let comment_prefix = line_comment_prefix(&normalized.grammar);

    let lines: Vec<Line> = text
        .lines()
        .enumerate()
        .map(|(index, line)| Line {
            number: normalized.numbered.then_some(index + 1),
            spans: tokenize_line(line, keyword_set, comment_prefix, theme),
        })
        .collect();

    block
        .props
        .insert("theme".to_owned(), theme.name().to_owned());
    if let Ok(json) = serde_json::to_string(&lines) {
        block.props.insert("spans".to_owned(), json);
    }
}

/// Flag a block as line-numbered; the per-line 1-based indices live in
/// the span records.
pub fn number_lines(block: &mut Node) {
    block.props.insert("numbered".to_owned(), "true".to_owned());
}

/// Capture the block's plain text verbatim under `props["raw"]`.
///
/// Independent of the highlighted markup, so the clipboard copy is exact
/// even when spans change with the theme.
pub fn capture_raw(block: &mut Node) {
    if let Some(value) = &block.value {
        block.props.insert("raw".to_owned(), value.clone());
    }
}

fn tokenize_line(
    line: &str,
    keyword_set: &[&str],
    comment_prefix: &str,
    theme: Theme,
) -> Vec<Span> {
    TOKEN
        .find_iter(line)
        .filter_map(|m| {
            let token = m.as_str();
            let kind = if token.starts_with(comment_prefix) {
                TokenKind::Comment
            } else if token.starts_with('"') || token.starts_with('\'') {
                TokenKind::String
            } else if token.starts_with(|c: char| c.is_ascii_digit()) {
                TokenKind::Number
            } else if keyword_set.contains(&token) {
                TokenKind::Keyword
            } else {
                return None;
            };
            Some(Span {
                start: m.start(),
                end: m.end(),
                color: theme.color(kind),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_raw_text_captured_verbatim() {
        let mut block = Node::code_block(Some("rust"), "let x = \"hi\"; // note");
        highlight_block(&mut block, Theme::Light);
        assert_eq!(
            block.props.get("raw").map(String::as_str),
            Some("let x = \"hi\"; // note")
        );
    }

    #[test]
    fn test_language_normalized_before_highlighting() {
        let mut block = Node::code_block(Some("sway"), "fn main() {}");
        highlight_block(&mut block, Theme::Dark);
        assert_eq!(block.lang.as_deref(), Some("rust"));
        assert_eq!(block.props.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn test_spans_cover_keywords_strings_comments() {
        let mut block = Node::code_block(Some("rust"), "let s = \"x\"; // c");
        highlight_block(&mut block, Theme::Light);
        let spans = block.props.get("spans").unwrap();
        assert!(spans.contains("#8250df")); // keyword
        assert!(spans.contains("#0a3069")); // string
        assert!(spans.contains("#6e7781")); // comment
    }

    #[test]
    fn test_line_numbers_start_at_one_per_block() {
        let mut block = Node::code_block(Some("ts:line-numbers"), "const a = 1;\nconst b = 2;");
        highlight_block(&mut block, Theme::Light);
        let spans: serde_json::Value =
            serde_json::from_str(block.props.get("spans").unwrap()).unwrap();
        assert_eq!(spans[0]["number"], 1);
        assert_eq!(spans[1]["number"], 2);
        assert_eq!(block.props.get("numbered").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_unnumbered_block_has_no_line_numbers() {
        let mut block = Node::code_block(Some("rust"), "let a = 1;");
        highlight_block(&mut block, Theme::Light);
        let spans: serde_json::Value =
            serde_json::from_str(block.props.get("spans").unwrap()).unwrap();
        assert!(spans[0].get("number").is_none());
    }

    #[test]
    fn test_same_block_differs_only_by_palette_across_themes() {
        let mut light = Node::code_block(Some("rust"), "let a = 1;");
        let mut dark = light.clone();
        highlight_block(&mut light, Theme::Light);
        highlight_block(&mut dark, Theme::Dark);
        assert_eq!(light.props.get("raw"), dark.props.get("raw"));
        assert_ne!(light.props.get("spans"), dark.props.get("spans"));
    }

    #[test]
    fn test_non_code_nodes_ignored() {
        let mut para = Node::new(NodeKind::Paragraph);
        highlight_block(&mut para, Theme::Light);
        assert!(para.props.is_empty());
    }
}
