//! Generic tagged tree node.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Kind tag for a [`Node`].
///
/// The transformation passes only inspect a handful of kinds (`Link`,
/// `HtmlInline`, `CodeBlock`, `Heading`, `Text`); the rest exist so that a
/// parsed document round-trips structurally through the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Root,
    Paragraph,
    Heading,
    Text,
    Link,
    Definition,
    HtmlInline,
    CodeBlock,
    InlineCode,
    Image,
    List,
    ListItem,
    BlockQuote,
    Emphasis,
    Strong,
    Strikethrough,
    Table,
    TableHead,
    TableRow,
    TableCell,
    ThematicBreak,
    /// Synthetic node produced by code-group folding: a tabbed widget whose
    /// children are the folded code blocks.
    TabGroup,
}

/// A node in the document tree.
///
/// All fields besides `kind` are optional; which ones are populated depends
/// on the kind (`value` for text and code, `url` for links and images,
/// `lang` for fenced code blocks, `depth` for headings). `props` carries
/// pass-attached attributes such as highlight markup or the copy-to-clipboard
/// raw text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub depth: Option<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Node>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub props: BTreeMap<String, String>,
}

impl Node {
    /// Create an empty node of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: None,
            url: None,
            lang: None,
            depth: None,
            children: Vec::new(),
            props: BTreeMap::new(),
        }
    }

    /// Create a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        let mut node = Self::new(NodeKind::Text);
        node.value = Some(value.into());
        node
    }

    /// Create a fenced code block node.
    #[must_use]
    pub fn code_block(lang: Option<&str>, value: impl Into<String>) -> Self {
        let mut node = Self::new(NodeKind::CodeBlock);
        node.lang = lang.map(str::to_owned);
        node.value = Some(value.into());
        node
    }

    /// Concatenated plain text of this node and its descendants.
    ///
    /// Text, inline code, and html values all contribute, in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(value) = &self.value {
            out.push_str(value);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_concatenates_descendants() {
        let mut heading = Node::new(NodeKind::Heading);
        heading.depth = Some(2);
        heading.children.push(Node::text("The "));
        let mut code = Node::new(NodeKind::InlineCode);
        code.value = Some("main".to_owned());
        heading.children.push(code);
        heading.children.push(Node::text(" function"));

        assert_eq!(heading.text_content(), "The main function");
    }

    #[test]
    fn test_serde_skips_empty_fields() {
        let node = Node::text("hi");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"kind":"text","value":"hi"}"#);
    }
}
