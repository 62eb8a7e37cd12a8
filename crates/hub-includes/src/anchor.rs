//! Anchor-delimited sub-block extraction.
//!
//! An anchor is a named begin/end comment pair. Three comment dialects are
//! recognised, matching what the upstream source languages use:
//!
//! - `// ANCHOR:<name>` / `// ANCHOR_END:<name>`
//! - `# region <name>` / `# endregion <name>`
//! - `#ANCHOR:<name>` / `#ANCHOR_END:<name>`
//!
//! The extracted block is every line strictly between the first matching
//! begin marker and the next matching end marker. Marker lines belonging
//! to other, nested anchors are stripped from the output; a line carrying
//! the `// #context ` marker loses the marker but stays as a comment.

use std::path::Path;

use crate::ImportError;

/// Extract a named anchor block, or the whole file when `anchor` is `None`.
///
/// The whole-file case returns the content unmodified, byte for byte.
///
/// # Errors
///
/// [`ImportError::AnchorNotFound`] when a named anchor's begin or end
/// marker never matches — a malformed upstream document, never silently
/// downgraded to the whole file.
pub fn extract_anchor(
    content: &str,
    anchor: Option<&str>,
    path: &Path,
) -> Result<String, ImportError> {
    let Some(name) = anchor else {
        return Ok(content.to_owned());
    };

    let lines: Vec<&str> = content.lines().collect();

    let begin = lines
        .iter()
        .position(|line| is_begin_marker(line, name))
        .ok_or_else(|| ImportError::AnchorNotFound {
            path: path.to_path_buf(),
            anchor: name.to_owned(),
        })?;

    let end = lines[begin + 1..]
        .iter()
        .position(|line| is_end_marker(line, name))
        .map(|offset| begin + 1 + offset)
        .ok_or_else(|| ImportError::AnchorNotFound {
            path: path.to_path_buf(),
            anchor: name.to_owned(),
        })?;

    let block: Vec<String> = lines[begin + 1..end]
        .iter()
        .filter(|line| !is_any_marker(line))
        .map(|line| strip_context_marker(line))
        .collect();

    Ok(block.join("\n"))
}

/// Marker prefix that keeps its line as a plain comment.
const CONTEXT_MARKER: &str = "// #context ";

fn strip_context_marker(line: &str) -> String {
    if line.trim_start().starts_with(CONTEXT_MARKER) {
        line.replacen(CONTEXT_MARKER, "", 1)
    } else {
        line.to_owned()
    }
}

/// Line with all whitespace removed, for the whitespace-insensitive dialects.
fn squeezed(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_begin_marker(line: &str, name: &str) -> bool {
    let squeezed = squeezed(line);
    squeezed == format!("//ANCHOR:{name}")
        || squeezed == format!("#ANCHOR:{name}")
        || line.trim() == format!("# region {name}")
}

fn is_end_marker(line: &str, name: &str) -> bool {
    let squeezed = squeezed(line);
    squeezed == format!("//ANCHOR_END:{name}")
        || squeezed == format!("#ANCHOR_END:{name}")
        || line.trim() == format!("# endregion {name}")
}

/// Any anchor marker line of any dialect, regardless of name.
fn is_any_marker(line: &str) -> bool {
    let trimmed = line.trim_start();
    let squeezed = squeezed(line);
    squeezed.starts_with("//ANCHOR")
        || squeezed.starts_with("#ANCHOR")
        || trimmed.starts_with("# region ")
        || trimmed.starts_with("# endregion")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(content: &str, anchor: &str) -> Result<String, ImportError> {
        extract_anchor(content, Some(anchor), Path::new("src/main.sw"))
    }

    #[test]
    fn test_extract_simple_block() {
        let content = "before\n// ANCHOR: main\nfn main() {}\n// ANCHOR_END: main\nafter\n";
        assert_eq!(extract(content, "main").unwrap(), "fn main() {}");
    }

    #[test]
    fn test_nested_markers_stripped_content_kept() {
        let content = "\
// ANCHOR: outer
line one
// ANCHOR: inner
line two
// ANCHOR_END: inner
line three
// ANCHOR_END: outer
";
        assert_eq!(
            extract(content, "outer").unwrap(),
            "line one\nline two\nline three"
        );
        assert_eq!(extract(content, "inner").unwrap(), "line two");
    }

    #[test]
    fn test_hash_region_dialect() {
        let content = "# region setup\nforc new counter\n# endregion setup\n";
        assert_eq!(extract(content, "setup").unwrap(), "forc new counter");
    }

    #[test]
    fn test_hash_anchor_dialect() {
        let content = "#ANCHOR: deps\nfuels = \"0.55\"\n#ANCHOR_END: deps\n";
        assert_eq!(extract(content, "deps").unwrap(), "fuels = \"0.55\"");
    }

    #[test]
    fn test_whitespace_insensitive_matching() {
        let content = "//   ANCHOR:   pad\nbody\n//ANCHOR_END:pad\n";
        assert_eq!(extract(content, "pad").unwrap(), "body");
    }

    #[test]
    fn test_context_marker_kept_as_comment() {
        let content = "\
// ANCHOR: cfg
// #context use fuels::prelude::*;
let wallet = launch_provider();
// ANCHOR_END: cfg
";
        assert_eq!(
            extract(content, "cfg").unwrap(),
            "use fuels::prelude::*;\nlet wallet = launch_provider();"
        );
    }

    #[test]
    fn test_missing_anchor_is_fatal() {
        let err = extract("no markers here\n", "main").unwrap_err();
        assert!(matches!(err, ImportError::AnchorNotFound { .. }));
    }

    #[test]
    fn test_unterminated_anchor_is_fatal() {
        let err = extract("// ANCHOR: main\nbody\n", "main").unwrap_err();
        assert!(matches!(err, ImportError::AnchorNotFound { .. }));
    }

    #[test]
    fn test_whole_file_returned_byte_for_byte() {
        let content = "line1\n\n  indented\nline3";
        assert_eq!(
            extract_anchor(content, None, Path::new("x")).unwrap(),
            content
        );
    }

    #[test]
    fn test_indentation_inside_block_unchanged() {
        let content = "// ANCHOR: f\n    let x = 1;\n// ANCHOR_END: f\n";
        assert_eq!(extract(content, "f").unwrap(), "    let x = 1;");
    }
}
