//! Include directive parsing.
//!
//! Two upstream dialects are recognised and normalised into one shape the
//! moment they are detected, so everything downstream — path resolution,
//! caching, anchor extraction — sees a single representation.

/// A normalised include directive: which file, which anchor, and an
/// optional language hint from the inline dialect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncludeDirective {
    /// Path relative to the book's source root (or to the document's own
    /// directory when it starts with `./`).
    pub path: String,
    /// Named anchor to extract, or `None` for the whole file.
    pub anchor: Option<String>,
    /// Language hint from the inline dialect's `{lang}` suffix.
    pub lang_hint: Option<String>,
}

impl IncludeDirective {
    /// Parse the mdBook fenced dialect: `{{#include <path>[:<anchor>]}}`.
    ///
    /// Returns `None` when the text is not an include directive.
    #[must_use]
    pub fn parse_fenced(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let inner = trimmed.strip_prefix("{{#include")?.strip_suffix("}}")?.trim();
        if inner.is_empty() {
            return None;
        }

        let (path, anchor) = match inner.rsplit_once(':') {
            Some((path, anchor)) if !anchor.contains('/') => {
                (path.to_owned(), Some(anchor.to_owned()))
            }
            _ => (inner.to_owned(), None),
        };

        Some(Self {
            path,
            anchor,
            lang_hint: None,
        })
    }

    /// Parse the inline dialect: `<<< @/<path>[{<lang>}][#<anchor>]`.
    ///
    /// Returns `None` when the text is not an include directive.
    #[must_use]
    pub fn parse_inline(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let rest = trimmed
            .strip_prefix("<<< @/")
            .or_else(|| trimmed.strip_prefix("<<< @"))?;

        // The language hint may sit between the path and the anchor or
        // after the anchor; keep whatever trails the closing brace.
        let (rest, lang_hint, trailing) = match rest.split_once('{') {
            Some((before, after)) => match after.split_once('}') {
                Some((hint, trailing)) => (before, Some(hint.to_owned()), trailing),
                None => (before, Some(after.to_owned()), ""),
            },
            None => (rest, None, ""),
        };

        let (path, anchor) = match rest.split_once('#') {
            Some((path, anchor)) => (path, Some(anchor.trim().to_owned())),
            None => match trailing.strip_prefix('#') {
                Some(anchor) => (rest, Some(anchor.trim().to_owned())),
                None => (rest, None),
            },
        };

        let path = path.trim();
        if path.is_empty() {
            return None;
        }

        Some(Self {
            path: path.to_owned(),
            anchor: anchor.filter(|a| !a.is_empty()),
            lang_hint,
        })
    }

    /// Language for the imported block: the explicit hint if present,
    /// otherwise derived from the file extension.
    #[must_use]
    pub fn language(&self) -> Option<String> {
        if let Some(hint) = &self.lang_hint {
            // Hints may carry flags such as `ts:line-numbers`.
            return Some(hint.clone());
        }
        let ext = self.path.rsplit_once('.')?.1;
        let lang = match ext {
            "sw" => "sway",
            other => other,
        };
        Some(lang.to_owned())
    }
}
