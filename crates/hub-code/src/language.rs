//! Fence language alias table.

/// Ordered alias table. First match on the fence's primary token wins;
/// anything not listed passes through unchanged.
const ALIASES: &[(&str, &str)] = &[
    ("sway", "rust"),
    ("sw", "rust"),
    ("rs", "rust"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("js", "javascript"),
    ("sh", "sh"),
    ("shell", "sh"),
    ("console", "sh"),
];

/// Grammar an untyped fence falls back to.
const UNTYPED_DEFAULT: &str = "sh";

/// Fence info flag requesting per-line numbering.
const LINE_NUMBERS_FLAG: &str = "line-numbers";

/// A fence language after alias resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedLanguage {
    /// Concrete highlighter grammar.
    pub grammar: String,
    /// Whether the fence asked for line numbering (`ts:line-numbers`).
    pub numbered: bool,
}

/// Normalize a declared fence language through the alias table.
///
/// The fence info may carry comma-separated modifiers (`rust,ignore`) and
/// a `:line-numbers` flag; both are peeled off before alias lookup. An
/// empty fence defaults to the shell grammar. Inline code spans never
/// reach this function and stay untyped.
#[must_use]
pub fn normalize_language(declared: Option<&str>) -> NormalizedLanguage {
    let raw = declared.unwrap_or("").trim();
    if raw.is_empty() {
        return NormalizedLanguage {
            grammar: UNTYPED_DEFAULT.to_owned(),
            numbered: false,
        };
    }

    // `rust,ignore` style modifiers only matter to mdBook's test runner.
    let primary = raw.split(',').next().unwrap_or(raw);

    let (token, numbered) = match primary.split_once(':') {
        Some((token, flag)) if flag == LINE_NUMBERS_FLAG => (token, true),
        _ => (primary, false),
    };

    let grammar = ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map_or(token, |(_, grammar)| grammar);

    NormalizedLanguage {
        grammar: grammar.to_owned(),
        numbered,
    }
}
