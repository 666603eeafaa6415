//! The syntax highlighting seam.
//!
//! Fenced code blocks are highlighted by an external collaborator, typically
//! a Prism instance on the host page; the renderer only carries the seam. A
//! declined highlight falls back to escaped plain code.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Language tag handed to the seam when a fence names none.
pub const DEFAULT_LANGUAGE: &str = "markup";

/// Common fence tags mapped to the canonical highlighter grammar name.
static LANGUAGE_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("html", "markup"),
        ("xml", "markup"),
        ("svg", "markup"),
        ("js", "javascript"),
        ("mjs", "javascript"),
        ("cjs", "javascript"),
        ("ts", "typescript"),
        ("py", "python"),
        ("rb", "ruby"),
        ("rs", "rust"),
        ("cs", "csharp"),
        ("sh", "bash"),
        ("shell", "bash"),
        ("zsh", "bash"),
        ("yml", "yaml"),
        ("md", "markdown"),
    ])
});

/// Produces highlighted HTML for slide code blocks.
///
/// Implementations return pre-escaped HTML, or `None` to decline, in which
/// case the renderer escapes the plain code itself. Implementations must not
/// fail; an internal error is a decline.
pub trait Highlighter {
    /// Highlights `code` written in `language` (a normalized tag).
    fn highlight(&self, code: &str, language: &str) -> Option<String>;
}

impl<F> Highlighter for F
where
    F: Fn(&str, &str) -> Option<String>,
{
    fn highlight(&self, code: &str, language: &str) -> Option<String> {
        (self)(code, language)
    }
}

/// Highlighter that declines every request, leaving code as escaped text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHighlight;

impl Highlighter for NoHighlight {
    fn highlight(&self, _code: &str, _language: &str) -> Option<String> {
        None
    }
}

/// Normalizes a fence's language tag for the seam and the `language-` class.
///
/// Lowercases the tag and resolves common aliases; a missing or blank tag
/// becomes [`DEFAULT_LANGUAGE`].
pub fn normalize_language(lang: Option<&str>) -> String {
    let tag = lang.map(str::trim).filter(|tag| !tag.is_empty());
    let Some(tag) = tag else {
        return DEFAULT_LANGUAGE.to_string();
    };
    let lower = tag.to_ascii_lowercase();
    match LANGUAGE_ALIASES.get(lower.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tag_defaults_to_markup() {
        assert_eq!(normalize_language(None), "markup");
        assert_eq!(normalize_language(Some("")), "markup");
        assert_eq!(normalize_language(Some("   ")), "markup");
    }

    #[test]
    fn tags_are_lowercased() {
        assert_eq!(normalize_language(Some("Rust")), "rust");
        assert_eq!(normalize_language(Some("PYTHON")), "python");
    }

    #[test]
    fn aliases_resolve_to_canonical_names() {
        assert_eq!(normalize_language(Some("js")), "javascript");
        assert_eq!(normalize_language(Some("HTML")), "markup");
        assert_eq!(normalize_language(Some("yml")), "yaml");
        assert_eq!(normalize_language(Some("rs")), "rust");
    }

    #[test]
    fn unknown_tags_pass_through() {
        assert_eq!(normalize_language(Some("brainfuck")), "brainfuck");
    }

    #[test]
    fn no_highlight_declines() {
        assert_eq!(NoHighlight.highlight("let x = 1;", "rust"), None);
    }

    #[test]
    fn closures_implement_the_seam() {
        let tagger = |code: &str, language: &str| Some(format!("{language}:{code}"));
        assert_eq!(
            tagger.highlight("print()", "python"),
            Some("python:print()".to_string())
        );
    }
}
