//! Folio Highlighter
//!
//! Tokenizes source code from fenced code blocks into classified tokens
//! (keywords, strings, comments, numbers, operators, function and class names)
//! and renders them as `<span class="token …">` fragments.
//!
//! Language support is table-driven: each language owns a set of regex
//! patterns and word lists, built once into a read-only [`Registry`].
//! Unknown languages degrade to escaped plain text.
//!
//! # Example
//!
//! ```
//! let html = folio_highlight::highlight("let x = 1;", "javascript");
//! assert!(html.contains("<span class=\"token keyword\">let</span>"));
//!
//! let plain = folio_highlight::highlight("<b>hi</b>", "brainfuck");
//! assert_eq!(plain, "&lt;b&gt;hi&lt;/b&gt;");
//! ```

pub mod escape;
pub mod languages;
pub mod registry;
pub mod rules;
pub mod scanner;
pub mod token;

pub use escape::escape_html;
pub use registry::Registry;
pub use rules::{LanguageRules, RulesBuilder};
pub use scanner::{Matcher, Scanner, MATCH_ORDER};
pub use token::{render_tokens, Span, Token, TokenKind};

/// Error raised while building a language rule table.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HighlightError {
    #[error("Invalid {role} pattern for language '{language}': {source}")]
    InvalidPattern {
        language: String,
        role: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Alias '{alias}' points at unknown language '{target}'")]
    UnknownAliasTarget { alias: String, target: String },
}

/// Highlight `code` with the built-in rule table for `language`.
///
/// The language key is matched case-insensitively. Unsupported languages
/// return the HTML-escaped source with no spans.
pub fn highlight(code: &str, language: &str) -> String {
    Registry::builtin().highlight(code, language)
}

/// Tokenize `code` with the built-in rule table for `language`.
///
/// Returns `None` when the language has no rule table.
pub fn tokenize(code: &str, language: &str) -> Option<Vec<Token>> {
    Registry::builtin().tokenize(code, language)
}

/// Check whether the built-in registry can highlight `language`.
pub fn is_supported(language: &str) -> bool {
    Registry::builtin().get(language).is_some()
}
