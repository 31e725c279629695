use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::escape::escape_html;
use crate::languages;
use crate::rules::LanguageRules;
use crate::scanner::Scanner;
use crate::token::{render_tokens, Token};
use crate::HighlightError;

static BUILTIN: Lazy<Registry> =
    Lazy::new(|| languages::builtin().expect("built-in language rules are valid"));

/// Language rule tables keyed by lower-cased language name.
///
/// A registry is assembled once and then only read; the built-in one lives
/// in a process-wide static and is shared across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    languages: HashMap<String, LanguageRules>,
    aliases: HashMap<String, String>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry holding every built-in language.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Add a rule table under its lower-cased name, replacing any previous one.
    pub fn register(&mut self, rules: LanguageRules) {
        self.languages.insert(rules.name().to_lowercase(), rules);
    }

    /// Make `alias` resolve to an already registered language.
    pub fn alias(&mut self, alias: &str, target: &str) -> Result<(), HighlightError> {
        let target = target.to_lowercase();
        if !self.languages.contains_key(&target) {
            return Err(HighlightError::UnknownAliasTarget {
                alias: alias.to_string(),
                target,
            });
        }
        self.aliases.insert(alias.to_lowercase(), target);
        Ok(())
    }

    /// Look up rules by language name or alias, ignoring case and
    /// surrounding whitespace.
    pub fn get(&self, language: &str) -> Option<&LanguageRules> {
        let key = language.trim().to_lowercase();
        let key = self.aliases.get(&key).unwrap_or(&key);
        self.languages.get(key)
    }

    /// Canonical language names, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Tokenize `code`, or `None` when `language` is not registered.
    pub fn tokenize(&self, code: &str, language: &str) -> Option<Vec<Token>> {
        let rules = self.get(language)?;
        let tokens = Scanner::tokenize(code, rules);
        trace!(language = rules.name(), tokens = tokens.len(), "tokenized code");
        Some(tokens)
    }

    /// Highlight `code` as HTML. Unregistered languages come back escaped
    /// with no classification spans.
    pub fn highlight(&self, code: &str, language: &str) -> String {
        match self.tokenize(code, language) {
            Some(tokens) => render_tokens(&tokens),
            None => {
                debug!(language, "no rule table for language, emitting plain text");
                escape_html(code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_language_escaped_plain() {
        let html = Registry::builtin().highlight("<b>hi</b>", "brainfuck");
        assert_eq!(html, "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn test_empty_language_is_plain() {
        let html = Registry::builtin().highlight("a && b", "");
        assert_eq!(html, "a &amp;&amp; b");
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let registry = Registry::builtin();
        assert_eq!(registry.get(" JavaScript ").map(|r| r.name()), Some("javascript"));
        assert_eq!(registry.get("PY").map(|r| r.name()), Some("python"));
    }

    #[test]
    fn test_highlight_wraps_tokens() {
        let html = Registry::builtin().highlight("a === b", "js");
        assert_eq!(html, "a <span class=\"token operator\">===</span> b");
    }

    #[test]
    fn test_highlight_escapes_inside_spans() {
        let html = Registry::builtin().highlight("x = \"<tag>\"", "python");
        assert_eq!(
            html,
            "x <span class=\"token operator\">=</span> <span class=\"token string\">&quot;&lt;tag&gt;&quot;</span>"
        );
    }

    #[test]
    fn test_tokenize_unknown_is_none() {
        assert!(Registry::builtin().tokenize("x", "cobol").is_none());
    }

    #[test]
    fn test_languages_sorted() {
        let names = Registry::builtin().languages();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"java"));
        assert!(!names.contains(&"js"));
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = Registry::new();
        registry.register(
            LanguageRules::builder("Lisp")
                .keywords(&["defun"])
                .comment(r";[^\n]*")
                .build()
                .unwrap(),
        );
        registry.alias("el", "lisp").unwrap();
        assert_eq!(
            registry.highlight("(defun f) ; hi", "EL"),
            "(<span class=\"token keyword\">defun</span> f) <span class=\"token comment\">; hi</span>"
        );
    }

    #[test]
    fn test_alias_to_unknown_language_fails() {
        let mut registry = Registry::new();
        let err = registry.alias("x", "nothing").unwrap_err();
        assert!(matches!(err, HighlightError::UnknownAliasTarget { .. }));
    }

    #[test]
    fn test_round_trip_every_language() {
        let source = "fn main() { let s = \"x\"; /* c */ x += 1.5e3; } # done\n'q' `t` -- end";
        let registry = Registry::builtin();
        for name in registry.languages() {
            let tokens = registry.tokenize(source, name).unwrap();
            let joined: String = tokens.iter().map(|t| t.value.as_str()).collect();
            assert_eq!(joined, source, "round trip failed for {name}");
        }
    }

    #[test]
    fn test_highlight_is_deterministic() {
        let code = "def f(x):\n    return x ** 2  # square";
        let first = Registry::builtin().highlight(code, "python");
        let second = Registry::builtin().highlight(code, "python");
        assert_eq!(first, second);
    }
}
