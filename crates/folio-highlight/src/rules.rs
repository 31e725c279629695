//! Per-language rule tables.
//!
//! A [`LanguageRules`] holds everything the scanner needs to classify one
//! language: compiled comment/string/number/function/class patterns, a
//! keyword set, and an operator list kept sorted longest-first.
//!
//! Every pattern is anchored at the scan position when compiled, so callers
//! write `//[^\n]*`, not `^//[^\n]*`. For the function and class-name
//! patterns, a first capture group (when present) marks the part that is
//! consumed: `([A-Za-z_]\w*)\s*\(` classifies the name but leaves the
//! parenthesis for the next matcher.

use std::collections::HashSet;

use regex::Regex;

use crate::HighlightError;

/// Compiled, immutable highlighting rules for a single language.
#[derive(Debug, Clone)]
pub struct LanguageRules {
    name: String,
    keywords: HashSet<String>,
    case_insensitive_keywords: bool,
    comments_after_whitespace: bool,
    operators: Vec<String>,
    comments: Vec<Regex>,
    strings: Vec<Regex>,
    number: Option<Regex>,
    function: Option<Regex>,
    class_name: Option<Regex>,
}

impl LanguageRules {
    /// Start building rules for a language.
    pub fn builder(name: impl Into<String>) -> RulesBuilder {
        RulesBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        if self.case_insensitive_keywords {
            self.keywords.contains(&word.to_lowercase())
        } else {
            self.keywords.contains(word)
        }
    }

    /// Comments only start at the beginning of a line or after whitespace
    /// (`#` in Bash and YAML).
    pub fn comments_after_whitespace(&self) -> bool {
        self.comments_after_whitespace
    }

    /// Operators in match order (longest first).
    pub fn operators(&self) -> &[String] {
        &self.operators
    }

    pub fn match_comment(&self, rest: &str) -> Option<usize> {
        first_match(&self.comments, rest)
    }

    pub fn match_string(&self, rest: &str) -> Option<usize> {
        first_match(&self.strings, rest)
    }

    pub fn match_number(&self, rest: &str) -> Option<usize> {
        self.number.as_ref().and_then(|re| match_len(re, rest))
    }

    pub fn match_operator(&self, rest: &str) -> Option<usize> {
        self.operators
            .iter()
            .find(|op| rest.starts_with(op.as_str()))
            .map(String::len)
    }

    pub fn match_function(&self, rest: &str) -> Option<usize> {
        self.function.as_ref().and_then(|re| capture_len(re, rest))
    }

    pub fn match_class_name(&self, rest: &str) -> Option<usize> {
        self.class_name.as_ref().and_then(|re| capture_len(re, rest))
    }
}

/// Builder collecting uncompiled patterns for a [`LanguageRules`].
#[derive(Debug, Clone, Default)]
pub struct RulesBuilder {
    name: String,
    keywords: Vec<String>,
    case_insensitive_keywords: bool,
    comments_after_whitespace: bool,
    operators: Vec<String>,
    comments: Vec<String>,
    strings: Vec<String>,
    number: Option<String>,
    function: Option<String>,
    class_name: Option<String>,
}

impl RulesBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn keywords(mut self, words: &[&str]) -> Self {
        self.keywords.extend(words.iter().map(|w| w.to_string()));
        self
    }

    /// Match keywords regardless of case (SQL).
    pub fn case_insensitive_keywords(mut self) -> Self {
        self.case_insensitive_keywords = true;
        self
    }

    /// Require whitespace or a line start before a comment, so `$#` and
    /// `${#arr[@]}` stay code.
    pub fn comments_after_whitespace(mut self) -> Self {
        self.comments_after_whitespace = true;
        self
    }

    pub fn operators(mut self, ops: &[&str]) -> Self {
        self.operators.extend(ops.iter().map(|o| o.to_string()));
        self
    }

    pub fn comment(mut self, pattern: &str) -> Self {
        self.comments.push(pattern.to_string());
        self
    }

    pub fn string(mut self, pattern: &str) -> Self {
        self.strings.push(pattern.to_string());
        self
    }

    pub fn number(mut self, pattern: &str) -> Self {
        self.number = Some(pattern.to_string());
        self
    }

    pub fn function(mut self, pattern: &str) -> Self {
        self.function = Some(pattern.to_string());
        self
    }

    pub fn class_name(mut self, pattern: &str) -> Self {
        self.class_name = Some(pattern.to_string());
        self
    }

    /// Compile all patterns.
    pub fn build(self) -> Result<LanguageRules, HighlightError> {
        let name = self.name;
        let compile = |role: &'static str, pattern: &str| {
            Regex::new(&format!("^(?:{pattern})")).map_err(|source| {
                HighlightError::InvalidPattern {
                    language: name.clone(),
                    role,
                    source,
                }
            })
        };

        let comments = self
            .comments
            .iter()
            .map(|p| compile("comment", p.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let strings = self
            .strings
            .iter()
            .map(|p| compile("string", p.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let number = self.number.as_deref().map(|p| compile("number", p)).transpose()?;
        let function = self
            .function
            .as_deref()
            .map(|p| compile("function", p))
            .transpose()?;
        let class_name = self
            .class_name
            .as_deref()
            .map(|p| compile("class-name", p))
            .transpose()?;

        let keywords = if self.case_insensitive_keywords {
            self.keywords.iter().map(|k| k.to_lowercase()).collect()
        } else {
            self.keywords.into_iter().collect()
        };

        let mut operators: Vec<String> = self
            .operators
            .into_iter()
            .filter(|op| !op.is_empty())
            .collect();
        operators.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        operators.dedup();

        Ok(LanguageRules {
            name,
            keywords,
            case_insensitive_keywords: self.case_insensitive_keywords,
            comments_after_whitespace: self.comments_after_whitespace,
            operators,
            comments,
            strings,
            number,
            function,
            class_name,
        })
    }
}

fn match_len(re: &Regex, rest: &str) -> Option<usize> {
    re.find(rest).map(|m| m.end()).filter(|&len| len > 0)
}

fn first_match(patterns: &[Regex], rest: &str) -> Option<usize> {
    patterns.iter().find_map(|re| match_len(re, rest))
}

/// Length of the first capture group, or of the whole match when the
/// pattern has no groups. A group that does not start at the scan position
/// is rejected.
fn capture_len(re: &Regex, rest: &str) -> Option<usize> {
    let caps = re.captures(rest)?;
    let m = caps.get(1).or_else(|| caps.get(0))?;
    (m.start() == 0 && m.end() > 0).then_some(m.end())
}
