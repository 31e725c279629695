use crate::rules::LanguageRules;
use crate::token::{Span, Token, TokenKind};

/// One classification strategy tried at a scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Comment,
    String,
    Number,
    Keyword,
    Operator,
    Function,
    ClassName,
}

/// Matcher priority. The first matcher that succeeds at a position wins,
/// regardless of how much a later matcher would have consumed. Anything no
/// matcher claims is consumed one character at a time as plain text.
pub const MATCH_ORDER: [Matcher; 7] = [
    Matcher::Comment,
    Matcher::String,
    Matcher::Number,
    Matcher::Keyword,
    Matcher::Operator,
    Matcher::Function,
    Matcher::ClassName,
];

impl Matcher {
    pub fn kind(self) -> TokenKind {
        match self {
            Matcher::Comment => TokenKind::Comment,
            Matcher::String => TokenKind::String,
            Matcher::Number => TokenKind::Number,
            Matcher::Keyword => TokenKind::Keyword,
            Matcher::Operator => TokenKind::Operator,
            Matcher::Function => TokenKind::Function,
            Matcher::ClassName => TokenKind::ClassName,
        }
    }

    /// Matchers that only start at an identifier boundary, so the tail of
    /// `x1` or `elif` is never read as a number or keyword.
    fn needs_word_boundary(self) -> bool {
        matches!(
            self,
            Matcher::Number | Matcher::Keyword | Matcher::Function | Matcher::ClassName
        )
    }
}

/// Characters that make up identifiers in every supported language.
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Source-code scanner driven by a language rule table.
///
/// Walks the source left to right, trying each [`Matcher`] in
/// [`MATCH_ORDER`] at the current byte offset. Adjacent plain-text
/// characters are merged into one [`TokenKind::Text`] token. The produced
/// tokens partition the source exactly.
pub struct Scanner<'a> {
    source: &'a str,
    rules: &'a LanguageRules,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str, rules: &'a LanguageRules) -> Self {
        Self {
            source,
            rules,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source with the given rules.
    pub fn tokenize(source: &str, rules: &LanguageRules) -> Vec<Token> {
        let mut scanner = Scanner::new(source, rules);
        scanner.scan_tokens();
        scanner.tokens
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }
    }

    fn scan_token(&mut self) {
        let at_boundary = self.at_word_boundary();
        let after_whitespace = self.after_whitespace();

        for matcher in MATCH_ORDER {
            if matcher.needs_word_boundary() && !at_boundary {
                continue;
            }
            if matcher == Matcher::Comment
                && self.rules.comments_after_whitespace()
                && !after_whitespace
            {
                continue;
            }
            if let Some(len) = self.try_match(matcher) {
                self.emit(matcher.kind(), len);
                return;
            }
        }

        let len = self.peek().map_or(1, char::len_utf8);
        self.emit_text(len);
    }

    /// Try one matcher at the current position, returning the byte length
    /// it would consume.
    fn try_match(&self, matcher: Matcher) -> Option<usize> {
        let rest = self.rest();
        match matcher {
            Matcher::Comment => self.rules.match_comment(rest),
            Matcher::String => self.rules.match_string(rest),
            Matcher::Number => self.rules.match_number(rest),
            Matcher::Keyword => self.match_keyword(rest),
            Matcher::Operator => self.rules.match_operator(rest),
            Matcher::Function => self.rules.match_function(rest),
            Matcher::ClassName => self.rules.match_class_name(rest),
        }
    }

    /// Keywords only count when the whole identifier run is a keyword;
    /// `classes` is not `class` followed by `es`.
    fn match_keyword(&self, rest: &str) -> Option<usize> {
        let len = rest
            .char_indices()
            .find(|&(_, c)| !is_ident_char(c))
            .map_or(rest.len(), |(i, _)| i);
        if len == 0 {
            return None;
        }
        self.rules.is_keyword(&rest[..len]).then_some(len)
    }

    // --- Helpers ---

    fn emit(&mut self, kind: TokenKind, len: usize) {
        let start = self.pos;
        let end = start + len;
        self.tokens.push(Token::new(
            kind,
            &self.source[start..end],
            Span::new(start, end),
        ));
        self.pos = end;
    }

    fn emit_text(&mut self, len: usize) {
        let start = self.pos;
        let end = start + len;
        self.pos = end;

        if let Some(last) = self.tokens.last_mut() {
            if last.kind == TokenKind::Text && last.span.end == start {
                last.value.push_str(&self.source[start..end]);
                last.span.end = end;
                return;
            }
        }
        self.tokens.push(Token::new(
            TokenKind::Text,
            &self.source[start..end],
            Span::new(start, end),
        ));
    }

    fn at_word_boundary(&self) -> bool {
        !self.source[..self.pos]
            .chars()
            .next_back()
            .is_some_and(is_ident_char)
    }

    fn after_whitespace(&self) -> bool {
        self.source[..self.pos]
            .chars()
            .next_back()
            .map_or(true, char::is_whitespace)
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}
