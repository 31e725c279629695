use serde::Serialize;

use crate::escape::escape_html;

/// A byte range in the highlighted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token classification for highlighted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Keyword,
    String,
    Comment,
    Number,
    Operator,
    Function,
    ClassName,
    /// Unclassified source, emitted without a wrapper.
    Text,
}

impl TokenKind {
    /// The CSS class suffix used for this kind (`token keyword`, `token class-name`, …).
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Function => "function",
            TokenKind::ClassName => "class-name",
            TokenKind::Text => "text",
        }
    }
}

/// A classified slice of source code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    /// Render this token as escaped HTML, wrapped in a classification span
    /// unless it is plain text.
    pub fn to_html(&self) -> String {
        let escaped = escape_html(&self.value);
        match self.kind {
            TokenKind::Text => escaped,
            kind => format!("<span class=\"token {}\">{escaped}</span>", kind.as_str()),
        }
    }
}

/// Render a token stream as a single HTML fragment.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_html).collect()
}
