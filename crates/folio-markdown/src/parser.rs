//! Line-oriented block parser.
//!
//! Makes a single forward pass over the source lines. Fences take priority
//! over everything: once a fence is open, every line up to the closing fence
//! is code. Outside a fence, each line is a heading, a blank separator, or
//! the start of a paragraph that runs until the next blank line, heading or
//! fence.

use tracing::{debug, warn};

use crate::ast::{Block, Document};
use crate::options::{FencePolicy, ParseOptions};

/// The code fence delimiter.
pub const FENCE: &str = "```";

/// Folio block parser.
pub struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    options: ParseOptions,
    blocks: Vec<Block>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source.
    pub fn new(source: &'a str, options: ParseOptions) -> Self {
        Self {
            lines: source.lines().collect(),
            pos: 0,
            options,
            blocks: Vec::new(),
        }
    }

    /// Parse source text with default options.
    pub fn parse(source: &str) -> Document {
        Self::parse_with(source, &ParseOptions::default())
    }

    /// Parse source text with the given options.
    pub fn parse_with(source: &str, options: &ParseOptions) -> Document {
        let mut parser = Parser::new(source, *options);
        parser.parse_document();
        debug!(blocks = parser.blocks.len(), "parsed document");
        Document {
            blocks: parser.blocks,
        }
    }

    fn parse_document(&mut self) {
        while !self.is_at_end() {
            let line = self.peek();

            if let Some(info) = fence_info(line) {
                self.parse_code_block(info);
            } else if let Some((level, text)) = heading(line) {
                self.blocks.push(Block::Heading {
                    level,
                    text: text.to_string(),
                });
                self.advance();
            } else if is_blank(line) {
                self.advance();
            } else {
                self.parse_paragraph();
            }
        }
    }

    // =========================================================================
    // Code blocks
    // =========================================================================

    /// Parse a fenced block:
    /// ````text
    /// ```java
    /// int x = 1;
    /// ```
    /// ````
    fn parse_code_block(&mut self, info: &str) {
        let language = info.trim().to_lowercase();
        let opened_at = self.pos + 1;
        self.advance(); // consume opening fence

        let mut content = Vec::new();
        while !self.is_at_end() {
            let line = self.peek();
            if fence_info(line).is_some() {
                self.advance(); // consume closing fence
                self.blocks.push(Block::Code {
                    language,
                    text: content.join("\n"),
                });
                return;
            }
            content.push(line);
            self.advance();
        }

        warn!(
            line = opened_at,
            language = %language,
            policy = ?self.options.unterminated_fence,
            "code fence never closed"
        );
        match self.options.unterminated_fence {
            FencePolicy::Flush => self.blocks.push(Block::Code {
                language,
                text: content.join("\n"),
            }),
            FencePolicy::Drop => {}
        }
    }

    // =========================================================================
    // Paragraphs
    // =========================================================================

    fn parse_paragraph(&mut self) {
        let mut parts = Vec::new();

        while !self.is_at_end() {
            let line = self.peek();
            if is_blank(line) || heading(line).is_some() || fence_info(line).is_some() {
                break;
            }
            parts.push(line.trim());
            self.advance();
        }

        let text = parts.join(" ");
        let text = text.trim();
        if !text.is_empty() {
            self.blocks.push(Block::Paragraph {
                text: text.to_string(),
            });
        }
    }

    // --- Helpers ---

    fn peek(&self) -> &'a str {
        self.lines[self.pos]
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }
}

/// If `line` is a fence, return the text after the backticks.
/// Leading indentation before the fence is ignored.
pub fn fence_info(line: &str) -> Option<&str> {
    line.trim_start().strip_prefix(FENCE)
}

/// If `line` is a heading, return its level and text.
///
/// The text is everything after the `#` run, minus one optional space.
pub fn heading(line: &str) -> Option<(usize, &str)> {
    let rest = line.trim_start_matches('#');
    let level = line.len() - rest.len();
    if level == 0 {
        return None;
    }
    Some((level, rest.strip_prefix(' ').unwrap_or(rest)))
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
