//! Folio Markdown
//!
//! Parses article text into a flat list of block nodes: headings,
//! paragraphs and fenced code blocks. Inline markup (emphasis, links,
//! inline code) is left in the block text for the renderer.
//!
//! # Example
//!
//! ```
//! use folio_markdown::{parse, Block};
//!
//! let doc = parse("# Title\n\nSome text.");
//! assert_eq!(doc.blocks.len(), 2);
//! assert!(matches!(doc.blocks[0], Block::Heading { level: 1, .. }));
//! ```

pub mod ast;
pub mod options;
pub mod parser;

pub use ast::{Block, BlockKind, Document};
pub use options::{FencePolicy, ParseOptions};
pub use parser::Parser;

/// Parse article text with default options.
pub fn parse(source: &str) -> Document {
    Parser::parse(source)
}

/// Parse article text with explicit options.
pub fn parse_with(source: &str, options: &ParseOptions) -> Document {
    Parser::parse_with(source, options)
}
