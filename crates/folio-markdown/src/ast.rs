//! Block-level syntax tree for folio articles.

use serde::Serialize;

/// A parsed article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Headings in document order as `(level, text)`.
    pub fn headings(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Heading { level, text } => Some((*level, text.as_str())),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// A block node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    /// `# Title`. The level is the raw count of `#` characters and may
    /// exceed 6; renderers clamp it.
    Heading { level: usize, text: String },

    /// One or more adjacent prose lines joined with single spaces.
    Paragraph { text: String },

    /// A fenced code block. `language` is the lower-cased fence info
    /// (possibly empty); `text` is the content between the fences.
    Code { language: String, text: String },
}

/// Discriminant of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Paragraph,
    Code,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::Paragraph { .. } => BlockKind::Paragraph,
            Block::Code { .. } => BlockKind::Code,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Block::Heading { text, .. } | Block::Paragraph { text } | Block::Code { text, .. } => {
                text.as_str()
            }
        }
    }

    pub fn level(&self) -> Option<usize> {
        match self {
            Block::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            Block::Code { language, .. } => Some(language.as_str()),
            _ => None,
        }
    }
}
