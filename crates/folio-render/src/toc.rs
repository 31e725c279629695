use folio_markdown::Document;
use serde::Serialize;

use crate::html::MAX_HEADING_LEVEL;
use crate::slug::slugify;

/// One heading in an article's table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: usize,
    pub text: String,
    /// Anchor id, identical to the `id` the renderer puts on the heading.
    pub id: String,
}

/// Build the table of contents for a document, in document order.
pub fn table_of_contents(doc: &Document) -> Vec<TocEntry> {
    doc.headings()
        .map(|(level, text)| TocEntry {
            level: level.clamp(1, MAX_HEADING_LEVEL),
            text: text.to_string(),
            id: slugify(text),
        })
        .collect()
}
