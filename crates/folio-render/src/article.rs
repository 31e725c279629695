use serde::Serialize;

use crate::options::RenderOptions;
use crate::reading_time::{reading_time, ReadingTime};
use crate::toc::{table_of_contents, TocEntry};

/// Everything the article viewer needs, derived from a single parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub html: String,
    pub toc: Vec<TocEntry>,
    pub reading_time: ReadingTime,
}

/// Parse `source` once and render its HTML, table of contents and reading
/// time.
pub fn render_article(source: &str, options: &RenderOptions) -> Article {
    let doc = folio_markdown::parse_with(source, &options.parse);
    Article {
        html: crate::render_with(&doc, options),
        toc: table_of_contents(&doc),
        reading_time: reading_time(&doc, options.words_per_minute),
    }
}
