use folio_markdown::Document;
use serde::Serialize;

use crate::options::DEFAULT_WORDS_PER_MINUTE;

/// Estimated time to read an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: usize,
}

/// Count words across every block and convert them to whole minutes,
/// rounding up. Any non-empty article takes at least a minute; a zero
/// rate falls back to the default.
pub fn reading_time(doc: &Document, words_per_minute: usize) -> ReadingTime {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    let words: usize = doc
        .iter()
        .map(|block| block.text().split_whitespace().count())
        .sum();
    let minutes = if words == 0 { 0 } else { words.div_ceil(wpm) };
    ReadingTime { words, minutes }
}
