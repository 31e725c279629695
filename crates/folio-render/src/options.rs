use folio_markdown::ParseOptions;
use serde::{Deserialize, Serialize};

/// Words per minute used by the reading-time estimate.
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Escape `&`, `<`, `>` and quotes in prose before the inline pass.
    /// Off by default: article text is author-controlled and may carry
    /// deliberate inline HTML.
    pub escape_prose: bool,

    /// Reading speed for [`crate::reading_time`].
    pub words_per_minute: usize,

    /// Options forwarded to the parser by the one-step helpers.
    pub parse: ParseOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_prose: false,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            parse: ParseOptions::default(),
        }
    }
}
