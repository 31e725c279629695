//! Inline markup pass for heading and paragraph text.
//!
//! Four global substitutions applied in a fixed order: bold, italic,
//! inline code, links. Bold runs first, so `**a *b* c**` nests as expected,
//! while runs of three or more asterisks resolve greedily left to right and
//! can produce mis-nested tags. Emphasis also runs before inline code, so
//! asterisks inside backticks still turn into `<em>`. Both are accepted;
//! this is not a full emphasis parser.
//!
//! Surrounding text is not escaped unless asked for, so this pass must not
//! be fed untrusted content.

use folio_highlight::escape_html;
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());

static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").unwrap());

/// Apply the inline pass to `text`.
pub fn render_inline(text: &str, escape_prose: bool) -> String {
    let text = if escape_prose {
        escape_html(text)
    } else {
        text.to_string()
    };

    let text = BOLD.replace_all(&text, "<strong>${1}</strong>");
    let text = ITALIC.replace_all(&text, "<em>${1}</em>");
    let text = INLINE_CODE.replace_all(&text, "<code>${1}</code>");
    let text = LINK.replace_all(
        &text,
        "<a href=\"${2}\" target=\"_blank\" rel=\"noopener noreferrer\">${1}</a>",
    );
    text.into_owned()
}
