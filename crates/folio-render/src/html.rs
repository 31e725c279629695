//! HTML generator.
//!
//! Walks the block list and emits one element per block, joined with
//! newlines. Code blocks are wrapped with a header (language label and a
//! copy button carrying the raw code) around the highlighted body.

use folio_highlight::{escape_html, Registry};
use folio_markdown::{Block, Document};
use tracing::{debug, trace};

use crate::inline::render_inline;
use crate::language::display_name;
use crate::options::RenderOptions;
use crate::slug::slugify;

/// Deepest heading level HTML supports.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Generate HTML for a document.
pub fn generate(doc: &Document, options: &RenderOptions, registry: &Registry) -> String {
    let html = doc
        .iter()
        .map(|block| generate_block(block, options, registry))
        .collect::<Vec<_>>()
        .join("\n");
    debug!(blocks = doc.len(), bytes = html.len(), "rendered document");
    html
}

/// Generate HTML for a single block.
pub fn generate_block(block: &Block, options: &RenderOptions, registry: &Registry) -> String {
    match block {
        Block::Heading { level, text } => generate_heading(*level, text, options),
        Block::Paragraph { text } => {
            format!("<p>{}</p>", render_inline(text, options.escape_prose))
        }
        Block::Code { language, text } => generate_code_block(language, text, registry),
    }
}

fn generate_heading(level: usize, text: &str, options: &RenderOptions) -> String {
    let level = level.clamp(1, MAX_HEADING_LEVEL);
    let body = render_inline(text, options.escape_prose);
    let id = slugify(text);
    if id.is_empty() {
        format!("<h{level}>{body}</h{level}>")
    } else {
        format!("<h{level} id=\"{id}\">{body}</h{level}>")
    }
}

fn generate_code_block(info: &str, code: &str, registry: &Registry) -> String {
    // Only the first word of the fence info names the language; the rest
    // (`title="x"` and similar) is ignored.
    let language = info.split_whitespace().next().unwrap_or("");
    let label = escape_html(&display_name(language));
    let class = if language.is_empty() {
        "plaintext".to_string()
    } else {
        escape_html(language)
    };
    let copy_payload = escape_html(code);

    trace!(
        language,
        highlighted = registry.get(language).is_some(),
        "rendering code block"
    );
    let body = registry.highlight(code, language);

    let mut out = String::new();
    out.push_str("<div class=\"code-block\">");
    out.push_str("<div class=\"code-header\">");
    out.push_str(&format!("<span class=\"code-language\">{label}</span>"));
    out.push_str(&format!(
        "<button class=\"copy-button\" type=\"button\" data-code=\"{copy_payload}\">Copy</button>"
    ));
    out.push_str("</div>");
    out.push_str(&format!(
        "<pre><code class=\"language-{class}\">{body}</code></pre>"
    ));
    out.push_str("</div>");
    out
}
