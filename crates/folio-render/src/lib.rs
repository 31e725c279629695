//! Folio Renderer
//!
//! Turns a parsed article into HTML. Headings get deterministic anchor ids,
//! paragraphs get the inline pass (bold, italic, inline code, links), and
//! fenced code blocks are delegated to `folio-highlight`.
//!
//! ```text
//! source → folio_markdown::parse() → Document → render() → HTML
//!                                            ↘ table_of_contents(), reading_time()
//! ```
//!
//! # Example
//!
//! ```
//! let html = folio_render::render_markdown("# Hello, World!\n\nSome *text*.");
//! assert_eq!(
//!     html,
//!     "<h1 id=\"hello-world\">Hello, World!</h1>\n<p>Some <em>text</em>.</p>"
//! );
//! ```

pub mod article;
pub mod html;
pub mod inline;
pub mod language;
pub mod options;
pub mod reading_time;
pub mod slug;
pub mod toc;

pub use article::{render_article, Article};
pub use language::display_name;
pub use options::RenderOptions;
pub use reading_time::{reading_time, ReadingTime};
pub use slug::slugify;
pub use toc::{table_of_contents, TocEntry};

use folio_highlight::Registry;
use folio_markdown::Document;

/// Render a document to HTML with default options.
pub fn render(doc: &Document) -> String {
    render_with(doc, &RenderOptions::default())
}

/// Render a document to HTML with the given options and the built-in
/// highlighting languages.
pub fn render_with(doc: &Document, options: &RenderOptions) -> String {
    html::generate(doc, options, Registry::builtin())
}

/// Parse and render markdown source in one step.
pub fn render_markdown(source: &str) -> String {
    let options = RenderOptions::default();
    let doc = folio_markdown::parse_with(source, &options.parse);
    render_with(&doc, &options)
}
