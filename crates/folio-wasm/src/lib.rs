//! WASM bindings for the folio renderer.
//!
//! Exposes the article pipeline to the portfolio front end via wasm-bindgen.
//! Strings come back as plain JS strings; structured results (articles,
//! tables of contents) are converted with `serde-wasm-bindgen`.

use folio_highlight::Registry;
use folio_render::RenderOptions;
use wasm_bindgen::prelude::*;

/// Render markdown source to HTML.
#[wasm_bindgen(js_name = renderMarkdown)]
pub fn render_markdown(source: &str) -> String {
    folio_render::render_markdown(source)
}

/// Render an article and return `{ html, toc, readingTime }`.
///
/// `toc` is an array of `{ level, text, id }`; `readingTime` is
/// `{ words, minutes }`.
#[wasm_bindgen(js_name = renderArticle)]
pub fn render_article(source: &str) -> Result<JsValue, JsError> {
    let article = folio_render::render_article(source, &RenderOptions::default());
    serde_wasm_bindgen::to_value(&article).map_err(|e| JsError::new(&e.to_string()))
}

/// Table of contents as an array of `{ level, text, id }`.
#[wasm_bindgen(js_name = tableOfContents)]
pub fn table_of_contents(source: &str) -> Result<JsValue, JsError> {
    let doc = folio_markdown::parse(source);
    let toc = folio_render::table_of_contents(&doc);
    serde_wasm_bindgen::to_value(&toc).map_err(|e| JsError::new(&e.to_string()))
}

/// Highlight a code snippet. Unsupported languages come back escaped.
#[wasm_bindgen]
pub fn highlight(code: &str, language: &str) -> String {
    folio_highlight::highlight(code, language)
}

/// Languages with real highlighting support.
#[wasm_bindgen(js_name = supportedLanguages)]
pub fn supported_languages() -> js_sys::Array {
    language_names().into_iter().map(JsValue::from).collect()
}

fn language_names() -> Vec<String> {
    Registry::builtin()
        .languages()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Get the renderer version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
