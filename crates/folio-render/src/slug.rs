/// Derive an anchor id from heading text.
///
/// Lower-cases, drops everything but letters, digits, whitespace and `-`,
/// turns each whitespace run into a single `-`, then trims `-` from both
/// ends. The renderer and the table of contents both call this, so anchors
/// always line up.
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    kept.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .trim_matches('-')
        .to_string()
}
