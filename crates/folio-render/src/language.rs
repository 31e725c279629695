/// Display names shown in code block headers, keyed by lower-case fence info.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("javascript", "JavaScript"),
    ("js", "JavaScript"),
    ("jsx", "JSX"),
    ("typescript", "TypeScript"),
    ("ts", "TypeScript"),
    ("tsx", "TSX"),
    ("java", "Java"),
    ("python", "Python"),
    ("py", "Python"),
    ("sql", "SQL"),
    ("yaml", "YAML"),
    ("yml", "YAML"),
    ("json", "JSON"),
    ("css", "CSS"),
    ("html", "HTML"),
    ("xml", "XML"),
    ("rust", "Rust"),
    ("rs", "Rust"),
    ("bash", "Bash"),
    ("sh", "Shell"),
    ("shell", "Shell"),
    ("go", "Go"),
    ("kotlin", "Kotlin"),
    ("c", "C"),
    ("cpp", "C++"),
    ("csharp", "C#"),
    ("dockerfile", "Dockerfile"),
    ("markdown", "Markdown"),
    ("md", "Markdown"),
    ("text", "Plain Text"),
    ("plaintext", "Plain Text"),
];

/// Label for a code block written in `language`.
///
/// Known keys map to their proper names; anything else is shown upper-cased.
/// A block with no fence info is labelled "Plain Text".
pub fn display_name(language: &str) -> String {
    let key = language.trim().to_lowercase();
    if key.is_empty() {
        return "Plain Text".to_string();
    }
    DISPLAY_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| key.to_uppercase())
}
