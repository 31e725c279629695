//! Built-in language rule tables.

use crate::registry::Registry;
use crate::rules::LanguageRules;
use crate::HighlightError;

// Shared patterns

const LINE_SLASH_COMMENT: &str = r"//[^\n]*";
const BLOCK_COMMENT: &str = r"/\*[\s\S]*?\*/";
const HASH_COMMENT: &str = r"#[^\n]*";
const DOUBLE_QUOTED: &str = r#""(?:[^"\\\n]|\\.)*""#;
const SINGLE_QUOTED: &str = r"'(?:[^'\\\n]|\\.)*'";
const MULTILINE_DOUBLE_QUOTED: &str = r#""(?:[^"\\]|\\[\s\S])*""#;
const TEMPLATE_LITERAL: &str = r"`(?:[^`\\]|\\[\s\S])*`";
const TRIPLE_DOUBLE_QUOTED: &str = r#""""[\s\S]*?""""#;
const TRIPLE_SINGLE_QUOTED: &str = r"'''[\s\S]*?'''";

const CALL_NAME: &str = r"([A-Za-z_$][\w$]*)\s*\(";
const PASCAL_CASE: &str = r"[A-Z][A-Za-z0-9_]*[a-z][A-Za-z0-9_]*";

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "false", "finally", "for", "from",
    "function", "get", "if", "import", "in", "instanceof", "let", "new", "null", "of", "return",
    "set", "static", "super", "switch", "this", "throw", "true", "try", "typeof", "undefined",
    "var", "void", "while", "with", "yield", "NaN", "Infinity",
];

const TS_EXTRA_KEYWORDS: &[&str] = &[
    "abstract", "any", "as", "bigint", "boolean", "declare", "enum", "implements", "infer",
    "interface", "is", "keyof", "module", "namespace", "never", "number", "object", "override",
    "private", "protected", "public", "readonly", "satisfies", "string", "symbol", "type",
    "unknown",
];

const JS_OPERATORS: &[&str] = &[
    "===", "!==", "**=", "...", ">>>", "<<=", ">>=", "&&=", "||=", "??=", "=>", "==", "!=",
    "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=",
    "^=", "**", "<<", ">>", "+", "-", "*", "/", "%", "=", "<", ">", "!", "&", "|", "^", "~",
    "?", ":",
];

const JS_NUMBER: &str =
    r"(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?)n?";

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "permits", "private", "protected",
    "public", "record", "return", "sealed", "short", "static", "strictfp", "super", "switch",
    "synchronized", "this", "throw", "throws", "transient", "true", "try", "var", "void",
    "volatile", "while", "yield",
];

const JAVA_OPERATORS: &[&str] = &[
    ">>>=", "<<=", ">>=", ">>>", "->", "::", "==", "!=", "<=", ">=", "&&", "||", "++", "--",
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "+", "-", "*", "/", "%", "=",
    "<", ">", "!", "&", "|", "^", "~", "?", ":",
];

const JAVA_NUMBER: &str =
    r"(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|\d[\d_]*(?:\.\d+)?(?:[eE][+-]?\d+)?)[fFdDlL]?";

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "case", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "match", "nonlocal", "not", "or", "pass", "raise",
    "return", "self", "try", "while", "with", "yield",
];

const PYTHON_OPERATORS: &[&str] = &[
    "**=", "//=", ">>=", "<<=", "->", ":=", "==", "!=", "<=", ">=", "**", "//", "<<", ">>",
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "@=", "+", "-", "*", "/", "%", "@", "=",
    "<", ">", "&", "|", "^", "~",
];

const PYTHON_NUMBER: &str =
    r"(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|0[oO][0-7_]+|\d[\d_]*(?:\.\d*)?(?:[eE][+-]?\d+)?)[jJ]?";

const SQL_KEYWORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "AS", "ASC", "BEGIN", "BETWEEN", "BIGINT", "BOOLEAN", "BY",
    "CASE", "CHECK", "COMMIT", "CONSTRAINT", "CREATE", "CROSS", "DATE", "DEFAULT", "DELETE",
    "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXISTS", "FALSE", "FOREIGN", "FROM", "FULL",
    "GROUP", "HAVING", "ILIKE", "IN", "INDEX", "INNER", "INSERT", "INT", "INTEGER", "INTO",
    "IS", "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER",
    "OUTER", "PRIMARY", "REFERENCES", "RETURNING", "RIGHT", "ROLLBACK", "SELECT", "SERIAL",
    "SET", "TABLE", "TEXT", "THEN", "TIMESTAMP", "TRANSACTION", "TRUE", "UNION", "UNIQUE",
    "UPDATE", "VALUES", "VARCHAR", "VIEW", "WHEN", "WHERE", "WITH",
];

const SQL_OPERATORS: &[&str] = &[
    "<>", "!=", "<=", ">=", "||", "::", "=", "<", ">", "+", "-", "*", "/", "%",
];

const YAML_KEYWORDS: &[&str] = &[
    "true", "false", "null", "yes", "no", "on", "off", "True", "False", "Null", "TRUE",
    "FALSE", "NULL",
];

const YAML_OPERATORS: &[&str] = &[
    "---", "...", ":", "-", "|", ">", "?", "&", "*", "!", "[", "]", "{", "}", ",",
];

const SIGNED_DECIMAL: &str = r"-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?";

const CSS_KEYWORDS: &[&str] = &[
    "absolute", "auto", "block", "bold", "both", "center", "fixed", "flex", "grid", "hidden",
    "important", "inherit", "initial", "inline", "none", "normal", "relative", "solid",
    "sticky", "transparent", "unset",
];

const CSS_OPERATORS: &[&str] = &[
    "{", "}", ":", ";", ",", ">", "+", "~", "*", "(", ")", "!", "=",
];

const CSS_NUMBER: &str =
    r"#[0-9a-fA-F]{3,8}\b|\d*\.?\d+(?:px|rem|em|vh|vw|vmin|vmax|ch|ex|fr|deg|rad|turn|ms|s|%)?";

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

const RUST_OPERATORS: &[&str] = &[
    "..=", "<<=", ">>=", "::", "->", "=>", "==", "!=", "<=", ">=", "&&", "||", "+=", "-=",
    "*=", "/=", "%=", "^=", "&=", "|=", "<<", ">>", "..", "+", "-", "*", "/", "%", "=", "<",
    ">", "!", "&", "|", "^", "?", "@",
];

const RUST_NUMBER: &str = r"(?:0x[0-9a-fA-F_]+|0o[0-7_]+|0b[01_]+|\d[\d_]*(?:\.\d[\d_]*)?(?:[eE][+-]?\d+)?)(?:[iu](?:8|16|32|64|128|size)|f32|f64)?";

/// Raw strings with up to three hashes. Longer fences are tried first so
/// `r##"a "# b"##` closes at the matching fence.
const RUST_RAW_STRING: &str =
    r####"b?r###"[\s\S]*?"###|b?r##"[\s\S]*?"##|b?r#"[\s\S]*?"#"####;

const BASH_KEYWORDS: &[&str] = &[
    "alias", "break", "case", "cd", "continue", "declare", "do", "done", "echo", "elif", "else",
    "esac", "exit", "export", "false", "fi", "for", "function", "if", "in", "local", "readonly",
    "return", "shift", "source", "then", "true", "unset", "until", "while",
];

const BASH_OPERATORS: &[&str] = &[
    "&&", "||", ";;", ">>", "<<", "|", ">", "<", "=", "!", "&", ";",
];

/// Alias keys resolved to canonical language names.
pub const ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("mjs", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("py", "python"),
    ("python3", "python"),
    ("postgresql", "sql"),
    ("mysql", "sql"),
    ("yml", "yaml"),
    ("rs", "rust"),
    ("sh", "bash"),
    ("shell", "bash"),
    ("zsh", "bash"),
];

pub fn javascript() -> Result<LanguageRules, HighlightError> {
    LanguageRules::builder("javascript")
        .keywords(JS_KEYWORDS)
        .operators(JS_OPERATORS)
        .comment(LINE_SLASH_COMMENT)
        .comment(BLOCK_COMMENT)
        .string(DOUBLE_QUOTED)
        .string(SINGLE_QUOTED)
        .string(TEMPLATE_LITERAL)
        .number(JS_NUMBER)
        .function(CALL_NAME)
        .class_name(PASCAL_CASE)
        .build()
}

pub fn typescript() -> Result<LanguageRules, HighlightError> {
    LanguageRules::builder("typescript")
        .keywords(JS_KEYWORDS)
        .keywords(TS_EXTRA_KEYWORDS)
        .operators(JS_OPERATORS)
        .comment(LINE_SLASH_COMMENT)
        .comment(BLOCK_COMMENT)
        .string(DOUBLE_QUOTED)
        .string(SINGLE_QUOTED)
        .string(TEMPLATE_LITERAL)
        .number(JS_NUMBER)
        .function(CALL_NAME)
        .class_name(PASCAL_CASE)
        .build()
}

pub fn java() -> Result<LanguageRules, HighlightError> {
    LanguageRules::builder("java")
        .keywords(JAVA_KEYWORDS)
        .operators(JAVA_OPERATORS)
        .comment(LINE_SLASH_COMMENT)
        .comment(BLOCK_COMMENT)
        .string(TRIPLE_DOUBLE_QUOTED)
        .string(DOUBLE_QUOTED)
        .string(SINGLE_QUOTED)
        .number(JAVA_NUMBER)
        .function(CALL_NAME)
        .class_name(PASCAL_CASE)
        .build()
}

pub fn python() -> Result<LanguageRules, HighlightError> {
    LanguageRules::builder("python")
        .keywords(PYTHON_KEYWORDS)
        .operators(PYTHON_OPERATORS)
        .comment(HASH_COMMENT)
        .string(TRIPLE_DOUBLE_QUOTED)
        .string(TRIPLE_SINGLE_QUOTED)
        .string(DOUBLE_QUOTED)
        .string(SINGLE_QUOTED)
        .number(PYTHON_NUMBER)
        .function(r"([A-Za-z_]\w*)\s*\(")
        .class_name(PASCAL_CASE)
        .build()
}

pub fn sql() -> Result<LanguageRules, HighlightError> {
    LanguageRules::builder("sql")
        .keywords(SQL_KEYWORDS)
        .case_insensitive_keywords()
        .operators(SQL_OPERATORS)
        .comment(r"--[^\n]*")
        .comment(BLOCK_COMMENT)
        .string(r"'(?:[^']|'')*'")
        .string(DOUBLE_QUOTED)
        .number(r"\d+(?:\.\d+)?(?:[eE][+-]?\d+)?")
        .function(r"([A-Za-z_]\w*)\s*\(")
        .build()
}

pub fn yaml() -> Result<LanguageRules, HighlightError> {
    LanguageRules::builder("yaml")
        .keywords(YAML_KEYWORDS)
        .operators(YAML_OPERATORS)
        .comment(HASH_COMMENT)
        .comments_after_whitespace()
        .string(DOUBLE_QUOTED)
        .string(SINGLE_QUOTED)
        .number(SIGNED_DECIMAL)
        .build()
}

pub fn json() -> Result<LanguageRules, HighlightError> {
    LanguageRules::builder("json")
        .keywords(&["true", "false", "null"])
        .operators(&["{", "}", "[", "]", ":", ","])
        .string(DOUBLE_QUOTED)
        .number(SIGNED_DECIMAL)
        .build()
}

pub fn css() -> Result<LanguageRules, HighlightError> {
    LanguageRules::builder("css")
        .keywords(CSS_KEYWORDS)
        .operators(CSS_OPERATORS)
        .comment(BLOCK_COMMENT)
        .string(DOUBLE_QUOTED)
        .string(SINGLE_QUOTED)
        .number(CSS_NUMBER)
        .function(r"([A-Za-z-][\w-]*)\(")
        .class_name(r"\.[A-Za-z_-][\w-]*")
        .build()
}

pub fn rust() -> Result<LanguageRules, HighlightError> {
    LanguageRules::builder("rust")
        .keywords(RUST_KEYWORDS)
        .operators(RUST_OPERATORS)
        .comment(LINE_SLASH_COMMENT)
        .comment(BLOCK_COMMENT)
        .string(RUST_RAW_STRING)
        .string(r#"b?r?"(?:[^"\\]|\\[\s\S])*""#)
        .string(r"b?'(?:[^'\\\n]|\\[^'\n]+)'")
        .number(RUST_NUMBER)
        .function(r"([A-Za-z_]\w*)(?:\s*\(|!\s*[\(\[\{])")
        .class_name(PASCAL_CASE)
        .build()
}

pub fn bash() -> Result<LanguageRules, HighlightError> {
    LanguageRules::builder("bash")
        .keywords(BASH_KEYWORDS)
        .operators(BASH_OPERATORS)
        .comment(HASH_COMMENT)
        .comments_after_whitespace()
        .string(MULTILINE_DOUBLE_QUOTED)
        .string(r"'[^']*'")
        .number(r"\d+")
        .function(r"([A-Za-z_][\w-]*)\s*\(\s*\)")
        .build()
}

/// Build the registry of every built-in language and alias.
pub fn builtin() -> Result<Registry, HighlightError> {
    let mut registry = Registry::new();
    for rules in [
        javascript()?,
        typescript()?,
        java()?,
        python()?,
        sql()?,
        yaml()?,
        json()?,
        css()?,
        rust()?,
        bash()?,
    ] {
        registry.register(rules);
    }
    for (alias, target) in ALIASES {
        registry.alias(alias, target)?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::Scanner;
    use crate::token::TokenKind;
    use pretty_assertions::assert_eq;

    /// Helper: tokenize with a language and return (kind, value) pairs,
    /// trimming text tokens and dropping whitespace-only ones.
    fn classified(rules: &LanguageRules, source: &str) -> Vec<(TokenKind, String)> {
        Scanner::tokenize(source, rules)
            .into_iter()
            .filter_map(|t| match t.kind {
                TokenKind::Text if t.value.trim().is_empty() => None,
                TokenKind::Text => Some((t.kind, t.value.trim().to_string())),
                kind => Some((kind, t.value)),
            })
            .collect()
    }

    fn kinds_of(rules: &LanguageRules, source: &str, kind: TokenKind) -> Vec<String> {
        Scanner::tokenize(source, rules)
            .into_iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.value)
            .collect()
    }

    #[test]
    fn test_builtin_tables_compile() {
        let registry = builtin().unwrap();
        for name in [
            "javascript", "typescript", "java", "python", "sql", "yaml", "json", "css", "rust",
            "bash",
        ] {
            assert!(registry.get(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn test_aliases_resolve() {
        let registry = builtin().unwrap();
        for (alias, target) in ALIASES {
            assert_eq!(registry.get(alias).map(|r| r.name()), Some(*target));
        }
    }

    // =========================================================================
    // JavaScript / TypeScript
    // =========================================================================

    #[test]
    fn test_javascript_statement() {
        let rules = javascript().unwrap();
        assert_eq!(
            classified(&rules, "const total = sum(a, 42);"),
            vec![
                (TokenKind::Keyword, "const".to_string()),
                (TokenKind::Text, "total".to_string()),
                (TokenKind::Operator, "=".to_string()),
                (TokenKind::Function, "sum".to_string()),
                (TokenKind::Text, "(a,".to_string()),
                (TokenKind::Number, "42".to_string()),
                (TokenKind::Text, ");".to_string()),
            ]
        );
    }

    #[test]
    fn test_javascript_template_literal_spans_lines() {
        let rules = javascript().unwrap();
        assert_eq!(
            kinds_of(&rules, "let s = `a\nb`;", TokenKind::String),
            vec!["`a\nb`"]
        );
    }

    #[test]
    fn test_javascript_strict_equality() {
        let rules = javascript().unwrap();
        assert_eq!(kinds_of(&rules, "a === b", TokenKind::Operator), vec!["==="]);
        assert_eq!(kinds_of(&rules, "a !== b", TokenKind::Operator), vec!["!=="]);
    }

    #[test]
    fn test_typescript_type_keywords() {
        let rules = typescript().unwrap();
        assert_eq!(
            kinds_of(&rules, "interface User { name: string }", TokenKind::Keyword),
            vec!["interface", "string"]
        );
        assert_eq!(
            kinds_of(&rules, "interface User { name: string }", TokenKind::ClassName),
            vec!["User"]
        );
    }

    // =========================================================================
    // Java
    // =========================================================================

    #[test]
    fn test_java_number_suffixes() {
        let rules = java().unwrap();
        assert_eq!(
            kinds_of(&rules, "float f = 1.5f; long l = 10L; double d = 2e10;", TokenKind::Number),
            vec!["1.5f", "10L", "2e10"]
        );
    }

    #[test]
    fn test_java_class_and_method() {
        let rules = java().unwrap();
        let source = "public class Main { public static void main(String[] args) {} }";
        assert_eq!(kinds_of(&rules, source, TokenKind::ClassName), vec!["Main", "String"]);
        assert_eq!(kinds_of(&rules, source, TokenKind::Function), vec!["main"]);
    }

    #[test]
    fn test_java_comment_before_operator() {
        let rules = java().unwrap();
        assert_eq!(
            kinds_of(&rules, "/* a / b */ x / y", TokenKind::Comment),
            vec!["/* a / b */"]
        );
        assert_eq!(kinds_of(&rules, "/* a / b */ x / y", TokenKind::Operator), vec!["/"]);
    }

    // =========================================================================
    // Python
    // =========================================================================

    #[test]
    fn test_python_def() {
        let rules = python().unwrap();
        assert_eq!(
            classified(&rules, "def greet(name):"),
            vec![
                (TokenKind::Keyword, "def".to_string()),
                (TokenKind::Function, "greet".to_string()),
                (TokenKind::Text, "(name):".to_string()),
            ]
        );
    }

    #[test]
    fn test_python_triple_quoted_before_single() {
        let rules = python().unwrap();
        let source = "x = \"\"\"doc \"quoted\"\n\"\"\"";
        assert_eq!(
            kinds_of(&rules, source, TokenKind::String),
            vec!["\"\"\"doc \"quoted\"\n\"\"\""]
        );
    }

    #[test]
    fn test_python_hash_comment() {
        let rules = python().unwrap();
        assert_eq!(
            kinds_of(&rules, "x = 1  # note", TokenKind::Comment),
            vec!["# note"]
        );
    }

    #[test]
    fn test_python_elif_is_one_keyword() {
        let rules = python().unwrap();
        assert_eq!(kinds_of(&rules, "elif x:", TokenKind::Keyword), vec!["elif"]);
    }

    // =========================================================================
    // SQL, YAML, JSON, CSS
    // =========================================================================

    #[test]
    fn test_sql_keywords_any_case() {
        let rules = sql().unwrap();
        assert_eq!(
            kinds_of(&rules, "select id FROM users Where id = 1", TokenKind::Keyword),
            vec!["select", "FROM", "Where"]
        );
    }

    #[test]
    fn test_sql_comment_beats_minus() {
        let rules = sql().unwrap();
        assert_eq!(kinds_of(&rules, "a - b -- note", TokenKind::Comment), vec!["-- note"]);
        assert_eq!(kinds_of(&rules, "a - b -- note", TokenKind::Operator), vec!["-"]);
    }

    #[test]
    fn test_sql_doubled_quote_escape() {
        let rules = sql().unwrap();
        assert_eq!(
            kinds_of(&rules, "SELECT 'it''s'", TokenKind::String),
            vec!["'it''s'"]
        );
    }

    #[test]
    fn test_yaml_document() {
        let rules = yaml().unwrap();
        let source = "---\nenabled: true\nretries: -3 # max\n";
        assert_eq!(kinds_of(&rules, source, TokenKind::Keyword), vec!["true"]);
        assert_eq!(kinds_of(&rules, source, TokenKind::Number), vec!["-3"]);
        assert_eq!(kinds_of(&rules, source, TokenKind::Comment), vec!["# max"]);
        assert_eq!(kinds_of(&rules, source, TokenKind::Operator), vec!["---", ":", ":"]);
    }

    #[test]
    fn test_yaml_hash_inside_value() {
        let rules = yaml().unwrap();
        assert_eq!(
            kinds_of(&rules, "color: red#1 # note", TokenKind::Comment),
            vec!["# note"]
        );
    }

    #[test]
    fn test_json_values() {
        let rules = json().unwrap();
        assert_eq!(
            classified(&rules, r#"{"a": [1.5, null]}"#),
            vec![
                (TokenKind::Operator, "{".to_string()),
                (TokenKind::String, "\"a\"".to_string()),
                (TokenKind::Operator, ":".to_string()),
                (TokenKind::Operator, "[".to_string()),
                (TokenKind::Number, "1.5".to_string()),
                (TokenKind::Operator, ",".to_string()),
                (TokenKind::Keyword, "null".to_string()),
                (TokenKind::Operator, "]".to_string()),
                (TokenKind::Operator, "}".to_string()),
            ]
        );
    }

    #[test]
    fn test_css_rule() {
        let rules = css().unwrap();
        let source = ".card { color: #fff; width: calc(100% - 2rem) !important; }";
        assert_eq!(kinds_of(&rules, source, TokenKind::ClassName), vec![".card"]);
        assert_eq!(kinds_of(&rules, source, TokenKind::Number), vec!["#fff", "100%", "2rem"]);
        assert_eq!(kinds_of(&rules, source, TokenKind::Function), vec!["calc"]);
        assert_eq!(kinds_of(&rules, source, TokenKind::Keyword), vec!["important"]);
    }

    // =========================================================================
    // Rust, Bash
    // =========================================================================

    #[test]
    fn test_rust_macro_and_lifetime() {
        let rules = rust().unwrap();
        let source = "fn name(s: &'a str) { println!(\"{s}\"); }";
        assert_eq!(kinds_of(&rules, source, TokenKind::Function), vec!["name", "println"]);
        assert_eq!(kinds_of(&rules, source, TokenKind::String), vec!["\"{s}\""]);
    }

    #[test]
    fn test_rust_raw_string_with_hashes() {
        let rules = rust().unwrap();
        assert_eq!(
            kinds_of(&rules, r##"let s = r#"a "q" b"#;"##, TokenKind::String),
            vec![r##"r#"a "q" b"#"##]
        );
        assert_eq!(
            kinds_of(&rules, r###"r##"x "# y"##"###, TokenKind::String),
            vec![r###"r##"x "# y"##"###]
        );
    }

    #[test]
    fn test_rust_not_equal_is_not_macro() {
        let rules = rust().unwrap();
        assert!(kinds_of(&rules, "x != y", TokenKind::Function).is_empty());
    }

    #[test]
    fn test_bash_script() {
        let rules = bash().unwrap();
        let source = "if [ -f \"$F\" ]; then echo 'ok'; fi # check";
        assert_eq!(kinds_of(&rules, source, TokenKind::Keyword), vec!["if", "then", "echo", "fi"]);
        assert_eq!(kinds_of(&rules, source, TokenKind::String), vec!["\"$F\"", "'ok'"]);
        assert_eq!(kinds_of(&rules, source, TokenKind::Comment), vec!["# check"]);
    }

    #[test]
    fn test_bash_hash_inside_words() {
        let rules = bash().unwrap();
        let source = "for i in $(seq 1 ${#arr[@]}); do echo $#; done";
        assert!(kinds_of(&rules, source, TokenKind::Comment).is_empty());
        assert_eq!(
            kinds_of(&rules, source, TokenKind::Keyword),
            vec!["for", "in", "do", "echo", "done"]
        );
    }

    #[test]
    fn test_bash_comment_at_line_start() {
        let rules = bash().unwrap();
        assert_eq!(
            kinds_of(&rules, "# setup
export A=1", TokenKind::Comment),
            vec!["# setup"]
        );
    }
}
