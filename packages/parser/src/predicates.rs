//! Line classification heuristics.
//!
//! The extractor never builds a syntax tree; it decides what a line is from
//! the words on it. Each rule lives in its own predicate so a mismatch can be
//! pinned down and tested in isolation.

/// Words that open a type declaration
pub const TYPE_DECLARATION_MARKERS: &[&str] = &["class", "struct", "record", "interface", "enum"];

/// Visibility marker that makes a member part of the generated interface
pub const PUBLIC_MARKER: &str = "public";

/// Separator between a declared type and its parent on the inheritance line
pub const INHERITANCE_SEPARATOR: char = ':';

/// Modifier keywords dropped from a field line before tokenizing
pub const MODIFIER_KEYWORDS: &[&str] = &[
    "public", "static", "const", "readonly", "virtual", "override", "required", "new",
];

/// Split a line into identifier-ish words, treating punctuation as a separator.
fn words(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
}

fn has_word(line: &str, word: &str) -> bool {
    words(line).any(|w| w == word)
}

/// `// ...`, `/* ...` and ` * ...` doc-comment continuation lines
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

/// The line with any trailing `//` comment removed
pub fn strip_trailing_comment(line: &str) -> &str {
    match line.find("//") {
        Some(i) => &line[..i],
        None => line,
    }
}

/// A line declaring a class-like type, e.g. `public class User`
pub fn is_type_declaration_line(line: &str) -> bool {
    let code = strip_trailing_comment(line);
    !is_comment_line(line) && TYPE_DECLARATION_MARKERS.iter().any(|m| has_word(code, m))
}

/// A type declaration naming a parent, e.g. `public class Admin : User`
pub fn is_inheritance_line(line: &str) -> bool {
    is_type_declaration_line(line) && strip_trailing_comment(line).contains(INHERITANCE_SEPARATOR)
}

/// Constructors and methods: anything with a parameter list
pub fn is_method_line(line: &str) -> bool {
    let code = strip_trailing_comment(line);
    code.contains("()") || (code.contains('(') && code.contains(')'))
}

/// A public member that should become an interface field
pub fn is_field_line(line: &str) -> bool {
    has_word(strip_trailing_comment(line), PUBLIC_MARKER)
        && !is_comment_line(line)
        && !is_type_declaration_line(line)
        && !is_method_line(line)
}
