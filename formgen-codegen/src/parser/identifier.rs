//! Swift identifier checks for names that reach generated text.

/// Words Swift reserves in declarations, statements and expressions.
const SWIFT_KEYWORDS: &[&str] = &[
    "Any", "Self", "_", "as", "associatedtype", "await", "break", "case", "catch", "class",
    "continue", "default", "defer", "deinit", "do", "else", "enum", "extension", "fallthrough",
    "false", "fileprivate", "for", "func", "guard", "if", "import", "in", "init", "inout",
    "internal", "is", "let", "nil", "open", "operator", "precedencegroup", "private", "protocol",
    "public", "repeat", "rethrows", "return", "self", "static", "struct", "subscript", "super",
    "switch", "throw", "throws", "true", "try", "typealias", "var", "where", "while",
];

pub fn is_swift_keyword(name: &str) -> bool {
    SWIFT_KEYWORDS.contains(&name)
}

/// Check that `name` can be emitted unescaped as a Swift identifier.
///
/// The error is a short reason, without the name.
pub fn check_swift_identifier(name: &str) -> Result<(), &'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("is empty");
    };
    if !(first == '_' || first.is_alphabetic()) {
        return Err("must start with a letter or `_`");
    }
    if !chars.all(|c| c == '_' || c.is_alphanumeric()) {
        return Err("may only contain letters, digits and `_`");
    }
    if is_swift_keyword(name) {
        return Err("is a Swift keyword");
    }
    Ok(())
}
