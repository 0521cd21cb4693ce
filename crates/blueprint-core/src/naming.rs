//! Identifier case conversion for generated Dart code

/// Words Dart reserves; none of them can be a package or feature name.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "assert", "async", "await", "break", "case", "catch", "class", "const",
    "continue", "default", "do", "dynamic", "else", "enum", "export", "extends", "false", "final",
    "finally", "for", "if", "import", "in", "is", "library", "new", "null", "return", "super",
    "switch", "this", "throw", "true", "try", "var", "void", "while", "with", "yield",
];

/// Check a snake_case identifier, returning the reason it is rejected
pub fn check_snake_identifier(name: &str) -> Result<(), &'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err("must not be empty"),
        Some(c) if !c.is_ascii_lowercase() => return Err("must start with a lowercase letter"),
        Some(_) => {}
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        return Err("may only contain lowercase letters, digits and underscores");
    }
    if name.ends_with('_') || name.contains("__") {
        return Err("must not end with or repeat underscores");
    }
    if RESERVED_WORDS.contains(&name) {
        return Err("is a reserved Dart keyword");
    }
    Ok(())
}

/// `order_history` -> `OrderHistory`
pub fn pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// `order_history` -> `orderHistory`
pub fn camel_case(snake: &str) -> String {
    let pascal = pascal_case(snake);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// `order_history` -> `Order History`
pub fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
