//! String casing and sanitizing helpers for generated identifiers.
//!
//! All functions are pure. Word splitting recognizes `.`, space, `_` and `-`
//! as delimiters, and splits camel-cased input only when it contains at least
//! one uppercase letter.

use std::sync::LazyLock;

use regex::Regex;

static ILLEGAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w. _-]+").expect("Invalid regex"));

static CAMEL_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]?[a-z]+").expect("Invalid regex"));

const DELIMITERS: [char; 4] = ['.', ' ', '_', '-'];

/// Keywords of the generated target language that can't be used as names.
const RESERVED_WORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Removes every run of characters that is neither a word character nor a
/// delimiter.
///
/// ## Examples
///
/// ```
/// use enumgen_lib::casing::sanitize;
///
/// assert_eq!(sanitize("#bad value!"), "bad value");
/// ```
pub fn sanitize(value: &str) -> String {
    ILLEGAL_CHARS.replace_all(value, "").into_owned()
}

/// Splits a string into words on delimiters and, when the string has any
/// uppercase letter, on camel-case boundaries.
pub fn split_words(value: &str) -> Vec<String> {
    let spaced = if value.chars().any(char::is_uppercase) {
        CAMEL_WORD.replace_all(value, " $0 ").into_owned()
    } else {
        value.to_string()
    };

    spaced
        .split(DELIMITERS)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Converts a string to `snake_case`.
///
/// ## Examples
///
/// ```
/// use enumgen_lib::casing::snake_case;
///
/// assert_eq!(snake_case("inProgress"), "in_progress");
/// assert_eq!(snake_case("IN-PROGRESS"), "in_progress");
/// assert_eq!(snake_case("VALUE_2"), "value_2");
/// ```
pub fn snake_case(value: &str) -> String {
    split_words(&sanitize(value)).join("_").to_lowercase()
}

/// Converts a string to `PascalCase`, keeping the tail of each word as written.
///
/// ## Examples
///
/// ```
/// use enumgen_lib::casing::pascal_case;
///
/// assert_eq!(pascal_case("pet_status"), "PetStatus");
/// assert_eq!(pascal_case("order-item.kind"), "OrderItemKind");
/// ```
pub fn pascal_case(value: &str) -> String {
    split_words(&sanitize(value))
        .iter()
        .map(|word| capitalize(word))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strips string-escape sequences so a value can sit inside a generated
/// string literal.
///
/// A backslash and the character after it are dropped together; a trailing
/// lone backslash and raw control characters are dropped as well.
///
/// ## Examples
///
/// ```
/// use enumgen_lib::casing::remove_string_escapes;
///
/// assert_eq!(remove_string_escapes(r#"say \"hi\""#), "say hi");
/// assert_eq!(remove_string_escapes("tab\there"), "tabhere");
/// ```
pub fn remove_string_escapes(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if !c.is_control() {
            out.push(c);
        }
    }

    out
}

/// Appends `_` to names that collide with a reserved word.
pub fn fix_keywords(value: &str) -> String {
    if RESERVED_WORDS.contains(&value) {
        format!("{value}_")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_word_chars_and_delimiters() {
        assert_eq!(sanitize("a.b c_d-e"), "a.b c_d-e");
        assert_eq!(sanitize("a+b=c"), "abc");
        assert_eq!(sanitize("café"), "café");
    }

    #[test]
    fn split_words_without_uppercase_only_uses_delimiters() {
        assert_eq!(split_words("some_thing-else"), vec!["some", "thing", "else"]);
        assert_eq!(split_words("somethingelse"), vec!["somethingelse"]);
    }

    #[test]
    fn split_words_breaks_camel_case() {
        assert_eq!(split_words("petStatusCode"), vec!["pet", "Status", "Code"]);
        assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
    }

    #[test]
    fn split_words_keeps_all_caps_intact() {
        assert_eq!(split_words("ACTIVE"), vec!["ACTIVE"]);
        assert_eq!(split_words("VALUE_12"), vec!["VALUE", "12"]);
    }

    #[test]
    fn snake_case_normalizes_separators() {
        assert_eq!(snake_case("Pet Status"), "pet_status");
        assert_eq!(snake_case("pet..status"), "pet_status");
        assert_eq!(snake_case("__private"), "private");
    }

    #[test]
    fn snake_case_of_empty_is_empty() {
        assert_eq!(snake_case(""), "");
        assert_eq!(snake_case("#!"), "");
    }

    #[test]
    fn pascal_case_preserves_inner_capitals() {
        assert_eq!(pascal_case("httpServer"), "HttpServer");
        assert_eq!(pascal_case("my_enum"), "MyEnum");
    }

    #[test]
    fn remove_string_escapes_drops_sequences() {
        assert_eq!(remove_string_escapes(r"line\nbreak"), "linebreak");
        assert_eq!(remove_string_escapes(r"back\\slash"), "backslash");
        assert_eq!(remove_string_escapes(r"trailing\"), "trailing");
        assert_eq!(remove_string_escapes("plain"), "plain");
    }

    #[test]
    fn remove_string_escapes_drops_control_characters() {
        assert_eq!(remove_string_escapes("a\nb\r\n"), "ab");
    }

    #[test]
    fn fix_keywords_appends_underscore() {
        assert_eq!(fix_keywords("class"), "class_");
        assert_eq!(fix_keywords("None"), "None_");
        assert_eq!(fix_keywords("status"), "status");
    }
}
