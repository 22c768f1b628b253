//! Identifier sanitizing for catalog keys.
//!
//! Catalog keys are usually file paths (`.envuse/dev.env1`), which are not
//! valid type identifiers. These helpers decide how a key is spelled when it
//! is used as a bare identifier and when it is used as a property name.

/// Whether `c` is a word character (ASCII letter, ASCII digit or `_`).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convert a key to a bare identifier (e.g., ".envuse/dev.env1" -> "_envuse_dev_env1").
///
/// Every non-word character becomes exactly one underscore. Runs are not
/// collapsed, so the relative position of every character is preserved.
/// The empty key becomes `_`, since an empty identifier is not valid.
pub fn to_identifier(key: &str) -> String {
    if key.is_empty() {
        return "_".to_string();
    }
    key.chars()
        .map(|c| if is_word_char(c) { c } else { '_' })
        .collect()
}

/// Whether a key must be quoted when used as a property name.
///
/// The empty key is quoted as well, since a bare empty property is not valid.
pub fn needs_quotes(key: &str) -> bool {
    key.is_empty() || !key.chars().all(is_word_char)
}

/// Encode a string as a double-quoted literal with JSON escaping.
pub fn quote(raw: &str) -> String {
    serde_json::Value::String(raw.to_owned()).to_string()
}

/// Spell a key as a property name: bare when possible, quoted otherwise.
pub fn property_name(key: &str) -> String {
    if needs_quotes(key) {
        quote(key)
    } else {
        key.to_string()
    }
}
