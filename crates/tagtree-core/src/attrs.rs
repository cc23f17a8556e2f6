//! Attribute key normalization
//!
//! Attribute names that collide with Rust keywords or with names a caller
//! cannot otherwise spell (`class`, `type`, `for`, `async`) may be written with
//! a trailing [`TRAILING_MARKER`]. The marker is stripped before the attribute
//! is stored, so `class_` is emitted as `class`. Every trailing marker is
//! removed, not just one. Nothing else about the key or the value is checked
//! or escaped.

use indexmap::IndexMap;

/// Normalized attributes in insertion order
pub type Attributes = IndexMap<String, String>;

/// Suffix that may be appended to an attribute key to dodge a reserved word
pub const TRAILING_MARKER: char = '_';

/// Strip trailing markers from a raw attribute key
pub fn normalize_key(key: &str) -> &str {
    key.trim_end_matches(TRAILING_MARKER)
}

/// Normalize every key of a raw attribute list.
///
/// When two raw keys normalize to the same name, the attribute keeps the
/// position of the first one and the value of the last one.
pub fn normalize_attributes<I, K, V>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (normalize_key(key.as_ref()).to_string(), value.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_trailing_marker() {
        assert_eq!(normalize_key("class_"), "class");
        assert_eq!(normalize_key("for__"), "for");
        assert_eq!(normalize_key("data_id"), "data_id");
        assert_eq!(normalize_key("href"), "href");
    }

    #[test]
    fn test_values_pass_through() {
        let attrs = normalize_attributes([("style", "color: blue;"), ("title", " \"x\" ")]);
        assert_eq!(attrs["style"], "color: blue;");
        assert_eq!(attrs["title"], " \"x\" ");
    }

    #[test]
    fn test_preserves_insertion_order() {
        let attrs = normalize_attributes([("src", "a.png"), ("alt", "A"), ("class_", "card-img")]);
        let keys: Vec<&str> = attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["src", "alt", "class"]);
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_attributes([("class_", "a"), ("type_", "b"), ("id", "c")]);
        let twice = normalize_attributes(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_collision_keeps_first_position_last_value() {
        let attrs = normalize_attributes([("class", "a"), ("id", "b"), ("class_", "c")]);
        let pairs: Vec<(&str, &str)> = attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, [("class", "c"), ("id", "b")]);
    }
}
