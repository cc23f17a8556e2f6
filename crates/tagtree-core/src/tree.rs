//! Value tree serialization
//!
//! Writes a [`Value`] as nested XML tags under a root tag. Mapping keys become
//! child tags, sequence elements become [`ITEM_TAG`] children and scalars
//! become text bodies. Output is pretty printed: an XML declaration, one tag
//! per line indented by nesting level, leaf tags on a single line and empty
//! bodies as `<tag/>`.
//!
//! Text bodies are escaped so the output always parses back. Keys are used as
//! tag names without validation. Recursion depth follows value depth and is not
//! bounded.

use indexmap::IndexMap;

use crate::options::{SequenceStyle, TreeOptions};
use crate::serialize::push_escaped;
use crate::value::Value;

/// Tag wrapping each sequence element
pub const ITEM_TAG: &str = "item";

const DECLARATION: &str = "<?xml version=\"1.0\" ?>\n";

/// Serialize a value tree under `root_name` with default options
///
/// ```rust
/// use tagtree_core::{serialize_tree, Value};
///
/// let value = Value::mapping([("title", "News")]);
/// assert_eq!(
///     serialize_tree("channel", &value),
///     "<?xml version=\"1.0\" ?>\n<channel>\n\t<title>News</title>\n</channel>\n"
/// );
/// ```
pub fn serialize_tree(root_name: &str, value: &Value) -> String {
    serialize_tree_with(root_name, value, &TreeOptions::default())
}

/// Serialize a value tree under `root_name`
pub fn serialize_tree_with(root_name: &str, value: &Value, options: &TreeOptions) -> String {
    let mut output = String::with_capacity(256);
    if options.declaration {
        output.push_str(DECLARATION);
    }
    write_tag(root_name, value, options, 0, &mut output);
    output
}

fn write_tag(name: &str, value: &Value, options: &TreeOptions, depth: usize, out: &mut String) {
    push_indent(options, depth, out);

    match value {
        Value::Scalar(scalar) => {
            let text = scalar.to_string();
            if text.is_empty() {
                empty_tag(name, out);
            } else {
                out.push('<');
                out.push_str(name);
                out.push('>');
                push_escaped(&text, true, out);
                close_tag(name, out);
            }
        }

        Value::Sequence(items) if items.is_empty() => empty_tag(name, out),

        Value::Sequence(items) => {
            open_tag(name, out);
            for item in items {
                write_tag(ITEM_TAG, item, options, depth + 1, out);
            }
            push_indent(options, depth, out);
            close_tag(name, out);
        }

        Value::Mapping(map) if !has_fields(map, options) => empty_tag(name, out),

        Value::Mapping(map) => {
            open_tag(name, out);
            for (key, field) in map {
                write_field(key, field, options, depth + 1, out);
            }
            push_indent(options, depth, out);
            close_tag(name, out);
        }
    }
}

fn write_field(key: &str, value: &Value, options: &TreeOptions, depth: usize, out: &mut String) {
    match (options.sequence_style, value) {
        (SequenceStyle::Repeated, Value::Sequence(items)) => {
            for item in items {
                write_tag(key, item, options, depth, out);
            }
        }
        _ => write_tag(key, value, options, depth, out),
    }
}

/// Whether a mapping emits at least one child tag
fn has_fields(map: &IndexMap<String, Value>, options: &TreeOptions) -> bool {
    match options.sequence_style {
        SequenceStyle::Wrapped => !map.is_empty(),
        SequenceStyle::Repeated => map.values().any(|value| match value {
            Value::Sequence(items) => !items.is_empty(),
            _ => true,
        }),
    }
}

fn open_tag(name: &str, out: &mut String) {
    out.push('<');
    out.push_str(name);
    out.push_str(">\n");
}

fn close_tag(name: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(name);
    out.push_str(">\n");
}

fn empty_tag(name: &str, out: &mut String) {
    out.push('<');
    out.push_str(name);
    out.push_str("/>\n");
}

fn push_indent(options: &TreeOptions, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(&options.indent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;

    fn channel() -> Value {
        Value::mapping([
            ("title", Value::from("News")),
            (
                "item",
                Value::sequence([
                    Value::mapping([("title", "A")]),
                    Value::mapping([("title", "B")]),
                ]),
            ),
        ])
    }

    /// Check that a parsed element carries exactly the structure of `value`
    fn assert_structure(node: roxmltree::Node, value: &Value) {
        let children: Vec<roxmltree::Node> = node.children().filter(|n| n.is_element()).collect();
        match value {
            Value::Scalar(scalar) => {
                assert!(children.is_empty(), "scalar <{}> has child tags", node.tag_name().name());
                assert_eq!(node.text().unwrap_or(""), scalar.to_string());
            }
            Value::Sequence(items) => {
                assert_eq!(children.len(), items.len());
                for (child, item) in children.iter().zip(items) {
                    assert_eq!(child.tag_name().name(), ITEM_TAG);
                    assert_structure(*child, item);
                }
            }
            Value::Mapping(map) => {
                assert_eq!(children.len(), map.len());
                for (child, (key, field)) in children.iter().zip(map) {
                    assert_eq!(child.tag_name().name(), key.as_str());
                    assert_structure(*child, field);
                }
            }
        }
    }

    fn assert_round_trip(root: &str, value: &Value) {
        let xml = serialize_tree(root, value);
        let doc = roxmltree::Document::parse(&xml).unwrap();
        assert_eq!(doc.root_element().tag_name().name(), root);
        assert_structure(doc.root_element(), value);
    }

    #[test]
    fn test_channel_wrapped() {
        let result = serialize_tree("channel", &channel());
        let expected = "<?xml version=\"1.0\" ?>\n\
                        <channel>\n\
                        \t<title>News</title>\n\
                        \t<item>\n\
                        \t\t<item>\n\
                        \t\t\t<title>A</title>\n\
                        \t\t</item>\n\
                        \t\t<item>\n\
                        \t\t\t<title>B</title>\n\
                        \t\t</item>\n\
                        \t</item>\n\
                        </channel>\n";
        assert_eq!(result, expected);
    }

    #[test]
    fn test_channel_repeated() {
        let options = TreeOptions {
            sequence_style: SequenceStyle::Repeated,
            ..Default::default()
        };
        let result = serialize_tree_with("channel", &channel(), &options);

        let doc = roxmltree::Document::parse(&result).unwrap();
        let items: Vec<roxmltree::Node> = doc
            .root_element()
            .children()
            .filter(|n| n.has_tag_name("item"))
            .collect();
        assert_eq!(items.len(), 2);
        assert_eq!(doc.descendants().filter(|n| n.has_tag_name("item")).count(), 2);

        let titles: Vec<&str> = items
            .iter()
            .map(|item| {
                item.children()
                    .find(|n| n.has_tag_name("title"))
                    .and_then(|n| n.text())
                    .unwrap_or("")
            })
            .collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn test_top_level_sequence_uses_item() {
        let value = Value::sequence([1, 2]);
        let options = TreeOptions {
            declaration: false,
            indent: "  ".to_string(),
            sequence_style: SequenceStyle::Repeated,
        };
        assert_eq!(
            serialize_tree_with("numbers", &value, &options),
            "<numbers>\n  <item>1</item>\n  <item>2</item>\n</numbers>\n"
        );
    }

    #[test]
    fn test_scalar_root() {
        let options = TreeOptions {
            declaration: false,
            ..Default::default()
        };
        assert_eq!(
            serialize_tree_with("count", &Value::from(42), &options),
            "<count>42</count>\n"
        );
    }

    #[test]
    fn test_empty_bodies() {
        let value = Value::mapping([
            ("none", Value::null()),
            ("blank", Value::from("")),
            ("list", Value::Sequence(Vec::new())),
            ("map", Value::Mapping(IndexMap::new())),
        ]);
        let result = serialize_tree("root", &value);
        assert_eq!(
            result,
            "<?xml version=\"1.0\" ?>\n<root>\n\t<none/>\n\t<blank/>\n\t<list/>\n\t<map/>\n</root>\n"
        );
    }

    #[test]
    fn test_repeated_empty_sequence_emits_nothing() {
        let options = TreeOptions {
            declaration: false,
            sequence_style: SequenceStyle::Repeated,
            ..Default::default()
        };
        let value = Value::mapping([("entry", Value::Sequence(Vec::new()))]);
        assert_eq!(serialize_tree_with("feed", &value, &options), "<feed/>\n");
    }

    #[test]
    fn test_text_is_escaped() {
        let value = Value::mapping([("q", "a < b & \"c\"")]);
        let result = serialize_tree("root", &value);
        assert!(result.contains("<q>a &lt; b &amp; &quot;c&quot;</q>"));
        assert_round_trip("root", &value);
    }

    #[test]
    fn test_round_trip_rss() {
        let value = Value::from(serde_json::json!({
            "channel": {
                "title": "Site news",
                "link": "https://example.com",
                "description": "Latest news",
                "item": [
                    {"title": "News 1", "link": "https://example.com/news1", "pubDate": "2024-12-01"},
                    {"title": "News 2", "link": "https://example.com/news2", "pubDate": "2024-12-02"}
                ]
            }
        }));
        assert_round_trip("rss", &value);
    }

    #[test]
    fn test_round_trip_mixed() {
        let value = Value::mapping([
            ("flag", Value::from(true)),
            ("ratio", Value::from(0.25)),
            ("matrix", Value::sequence([Value::sequence([1, 2]), Value::sequence([3])])),
            ("empty", Value::Sequence(Vec::new())),
            ("label", Value::Scalar(Scalar::Text("Привет".to_string()))),
        ]);
        assert_round_trip("data", &value);
    }
}
