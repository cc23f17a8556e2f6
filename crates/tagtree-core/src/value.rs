//! Value trees
//!
//! Generic structured data handed to [`crate::serialize_tree`]: scalars,
//! ordered sequences and keyed mappings. Mapping keys keep insertion order.
//!
//! Scalar text is JSON-style on purpose: `Null` is empty and booleans are
//! `true`/`false`, never `None`/`True`.

use std::fmt;

use indexmap::IndexMap;

/// A leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Renders as an empty body
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// A node of a value tree
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Sequence(Vec<Value>),
    Mapping(IndexMap<String, Value>),
}

impl Value {
    pub fn null() -> Self {
        Value::Scalar(Scalar::Null)
    }

    /// Build a mapping from key/value pairs, keeping their order
    pub fn mapping<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Mapping(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build a sequence from values, keeping their order
    pub fn sequence<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Look up a mapping key
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Convert to a JSON value for interchange output.
    ///
    /// Non-finite floats have no JSON form and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Scalar(Scalar::Null) => serde_json::Value::Null,
            Value::Scalar(Scalar::Bool(b)) => serde_json::Value::Bool(*b),
            Value::Scalar(Scalar::Int(i)) => serde_json::Value::from(*i),
            Value::Scalar(Scalar::Float(x)) => serde_json::Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Scalar(Scalar::Text(s)) => serde_json::Value::String(s.clone()),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Mapping(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::Text(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::Text(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Scalar(Scalar::Int(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Scalar(Scalar::Int(i64::from(i)))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(Scalar::Float(x))
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(values: Vec<V>) -> Self {
        Value::sequence(values)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Mapping(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::null(),
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Scalar(Scalar::Int(i))
                } else if n.is_f64() {
                    // is_f64 guarantees as_f64 succeeds
                    Value::Scalar(Scalar::Float(n.as_f64().unwrap_or_default()))
                } else {
                    // u64 beyond i64::MAX, keep the exact digits
                    Value::Scalar(Scalar::Text(n.to_string()))
                }
            }
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(items) => Value::sequence(items),
            serde_json::Value::Object(map) => Value::mapping(map),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_text() {
        assert_eq!(Scalar::Null.to_string(), "");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
        assert_eq!(Scalar::Int(-3).to_string(), "-3");
        assert_eq!(Scalar::Float(1.5).to_string(), "1.5");
        assert_eq!(Scalar::Text("News".to_string()).to_string(), "News");
    }

    #[test]
    fn test_mapping_keeps_order() {
        let value = Value::mapping([("zeta", 1), ("alpha", 2), ("mid", 3)]);
        let Value::Mapping(map) = &value else {
            panic!("expected mapping");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(value.get("alpha"), Some(&Value::from(2)));
    }

    #[test]
    fn test_from_json() {
        let value = Value::from(json!({
            "status": "success",
            "users": [{"id": 1, "name": "Alice"}],
            "ratio": 0.5,
            "active": false,
            "missing": null,
            "big": 18446744073709551615u64
        }));

        assert_eq!(value.get("status"), Some(&Value::from("success")));
        assert_eq!(value.get("ratio"), Some(&Value::from(0.5)));
        assert_eq!(value.get("active"), Some(&Value::from(false)));
        assert_eq!(value.get("missing"), Some(&Value::null()));
        assert_eq!(value.get("big"), Some(&Value::from("18446744073709551615")));
        assert_eq!(
            value.get("users"),
            Some(&Value::sequence([Value::mapping([
                ("id", Value::from(1)),
                ("name", Value::from("Alice")),
            ])]))
        );
    }

    #[test]
    fn test_to_json_preserves_structure() {
        let json = json!({
            "b": [1, "two", true, null],
            "a": {"nested": 2.5}
        });
        assert_eq!(Value::from(json.clone()).to_json(), json);
    }

    #[test]
    fn test_non_finite_float_to_json() {
        assert_eq!(Value::from(f64::NAN).to_json(), serde_json::Value::Null);
    }
}
