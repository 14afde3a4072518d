//! Generic document value
//!
//! Decoded JSON and YAML documents are converted into [`Value`] before being
//! compared. Mappings keep their keys sorted so every consumer walks them in
//! the same order.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Number;

/// A mapping of string keys to values, sorted by key
pub type Mapping = BTreeMap<String, Value>;

/// A decoded scalar, sequence or mapping
///
/// Equality is structural and type-sensitive: `1`, `1.0` and `"1"` are all
/// different values, and a mapping never equals a non-mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// Compact JSON text for this value (`"text"`, `[1,2]`, `{"a":1}`)
    pub fn to_json_string(&self) -> String {
        // Keys are always strings and every `Number` is finite, so serde_json accepts the tree.
        serde_json::to_string(self).expect("value tree serializes to JSON")
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// YAML conversion fails on non-finite floats (`.inf`, `.nan`) and on mapping
/// keys that are not scalars; the error message names the offending item.
impl TryFrom<serde_yaml::Value> for Value {
    type Error = String;

    fn try_from(value: serde_yaml::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => Value::Number(yaml_number(&n)?),
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(items) => Value::Sequence(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_yaml::Value::Mapping(map) => {
                let mut out = Mapping::new();
                for (key, value) in map {
                    out.insert(yaml_key(key)?, Value::try_from(value)?);
                }
                Value::Mapping(out)
            }
            serde_yaml::Value::Tagged(tagged) => Value::try_from(tagged.value)?,
        })
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Result<Number, String> {
    if let Some(u) = n.as_u64() {
        return Ok(Number::from(u));
    }
    if let Some(i) = n.as_i64() {
        return Ok(Number::from(i));
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| format!("non-finite number `{}` is not supported", n))
}

fn yaml_key(key: serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(format!("unsupported mapping key: {:?}", other)),
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

/// Canonical text of a value: bare strings, `null`, numbers and booleans as
/// written, sequences and mappings as compact JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Sequence(_) | Value::Mapping(_) => write!(f, "{}", self.to_json_string()),
        }
    }
}
