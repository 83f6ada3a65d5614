//! Typed representation of the free-form `variables` section.

use indexmap::IndexMap;
use serde_json::json;

/// Ordered mapping of variable names to typed values.
pub type Variables = IndexMap<String, Value>;

/// A single variable value.
///
/// The variant is chosen from the literal form in the source document:
/// `123` is an [`Value::Int`], `3.14` a [`Value::Float`], `true` a
/// [`Value::Bool`], a mapping a [`Value::Map`] and everything else a
/// [`Value::String`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    Float(f64),
    Map(Variables),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Variables> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Converts the value into the JSON form handed to the template engine.
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::String(s) => json!(s),
            Value::Int(i) => json!(i),
            Value::Bool(b) => json!(b),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Map(map) => variables_to_json(map),
        }
    }
}

/// Decodes an untyped YAML node into [`Variables`].
///
/// A node that is not a mapping yields an empty set of variables instead of
/// an error, since the section is optional.
pub fn decode_variables(node: &serde_yaml::Value) -> Variables {
    match node {
        serde_yaml::Value::Mapping(mapping) => mapping
            .iter()
            .map(|(key, value)| (scalar_to_string(key), decode_value(value)))
            .collect(),
        serde_yaml::Value::Tagged(tagged) => decode_variables(&tagged.value),
        _ => Variables::new(),
    }
}

fn decode_value(node: &serde_yaml::Value) -> Value {
    match node {
        serde_yaml::Value::Bool(b) => Value::Bool(*b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if n.is_u64() {
                // above i64::MAX
                Value::String(n.to_string())
            } else {
                n.as_f64().map(Value::Float).unwrap_or_else(|| Value::String(n.to_string()))
            }
        }
        serde_yaml::Value::Mapping(_) => Value::Map(decode_variables(node)),
        serde_yaml::Value::Tagged(tagged) => decode_value(&tagged.value),
        other => Value::String(scalar_to_string(other)),
    }
}

pub(crate) fn scalar_to_string(node: &serde_yaml::Value) -> String {
    match node {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Null => String::new(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Converts a set of variables into the JSON object used in render contexts.
pub fn variables_to_json(variables: &Variables) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> =
        variables.iter().map(|(key, value)| (key.clone(), value.to_json())).collect();
    serde_json::Value::Object(map)
}
