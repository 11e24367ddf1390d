// Substitution values supplied by the caller

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::error::{ExpandError, Result};

/// A value bound to a template variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
    /// Ordered key/value pairs; order is preserved in the output.
    Associative(Vec<(String, String)>),
}

/// Substitution mapping from variable name to value.
pub type Substitutions = HashMap<String, Value>;

impl Value {
    pub fn scalar(value: impl Into<String>) -> Self {
        Value::Scalar(value.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn associative<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Value::Associative(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Short name of the value shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::List(_) => "list",
            Value::Associative(_) => "associative",
        }
    }

    /// Convert a JSON value, naming the variable in the error when one is given.
    pub fn from_json(name: Option<&str>, json: serde_json::Value) -> Result<Self> {
        let unsupported = |found: &'static str| ExpandError::UnsupportedValueType {
            name: name.map(str::to_string),
            found,
        };

        match json {
            serde_json::Value::String(s) => Ok(Value::Scalar(s)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => Ok(s),
                    other => Err(unsupported(json_kind(&other))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(key, item)| match item {
                    serde_json::Value::String(s) => Ok((key, s)),
                    other => Err(unsupported(json_kind(&other))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Value::Associative),
            other => Err(unsupported(json_kind(&other))),
        }
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ExpandError;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        Value::from_json(None, json)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::list(items)
    }
}

impl From<Vec<(String, String)>> for Value {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Value::Associative(pairs)
    }
}

impl From<Vec<(&str, &str)>> for Value {
    fn from(pairs: Vec<(&str, &str)>) -> Self {
        Value::associative(pairs)
    }
}

/// Convert a JSON object of substitutions, keeping the order of object members.
pub fn substitutions_from_json(json: serde_json::Value) -> Result<Substitutions> {
    match json {
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(name, value)| Value::from_json(Some(&name), value).map(|value| (name, value)))
            .collect(),
        other => Err(ExpandError::UnsupportedValueType {
            name: None,
            found: json_kind(&other),
        }),
    }
}

/// Lookup of variable values by name.
///
/// The expander only reads through this trait and never mutates the mapping.
pub trait Variables {
    fn lookup(&self, name: &str) -> Option<&Value>;
}

impl Variables for HashMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Variables for BTreeMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<V: Variables + ?Sized> Variables for &V {
    fn lookup(&self, name: &str) -> Option<&Value> {
        (**self).lookup(name)
    }
}
