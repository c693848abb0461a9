//! Invocation context: the parameter values bound for one invocation

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::descriptor::{OperationDescriptor, ParamKind};
use crate::error::{Error, Result};

/// A typed parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    String(String),
    Integer(i64),
    Boolean(bool),
    StringList(Vec<String>),
    Map(BTreeMap<String, String>),
    Json(Value),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::String(_) => ParamKind::String,
            ParamValue::Integer(_) => ParamKind::Integer,
            ParamValue::Boolean(_) => ParamKind::Boolean,
            ParamValue::StringList(_) => ParamKind::StringList,
            ParamValue::Map(_) => ParamKind::Map,
            ParamValue::Json(_) => ParamKind::Json,
        }
    }

    /// JSON form used in request bodies and `^Param` projections
    pub fn to_json(&self) -> Value {
        match self {
            ParamValue::String(s) => Value::String(s.clone()),
            ParamValue::Integer(n) => Value::from(*n),
            ParamValue::Boolean(b) => Value::Bool(*b),
            ParamValue::StringList(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            ParamValue::Map(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect::<Map<String, Value>>(),
            ),
            ParamValue::Json(v) => v.clone(),
        }
    }

    /// Query string rendering; lists repeat the key, maps render as `k=v`
    pub fn to_query_values(&self) -> Vec<String> {
        match self {
            ParamValue::String(s) => vec![s.clone()],
            ParamValue::Integer(n) => vec![n.to_string()],
            ParamValue::Boolean(b) => vec![b.to_string()],
            ParamValue::StringList(items) => items.clone(),
            ParamValue::Map(map) => map.iter().map(|(k, v)| format!("{}={}", k, v)).collect(),
            ParamValue::Json(v) => vec![v.to_string()],
        }
    }

    /// Parse a single raw command-line value for a scalar or JSON kind
    pub fn parse(name: &str, kind: ParamKind, raw: &str) -> Result<Self> {
        match kind {
            ParamKind::String => Ok(ParamValue::String(raw.to_string())),
            ParamKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(ParamValue::Integer)
                .map_err(|e| Error::invalid_value(name, e.to_string())),
            ParamKind::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(ParamValue::Boolean(true)),
                "false" => Ok(ParamValue::Boolean(false)),
                other => Err(Error::invalid_value(
                    name,
                    format!("expected true or false, got '{}'", other),
                )),
            },
            ParamKind::StringList => Ok(ParamValue::StringList(vec![raw.to_string()])),
            ParamKind::Map => Self::parse_map(name, [raw]),
            ParamKind::Json => serde_json::from_str(raw)
                .map(ParamValue::Json)
                .map_err(|e| Error::invalid_value(name, e.to_string())),
        }
    }

    /// Parse `KEY=VALUE` entries into a map value
    pub fn parse_map<'a, I>(name: &str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut map = BTreeMap::new();
        for entry in entries {
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                Error::invalid_value(name, format!("expected KEY=VALUE, got '{}'", entry))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(Error::invalid_value(name, "empty key"));
            }
            map.insert(key.to_string(), value.to_string());
        }
        Ok(ParamValue::Map(map))
    }
}

/// Parameter values bound for a single invocation of one operation.
///
/// A context is created per command execution and consumed by the
/// dispatcher; it is intentionally not `Clone`.
#[derive(Debug)]
pub struct InvocationContext<'a> {
    descriptor: &'a OperationDescriptor,
    values: BTreeMap<&'a str, ParamValue>,
}

impl<'a> InvocationContext<'a> {
    pub fn new(descriptor: &'a OperationDescriptor) -> Self {
        Self {
            descriptor,
            values: BTreeMap::new(),
        }
    }

    pub fn descriptor(&self) -> &'a OperationDescriptor {
        self.descriptor
    }

    /// Bind a value; the name must be declared and the kind must match
    pub fn bind(&mut self, name: &str, value: ParamValue) -> Result<()> {
        let spec = self
            .descriptor
            .param(name)
            .ok_or_else(|| Error::UnknownParameter {
                operation: self.descriptor.name.to_string(),
                name: name.to_string(),
            })?;

        if spec.kind != value.kind() {
            return Err(Error::invalid_value(
                name,
                format!(
                    "expected {}, got {}",
                    spec.kind.as_str(),
                    value.kind().as_str()
                ),
            ));
        }

        self.values.insert(spec.name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
