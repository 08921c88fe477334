//! Mapping between in-memory call descriptors and the JSON envelopes a CosmWasm contract expects.
//!
//! A descriptor is a closed enum (one variant per query or action) whose variants serialize as
//! `{ "<snake_case_method>": { ...args } }`. The envelope keeps that shape explicit so the rest of
//! the client can reason about the method name without knowing the concrete enum.

use std::collections::BTreeMap;
use std::fmt;

use error_stack::{report, Report, ResultExt};
use heck::{ToLowerCamelCase, ToSnakeCase};
use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Converts an in-memory (camelCase or PascalCase) name into its wire (snake_case) counterpart.
/// Names that already are snake_case are returned unchanged.
pub fn to_wire_name(name: &str) -> String {
    name.to_snake_case()
}

/// Converts a wire (snake_case) name back into the camelCase form used by dynamic descriptors.
pub fn from_wire_name(name: &str) -> String {
    name.to_lower_camel_case()
}

/// Recursively rewrites all object keys of `value` into snake_case.
///
/// Values are left untouched, `null` included. Fails if two keys of the same object end up with
/// the same wire name, since that would silently drop one of the fields.
pub fn snake_case_keys(value: Value) -> Result<Value> {
    match value {
        Value::Object(map) => {
            let mut converted = BTreeMap::new();
            for (key, value) in map {
                let wire_key = to_wire_name(&key);
                if converted.contains_key(&wire_key) {
                    return Err(report!(Error::Encoding)
                        .attach_printable(format!("field {key} collides with {wire_key}")));
                }

                converted.insert(wire_key, snake_case_keys(value)?);
            }

            Ok(Value::Object(converted.into_iter().collect()))
        }
        Value::Array(values) => values
            .into_iter()
            .map(snake_case_keys)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        value => Ok(value),
    }
}

/// The wire shape of a single contract call: exactly one method name mapped to its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireEnvelope {
    method: String,
    args: Value,
}

impl WireEnvelope {
    /// Encodes a typed call descriptor.
    pub fn encode<M>(msg: &M) -> Result<Self>
    where
        M: Serialize,
    {
        serde_json::to_value(msg)
            .change_context(Error::Encoding)
            .and_then(Self::from_value)
    }

    /// Builds an envelope from a dynamic descriptor whose method and field names may be camelCase.
    pub fn from_descriptor(method: &str, args: Value) -> Result<Self> {
        if method.is_empty() {
            return Err(report!(Error::Encoding).attach_printable("method name must not be empty"));
        }

        Ok(Self {
            method: to_wire_name(method),
            args: snake_case_keys(args)?,
        })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).change_context(Error::Decoding)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => {
                Self::from_map(map).map_err(|err| err.change_context(Error::Encoding))
            }
            value => Err(report!(Error::Encoding).attach_printable(format!(
                "call descriptor must serialize to an object, got {value}"
            ))),
        }
    }

    fn from_map(map: Map<String, Value>) -> std::result::Result<Self, Report<EnvelopeShapeError>> {
        if map.len() != 1 {
            return Err(report!(EnvelopeShapeError(map.len())));
        }

        map.into_iter()
            .next()
            .map(|(method, args)| Self { method, args })
            .ok_or_else(|| report!(EnvelopeShapeError(0)))
    }

    /// Recovers the typed descriptor this envelope was built from.
    pub fn decode<M>(&self) -> Result<M>
    where
        M: DeserializeOwned,
    {
        serde_json::to_value(self)
            .and_then(serde_json::from_value)
            .change_context(Error::Decoding)
            .attach_printable_lazy(|| self.to_string())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).change_context(Error::Encoding)
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn args(&self) -> &Value {
        &self.args
    }
}

impl fmt::Display for WireEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"{}\":{}}}", self.method, self.args)
    }
}

impl Serialize for WireEnvelope {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.method, &self.args)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for WireEnvelope {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_map(map).map_err(|err| D::Error::custom(err.current_context()))
    }
}

#[derive(thiserror::Error, Debug)]
#[error("envelope must contain exactly one method key, found {0}")]
struct EnvelopeShapeError(usize);
