//! Hierarchical identifiers for query results, consumed by an external caching layer.
//!
//! A key is an ordered list of fragments, from the most general to the most specific:
//! contract name, contract address, method and normalized arguments. Any prefix of a key is a key
//! itself, which is what invalidation works on ("everything of this contract", "everything at this
//! address", "every `positions` query", ...).

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use serde_json::Value;

use crate::codec::{self, WireEnvelope};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyFragment {
    Contract(String),
    /// `None` while the client is not connected to a contract yet.
    Address(Option<String>),
    Method(String),
    Args(Value),
}

impl Hash for KeyFragment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            KeyFragment::Contract(name) | KeyFragment::Method(name) => name.hash(state),
            KeyFragment::Address(address) => address.hash(state),
            // args are normalized on construction, so their compact form is canonical
            KeyFragment::Args(args) => args.to_string().hash(state),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CacheKey(Vec<KeyFragment>);

impl CacheKey {
    /// The root key shared by every query of a contract.
    pub fn contract(name: impl Into<String>) -> Self {
        CacheKey(vec![KeyFragment::Contract(name.into())])
    }

    pub fn with_address(mut self, address: Option<&str>) -> Self {
        self.0
            .push(KeyFragment::Address(address.map(ToString::to_string)));
        self
    }

    /// Appends the method and, if given, its arguments. Argument names are converted to their wire
    /// form and `null` fields are dropped, so omitting an optional argument and passing it as
    /// `None` yield the same key.
    pub fn with_method(mut self, method: &str, args: Option<Value>) -> Result<Self> {
        self.0.push(KeyFragment::Method(codec::to_wire_name(method)));

        match args {
            Some(args) => self.with_args(args),
            None => Ok(self),
        }
    }

    /// Appends normalized arguments without a method, e.g. after the method fragments of a
    /// nested query.
    pub fn with_args(mut self, args: Value) -> Result<Self> {
        self.0.push(KeyFragment::Args(normalize(args)?));
        Ok(self)
    }

    /// The full key of a typed query.
    pub fn for_query<Q>(contract: &str, address: Option<&str>, msg: &Q) -> Result<Self>
    where
        Q: Serialize,
    {
        let envelope = WireEnvelope::encode(msg)?;

        Self::contract(contract)
            .with_address(address)
            .with_method(envelope.method(), Some(envelope.args().clone()))
    }

    pub fn starts_with(&self, prefix: &CacheKey) -> bool {
        self.0.starts_with(&prefix.0)
    }

    pub fn fragments(&self) -> &[KeyFragment] {
        &self.0
    }
}

fn normalize(value: Value) -> Result<Value> {
    codec::snake_case_keys(value).map(canonicalize)
}

/// Drops `null` fields and rewrites `-0.0` as `0.0`, so that equal values also print (and hash)
/// the same.
fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>()
                .into_iter()
                .collect(),
        ),
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        Value::Number(number) if number.is_f64() && number.as_f64() == Some(0.0) => {
            Value::from(0.0)
        }
        value => value,
    }
}
