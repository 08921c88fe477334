use async_trait::async_trait;
use cosmwasm_std::Coin;
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::codec::WireEnvelope;
use crate::error::Result;
use crate::fee::Fee;

/// Side-effect-free access to contract state.
#[automock]
#[async_trait]
pub trait QueryTransport {
    /// Runs a smart query against `contract` and returns the raw JSON reply.
    async fn query(&self, contract: String, envelope: WireEnvelope) -> Result<Vec<u8>>;
}

/// Signed submission of state transitions. Implementations own key material, sequencing and
/// broadcasting.
#[automock]
#[async_trait]
pub trait ExecuteTransport {
    async fn execute(
        &self,
        sender: String,
        contract: String,
        envelope: WireEnvelope,
        fee: Fee,
        memo: Option<String>,
        funds: Vec<Coin>,
    ) -> Result<TxResult>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxEvent {
    pub kind: String,
    pub attributes: Vec<(String, String)>,
}

impl TxEvent {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Outcome of a submitted transaction as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxResult {
    pub tx_hash: String,
    pub height: u64,
    pub code: u32,
    pub gas_wanted: u64,
    pub gas_used: u64,
    pub raw_log: String,
    pub events: Vec<TxEvent>,
}

impl TxResult {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Events emitted by the executed contract, i.e. `wasm` and `wasm-*` events.
    pub fn wasm_events(&self) -> impl Iterator<Item = &TxEvent> {
        self.events
            .iter()
            .filter(|event| event.kind == "wasm" || event.kind.starts_with("wasm-"))
    }
}
