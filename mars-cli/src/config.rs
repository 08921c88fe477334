use contract_client::GrpcConfig;
use serde::{Deserialize, Serialize};

use crate::commands::Contract;

/// Known contract addresses. A missing address leaves the client unbound.
#[derive(Deserialize, Serialize, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Contracts {
    pub health: Option<String>,
    pub credit_manager: Option<String>,
    pub perps: Option<String>,
    pub vault: Option<String>,
}

impl Contracts {
    pub fn address(&self, contract: &Contract) -> Option<&str> {
        match contract {
            Contract::Health => self.health.as_deref(),
            Contract::CreditManager => self.credit_manager.as_deref(),
            Contract::Perps => self.perps.as_deref(),
            Contract::Vault => self.vault.as_deref(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub grpc: GrpcConfig,
    pub contracts: Contracts,
}
