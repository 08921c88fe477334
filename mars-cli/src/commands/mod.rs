use clap::{Subcommand, ValueEnum};
use contract_client::WireEnvelope;
use error_stack::{Result, ResultExt};
use serde_json::Value;

use crate::config::Contracts;
use crate::Error;

pub mod cache_key;
pub mod query;

#[derive(Debug, Subcommand)]
pub enum SubCommand {
    /// Run a smart query against a contract and print the JSON response
    Query(query::Args),
    /// Print the cache key a read of the given query is stored under
    CacheKey(cache_key::Args),
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Contract {
    Health,
    CreditManager,
    Perps,
    Vault,
}

impl Contract {
    /// Root fragment of every cache key of the contract
    pub fn cache_name(&self) -> &'static str {
        match self {
            Contract::Health => health_api::keys::CONTRACT_NAME,
            Contract::CreditManager => credit_manager_api::keys::CONTRACT_NAME,
            Contract::Perps => perps_api::keys::CONTRACT_NAME,
            Contract::Vault => vault_api::keys::CONTRACT_NAME,
        }
    }
}

/// A dynamic call descriptor given on the command line.
#[derive(clap::Args, Debug)]
pub struct Descriptor {
    pub contract: Contract,
    /// Query name, in camelCase or snake_case
    pub method: String,
    /// Query arguments as a JSON object, keys in camelCase or snake_case
    #[arg(default_value = "{}")]
    pub args: String,
    /// Contract address, overriding the configured one
    #[arg(long)]
    pub address: Option<String>,
}

impl Descriptor {
    pub fn envelope(&self) -> Result<WireEnvelope, Error> {
        let args: Value = serde_json::from_str(&self.args)
            .change_context(Error::InvalidInput)
            .attach_printable_lazy(|| self.args.clone())?;

        WireEnvelope::from_descriptor(&self.method, args).change_context(Error::InvalidInput)
    }

    pub fn address<'a>(&'a self, contracts: &'a Contracts) -> Option<&'a str> {
        self.address
            .as_deref()
            .or_else(|| contracts.address(&self.contract))
    }
}
