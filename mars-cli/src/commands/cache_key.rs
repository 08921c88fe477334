use contract_client::WireEnvelope;
use error_stack::{Result, ResultExt};
use serde::de::DeserializeOwned;

use crate::commands::{Contract, Descriptor};
use crate::config::Config;
use crate::Error;

#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub descriptor: Descriptor,
}

pub fn run(config: &Config, args: Args) -> Result<Option<String>, Error> {
    let descriptor = args.descriptor;
    let envelope = descriptor.envelope()?;
    let address = descriptor.address(&config.contracts);

    // keys come from the contract's own schema, so they match what its bindings store
    let key = match descriptor.contract {
        Contract::Health => health_api::keys::query(address, &typed(&envelope)?),
        Contract::CreditManager => credit_manager_api::keys::query(address, &typed(&envelope)?),
        Contract::Perps => perps_api::keys::query(address, &typed(&envelope)?),
        Contract::Vault => vault_api::keys::query(address, &typed(&envelope)?),
    }
    .change_context(Error::InvalidInput)?;

    serde_json::to_string(&key)
        .change_context(Error::InvalidInput)
        .map(Some)
}

fn typed<Q>(envelope: &WireEnvelope) -> Result<Q, Error>
where
    Q: DeserializeOwned,
{
    envelope
        .decode()
        .change_context(Error::InvalidInput)
        .attach_printable_lazy(|| format!("unknown query {}", envelope.method()))
}
