use std::sync::Arc;

use contract_client::cosmos::GrpcTransport;
use contract_client::{ContractHandle, QueryClient, WireEnvelope};
use error_stack::{Result, ResultExt};
use serde_json::Value;
use tracing::info;

use crate::commands::Descriptor;
use crate::config::Config;
use crate::Error;

#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub descriptor: Descriptor,
}

pub async fn run(config: Config, args: Args) -> Result<Option<String>, Error> {
    let descriptor = args.descriptor;
    let envelope = descriptor.envelope()?;

    let transport = Arc::new(GrpcTransport::lazy(&config.grpc).change_context(Error::Connection)?);
    let handle = match descriptor.address(&config.contracts) {
        Some(address) => ContractHandle::new(transport, address),
        None => ContractHandle::unbound(transport),
    };
    let client: QueryClient<GrpcTransport, WireEnvelope> = QueryClient::new(handle);

    info!(
        contract = descriptor.contract.cache_name(),
        method = envelope.method(),
        "querying"
    );

    let response: Value = client
        .query(&envelope)
        .await
        .change_context(Error::Query)?;

    serde_json::to_string_pretty(&response)
        .change_context(Error::Query)
        .map(Some)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use contract_client::GrpcConfig;

    use super::*;

    #[derive(Parser, Debug)]
    struct Cli {
        #[command(flatten)]
        args: Args,
    }

    fn args(argv: &[&str]) -> Args {
        Cli::try_parse_from(std::iter::once("mars-cli").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    fn unreachable_node() -> Config {
        Config {
            grpc: GrpcConfig {
                // nothing listens on this port
                url: "http://127.0.0.1:1".parse().unwrap(),
                timeout: Duration::from_secs(2),
                connect_timeout: Duration::from_secs(1),
            },
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn query_without_an_address_fails_as_invalid_client() {
        let err = run(unreachable_node(), args(&["health", "config"]))
            .await
            .unwrap_err();

        assert!(matches!(err.current_context(), Error::Query));
        assert!(err.contains::<contract_client::Error>());
        assert_eq!(
            err.downcast_ref::<contract_client::Error>(),
            Some(&contract_client::Error::InvalidClient)
        );
    }

    #[tokio::test]
    async fn explicit_address_gets_past_address_validation() {
        let err = run(
            unreachable_node(),
            args(&[
                "health",
                "config",
                "--address",
                "mars1vfyyug4x5kk7rw39evdhc4wyhzrpmcjv4hdtw0y5p96zwdqq3vnqxl2yq5",
            ]),
        )
        .await
        .unwrap_err();

        assert!(matches!(err.current_context(), Error::Query));
        assert_ne!(
            err.downcast_ref::<contract_client::Error>(),
            Some(&contract_client::Error::InvalidClient)
        );
    }

    #[tokio::test]
    async fn malformed_args_fail_before_connecting() {
        let err = run(unreachable_node(), args(&["perps", "position", "{not json"]))
            .await
            .unwrap_err();

        assert!(matches!(err.current_context(), Error::InvalidInput));
    }
}
