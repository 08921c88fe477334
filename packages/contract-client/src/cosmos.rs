//! Transports backed by a Cosmos SDK node: smart queries over gRPC and contract executions handed
//! to an external broadcaster.

use async_trait::async_trait;
use cosmrs::cosmwasm::MsgExecuteContract;
use cosmrs::proto::cosmos::base::abci::v1beta1::TxResponse;
use cosmrs::proto::cosmwasm::wasm::v1::query_client::QueryClient as WasmQueryClient;
use cosmrs::proto::cosmwasm::wasm::v1::QuerySmartContractStateRequest;
use cosmrs::tx::Msg;
use cosmrs::{AccountId, Any, Denom};
use cosmwasm_std::Coin;
use error_stack::{report, ResultExt};
use mockall::automock;
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Status};
use tracing::{info, warn};

use crate::codec::WireEnvelope;
use crate::config::GrpcConfig;
use crate::error::{Error, Result};
use crate::fee::Fee;
use crate::transport::{ExecuteTransport, QueryTransport, TxEvent, TxResult};

/// Whether a failed call never reached the contract.
fn is_transport_error(status: &Status) -> bool {
    matches!(
        status.code(),
        Code::Unavailable
            | Code::DeadlineExceeded
            | Code::ResourceExhausted
            | Code::Aborted
            | Code::Cancelled
            | Code::Unimplemented
            | Code::Unauthenticated
    )
}

fn classify(status: Status) -> error_stack::Report<Error> {
    if is_transport_error(&status) {
        report!(Error::Transport).attach_printable(format!("{}: {}", status.code(), status.message()))
    } else {
        report!(Error::RemoteExecution(status.message().to_string()))
    }
}

/// Queries contracts through the CosmWasm gRPC query service of a node.
///
/// Cloning shares the underlying channel, so concurrent queries reuse one connection pool.
#[derive(Clone, Debug)]
pub struct GrpcTransport {
    wasm: WasmQueryClient<Channel>,
}

impl GrpcTransport {
    fn endpoint(config: &GrpcConfig) -> Result<Endpoint> {
        Endpoint::from_shared(config.url.to_string())
            .change_context(Error::Transport)
            .attach_printable_lazy(|| config.url.to_string())
            .map(|endpoint| {
                endpoint
                    .timeout(config.timeout)
                    .connect_timeout(config.connect_timeout)
            })
    }

    pub async fn connect(config: &GrpcConfig) -> Result<Self> {
        let channel = Self::endpoint(config)?
            .connect()
            .await
            .change_context(Error::Transport)
            .attach_printable_lazy(|| config.url.to_string())?;

        Ok(Self {
            wasm: WasmQueryClient::new(channel),
        })
    }

    /// Builds the transport without connecting; the connection is established on first use.
    pub fn lazy(config: &GrpcConfig) -> Result<Self> {
        let channel = Self::endpoint(config)?.connect_lazy();

        Ok(Self {
            wasm: WasmQueryClient::new(channel),
        })
    }
}

#[async_trait]
impl QueryTransport for GrpcTransport {
    async fn query(&self, contract: String, envelope: WireEnvelope) -> Result<Vec<u8>> {
        let request = QuerySmartContractStateRequest {
            address: contract,
            query_data: envelope.to_bytes()?,
        };

        self.wasm
            .clone()
            .smart_contract_state(request)
            .await
            .map(|response| response.into_inner().data)
            .map_err(classify)
    }
}

/// Signs and submits transactions on behalf of one account. Key management, account sequencing
/// and fee estimation live behind this trait.
#[automock]
#[async_trait]
pub trait Broadcaster {
    async fn broadcast(
        &self,
        msgs: Vec<Any>,
        fee: Fee,
        memo: Option<String>,
    ) -> Result<TxResponse>;
}

/// Executes contracts by wrapping each call into a single `MsgExecuteContract`.
#[derive(Debug)]
pub struct BroadcastTransport<B> {
    broadcaster: B,
}

impl<B> BroadcastTransport<B> {
    pub fn new(broadcaster: B) -> Self {
        Self { broadcaster }
    }
}

fn parse_account(address: &str) -> Result<AccountId> {
    address
        .parse::<AccountId>()
        .map_err(|err| report!(Error::Encoding).attach_printable(format!("{address}: {err}")))
}

fn to_cosmos_coin(coin: Coin) -> Result<cosmrs::Coin> {
    let denom = coin
        .denom
        .parse::<Denom>()
        .map_err(|err| report!(Error::Encoding).attach_printable(format!("{}: {err}", coin.denom)))?;

    Ok(cosmrs::Coin {
        denom,
        amount: coin.amount.u128(),
    })
}

#[async_trait]
impl<B> ExecuteTransport for BroadcastTransport<B>
where
    B: Broadcaster + Send + Sync,
{
    async fn execute(
        &self,
        sender: String,
        contract: String,
        envelope: WireEnvelope,
        fee: Fee,
        memo: Option<String>,
        funds: Vec<Coin>,
    ) -> Result<TxResult> {
        let msg = MsgExecuteContract {
            sender: parse_account(&sender)?,
            contract: parse_account(&contract)?,
            msg: envelope.to_bytes()?,
            funds: funds
                .into_iter()
                .map(to_cosmos_coin)
                .collect::<Result<Vec<_>>>()?,
        }
        .to_any()
        .map_err(|err| report!(Error::Encoding).attach_printable(err.to_string()))?;

        let response = self.broadcaster.broadcast(vec![msg], fee, memo).await?;

        if response.code != 0 {
            warn!(
                tx_hash = response.txhash,
                code = response.code,
                contract,
                action = envelope.method(),
                "transaction rejected"
            );

            return Err(report!(Error::RemoteExecution(response.raw_log.clone()))
                .attach_printable(format!("tx hash: {}", response.txhash)));
        }

        info!(
            tx_hash = response.txhash,
            contract,
            action = envelope.method(),
            "transaction included"
        );

        Ok(response.into())
    }
}

fn lossy(bytes: &impl AsRef<[u8]>) -> String {
    String::from_utf8_lossy(bytes.as_ref()).into_owned()
}

impl From<TxResponse> for TxResult {
    fn from(response: TxResponse) -> Self {
        TxResult {
            tx_hash: response.txhash,
            height: u64::try_from(response.height).unwrap_or_default(),
            code: response.code,
            gas_wanted: u64::try_from(response.gas_wanted).unwrap_or_default(),
            gas_used: u64::try_from(response.gas_used).unwrap_or_default(),
            raw_log: response.raw_log,
            events: response
                .events
                .into_iter()
                .map(|event| TxEvent {
                    kind: event.r#type,
                    attributes: event
                        .attributes
                        .into_iter()
                        .map(|attribute| (lossy(&attribute.key), lossy(&attribute.value)))
                        .collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;
    use serde_json::json;

    use super::*;

    const SENDER: &str = "mars1pgm8hyk0pvphmlvfjc8wsvk4daluz5tgx7vxgr";
    const CONTRACT: &str = "mars1vfyyug4x5kk7rw39evdhc4wyhzrpmcjv4hdtw0y5p96zwdqq3vnqxl2yq5";

    fn envelope() -> WireEnvelope {
        WireEnvelope::from_descriptor("updateConfig", json!({ "creditManager": "mars1abc" }))
            .unwrap()
    }

    #[test]
    fn connectivity_failures_are_transport_errors() {
        for status in [
            Status::unavailable("connection refused"),
            Status::deadline_exceeded("timeout"),
            Status::cancelled("interrupted"),
        ] {
            assert_eq!(classify(status).current_context(), &Error::Transport);
        }
    }

    #[test]
    fn contract_failures_keep_the_remote_diagnostic() {
        let status = Status::unknown("Generic error: account not found: query wasm contract failed");

        assert_eq!(
            classify(status).current_context(),
            &Error::RemoteExecution(
                "Generic error: account not found: query wasm contract failed".to_string()
            )
        );
    }

    #[tokio::test]
    async fn lazy_transport_does_not_connect_up_front() {
        // nothing listens on this port
        let config = GrpcConfig {
            url: url::Url::parse("http://127.0.0.1:1").unwrap(),
            ..GrpcConfig::default()
        };

        assert!(GrpcTransport::lazy(&config).is_ok());
    }

    #[tokio::test]
    async fn execute_wraps_the_envelope_into_one_execute_contract_msg() {
        let mut broadcaster = MockBroadcaster::new();
        broadcaster
            .expect_broadcast()
            .times(1)
            .returning(|msgs, fee, memo| {
                assert_eq!(msgs.len(), 1);
                let msg = MsgExecuteContract::from_any(&msgs[0]).unwrap();
                assert_eq!(msg.sender.to_string(), SENDER);
                assert_eq!(msg.contract.to_string(), CONTRACT);
                assert_eq!(msg.msg, br#"{"update_config":{"credit_manager":"mars1abc"}}"#);
                assert_eq!(msg.funds.len(), 1);
                assert_eq!(msg.funds[0].amount, 10);
                assert_eq!(fee, Fee::Multiplier(1.5));
                assert_eq!(memo.as_deref(), Some("memo"));

                Ok(TxResponse {
                    txhash: "ABCDEF".to_string(),
                    height: 100,
                    gas_used: 1000,
                    ..TxResponse::default()
                })
            });

        let res = BroadcastTransport::new(broadcaster)
            .execute(
                SENDER.to_string(),
                CONTRACT.to_string(),
                envelope(),
                Fee::Multiplier(1.5),
                Some("memo".to_string()),
                vec![coin(10, "uusdc")],
            )
            .await
            .unwrap();

        assert_eq!(res.tx_hash, "ABCDEF");
        assert_eq!(res.height, 100);
        assert_eq!(res.gas_used, 1000);
        assert!(res.is_success());
    }

    #[tokio::test]
    async fn execute_reports_rejected_transactions_as_remote_errors() {
        let mut broadcaster = MockBroadcaster::new();
        broadcaster.expect_broadcast().returning(|_, _, _| {
            Ok(TxResponse {
                code: 5,
                raw_log: "Caller is not owner".to_string(),
                ..TxResponse::default()
            })
        });

        let err = BroadcastTransport::new(broadcaster)
            .execute(
                SENDER.to_string(),
                CONTRACT.to_string(),
                envelope(),
                Fee::Auto,
                None,
                vec![],
            )
            .await
            .unwrap_err();

        assert_eq!(
            err.current_context(),
            &Error::RemoteExecution("Caller is not owner".to_string())
        );
    }

    #[tokio::test]
    async fn execute_rejects_invalid_addresses_before_broadcasting() {
        let mut broadcaster = MockBroadcaster::new();
        broadcaster.expect_broadcast().never();

        let err = BroadcastTransport::new(broadcaster)
            .execute(
                "not an address".to_string(),
                CONTRACT.to_string(),
                envelope(),
                Fee::Auto,
                None,
                vec![],
            )
            .await
            .unwrap_err();

        assert_eq!(err.current_context(), &Error::Encoding);
    }

    #[tokio::test]
    async fn broadcaster_errors_are_propagated() {
        let mut broadcaster = MockBroadcaster::new();
        broadcaster
            .expect_broadcast()
            .returning(|_, _, _| Err(report!(Error::Signing)));

        let err = BroadcastTransport::new(broadcaster)
            .execute(
                SENDER.to_string(),
                CONTRACT.to_string(),
                envelope(),
                Fee::Auto,
                None,
                vec![],
            )
            .await
            .unwrap_err();

        assert_eq!(err.current_context(), &Error::Signing);
    }
}
