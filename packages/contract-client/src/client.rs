use std::marker::PhantomData;
use std::sync::Arc;

use error_stack::{report, ResultExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::codec::WireEnvelope;
use crate::error::{Error, Result};
use crate::fee::ExecuteOptions;
use crate::transport::{ExecuteTransport, QueryTransport, TxResult};

/// A transport bound to a (possibly not yet known) contract address.
///
/// Cloning is cheap: the transport is shared, not duplicated.
#[derive(Debug)]
pub struct ContractHandle<T> {
    transport: Arc<T>,
    address: Option<String>,
}

impl<T> Clone for ContractHandle<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            address: self.address.clone(),
        }
    }
}

impl<T> ContractHandle<T> {
    pub fn new(transport: Arc<T>, address: impl Into<String>) -> Self {
        Self {
            transport,
            address: Some(address.into()),
        }
    }

    /// A handle whose contract address is not known yet. Every call through it fails with
    /// [`Error::InvalidClient`].
    pub fn unbound(transport: Arc<T>) -> Self {
        Self {
            transport,
            address: None,
        }
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref().filter(|address| !address.is_empty())
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    fn bound_address(&self) -> Result<&str> {
        self.address().ok_or_else(|| report!(Error::InvalidClient))
    }
}

/// The account that signs mutating calls together with the transport able to sign for it.
#[derive(Debug)]
pub struct SigningIdentity<S> {
    sender: String,
    transport: Arc<S>,
}

impl<S> Clone for SigningIdentity<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            transport: self.transport.clone(),
        }
    }
}

impl<S> SigningIdentity<S> {
    pub fn new(sender: impl Into<String>, transport: Arc<S>) -> Self {
        Self {
            sender: sender.into(),
            transport,
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }
}

/// Read-only client for a contract whose queries are described by `Q`.
#[derive(Debug)]
pub struct QueryClient<T, Q> {
    handle: ContractHandle<T>,
    query_msg_type: PhantomData<Q>,
}

impl<T, Q> Clone for QueryClient<T, Q> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            query_msg_type: PhantomData,
        }
    }
}

impl<T, Q> QueryClient<T, Q> {
    pub fn new(handle: ContractHandle<T>) -> Self {
        QueryClient {
            handle,
            query_msg_type: PhantomData,
        }
    }

    pub fn handle(&self) -> &ContractHandle<T> {
        &self.handle
    }

    pub fn address(&self) -> Option<&str> {
        self.handle.address()
    }
}

impl<T, Q> QueryClient<T, Q>
where
    T: QueryTransport + Send + Sync,
    Q: Serialize,
{
    pub async fn query<R>(&self, msg: &Q) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let contract = self.handle.bound_address()?;
        let envelope = WireEnvelope::encode(msg)?;
        let method = envelope.method().to_string();

        debug!(contract, method, "querying contract");

        let response = self
            .handle
            .transport
            .query(contract.to_string(), envelope)
            .await
            .attach_printable_lazy(|| format!("contract: {contract}, query: {method}"))?;

        serde_json::from_slice(&response)
            .change_context(Error::Decoding)
            .attach_printable_lazy(|| format!("contract: {contract}, query: {method}"))
            .attach_printable_lazy(|| String::from_utf8_lossy(&response).into_owned())
    }
}

/// Client for a contract's actions `M`, composed of a [`QueryClient`] for its queries `Q` and a
/// [`SigningIdentity`].
#[derive(Debug)]
pub struct ExecuteClient<T, S, M, Q> {
    querier: QueryClient<T, Q>,
    identity: SigningIdentity<S>,
    execute_msg_type: PhantomData<M>,
}

impl<T, S, M, Q> Clone for ExecuteClient<T, S, M, Q> {
    fn clone(&self) -> Self {
        Self {
            querier: self.querier.clone(),
            identity: self.identity.clone(),
            execute_msg_type: PhantomData,
        }
    }
}

impl<T, S, M, Q> ExecuteClient<T, S, M, Q> {
    pub fn new(handle: ContractHandle<T>, identity: SigningIdentity<S>) -> Self {
        Self {
            querier: QueryClient::new(handle),
            identity,
            execute_msg_type: PhantomData,
        }
    }

    pub fn querier(&self) -> &QueryClient<T, Q> {
        &self.querier
    }

    pub fn sender(&self) -> &str {
        self.identity.sender()
    }

    pub fn address(&self) -> Option<&str> {
        self.querier.address()
    }
}

impl<T, S, M, Q> ExecuteClient<T, S, M, Q>
where
    S: ExecuteTransport + Send + Sync,
    M: Serialize,
{
    /// Submits exactly one signed transaction carrying `msg`.
    pub async fn execute(&self, msg: &M, options: ExecuteOptions) -> Result<TxResult> {
        let contract = self.querier.handle.bound_address()?;
        let envelope = WireEnvelope::encode(msg)?;
        let method = envelope.method().to_string();
        let ExecuteOptions { fee, memo, funds } = options;

        debug!(contract, method, sender = self.sender(), "executing contract");

        self.identity
            .transport
            .execute(
                self.sender().to_string(),
                contract.to_string(),
                envelope,
                fee,
                memo,
                funds,
            )
            .await
            .attach_printable_lazy(|| format!("contract: {contract}, action: {method}"))
    }
}
