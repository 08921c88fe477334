//! Glue between the clients and an external reactive data-fetching framework.
//!
//! The framework owns caching, staleness and the pending → success/error lifecycle. This module
//! only hands it a stable key plus a one-shot operation to run.

use std::marker::PhantomData;

use error_stack::report;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::cache_key::CacheKey;
use crate::client::{ExecuteClient, QueryClient};
use crate::error::{Error, Result};
use crate::fee::ExecuteOptions;
use crate::transport::{ExecuteTransport, QueryTransport, TxResult};

/// A cache-keyed read of `R` through a query client that may not be available yet.
#[derive(Debug)]
pub struct ReadOperation<T, Q, R> {
    key: CacheKey,
    client: Option<QueryClient<T, Q>>,
    msg: Q,
    response_type: PhantomData<R>,
}

impl<T, Q, R> ReadOperation<T, Q, R>
where
    Q: Serialize,
{
    pub fn new(contract: &str, client: Option<&QueryClient<T, Q>>, msg: Q) -> Result<Self> {
        let address = client.and_then(QueryClient::address);
        let key = CacheKey::for_query(contract, address, &msg)?;

        Ok(Self::with_key(key, client, msg))
    }

    /// A read stored under a caller-built key, for contracts whose keys nest deeper than
    /// [`CacheKey::for_query`] does.
    pub fn with_key(key: CacheKey, client: Option<&QueryClient<T, Q>>, msg: Q) -> Self {
        Self {
            key,
            client: client.cloned(),
            msg,
            response_type: PhantomData,
        }
    }

    pub fn key(&self) -> &CacheKey {
        &self.key
    }

    /// A read is enabled only if it has a client bound to a contract address.
    pub fn is_enabled(&self) -> bool {
        self.client
            .as_ref()
            .and_then(QueryClient::address)
            .is_some()
    }
}

impl<T, Q, R> ReadOperation<T, Q, R>
where
    T: QueryTransport + Send + Sync,
    Q: Serialize,
    R: DeserializeOwned,
{
    /// Runs the read once. Resolves to [`Error::InvalidClient`] right away if disabled, and to
    /// [`Error::Cancelled`] if `cancel` fires first. Cancelling one read leaves others untouched.
    pub async fn run(self, cancel: &CancellationToken) -> Result<R> {
        let Some(client) = self.client.filter(|client| client.address().is_some()) else {
            return Err(report!(Error::InvalidClient));
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(report!(Error::Cancelled)),
            res = client.query(&self.msg) => res,
        }
    }
}

/// A one-shot mutation through an execute client. No cache entries are invalidated; that is up to
/// the caller once the mutation succeeds.
#[derive(Debug)]
pub struct MutationOperation<'a, T, S, M, Q> {
    client: &'a ExecuteClient<T, S, M, Q>,
    msg: M,
    options: ExecuteOptions,
}

impl<'a, T, S, M, Q> MutationOperation<'a, T, S, M, Q> {
    pub fn new(client: &'a ExecuteClient<T, S, M, Q>, msg: M, options: ExecuteOptions) -> Self {
        Self {
            client,
            msg,
            options,
        }
    }

    pub fn msg(&self) -> &M {
        &self.msg
    }
}

impl<T, S, M, Q> MutationOperation<'_, T, S, M, Q>
where
    S: ExecuteTransport + Send + Sync,
    M: Serialize,
{
    pub async fn run(self) -> Result<TxResult> {
        self.client.execute(&self.msg, self.options).await
    }
}
