use contract_client::{
    ContractHandle, ExecuteOptions, ExecuteTransport, QueryTransport, Result, SigningIdentity,
    TxResult,
};

use crate::msg::{
    AccountKind, ActionKind, ConfigResponse, ExecuteMsg, HealthState, HealthValuesResponse,
    OwnerUpdate, QueryMsg,
};

type ContractQueryClient<T> = contract_client::QueryClient<T, QueryMsg>;
type ContractExecuteClient<T, S> = contract_client::ExecuteClient<T, S, ExecuteMsg, QueryMsg>;

impl<T> From<ContractQueryClient<T>> for QueryClient<T> {
    fn from(client: ContractQueryClient<T>) -> Self {
        QueryClient { client }
    }
}

#[derive(Debug)]
pub struct QueryClient<T> {
    client: ContractQueryClient<T>,
}

impl<T> Clone for QueryClient<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<T> QueryClient<T> {
    pub fn address(&self) -> Option<&str> {
        self.client.address()
    }

    pub fn inner(&self) -> &ContractQueryClient<T> {
        &self.client
    }
}

impl<T> QueryClient<T>
where
    T: QueryTransport + Send + Sync,
{
    pub async fn health_values(
        &self,
        account_id: String,
        kind: AccountKind,
        action: ActionKind,
    ) -> Result<HealthValuesResponse> {
        self.client
            .query(&QueryMsg::HealthValues {
                account_id,
                kind,
                action,
            })
            .await
    }

    pub async fn health_state(
        &self,
        account_id: String,
        kind: AccountKind,
        action: ActionKind,
    ) -> Result<HealthState> {
        self.client
            .query(&QueryMsg::HealthState {
                account_id,
                kind,
                action,
            })
            .await
    }

    pub async fn config(&self) -> Result<ConfigResponse> {
        self.client.query(&QueryMsg::Config {}).await
    }
}

impl<T, S> From<ContractExecuteClient<T, S>> for ExecuteClient<T, S> {
    fn from(client: ContractExecuteClient<T, S>) -> Self {
        ExecuteClient { client }
    }
}

#[derive(Debug)]
pub struct ExecuteClient<T, S> {
    client: ContractExecuteClient<T, S>,
}

impl<T, S> ExecuteClient<T, S> {
    pub fn new(handle: ContractHandle<T>, identity: SigningIdentity<S>) -> Self {
        ContractExecuteClient::new(handle, identity).into()
    }

    pub fn querier(&self) -> QueryClient<T> {
        self.client.querier().clone().into()
    }

    pub fn sender(&self) -> &str {
        self.client.sender()
    }

    pub fn address(&self) -> Option<&str> {
        self.client.address()
    }

    pub fn inner(&self) -> &ContractExecuteClient<T, S> {
        &self.client
    }
}

impl<T, S> ExecuteClient<T, S>
where
    S: ExecuteTransport + Send + Sync,
{
    pub async fn update_owner(
        &self,
        update: OwnerUpdate,
        options: ExecuteOptions,
    ) -> Result<TxResult> {
        self.client
            .execute(&ExecuteMsg::UpdateOwner(update), options)
            .await
    }

    pub async fn update_config(
        &self,
        credit_manager: String,
        options: ExecuteOptions,
    ) -> Result<TxResult> {
        self.client
            .execute(&ExecuteMsg::UpdateConfig { credit_manager }, options)
            .await
    }
}
