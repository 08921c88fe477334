use contract_client::{
    ContractHandle, ExecuteOptions, ExecuteTransport, QueryTransport, Result, SigningIdentity,
    TxResult,
};
use cosmwasm_std::{Decimal, Uint128};

use crate::math::SignedDecimal;
use crate::msg::{
    ConfigResponse, DenomStateResponse, DepositResponse, ExecuteMsg, PositionResponse,
    PositionsByAccountResponse, QueryMsg, UnlockState, VaultState,
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
    pub async fn config(&self) -> Result<ConfigResponse> {
        self.client.query(&QueryMsg::Config {}).await
    }

    pub async fn vault_state(&self) -> Result<VaultState> {
        self.client.query(&QueryMsg::VaultState {}).await
    }

    pub async fn denom_state(&self, denom: String) -> Result<DenomStateResponse> {
        self.client.query(&QueryMsg::DenomState { denom }).await
    }

    pub async fn denom_states(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<DenomStateResponse>> {
        self.client
            .query(&QueryMsg::DenomStates { start_after, limit })
            .await
    }

    pub async fn deposit(&self, depositor: String) -> Result<DepositResponse> {
        self.client.query(&QueryMsg::Deposit { depositor }).await
    }

    pub async fn deposits(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<DepositResponse>> {
        self.client
            .query(&QueryMsg::Deposits { start_after, limit })
            .await
    }

    pub async fn unlocks(&self, depositor: String) -> Result<Vec<UnlockState>> {
        self.client.query(&QueryMsg::Unlocks { depositor }).await
    }

    pub async fn position(&self, account_id: String, denom: String) -> Result<PositionResponse> {
        self.client
            .query(&QueryMsg::Position { account_id, denom })
            .await
    }

    pub async fn positions(
        &self,
        start_after: Option<(String, String)>,
        limit: Option<u32>,
    ) -> Result<Vec<PositionResponse>> {
        self.client
            .query(&QueryMsg::Positions { start_after, limit })
            .await
    }

    pub async fn positions_by_account(
        &self,
        account_id: String,
    ) -> Result<PositionsByAccountResponse> {
        self.client
            .query(&QueryMsg::PositionsByAccount { account_id })
            .await
    }

    pub async fn total_pnl(&self) -> Result<SignedDecimal> {
        self.client.query(&QueryMsg::TotalPnl {}).await
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
    pub async fn init_denom(
        &self,
        denom: String,
        max_funding_velocity: Decimal,
        skew_scale: Decimal,
        options: ExecuteOptions,
    ) -> Result<TxResult> {
        self.client
            .execute(
                &ExecuteMsg::InitDenom {
                    denom,
                    max_funding_velocity,
                    skew_scale,
                },
                options,
            )
            .await
    }

    pub async fn enable_denom(&self, denom: String, options: ExecuteOptions) -> Result<TxResult> {
        self.client
            .execute(&ExecuteMsg::EnableDenom { denom }, options)
            .await
    }

    pub async fn disable_denom(&self, denom: String, options: ExecuteOptions) -> Result<TxResult> {
        self.client
            .execute(&ExecuteMsg::DisableDenom { denom }, options)
            .await
    }

    /// The deposited base denom travels in `options.funds`.
    pub async fn deposit(&self, options: ExecuteOptions) -> Result<TxResult> {
        self.client.execute(&ExecuteMsg::Deposit {}, options).await
    }

    pub async fn unlock(&self, shares: Uint128, options: ExecuteOptions) -> Result<TxResult> {
        self.client
            .execute(&ExecuteMsg::Unlock { shares }, options)
            .await
    }

    pub async fn withdraw(&self, options: ExecuteOptions) -> Result<TxResult> {
        self.client.execute(&ExecuteMsg::Withdraw {}, options).await
    }

    pub async fn open_position(
        &self,
        account_id: String,
        denom: String,
        size: SignedDecimal,
        options: ExecuteOptions,
    ) -> Result<TxResult> {
        self.client
            .execute(
                &ExecuteMsg::OpenPosition {
                    account_id,
                    denom,
                    size,
                },
                options,
            )
            .await
    }

    pub async fn close_position(
        &self,
        account_id: String,
        denom: String,
        options: ExecuteOptions,
    ) -> Result<TxResult> {
        self.client
            .execute(&ExecuteMsg::ClosePosition { account_id, denom }, options)
            .await
    }
}
