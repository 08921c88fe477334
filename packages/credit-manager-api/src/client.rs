use contract_client::{
    ContractHandle, ExecuteOptions, ExecuteTransport, QueryTransport, Result, SigningIdentity,
    TxResult,
};
use cosmwasm_std::{Coin, Uint128};

use crate::msg::{
    Account, AccountKind, Action, AssetInfo, CoinBalanceResponseItem, ConfigResponse,
    ConfigUpdates, DebtShares, ExecuteMsg, Positions, QueryMsg, SharesResponseItem,
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

    pub async fn positions(&self, account_id: String) -> Result<Positions> {
        self.client.query(&QueryMsg::Positions { account_id }).await
    }

    pub async fn account_kind(&self, account_id: String) -> Result<AccountKind> {
        self.client
            .query(&QueryMsg::AccountKind { account_id })
            .await
    }

    pub async fn accounts(
        &self,
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<Account>> {
        self.client
            .query(&QueryMsg::Accounts {
                owner,
                start_after,
                limit,
            })
            .await
    }

    pub async fn all_coin_balances(
        &self,
        start_after: Option<(String, String)>,
        limit: Option<u32>,
    ) -> Result<Vec<CoinBalanceResponseItem>> {
        self.client
            .query(&QueryMsg::AllCoinBalances { start_after, limit })
            .await
    }

    pub async fn all_debt_shares(
        &self,
        start_after: Option<(String, String)>,
        limit: Option<u32>,
    ) -> Result<Vec<SharesResponseItem>> {
        self.client
            .query(&QueryMsg::AllDebtShares { start_after, limit })
            .await
    }

    pub async fn total_debt_shares(&self, denom: String) -> Result<DebtShares> {
        self.client.query(&QueryMsg::TotalDebtShares(denom)).await
    }

    pub async fn allowed_vaults(
        &self,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<String>> {
        self.client
            .query(&QueryMsg::AllowedVaults { start_after, limit })
            .await
    }

    pub async fn allowed_assets(
        &self,
        start_after: Option<AssetInfo>,
        limit: Option<u32>,
    ) -> Result<Vec<AssetInfo>> {
        self.client
            .query(&QueryMsg::AllowedAssets { start_after, limit })
            .await
    }

    pub async fn estimate_provide_liquidity(
        &self,
        lp_token_out: String,
        coins_in: Vec<Coin>,
    ) -> Result<Uint128> {
        self.client
            .query(&QueryMsg::EstimateProvideLiquidity {
                lp_token_out,
                coins_in,
            })
            .await
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
    pub async fn create_credit_account(
        &self,
        kind: AccountKind,
        options: ExecuteOptions,
    ) -> Result<TxResult> {
        self.client
            .execute(&ExecuteMsg::CreateCreditAccount(kind), options)
            .await
    }

    pub async fn update_credit_account(
        &self,
        account_id: Option<String>,
        account_kind: Option<AccountKind>,
        actions: Vec<Action>,
        options: ExecuteOptions,
    ) -> Result<TxResult> {
        self.client
            .execute(
                &ExecuteMsg::UpdateCreditAccount {
                    account_id,
                    account_kind,
                    actions,
                },
                options,
            )
            .await
    }

    /// The repaid coins travel in `options.funds`.
    pub async fn repay_from_wallet(
        &self,
        account_id: String,
        options: ExecuteOptions,
    ) -> Result<TxResult> {
        self.client
            .execute(&ExecuteMsg::RepayFromWallet { account_id }, options)
            .await
    }

    pub async fn update_config(
        &self,
        updates: ConfigUpdates,
        options: ExecuteOptions,
    ) -> Result<TxResult> {
        self.client
            .execute(&ExecuteMsg::UpdateConfig { updates }, options)
            .await
    }
}
