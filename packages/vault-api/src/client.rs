use contract_client::{
    ContractHandle, ExecuteOptions, ExecuteTransport, QueryTransport, Result, SigningIdentity,
    TxResult,
};
use cosmwasm_std::Uint128;

use crate::msg::{
    ExecuteMsg, ExtensionExecuteMsg, ExtensionQueryMsg, QueryMsg, VaultInfoResponse,
    VaultInfoResponseExt, VaultStandardInfoResponse, VaultUnlock,
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
    pub async fn vault_standard_info(&self) -> Result<VaultStandardInfoResponse> {
        self.client.query(&QueryMsg::VaultStandardInfo {}).await
    }

    pub async fn info(&self) -> Result<VaultInfoResponse> {
        self.client.query(&QueryMsg::Info {}).await
    }

    /// Vault tokens minted for depositing `amount` base tokens
    pub async fn preview_deposit(&self, amount: Uint128) -> Result<Uint128> {
        self.client
            .query(&QueryMsg::PreviewDeposit { amount })
            .await
    }

    /// Base tokens returned for redeeming `amount` vault tokens
    pub async fn preview_redeem(&self, amount: Uint128) -> Result<Uint128> {
        self.client.query(&QueryMsg::PreviewRedeem { amount }).await
    }

    pub async fn total_assets(&self) -> Result<Uint128> {
        self.client.query(&QueryMsg::TotalAssets {}).await
    }

    pub async fn total_vault_token_supply(&self) -> Result<Uint128> {
        self.client.query(&QueryMsg::TotalVaultTokenSupply {}).await
    }

    pub async fn convert_to_shares(&self, amount: Uint128) -> Result<Uint128> {
        self.client
            .query(&QueryMsg::ConvertToShares { amount })
            .await
    }

    pub async fn convert_to_assets(&self, amount: Uint128) -> Result<Uint128> {
        self.client
            .query(&QueryMsg::ConvertToAssets { amount })
            .await
    }

    pub async fn vault_info(&self) -> Result<VaultInfoResponseExt> {
        self.client
            .query(&QueryMsg::VaultExtension(ExtensionQueryMsg::VaultInfo))
            .await
    }

    pub async fn user_unlocks(&self, user_address: String) -> Result<Vec<VaultUnlock>> {
        self.client
            .query(&QueryMsg::VaultExtension(ExtensionQueryMsg::UserUnlocks {
                user_address,
            }))
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
    pub async fn deposit(
        &self,
        amount: Uint128,
        recipient: Option<String>,
        options: ExecuteOptions,
    ) -> Result<TxResult> {
        self.client
            .execute(&ExecuteMsg::Deposit { amount, recipient }, options)
            .await
    }

    pub async fn redeem(
        &self,
        amount: Uint128,
        recipient: Option<String>,
        options: ExecuteOptions,
    ) -> Result<TxResult> {
        self.client
            .execute(&ExecuteMsg::Redeem { recipient, amount }, options)
            .await
    }

    pub async fn bind_credit_manager_account(
        &self,
        account_id: String,
        options: ExecuteOptions,
    ) -> Result<TxResult> {
        self.client
            .execute(
                &ExecuteMsg::VaultExtension(ExtensionExecuteMsg::BindCreditManagerAccount {
                    account_id,
                }),
                options,
            )
            .await
    }

    pub async fn unlock(&self, amount: Uint128, options: ExecuteOptions) -> Result<TxResult> {
        self.client
            .execute(
                &ExecuteMsg::VaultExtension(ExtensionExecuteMsg::Unlock { amount }),
                options,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use contract_client::transport::{MockExecuteTransport, MockQueryTransport};
    use cosmwasm_std::coin;
    use serde_json::json;

    use super::*;

    const VAULT: &str = "mars1umc2r7a58jy3jmw0e0hctyy0rx45chmucn6vg53gg6th2a5r6lhswy32yg";
    const USER: &str = "mars1cs8rvffun058uqgpsghccx26u02txv8ndrj3dl";

    fn query_client(transport: MockQueryTransport) -> QueryClient<MockQueryTransport> {
        ContractQueryClient::new(ContractHandle::new(Arc::new(transport), VAULT)).into()
    }

    fn execute_client(
        transport: MockExecuteTransport,
    ) -> ExecuteClient<MockQueryTransport, MockExecuteTransport> {
        ExecuteClient::new(
            ContractHandle::new(Arc::new(MockQueryTransport::new()), VAULT),
            SigningIdentity::new(USER, Arc::new(transport)),
        )
    }

    #[tokio::test]
    async fn vault_info_is_a_nested_unit_extension() {
        let mut transport = MockQueryTransport::new();
        transport
            .expect_query()
            .withf(|_, envelope| envelope.to_string() == r#"{"vault_extension":"vault_info"}"#)
            .times(1)
            .returning(|_, _| {
                Ok(serde_json::to_vec(&json!({
                    "base_token": "uusdc",
                    "vault_token": "factory/mars1vault/vault",
                    "title": null,
                    "subtitle": null,
                    "description": null,
                    "credit_manager": "mars1cm",
                    "vault_account_id": "8",
                    "cooldown_period": 86400
                }))
                .unwrap())
            });

        let info = query_client(transport).vault_info().await.unwrap();

        assert_eq!(info.vault_account_id.as_deref(), Some("8"));
        assert_eq!(info.cooldown_period, 86400);
    }

    #[tokio::test]
    async fn user_unlocks_passes_the_user_address() {
        let mut transport = MockQueryTransport::new();
        transport
            .expect_query()
            .withf(|_, envelope| {
                envelope.method() == "vault_extension"
                    && envelope.args() == &json!({ "user_unlocks": { "user_address": USER } })
            })
            .returning(|_, _| Ok(b"[]".to_vec()));

        let unlocks = query_client(transport)
            .user_unlocks(USER.to_string())
            .await
            .unwrap();

        assert!(unlocks.is_empty());
    }

    #[tokio::test]
    async fn preview_deposit_returns_a_bare_amount() {
        let mut transport = MockQueryTransport::new();
        transport
            .expect_query()
            .withf(|_, envelope| envelope.to_string() == r#"{"preview_deposit":{"amount":"100"}}"#)
            .returning(|_, _| Ok(br#""100000000""#.to_vec()));

        let shares = query_client(transport)
            .preview_deposit(Uint128::new(100))
            .await
            .unwrap();

        assert_eq!(shares, Uint128::new(100_000_000));
    }

    #[tokio::test]
    async fn deposit_keeps_an_absent_recipient_as_null() {
        let mut transport = MockExecuteTransport::new();
        transport
            .expect_execute()
            .withf(|_, _, envelope, _, _, funds| {
                envelope.args() == &json!({ "amount": "100", "recipient": null })
                    && funds == &vec![coin(100, "uusdc")]
            })
            .times(1)
            .returning(|_, _, _, _, _, _| Ok(TxResult::default()));

        let res = execute_client(transport)
            .deposit(
                Uint128::new(100),
                None,
                ExecuteOptions::builder()
                    .funds(vec![coin(100, "uusdc")])
                    .build(),
            )
            .await;

        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn unlock_wraps_the_extension_message() {
        let mut transport = MockExecuteTransport::new();
        transport
            .expect_execute()
            .withf(|_, _, envelope, _, _, _| {
                envelope.to_string() == r#"{"vault_extension":{"unlock":{"amount":"5"}}}"#
            })
            .times(1)
            .returning(|_, _, _, _, _, _| Ok(TxResult::default()));

        let res = execute_client(transport)
            .unlock(Uint128::new(5), ExecuteOptions::default())
            .await;

        assert!(res.is_ok());
    }
}
