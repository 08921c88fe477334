use contract_client::{ExecuteOptions, MutationOperation, ReadOperation, Result};
use cosmwasm_std::{Coin, Uint128};

use crate::client::{ExecuteClient, QueryClient};
use crate::keys::CONTRACT_NAME;
use crate::msg::{
    Account, AccountKind, Action, AssetInfo, CoinBalanceResponseItem, ConfigResponse,
    ConfigUpdates, DebtShares, ExecuteMsg, Positions, QueryMsg, SharesResponseItem,
};

pub type CreditManagerRead<T, R> = ReadOperation<T, QueryMsg, R>;
pub type CreditManagerMutation<'a, T, S> = MutationOperation<'a, T, S, ExecuteMsg, QueryMsg>;

fn read<T, R>(client: Option<&QueryClient<T>>, msg: QueryMsg) -> Result<CreditManagerRead<T, R>> {
    ReadOperation::new(CONTRACT_NAME, client.map(QueryClient::inner), msg)
}

fn mutation<T, S>(
    client: &ExecuteClient<T, S>,
    msg: ExecuteMsg,
    options: ExecuteOptions,
) -> CreditManagerMutation<'_, T, S> {
    MutationOperation::new(client.inner(), msg, options)
}

pub fn config_query<T>(
    client: Option<&QueryClient<T>>,
) -> Result<CreditManagerRead<T, ConfigResponse>> {
    read(client, QueryMsg::Config {})
}

pub fn positions_query<T>(
    client: Option<&QueryClient<T>>,
    account_id: String,
) -> Result<CreditManagerRead<T, Positions>> {
    read(client, QueryMsg::Positions { account_id })
}

pub fn account_kind_query<T>(
    client: Option<&QueryClient<T>>,
    account_id: String,
) -> Result<CreditManagerRead<T, AccountKind>> {
    read(client, QueryMsg::AccountKind { account_id })
}

pub fn accounts_query<T>(
    client: Option<&QueryClient<T>>,
    owner: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<CreditManagerRead<T, Vec<Account>>> {
    read(
        client,
        QueryMsg::Accounts {
            owner,
            start_after,
            limit,
        },
    )
}

pub fn all_coin_balances_query<T>(
    client: Option<&QueryClient<T>>,
    start_after: Option<(String, String)>,
    limit: Option<u32>,
) -> Result<CreditManagerRead<T, Vec<CoinBalanceResponseItem>>> {
    read(client, QueryMsg::AllCoinBalances { start_after, limit })
}

pub fn all_debt_shares_query<T>(
    client: Option<&QueryClient<T>>,
    start_after: Option<(String, String)>,
    limit: Option<u32>,
) -> Result<CreditManagerRead<T, Vec<SharesResponseItem>>> {
    read(client, QueryMsg::AllDebtShares { start_after, limit })
}

pub fn total_debt_shares_query<T>(
    client: Option<&QueryClient<T>>,
    denom: String,
) -> Result<CreditManagerRead<T, DebtShares>> {
    read(client, QueryMsg::TotalDebtShares(denom))
}

pub fn allowed_vaults_query<T>(
    client: Option<&QueryClient<T>>,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<CreditManagerRead<T, Vec<String>>> {
    read(client, QueryMsg::AllowedVaults { start_after, limit })
}

pub fn allowed_assets_query<T>(
    client: Option<&QueryClient<T>>,
    start_after: Option<AssetInfo>,
    limit: Option<u32>,
) -> Result<CreditManagerRead<T, Vec<AssetInfo>>> {
    read(client, QueryMsg::AllowedAssets { start_after, limit })
}

pub fn estimate_provide_liquidity_query<T>(
    client: Option<&QueryClient<T>>,
    lp_token_out: String,
    coins_in: Vec<Coin>,
) -> Result<CreditManagerRead<T, Uint128>> {
    read(
        client,
        QueryMsg::EstimateProvideLiquidity {
            lp_token_out,
            coins_in,
        },
    )
}

pub fn create_credit_account_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    kind: AccountKind,
    options: ExecuteOptions,
) -> CreditManagerMutation<'_, T, S> {
    mutation(client, ExecuteMsg::CreateCreditAccount(kind), options)
}

pub fn update_credit_account_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    account_id: Option<String>,
    account_kind: Option<AccountKind>,
    actions: Vec<Action>,
    options: ExecuteOptions,
) -> CreditManagerMutation<'_, T, S> {
    mutation(
        client,
        ExecuteMsg::UpdateCreditAccount {
            account_id,
            account_kind,
            actions,
        },
        options,
    )
}

pub fn repay_from_wallet_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    account_id: String,
    options: ExecuteOptions,
) -> CreditManagerMutation<'_, T, S> {
    mutation(client, ExecuteMsg::RepayFromWallet { account_id }, options)
}

pub fn update_config_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    updates: ConfigUpdates,
    options: ExecuteOptions,
) -> CreditManagerMutation<'_, T, S> {
    mutation(client, ExecuteMsg::UpdateConfig { updates }, options)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use contract_client::transport::{MockExecuteTransport, MockQueryTransport};
    use contract_client::{ContractHandle, Error, SigningIdentity, TxResult};
    use cosmwasm_std::coin;
    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::keys;

    const CREDIT_MANAGER: &str = "mars1k5pecvjawyravzy40p7dwkgf2cca8ljefyf7dleggs6ty49yddxqkkqxkf";

    fn query_client(transport: MockQueryTransport) -> QueryClient<MockQueryTransport> {
        contract_client::QueryClient::new(ContractHandle::new(Arc::new(transport), CREDIT_MANAGER))
            .into()
    }

    #[test]
    fn positions_key_matches_the_keys_module() {
        let client = query_client(MockQueryTransport::new());

        let op = positions_query(Some(&client), "5".to_string()).unwrap();

        assert_eq!(
            op.key(),
            &keys::query(
                Some(CREDIT_MANAGER),
                &QueryMsg::Positions {
                    account_id: "5".to_string()
                }
            )
            .unwrap()
        );
    }

    #[tokio::test]
    async fn allowed_vaults_query_returns_addresses() {
        let mut transport = MockQueryTransport::new();
        transport
            .expect_query()
            .times(1)
            .returning(|_, _| Ok(br#"["mars1vault"]"#.to_vec()));
        let client = query_client(transport);

        let vaults = allowed_vaults_query(Some(&client), None, Some(1))
            .unwrap()
            .run(&CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(vaults, vec!["mars1vault".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_reads_resolve_to_cancelled() {
        struct Stalled;

        #[async_trait::async_trait]
        impl contract_client::QueryTransport for Stalled {
            async fn query(
                &self,
                _contract: String,
                _envelope: contract_client::WireEnvelope,
            ) -> Result<Vec<u8>> {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(b"[]".to_vec())
            }
        }

        let client: QueryClient<_> =
            contract_client::QueryClient::new(ContractHandle::new(Arc::new(Stalled), CREDIT_MANAGER))
                .into();
        let token = CancellationToken::new();
        let op = all_coin_balances_query(Some(&client), None, None).unwrap();

        let read = tokio::spawn({
            let token = token.clone();
            async move { op.run(&token).await }
        });
        tokio::time::sleep(Duration::from_secs(1)).await;
        token.cancel();

        assert_eq!(
            read.await.unwrap().unwrap_err().current_context(),
            &Error::Cancelled
        );
    }

    #[tokio::test]
    async fn repay_from_wallet_forwards_funds() {
        let mut transport = MockExecuteTransport::new();
        transport
            .expect_execute()
            .withf(|_, _, envelope, _, _, funds| {
                envelope.to_string() == r#"{"repay_from_wallet":{"account_id":"3"}}"#
                    && funds == &vec![coin(10, "uusdc")]
            })
            .times(1)
            .returning(|_, _, _, _, _, _| Ok(TxResult::default()));
        let client = ExecuteClient::new(
            ContractHandle::new(Arc::new(MockQueryTransport::new()), CREDIT_MANAGER),
            SigningIdentity::new("mars1cs8rvffun058uqgpsghccx26u02txv8ndrj3dl", Arc::new(transport)),
        );

        let op = repay_from_wallet_mutation(
            &client,
            "3".to_string(),
            ExecuteOptions::builder()
                .funds(vec![coin(10, "uusdc")])
                .build(),
        );

        assert!(op.run().await.is_ok());
    }
}
