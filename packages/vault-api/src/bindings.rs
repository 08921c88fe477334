use contract_client::{ExecuteOptions, MutationOperation, ReadOperation, Result};
use cosmwasm_std::Uint128;

use crate::client::{ExecuteClient, QueryClient};
use crate::keys;
use crate::msg::{
    ExecuteMsg, ExtensionExecuteMsg, ExtensionQueryMsg, QueryMsg, VaultInfoResponse,
    VaultInfoResponseExt, VaultStandardInfoResponse, VaultUnlock,
};

pub type VaultRead<T, R> = ReadOperation<T, QueryMsg, R>;
pub type VaultMutation<'a, T, S> = MutationOperation<'a, T, S, ExecuteMsg, QueryMsg>;

fn read<T, R>(client: Option<&QueryClient<T>>, msg: QueryMsg) -> Result<VaultRead<T, R>> {
    let key = keys::query(client.and_then(QueryClient::address), &msg)?;

    Ok(ReadOperation::with_key(key, client.map(QueryClient::inner), msg))
}

fn mutation<T, S>(
    client: &ExecuteClient<T, S>,
    msg: ExecuteMsg,
    options: ExecuteOptions,
) -> VaultMutation<'_, T, S> {
    MutationOperation::new(client.inner(), msg, options)
}

pub fn vault_standard_info_query<T>(
    client: Option<&QueryClient<T>>,
) -> Result<VaultRead<T, VaultStandardInfoResponse>> {
    read(client, QueryMsg::VaultStandardInfo {})
}

pub fn info_query<T>(client: Option<&QueryClient<T>>) -> Result<VaultRead<T, VaultInfoResponse>> {
    read(client, QueryMsg::Info {})
}

pub fn preview_deposit_query<T>(
    client: Option<&QueryClient<T>>,
    amount: Uint128,
) -> Result<VaultRead<T, Uint128>> {
    read(client, QueryMsg::PreviewDeposit { amount })
}

pub fn preview_redeem_query<T>(
    client: Option<&QueryClient<T>>,
    amount: Uint128,
) -> Result<VaultRead<T, Uint128>> {
    read(client, QueryMsg::PreviewRedeem { amount })
}

pub fn total_assets_query<T>(client: Option<&QueryClient<T>>) -> Result<VaultRead<T, Uint128>> {
    read(client, QueryMsg::TotalAssets {})
}

pub fn total_vault_token_supply_query<T>(
    client: Option<&QueryClient<T>>,
) -> Result<VaultRead<T, Uint128>> {
    read(client, QueryMsg::TotalVaultTokenSupply {})
}

pub fn convert_to_shares_query<T>(
    client: Option<&QueryClient<T>>,
    amount: Uint128,
) -> Result<VaultRead<T, Uint128>> {
    read(client, QueryMsg::ConvertToShares { amount })
}

pub fn convert_to_assets_query<T>(
    client: Option<&QueryClient<T>>,
    amount: Uint128,
) -> Result<VaultRead<T, Uint128>> {
    read(client, QueryMsg::ConvertToAssets { amount })
}

pub fn vault_info_query<T>(
    client: Option<&QueryClient<T>>,
) -> Result<VaultRead<T, VaultInfoResponseExt>> {
    read(client, QueryMsg::VaultExtension(ExtensionQueryMsg::VaultInfo))
}

pub fn user_unlocks_query<T>(
    client: Option<&QueryClient<T>>,
    user_address: String,
) -> Result<VaultRead<T, Vec<VaultUnlock>>> {
    read(
        client,
        QueryMsg::VaultExtension(ExtensionQueryMsg::UserUnlocks { user_address }),
    )
}

pub fn deposit_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    amount: Uint128,
    recipient: Option<String>,
    options: ExecuteOptions,
) -> VaultMutation<'_, T, S> {
    mutation(client, ExecuteMsg::Deposit { amount, recipient }, options)
}

pub fn redeem_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    amount: Uint128,
    recipient: Option<String>,
    options: ExecuteOptions,
) -> VaultMutation<'_, T, S> {
    mutation(client, ExecuteMsg::Redeem { recipient, amount }, options)
}

pub fn bind_credit_manager_account_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    account_id: String,
    options: ExecuteOptions,
) -> VaultMutation<'_, T, S> {
    mutation(
        client,
        ExecuteMsg::VaultExtension(ExtensionExecuteMsg::BindCreditManagerAccount { account_id }),
        options,
    )
}

pub fn unlock_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    amount: Uint128,
    options: ExecuteOptions,
) -> VaultMutation<'_, T, S> {
    mutation(
        client,
        ExecuteMsg::VaultExtension(ExtensionExecuteMsg::Unlock { amount }),
        options,
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use contract_client::transport::{MockExecuteTransport, MockQueryTransport};
    use contract_client::{ContractHandle, SigningIdentity, TxResult};
    use tokio_util::sync::CancellationToken;

    use super::*;

    const VAULT: &str = "mars1umc2r7a58jy3jmw0e0hctyy0rx45chmucn6vg53gg6th2a5r6lhswy32yg";

    #[tokio::test]
    async fn total_assets_read_runs_once() {
        let mut transport = MockQueryTransport::new();
        transport
            .expect_query()
            .times(1)
            .returning(|_, _| Ok(br#""42""#.to_vec()));
        let client: QueryClient<_> =
            contract_client::QueryClient::new(ContractHandle::new(Arc::new(transport), VAULT))
                .into();

        let op = total_assets_query(Some(&client)).unwrap();

        assert!(op.key().starts_with(&keys::method(Some(VAULT), "totalAssets").unwrap()));
        assert_eq!(
            op.run(&CancellationToken::new()).await.unwrap(),
            Uint128::new(42)
        );
    }

    #[test]
    fn extension_reads_are_stored_under_their_own_prefix() {
        let op = user_unlocks_query::<MockQueryTransport>(None, "mars1user".to_string()).unwrap();

        assert!(op
            .key()
            .starts_with(&keys::extension_method(None, "userUnlocks").unwrap()));
        assert_eq!(
            op.key(),
            &keys::query(
                None,
                &QueryMsg::VaultExtension(ExtensionQueryMsg::UserUnlocks {
                    user_address: "mars1user".to_string()
                })
            )
            .unwrap()
        );
    }

    #[tokio::test]
    async fn bind_credit_manager_account_mutation_targets_the_extension() {
        let mut transport = MockExecuteTransport::new();
        transport
            .expect_execute()
            .withf(|_, contract, envelope, _, _, _| {
                contract == VAULT
                    && envelope.to_string()
                        == r#"{"vault_extension":{"bind_credit_manager_account":{"account_id":"8"}}}"#
            })
            .times(1)
            .returning(|_, _, _, _, _, _| Ok(TxResult::default()));
        let client = ExecuteClient::new(
            ContractHandle::new(Arc::new(MockQueryTransport::new()), VAULT),
            SigningIdentity::new("mars1fsgzj6t7udv8zhf6zj32mkqhcjcpv52y4dhlg0", Arc::new(transport)),
        );

        let op = bind_credit_manager_account_mutation(
            &client,
            "8".to_string(),
            ExecuteOptions::default(),
        );

        assert!(op.run().await.is_ok());
    }
}
