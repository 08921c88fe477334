use contract_client::{ExecuteOptions, MutationOperation, ReadOperation, Result};
use cosmwasm_std::{Decimal, Uint128};

use crate::client::{ExecuteClient, QueryClient};
use crate::keys::CONTRACT_NAME;
use crate::math::SignedDecimal;
use crate::msg::{
    ConfigResponse, DenomStateResponse, DepositResponse, ExecuteMsg, PositionResponse,
    PositionsByAccountResponse, QueryMsg, UnlockState, VaultState,
};

pub type PerpsRead<T, R> = ReadOperation<T, QueryMsg, R>;
pub type PerpsMutation<'a, T, S> = MutationOperation<'a, T, S, ExecuteMsg, QueryMsg>;

fn read<T, R>(client: Option<&QueryClient<T>>, msg: QueryMsg) -> Result<PerpsRead<T, R>> {
    ReadOperation::new(CONTRACT_NAME, client.map(QueryClient::inner), msg)
}

fn mutation<T, S>(
    client: &ExecuteClient<T, S>,
    msg: ExecuteMsg,
    options: ExecuteOptions,
) -> PerpsMutation<'_, T, S> {
    MutationOperation::new(client.inner(), msg, options)
}

pub fn config_query<T>(client: Option<&QueryClient<T>>) -> Result<PerpsRead<T, ConfigResponse>> {
    read(client, QueryMsg::Config {})
}

pub fn vault_state_query<T>(client: Option<&QueryClient<T>>) -> Result<PerpsRead<T, VaultState>> {
    read(client, QueryMsg::VaultState {})
}

pub fn denom_state_query<T>(
    client: Option<&QueryClient<T>>,
    denom: String,
) -> Result<PerpsRead<T, DenomStateResponse>> {
    read(client, QueryMsg::DenomState { denom })
}

pub fn denom_states_query<T>(
    client: Option<&QueryClient<T>>,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<PerpsRead<T, Vec<DenomStateResponse>>> {
    read(client, QueryMsg::DenomStates { start_after, limit })
}

pub fn deposit_query<T>(
    client: Option<&QueryClient<T>>,
    depositor: String,
) -> Result<PerpsRead<T, DepositResponse>> {
    read(client, QueryMsg::Deposit { depositor })
}

pub fn deposits_query<T>(
    client: Option<&QueryClient<T>>,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<PerpsRead<T, Vec<DepositResponse>>> {
    read(client, QueryMsg::Deposits { start_after, limit })
}

pub fn unlocks_query<T>(
    client: Option<&QueryClient<T>>,
    depositor: String,
) -> Result<PerpsRead<T, Vec<UnlockState>>> {
    read(client, QueryMsg::Unlocks { depositor })
}

pub fn position_query<T>(
    client: Option<&QueryClient<T>>,
    account_id: String,
    denom: String,
) -> Result<PerpsRead<T, PositionResponse>> {
    read(client, QueryMsg::Position { account_id, denom })
}

pub fn positions_query<T>(
    client: Option<&QueryClient<T>>,
    start_after: Option<(String, String)>,
    limit: Option<u32>,
) -> Result<PerpsRead<T, Vec<PositionResponse>>> {
    read(client, QueryMsg::Positions { start_after, limit })
}

pub fn positions_by_account_query<T>(
    client: Option<&QueryClient<T>>,
    account_id: String,
) -> Result<PerpsRead<T, PositionsByAccountResponse>> {
    read(client, QueryMsg::PositionsByAccount { account_id })
}

pub fn total_pnl_query<T>(client: Option<&QueryClient<T>>) -> Result<PerpsRead<T, SignedDecimal>> {
    read(client, QueryMsg::TotalPnl {})
}

pub fn init_denom_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    denom: String,
    max_funding_velocity: Decimal,
    skew_scale: Decimal,
    options: ExecuteOptions,
) -> PerpsMutation<'_, T, S> {
    mutation(
        client,
        ExecuteMsg::InitDenom {
            denom,
            max_funding_velocity,
            skew_scale,
        },
        options,
    )
}

pub fn enable_denom_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    denom: String,
    options: ExecuteOptions,
) -> PerpsMutation<'_, T, S> {
    mutation(client, ExecuteMsg::EnableDenom { denom }, options)
}

pub fn disable_denom_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    denom: String,
    options: ExecuteOptions,
) -> PerpsMutation<'_, T, S> {
    mutation(client, ExecuteMsg::DisableDenom { denom }, options)
}

pub fn deposit_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    options: ExecuteOptions,
) -> PerpsMutation<'_, T, S> {
    mutation(client, ExecuteMsg::Deposit {}, options)
}

pub fn unlock_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    shares: Uint128,
    options: ExecuteOptions,
) -> PerpsMutation<'_, T, S> {
    mutation(client, ExecuteMsg::Unlock { shares }, options)
}

pub fn withdraw_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    options: ExecuteOptions,
) -> PerpsMutation<'_, T, S> {
    mutation(client, ExecuteMsg::Withdraw {}, options)
}

pub fn open_position_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    account_id: String,
    denom: String,
    size: SignedDecimal,
    options: ExecuteOptions,
) -> PerpsMutation<'_, T, S> {
    mutation(
        client,
        ExecuteMsg::OpenPosition {
            account_id,
            denom,
            size,
        },
        options,
    )
}

pub fn close_position_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    account_id: String,
    denom: String,
    options: ExecuteOptions,
) -> PerpsMutation<'_, T, S> {
    mutation(
        client,
        ExecuteMsg::ClosePosition { account_id, denom },
        options,
    )
}
