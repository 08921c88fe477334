use contract_client::{ExecuteOptions, MutationOperation, ReadOperation, Result};

use crate::client::{ExecuteClient, QueryClient};
use crate::keys::CONTRACT_NAME;
use crate::msg::{
    AccountKind, ActionKind, ConfigResponse, ExecuteMsg, HealthState, HealthValuesResponse,
    OwnerUpdate, QueryMsg,
};

pub type HealthRead<T, R> = ReadOperation<T, QueryMsg, R>;
pub type HealthMutation<'a, T, S> = MutationOperation<'a, T, S, ExecuteMsg, QueryMsg>;

fn read<T, R>(client: Option<&QueryClient<T>>, msg: QueryMsg) -> Result<HealthRead<T, R>> {
    ReadOperation::new(CONTRACT_NAME, client.map(QueryClient::inner), msg)
}

pub fn health_values_query<T>(
    client: Option<&QueryClient<T>>,
    account_id: String,
    kind: AccountKind,
    action: ActionKind,
) -> Result<HealthRead<T, HealthValuesResponse>> {
    read(
        client,
        QueryMsg::HealthValues {
            account_id,
            kind,
            action,
        },
    )
}

pub fn health_state_query<T>(
    client: Option<&QueryClient<T>>,
    account_id: String,
    kind: AccountKind,
    action: ActionKind,
) -> Result<HealthRead<T, HealthState>> {
    read(
        client,
        QueryMsg::HealthState {
            account_id,
            kind,
            action,
        },
    )
}

pub fn config_query<T>(client: Option<&QueryClient<T>>) -> Result<HealthRead<T, ConfigResponse>> {
    read(client, QueryMsg::Config {})
}

pub fn update_owner_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    update: OwnerUpdate,
    options: ExecuteOptions,
) -> HealthMutation<'_, T, S> {
    MutationOperation::new(client.inner(), ExecuteMsg::UpdateOwner(update), options)
}

pub fn update_config_mutation<T, S>(
    client: &ExecuteClient<T, S>,
    credit_manager: String,
    options: ExecuteOptions,
) -> HealthMutation<'_, T, S> {
    MutationOperation::new(
        client.inner(),
        ExecuteMsg::UpdateConfig { credit_manager },
        options,
    )
}
