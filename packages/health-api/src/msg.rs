use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Decimal, Uint128};

#[cw_serde]
pub enum ExecuteMsg {
    UpdateOwner(OwnerUpdate),
    UpdateConfig { credit_manager: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Collateral, debt and health factors of a credit account
    #[returns(HealthValuesResponse)]
    HealthValues {
        account_id: String,
        kind: AccountKind,
        action: ActionKind,
    },

    /// Cheaper than `HealthValues` when only liquidatability matters
    #[returns(HealthState)]
    HealthState {
        account_id: String,
        kind: AccountKind,
        action: ActionKind,
    },

    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub enum OwnerUpdate {
    ProposeNewOwner { proposed: String },
    ClearProposed,
    AcceptProposed,
    AbolishOwnerRole,
    SetEmergencyOwner { emergency_owner: String },
    ClearEmergencyOwner,
}

#[cw_serde]
#[derive(Default)]
pub enum AccountKind {
    #[default]
    Default,
    HighLeveredStrategy,
}

/// Which oracle pricing the health computation uses
#[cw_serde]
#[derive(Default)]
pub enum ActionKind {
    #[default]
    Default,
    Liquidation,
}

#[cw_serde]
pub struct HealthValuesResponse {
    pub total_debt_value: Uint128,
    pub total_collateral_value: Uint128,
    pub max_ltv_adjusted_collateral: Uint128,
    pub liquidation_threshold_adjusted_collateral: Uint128,
    /// `None` if the account has no debt
    pub max_ltv_health_factor: Option<Decimal>,
    pub liquidation_health_factor: Option<Decimal>,
    pub liquidatable: bool,
    pub above_max_ltv: bool,
}

#[cw_serde]
pub enum HealthState {
    Healthy,
    Unhealthy {
        max_ltv_health_factor: Decimal,
        liquidation_health_factor: Decimal,
    },
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Option<String>,
    pub proposed: Option<String>,
    pub emergency_owner: Option<String>,
    pub initialized: bool,
    pub abolished: bool,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner_response: OwnerResponse,
    pub credit_manager: Option<String>,
}

#[cfg(test)]
mod tests {
    use contract_client::WireEnvelope;
    use cosmwasm_schema::serde::de::DeserializeOwned;
    use cosmwasm_schema::serde::Serialize;

    use super::*;

    fn through_the_wire<M>(msg: &M) -> M
    where
        M: Serialize + DeserializeOwned,
    {
        let bytes = WireEnvelope::encode(msg).unwrap().to_bytes().unwrap();
        WireEnvelope::from_slice(&bytes).unwrap().decode().unwrap()
    }

    #[test]
    fn every_query_survives_the_wire() {
        let queries = vec![
            QueryMsg::HealthValues {
                account_id: "2".to_string(),
                kind: AccountKind::Default,
                action: ActionKind::Default,
            },
            QueryMsg::HealthState {
                account_id: "3".to_string(),
                kind: AccountKind::HighLeveredStrategy,
                action: ActionKind::Liquidation,
            },
            QueryMsg::Config {},
        ];

        for query in queries {
            let decoded = through_the_wire(&query);

            assert_eq!(
                std::mem::discriminant(&decoded),
                std::mem::discriminant(&query)
            );
            assert_eq!(decoded, query);
        }
    }

    #[test]
    fn every_action_survives_the_wire() {
        let actions = vec![
            ExecuteMsg::UpdateOwner(OwnerUpdate::ProposeNewOwner {
                proposed: "mars1fsgzj6t7udv8zhf6zj32mkqhcjcpv52y4dhlg0".to_string(),
            }),
            ExecuteMsg::UpdateOwner(OwnerUpdate::AcceptProposed),
            ExecuteMsg::UpdateConfig {
                credit_manager: "mars1k5pecvjawyravzy40p7dwkgf2cca8ljefyf7dleggs6ty49yddxqkkqxkf"
                    .to_string(),
            },
        ];

        for action in actions {
            let decoded = through_the_wire(&action);

            assert_eq!(
                std::mem::discriminant(&decoded),
                std::mem::discriminant(&action)
            );
            assert_eq!(decoded, action);
        }
    }
}
