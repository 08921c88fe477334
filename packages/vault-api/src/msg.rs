//! Messages of the Mars vault: the CosmWasm vault standard plus Mars extensions.
//!
//! `QueryMsg` does not derive `QueryResponses` because the response of `VaultExtension` depends on
//! the nested message.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposits the base token sent along as funds and mints vault tokens to `recipient`, or to
    /// the sender if absent
    Deposit {
        amount: Uint128,
        recipient: Option<String>,
    },

    /// Burns the vault tokens sent along as funds and returns base tokens
    Redeem {
        recipient: Option<String>,
        amount: Uint128,
    },

    VaultExtension(ExtensionExecuteMsg),
}

#[cw_serde]
pub enum ExtensionExecuteMsg {
    /// Binds the credit manager account that trades with the vault's liquidity
    BindCreditManagerAccount { account_id: String },

    /// Starts the cooldown for `amount` vault tokens
    Unlock { amount: Uint128 },
}

#[cw_serde]
pub enum QueryMsg {
    VaultStandardInfo {},
    Info {},
    PreviewDeposit { amount: Uint128 },
    PreviewRedeem { amount: Uint128 },
    TotalAssets {},
    TotalVaultTokenSupply {},
    ConvertToShares { amount: Uint128 },
    ConvertToAssets { amount: Uint128 },
    VaultExtension(ExtensionQueryMsg),
}

#[cw_serde]
pub enum ExtensionQueryMsg {
    VaultInfo,
    UserUnlocks { user_address: String },
}

#[cw_serde]
pub struct VaultStandardInfoResponse {
    pub version: u16,
    pub extensions: Vec<String>,
}

#[cw_serde]
pub struct VaultInfoResponse {
    pub base_token: String,
    pub vault_token: String,
}

#[cw_serde]
pub struct VaultInfoResponseExt {
    pub base_token: String,
    pub vault_token: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub credit_manager: String,
    pub vault_account_id: Option<String>,
    /// Seconds between unlocking and redeeming
    pub cooldown_period: u64,
}

#[cw_serde]
#[derive(Default)]
pub struct VaultUnlock {
    pub created_at: u64,
    pub cooldown_end: u64,
    pub vault_tokens: Uint128,
    pub base_tokens: Uint128,
}
