use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Decimal, Uint128};

use crate::math::SignedDecimal;

#[cw_serde]
pub enum ExecuteMsg {
    /// Adds a new tradable denom. Owner only.
    InitDenom {
        denom: String,
        max_funding_velocity: Decimal,
        skew_scale: Decimal,
    },

    EnableDenom { denom: String },

    /// Stops opening new positions in `denom`. Open positions can still be closed.
    DisableDenom { denom: String },

    /// Provides base denom liquidity to the counterparty vault
    Deposit {},

    /// Starts the cooldown for withdrawing `shares` from the counterparty vault
    Unlock { shares: Uint128 },

    /// Withdraws every unlock whose cooldown has ended
    Withdraw {},

    /// Credit manager only. A negative `size` opens a short.
    OpenPosition {
        account_id: String,
        denom: String,
        size: SignedDecimal,
    },

    ClosePosition { account_id: String, denom: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(VaultState)]
    VaultState {},

    #[returns(DenomStateResponse)]
    DenomState { denom: String },

    #[returns(Vec<DenomStateResponse>)]
    DenomStates {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(DepositResponse)]
    Deposit { depositor: String },

    #[returns(Vec<DepositResponse>)]
    Deposits {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(Vec<UnlockState>)]
    Unlocks { depositor: String },

    #[returns(PositionResponse)]
    Position { account_id: String, denom: String },

    #[returns(Vec<PositionResponse>)]
    Positions {
        /// `(account_id, denom)` of the last item of the previous page
        start_after: Option<(String, String)>,
        limit: Option<u32>,
    },

    #[returns(PositionsByAccountResponse)]
    PositionsByAccount { account_id: String },

    /// Unrealized PnL of all open positions, from the traders' point of view
    #[returns(SignedDecimal)]
    TotalPnl {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub credit_manager: String,
    pub oracle: String,
    pub base_denom: String,
    pub min_position_value: Uint128,
    /// Seconds between unlocking and withdrawing vault shares
    pub cooldown_period: u64,
}

#[cw_serde]
#[derive(Default)]
pub struct VaultState {
    pub total_liquidity: Uint128,
    pub total_shares: Uint128,
}

#[cw_serde]
pub struct Funding {
    pub max_funding_velocity: Decimal,
    pub skew_scale: Decimal,
    pub rate: SignedDecimal,
    pub index: SignedDecimal,
}

#[cw_serde]
pub struct DenomStateResponse {
    pub denom: String,
    pub enabled: bool,
    pub total_size: SignedDecimal,
    pub total_cost_base: SignedDecimal,
    pub funding: Funding,
    pub last_updated: u64,
}

#[cw_serde]
pub struct DepositResponse {
    pub depositor: String,
    pub shares: Uint128,
    pub amount: Uint128,
}

#[cw_serde]
pub struct UnlockState {
    pub created_at: u64,
    pub cooldown_end: u64,
    pub amount: Uint128,
}

#[cw_serde]
pub enum PnL {
    Profit(Coin),
    Loss(Coin),
    BreakEven,
}

#[cw_serde]
pub struct PerpPosition {
    pub denom: String,
    pub base_denom: String,
    pub size: SignedDecimal,
    pub entry_price: Decimal,
    pub current_price: Decimal,
    pub pnl: PnL,
}

#[cw_serde]
pub struct PositionResponse {
    pub account_id: String,
    pub position: PerpPosition,
}

#[cw_serde]
pub struct PositionsByAccountResponse {
    pub account_id: String,
    pub positions: Vec<PerpPosition>,
}
