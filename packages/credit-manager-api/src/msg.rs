use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Decimal, Uint128};

#[cw_serde]
pub enum ExecuteMsg {
    /// Mints a new credit account NFT to the sender
    CreateCreditAccount(AccountKind),

    /// Runs `actions` in order against a credit account, then checks its health. Without an
    /// `account_id` a new account of `account_kind` is created first.
    UpdateCreditAccount {
        account_id: Option<String>,
        account_kind: Option<AccountKind>,
        actions: Vec<Action>,
    },

    /// Repays debt of an account from the sender's wallet, sent along as funds
    RepayFromWallet { account_id: String },

    UpdateConfig { updates: ConfigUpdates },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(Positions)]
    Positions { account_id: String },

    #[returns(AccountKind)]
    AccountKind { account_id: String },

    /// Accounts owned by `owner`, ordered by account id
    #[returns(Vec<Account>)]
    Accounts {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(Vec<CoinBalanceResponseItem>)]
    AllCoinBalances {
        /// `(account_id, denom)` of the last item of the previous page
        start_after: Option<(String, String)>,
        limit: Option<u32>,
    },

    #[returns(Vec<SharesResponseItem>)]
    AllDebtShares {
        start_after: Option<(String, String)>,
        limit: Option<u32>,
    },

    /// Total debt shares of a denom across all accounts
    #[returns(DebtShares)]
    TotalDebtShares(String),

    #[returns(Vec<String>)]
    AllowedVaults {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(Vec<AssetInfo>)]
    AllowedAssets {
        start_after: Option<AssetInfo>,
        limit: Option<u32>,
    },

    /// LP tokens received when providing `coins_in`
    #[returns(Uint128)]
    EstimateProvideLiquidity {
        lp_token_out: String,
        coins_in: Vec<Coin>,
    },
}

#[cw_serde]
#[derive(Default)]
pub enum AccountKind {
    #[default]
    Default,
    HighLeveredStrategy,
    FundManager {
        vault_addr: String,
    },
}

#[cw_serde]
pub enum Action {
    Deposit(Coin),
    Withdraw(ActionCoin),
    Borrow(Coin),
    Repay {
        recipient_account_id: Option<String>,
        coin: ActionCoin,
    },
    Lend(ActionCoin),
    Reclaim(ActionCoin),
    ClaimRewards {},
    EnterVault {
        vault: VaultBase,
        coin: ActionCoin,
    },
    ExitVault {
        vault: VaultBase,
        amount: Uint128,
    },
    ProvideLiquidity {
        coins_in: Vec<ActionCoin>,
        lp_token_out: String,
        slippage: Decimal,
    },
    WithdrawLiquidity {
        lp_token: ActionCoin,
        slippage: Decimal,
    },
    SwapExactIn {
        coin_in: ActionCoin,
        denom_out: String,
        slippage: Decimal,
    },
}

#[cw_serde]
pub struct ActionCoin {
    pub denom: String,
    pub amount: ActionAmount,
}

#[cw_serde]
pub enum ActionAmount {
    Exact(Uint128),
    /// Whatever the account holds of the denom at execution time
    AccountBalance,
}

#[cw_serde]
pub struct VaultBase {
    pub address: String,
}

#[cw_serde]
pub enum AssetInfo {
    Native(String),
    Cw20(String),
}

#[cw_serde]
#[derive(Default)]
pub struct ConfigUpdates {
    pub account_nft: Option<String>,
    pub oracle: Option<String>,
    pub red_bank: Option<String>,
    pub max_unlocking_positions: Option<Uint128>,
    pub max_slippage: Option<Decimal>,
    pub swapper: Option<String>,
    pub zapper: Option<String>,
    pub health_contract: Option<String>,
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
    pub ownership: OwnerResponse,
    pub account_nft: Option<String>,
    pub red_bank: String,
    pub oracle: String,
    pub params: String,
    pub swapper: String,
    pub zapper: String,
    pub health_contract: String,
    pub max_unlocking_positions: Uint128,
    pub max_slippage: Decimal,
}

#[cw_serde]
pub struct Account {
    pub id: String,
    pub kind: AccountKind,
}

#[cw_serde]
pub struct DebtAmount {
    pub denom: String,
    pub shares: Uint128,
    /// Debt including accrued interest
    pub amount: Uint128,
}

#[cw_serde]
pub struct VaultUnlockingPosition {
    pub id: u64,
    pub coin: Coin,
}

#[cw_serde]
pub enum VaultPositionAmount {
    Unlocked(Uint128),
    Locking {
        locked: Uint128,
        unlocking: Vec<VaultUnlockingPosition>,
    },
}

#[cw_serde]
pub struct VaultPosition {
    pub vault: VaultBase,
    pub amount: VaultPositionAmount,
}

#[cw_serde]
pub struct Positions {
    pub account_id: String,
    pub deposits: Vec<Coin>,
    pub debts: Vec<DebtAmount>,
    pub lends: Vec<Coin>,
    pub vaults: Vec<VaultPosition>,
}

#[cw_serde]
pub struct CoinBalanceResponseItem {
    pub account_id: String,
    pub denom: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct SharesResponseItem {
    pub account_id: String,
    pub denom: String,
    pub shares: Uint128,
}

#[cw_serde]
pub struct DebtShares {
    pub denom: String,
    pub shares: Uint128,
}
