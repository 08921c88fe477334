use cosmwasm_std::Coin;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Explicit fee paid for a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: u64,
    pub granter: Option<String>,
    pub payer: Option<String>,
}

/// How the signing transport should pay for a transaction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fee {
    /// Let the transport simulate the transaction and pick gas and fee.
    #[default]
    Auto,
    /// Simulate, then scale the estimated gas by the given factor.
    Multiplier(f64),
    Fixed(StdFee),
}

/// Per-call parameters of a mutating contract call. Everything is forwarded to the transport as
/// given.
#[derive(Debug, Clone, PartialEq, Default, TypedBuilder)]
pub struct ExecuteOptions {
    #[builder(default)]
    pub fee: Fee,
    #[builder(default, setter(strip_option, into))]
    pub memo: Option<String>,
    #[builder(default)]
    pub funds: Vec<Coin>,
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;

    use super::*;

    #[test]
    fn default_options_use_automatic_fee_estimation() {
        let options = ExecuteOptions::default();

        assert_eq!(options.fee, Fee::Auto);
        assert_eq!(options.memo, None);
        assert!(options.funds.is_empty());
        assert_eq!(ExecuteOptions::builder().build(), options);
    }

    #[test]
    fn builder_keeps_caller_supplied_values() {
        let options = ExecuteOptions::builder()
            .fee(Fee::Multiplier(1.4))
            .memo("unlock")
            .funds(vec![coin(100, "uusdc")])
            .build();

        assert_eq!(options.fee, Fee::Multiplier(1.4));
        assert_eq!(options.memo.as_deref(), Some("unlock"));
        assert_eq!(options.funds, vec![coin(100, "uusdc")]);
    }
}
