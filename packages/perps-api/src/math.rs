use std::fmt;
use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, StdError};

/// A decimal with a sign, as the perps contract encodes it: `{ "negative": bool, "abs": "1.5" }`.
#[cw_serde]
#[derive(Copy, Default, Eq)]
pub struct SignedDecimal {
    pub negative: bool,
    pub abs: Decimal,
}

impl SignedDecimal {
    pub const fn zero() -> Self {
        Self {
            negative: false,
            abs: Decimal::zero(),
        }
    }

    /// Zero is never negative.
    pub fn new(negative: bool, abs: Decimal) -> Self {
        Self {
            negative: negative && !abs.is_zero(),
            abs,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

impl From<Decimal> for SignedDecimal {
    fn from(abs: Decimal) -> Self {
        Self::new(false, abs)
    }
}

impl FromStr for SignedDecimal {
    type Err = StdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('-') {
            Some(abs) => Ok(Self::new(true, Decimal::from_str(abs)?)),
            None => Ok(Self::new(false, Decimal::from_str(s)?)),
        }
    }
}

impl fmt::Display for SignedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.abs)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn short_sizes_parse_and_print_with_a_sign() {
        let size = SignedDecimal::from_str("-2.5").unwrap();

        assert!(size.is_negative());
        assert_eq!(size.abs, Decimal::permille(2500));
        assert_eq!(size.to_string(), "-2.5");
        assert_eq!(
            serde_json::to_value(size).unwrap(),
            json!({ "negative": true, "abs": "2.5" })
        );
    }

    #[test]
    fn negative_zero_normalizes_to_zero() {
        assert_eq!(SignedDecimal::from_str("-0").unwrap(), SignedDecimal::zero());
        assert_eq!(SignedDecimal::zero().to_string(), "0");
    }

    #[test]
    fn malformed_sizes_are_rejected() {
        assert!(SignedDecimal::from_str("--1").is_err());
        assert!(SignedDecimal::from_str("abc").is_err());
    }
}
