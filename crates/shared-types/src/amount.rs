//! # Amounts
//!
//! Native asset values in base units.

/// Value in base units (signed, like the consensus encoding).
pub type Amount = i64;

/// Base units per whole coin.
pub const COIN: Amount = 100_000_000;

/// Upper bound on any single value and on total supply.
pub const MAX_MONEY: Amount = 21_000_000 * COIN;

/// True if `value` is within `[0, MAX_MONEY]`.
pub fn money_range(value: Amount) -> bool {
    (0..=MAX_MONEY).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_money() {
        assert_eq!(MAX_MONEY, 2_100_000_000_000_000);
    }

    #[test]
    fn test_money_range() {
        assert!(money_range(0));
        assert!(money_range(MAX_MONEY));
        assert!(!money_range(MAX_MONEY + 1));
        assert!(!money_range(-1));
    }
}
