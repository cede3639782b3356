use serde::Deserialize;

use crate::api::Decimal;

/// Account balances, produced fresh by every `balance` call.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Balance {
    /// Main account balance.
    pub balance: Decimal,
    /// Referral balance.
    pub ref_balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_decodes_from_numbers_or_strings() {
        let balance: Balance =
            serde_json::from_value(json!({"balance": "1500.75", "ref_balance": 10.5})).unwrap();
        assert_eq!(balance.balance, dec!(1500.75));
        assert_eq!(balance.ref_balance, dec!(10.5));
    }

    #[test]
    fn test_envelope_keys_are_ignored() {
        let balance: Balance = serde_json::from_value(
            json!({"status": "success", "balance": "1", "ref_balance": "2"}),
        )
        .unwrap();
        assert_eq!(balance.balance, dec!(1));
    }
}
