use serde::Deserialize;

/// Settlement currency of a bill or transaction.
///
/// Stringifying yields the wire token verbatim; the tokens are
/// interpolated directly into request bodies and signed URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Currency {
    #[serde(rename = "RUB")]
    Rub,
    #[serde(rename = "UAH")]
    Uah,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Uah => "UAH",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_is_wire_token() {
        assert_eq!(Currency::Rub.to_string(), "RUB");
        assert_eq!(Currency::Eur.to_string(), "EUR");
    }

    #[test]
    fn test_decodes_from_wire_token() {
        let currency: Currency = serde_json::from_value(json!("UAH")).unwrap();
        assert_eq!(currency, Currency::Uah);
    }

    #[test]
    fn test_unknown_token_is_an_error() {
        assert!(serde_json::from_value::<Currency>(json!("XBT")).is_err());
    }
}
