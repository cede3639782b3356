use serde::Deserialize;

/// Destination type of an outbound payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PayoutMethod {
    #[serde(rename = "card")]
    Card,
    #[serde(rename = "card_uah")]
    CardUah,
    #[serde(rename = "card_foreign")]
    CardForeign,
    #[serde(rename = "qiwi")]
    Qiwi,
    #[serde(rename = "yoomoney")]
    Yoomoney,
    #[serde(rename = "payeer")]
    Payeer,
    #[serde(rename = "advcash")]
    Advcash,
    #[serde(rename = "perfect_money")]
    PerfectMoney,
    #[serde(rename = "webmoney")]
    Webmoney,
    #[serde(rename = "bitcoin")]
    Bitcoin,
    #[serde(rename = "litecoin")]
    Litecoin,
    /// Wire token is `tether`.
    #[serde(rename = "tether")]
    Usdt,
    #[serde(rename = "tron")]
    Tron,
    #[serde(rename = "dogecoin")]
    Dogecoin,
    #[serde(rename = "ethereum")]
    Ethereum,
    #[serde(rename = "ripple")]
    Ripple,
}

impl PayoutMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PayoutMethod::Card => "card",
            PayoutMethod::CardUah => "card_uah",
            PayoutMethod::CardForeign => "card_foreign",
            PayoutMethod::Qiwi => "qiwi",
            PayoutMethod::Yoomoney => "yoomoney",
            PayoutMethod::Payeer => "payeer",
            PayoutMethod::Advcash => "advcash",
            PayoutMethod::PerfectMoney => "perfect_money",
            PayoutMethod::Webmoney => "webmoney",
            PayoutMethod::Bitcoin => "bitcoin",
            PayoutMethod::Litecoin => "litecoin",
            PayoutMethod::Usdt => "tether",
            PayoutMethod::Tron => "tron",
            PayoutMethod::Dogecoin => "dogecoin",
            PayoutMethod::Ethereum => "ethereum",
            PayoutMethod::Ripple => "ripple",
        }
    }
}

impl std::fmt::Display for PayoutMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
