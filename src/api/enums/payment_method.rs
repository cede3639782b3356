/// Payment method offered to the payer of a bill.
///
/// The wire tokens are the service's two-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Qiwi,
    Yoomoney,
    Webmoney,
    Payeer,
    PerfectMoney,
    Advcash,
    Megafon,
    Bitcoin,
    Usdt,
    Litecoin,
    Dogecoin,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Card => "cd",
            PaymentMethod::Qiwi => "qw",
            PaymentMethod::Yoomoney => "ya",
            PaymentMethod::Webmoney => "wm",
            PaymentMethod::Payeer => "pr",
            PaymentMethod::PerfectMoney => "pm",
            PaymentMethod::Advcash => "ad",
            PaymentMethod::Megafon => "mg",
            PaymentMethod::Bitcoin => "bt",
            PaymentMethod::Usdt => "th",
            PaymentMethod::Litecoin => "lt",
            PaymentMethod::Dogecoin => "dg",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
