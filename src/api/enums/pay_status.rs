use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Settlement state of a payment or payout.
///
/// The wire encodes this as a small integer: `0` while the service is
/// still waiting for funds, nonzero once settled. Some endpoints send
/// the code as a numeric string; both forms decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum PayStatus {
    /// Funds not received yet. Wire token `0`; also the value used when
    /// the field is absent from the payload.
    #[default]
    Waiting,
    /// Funds settled. Wire token `1` (any nonzero code decodes here).
    Paid,
}

impl PayStatus {
    /// Whether the payment has left the waiting state.
    pub fn is_paid(self) -> bool {
        matches!(self, PayStatus::Paid)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PayStatus::Waiting => "0",
            PayStatus::Paid => "1",
        }
    }

    fn from_code(code: i64) -> Self {
        if code == 0 {
            PayStatus::Waiting
        } else {
            PayStatus::Paid
        }
    }
}

impl std::fmt::Display for PayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PayStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StatusVisitor;

        impl Visitor<'_> for StatusVisitor {
            type Value = PayStatus;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a payment status code")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(PayStatus::from_code(i64::try_from(value).unwrap_or(i64::MAX)))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(PayStatus::from_code(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value
                    .trim()
                    .parse::<i64>()
                    .map(PayStatus::from_code)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(StatusVisitor)
    }
}
