use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Delivery state of the webhook notification for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookStatus {
    /// Wire token `0`.
    NotSent,
    /// Wire token `1`.
    Delivered,
}

impl WebhookStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WebhookStatus::NotSent => "0",
            WebhookStatus::Delivered => "1",
        }
    }

    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(WebhookStatus::NotSent),
            1 => Some(WebhookStatus::Delivered),
            _ => None,
        }
    }
}

impl std::fmt::Display for WebhookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WebhookStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StatusVisitor;

        impl Visitor<'_> for StatusVisitor {
            type Value = WebhookStatus;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a webhook status code (0 or 1)")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                i64::try_from(value)
                    .ok()
                    .and_then(WebhookStatus::from_code)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                WebhookStatus::from_code(value)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(value), &self))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .and_then(WebhookStatus::from_code)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(StatusVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_from_integer_and_string() {
        let status: WebhookStatus = serde_json::from_value(json!(1)).unwrap();
        assert_eq!(status, WebhookStatus::Delivered);
        let status: WebhookStatus = serde_json::from_value(json!("0")).unwrap();
        assert_eq!(status, WebhookStatus::NotSent);
    }

    #[test]
    fn test_unknown_code_is_an_error() {
        assert!(serde_json::from_value::<WebhookStatus>(json!(5)).is_err());
    }
}
