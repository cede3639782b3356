use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::de;
use crate::api::enums::{Currency, PayStatus, WebhookStatus};
use crate::api::Decimal;

/// A single payment, as reported by the `transaction` endpoint.
///
/// Wire field names differ from the semantic ones in several places;
/// the serde renames below are the complete alias table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// Payment identifier chosen by the merchant at bill creation.
    #[serde(rename = "payment_id", deserialize_with = "de::int_like")]
    pub id: i64,
    /// Bill description shown to the payer.
    pub description: String,
    /// Payer email.
    pub email: String,
    pub amount: Decimal,
    /// Amount credited after commission.
    pub amount_profit: Decimal,
    pub currency: Currency,
    #[serde(rename = "comission_percent")]
    pub commission_percent: Decimal,
    #[serde(rename = "comission_fixed")]
    pub commission_fixed: Decimal,
    /// Wire token of the method the payer picked, absent until they do.
    #[serde(default)]
    pub method: Option<String>,
    /// Service-side transaction number.
    #[serde(rename = "transaction", deserialize_with = "de::int_like")]
    pub transaction_ref: i64,
    /// When the bill was created.
    #[serde(deserialize_with = "de::datetime")]
    pub date: NaiveDateTime,
    /// When the bill was paid, if it was.
    #[serde(default, deserialize_with = "de::maybe_datetime")]
    pub pay_date: Option<NaiveDateTime>,
    #[serde(rename = "transaction_status", default)]
    pub status: PayStatus,
    /// Merchant-supplied parameters echoed back by the service.
    #[serde(default, deserialize_with = "de::custom_fields")]
    pub custom_fields: Option<Map<String, Value>>,
    pub webhook_status: WebhookStatus,
    #[serde(deserialize_with = "de::int_like")]
    pub webhook_amount: i64,
}

impl Transaction {
    /// Whether the payment has left the waiting state.
    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "payment_id": "15",
            "description": "Order 15",
            "email": "payer@example.com",
            "amount": "100.5",
            "amount_profit": "95.48",
            "currency": "RUB",
            "comission_percent": "5",
            "comission_fixed": "0.02",
            "method": "cd",
            "transaction": 1017,
            "date": "01.02.2023 10:00:00",
            "pay_date": "01.02.2023 10:05:00",
            "transaction_status": "1",
            "custom_fields": "{&quot;order&quot;:15}",
            "webhook_status": "1",
            "webhook_amount": "100"
        })
    }

    #[test]
    fn test_decodes_full_payload_with_aliases() {
        let transaction: Transaction = serde_json::from_value(payload()).unwrap();

        assert_eq!(transaction.id, 15);
        assert_eq!(transaction.description, "Order 15");
        assert_eq!(transaction.amount, dec!(100.5));
        assert_eq!(transaction.commission_percent, dec!(5));
        assert_eq!(transaction.commission_fixed, dec!(0.02));
        assert_eq!(transaction.currency, Currency::Rub);
        assert_eq!(transaction.method.as_deref(), Some("cd"));
        assert_eq!(transaction.transaction_ref, 1017);
        assert_eq!(transaction.date.to_string(), "2023-02-01 10:00:00");
        assert_eq!(
            transaction.pay_date.unwrap().to_string(),
            "2023-02-01 10:05:00"
        );
        assert!(transaction.is_paid());
        assert_eq!(
            transaction.custom_fields.unwrap().get("order"),
            Some(&json!(15))
        );
        assert_eq!(transaction.webhook_status, WebhookStatus::Delivered);
        assert_eq!(transaction.webhook_amount, 100);
    }

    #[test]
    fn test_waiting_transaction_with_absent_optionals() {
        let mut raw = payload();
        let object = raw.as_object_mut().unwrap();
        object.remove("method");
        object.remove("pay_date");
        object.remove("transaction_status");
        object.insert("custom_fields".to_owned(), json!(""));

        let transaction: Transaction = serde_json::from_value(raw).unwrap();
        assert_eq!(transaction.method, None);
        assert_eq!(transaction.pay_date, None);
        assert_eq!(transaction.status, PayStatus::Waiting);
        assert!(!transaction.is_paid());
        assert_eq!(transaction.custom_fields, None);
    }

    #[test]
    fn test_missing_required_field_names_it() {
        let mut raw = payload();
        raw.as_object_mut().unwrap().remove("email");
        let error = serde_json::from_value::<Transaction>(raw).unwrap_err();
        assert!(error.to_string().contains("email"));
    }

    #[test]
    fn test_malformed_custom_fields_is_an_error() {
        let mut raw = payload();
        raw.as_object_mut()
            .unwrap()
            .insert("custom_fields".to_owned(), json!("{&quot;order&quot;:"));
        assert!(serde_json::from_value::<Transaction>(raw).is_err());
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let first: Transaction = serde_json::from_value(payload()).unwrap();
        let second: Transaction = serde_json::from_value(payload()).unwrap();
        assert_eq!(first, second);
    }
}
