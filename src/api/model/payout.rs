use chrono::NaiveDateTime;
use serde::Deserialize;

use super::de;
use crate::api::enums::{PayStatus, PayoutMethod};
use crate::api::Decimal;

/// An outbound transfer, as reported by the `payout` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Payout {
    /// Payout identifier.
    #[serde(rename = "payout", deserialize_with = "de::int_like")]
    pub payout_id: i64,
    pub method: PayoutMethod,
    pub amount: Decimal,
    /// Amount actually debited after commission.
    pub amount_profit: Decimal,
    #[serde(rename = "comission_percent")]
    pub commission_percent: Decimal,
    #[serde(rename = "comission_fixed")]
    pub commission_fixed: Decimal,
    /// When the payout was requested.
    #[serde(rename = "date", deserialize_with = "de::datetime")]
    pub date_create: NaiveDateTime,
    /// When the payout was executed, if it was.
    #[serde(default, deserialize_with = "de::maybe_datetime")]
    pub date_pay: Option<NaiveDateTime>,
    #[serde(rename = "payout_status_code")]
    pub status: PayStatus,
}

impl Payout {
    /// Whether the payout has been executed.
    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }
}
