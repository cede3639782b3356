use serde::Deserialize;

use super::Payout;
use crate::api::Decimal;

/// Result of a freshly created payout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewPayout {
    /// Account balance left after the operation.
    pub remain_balance: Decimal,
    /// The payout itself, shipped under the wire key `data`.
    #[serde(rename = "data")]
    pub payout: Payout,
}
