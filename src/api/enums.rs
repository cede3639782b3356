mod commission_type;
mod currency;
mod pay_status;
mod payment_method;
mod payout_method;
mod webhook_status;

pub use commission_type::CommissionType;
pub use currency::Currency;
pub use pay_status::PayStatus;
pub use payment_method::PaymentMethod;
pub use payout_method::PayoutMethod;
pub use webhook_status::WebhookStatus;
