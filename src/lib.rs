//! Async client for the PayOK payment API.
//!
//! The crate covers the service's HTTP contract: authenticated form
//! requests, the signed bill URL scheme, response envelope validation,
//! and mapping of raw payloads into typed entities. It holds no mutable
//! state and performs exactly one outbound call per operation, so a
//! single [`Client`] can be shared freely across tasks.
//!
//! ```no_run
//! use payok::{Client, Credentials};
//!
//! # async fn run() -> Result<(), payok::Error> {
//! let client = Client::new(Credentials::new("api-id", "api-key"));
//! let balance = client.get_balance().await?;
//! println!("balance: {}", balance.balance);
//! # Ok(())
//! # }
//! ```

mod api;

pub use api::{
    Balance, BillRequest, Client, CommissionType, Credentials, Currency, Error, NewPayout,
    PayStatus, PaymentMethod, Payout, PayoutFilter, PayoutMethod, PayoutRequest, Transaction,
    TransactionFilter, WebhookStatus,
};
