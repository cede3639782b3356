use serde_json::Value;

use super::error::Error;
use super::model::{Balance, NewPayout, Payout, Transaction};
use super::request::{
    self, BillRequest, Params, PayoutFilter, PayoutRequest, TransactionFilter,
};
use super::response;
use crate::api::Decimal;

const DEFAULT_BASE_URL: &str = "https://payok.io";

/// Immutable credential set for one PayOK account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub(crate) api_id: String,
    pub(crate) api_key: String,
    pub(crate) project_id: Option<i64>,
    pub(crate) project_secret: Option<String>,
}

impl Credentials {
    pub fn new(api_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
            api_key: api_key.into(),
            project_id: None,
            project_secret: None,
        }
    }

    /// Default project used when a call does not name one.
    pub fn with_project(mut self, project_id: i64, project_secret: impl Into<String>) -> Self {
        self.project_id = Some(project_id);
        self.project_secret = Some(project_secret.into());
        self
    }
}

/// Asynchronous facade over the PayOK HTTP API.
///
/// The client holds nothing mutable: credentials are fixed at
/// construction and the connection pool lives in `reqwest::Client`, so
/// clones are cheap and calls from concurrent tasks do not interfere.
/// Every operation issues exactly one outbound request
/// ([`Client::create_bill`] issues a second one when activating).
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl Client {
    /// Create a client with its own connection pool.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_http(credentials, reqwest::Client::new())
    }

    /// Create a client on a caller-owned `reqwest::Client`. The caller
    /// keeps the pool alive for the client's lifetime and tears it
    /// down on shutdown.
    pub fn with_http(credentials: Credentials, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_owned(),
            credentials,
        }
    }

    /// Point the client at another service root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    /// Current account balances.
    pub async fn get_balance(&self) -> Result<Balance, Error> {
        let value = self.call("balance", Params::new()).await?;
        let balance: Balance = serde_json::from_value(value)?;
        log::trace!(
            "[balance] {} (ref {})",
            balance.balance,
            balance.ref_balance
        );
        Ok(balance)
    }

    /// Transactions matching `filter`, in service order. May be empty.
    pub async fn get_transactions(
        &self,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, Error> {
        let params = Params::new()
            .set_opt("payment", filter.payment_id)
            .set_opt("offset", filter.offset)
            .set_opt("shop", filter.project_id.or(self.credentials.project_id));

        let value = self.call("transaction", params).await?;
        let transactions = response::entities(value)?;
        log::trace!("[transaction] {} entities", transactions.len());
        Ok(transactions)
    }

    /// Payouts matching `filter`, in service order. May be empty.
    pub async fn get_payouts(&self, filter: PayoutFilter) -> Result<Vec<Payout>, Error> {
        let params = Params::new()
            .set_opt("payout_id", filter.payout_id)
            .set_opt("offset", filter.offset);

        let value = self.call("payout", params).await?;
        let payouts = response::entities(value)?;
        log::trace!("[payout] {} entities", payouts.len());
        Ok(payouts)
    }

    /// Create a payout and return it with the remaining balance.
    pub async fn create_payout(&self, request: PayoutRequest) -> Result<NewPayout, Error> {
        if request.amount <= Decimal::ZERO {
            return Err(Error::InvalidRequest(format!(
                "payout amount must be positive, got {}",
                request.amount
            )));
        }

        // Wire parameter names keep the service's own spelling.
        let params = Params::new()
            .set("amount", request.amount)
            .set("method", request.method)
            .set("reciever", &request.receiver)
            .set("comission_type", request.commission_type)
            .set_opt("webhook_url", request.webhook_url.as_deref());

        let value = self.call("payout_create", params).await?;
        let new_payout: NewPayout = serde_json::from_value(value)?;
        log::trace!(
            "[payout_create] payout {} -> remain {}",
            new_payout.payout.payout_id,
            new_payout.remain_balance
        );
        Ok(new_payout)
    }

    /// Construct the signed bill URL and, unless `request.activate` is
    /// off, fetch it once so the service marks the bill payable. A
    /// failed activation propagates; the URL is not returned.
    pub async fn create_bill(&self, request: BillRequest) -> Result<String, Error> {
        let url = request::bill_url(&self.base_url, &self.credentials, &request)?;

        if request.activate {
            log::debug!("[bill] GET {url}");
            self.http
                .get(url.clone())
                .send()
                .await?
                .error_for_status()?;
        }

        Ok(url.into())
    }

    /// POST an authenticated form to `<base>/api/<endpoint>`, decode
    /// the JSON body and validate the envelope.
    async fn call(&self, endpoint: &str, params: Params) -> Result<Value, Error> {
        let url = format!("{}/api/{}", self.base_url, endpoint);
        log::debug!("POST {url}");

        let value: Value = self
            .http
            .post(&url)
            .form(&params.authenticated(&self.credentials))
            .send()
            .await?
            .json()
            .await?;

        response::check(&value)?;
        Ok(value)
    }
}
