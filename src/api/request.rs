//! Request construction: credential injection, bill signing and the
//! signed payment URL.

use std::collections::BTreeMap;
use std::fmt::Display;

use md5::{Digest, Md5};
use reqwest::Url;

use super::client::Credentials;
use super::enums::{CommissionType, Currency, PaymentMethod, PayoutMethod};
use super::error::Error;
use crate::api::Decimal;

/// Filters for `Client::get_transactions`. All fields are optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFilter {
    /// Restrict to a single payment.
    pub payment_id: Option<i64>,
    /// Pagination offset.
    pub offset: Option<u64>,
    /// Project to query; falls back to the client default.
    pub project_id: Option<i64>,
}

/// Filters for `Client::get_payouts`. All fields are optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayoutFilter {
    /// Restrict to a single payout.
    pub payout_id: Option<i64>,
    /// Pagination offset.
    pub offset: Option<u64>,
}

/// Parameters for `Client::create_payout`.
#[derive(Debug, Clone)]
pub struct PayoutRequest {
    /// Amount to transfer; must be positive.
    pub amount: Decimal,
    /// Destination identifier. Its shape depends on `method` and is
    /// validated by the service, not the client.
    pub receiver: String,
    pub method: PayoutMethod,
    /// Which side of the transfer absorbs the service fee.
    pub commission_type: CommissionType,
    /// Endpoint notified when the payout settles.
    pub webhook_url: Option<String>,
}

impl PayoutRequest {
    /// Card payout with the fee charged against the balance.
    pub fn new(amount: Decimal, receiver: impl Into<String>) -> Self {
        Self {
            amount,
            receiver: receiver.into(),
            method: PayoutMethod::Card,
            commission_type: CommissionType::Balance,
            webhook_url: None,
        }
    }
}

/// Parameters for `Client::create_bill`.
#[derive(Debug, Clone)]
pub struct BillRequest {
    /// Bill identifier, unique within the merchant's own records.
    pub pay_id: i64,
    pub amount: Decimal,
    pub currency: Currency,
    /// Description shown to the payer.
    pub description: String,
    /// Preselected payment method, if any.
    pub method: Option<PaymentMethod>,
    pub email: Option<String>,
    /// Where the payer lands after a successful payment.
    pub success_url: Option<String>,
    pub lang: Option<String>,
    /// Fetch the constructed URL once so the service marks the bill
    /// payable before it is handed out.
    pub activate: bool,
    /// Project id; falls back to the client default.
    pub project_id: Option<i64>,
    /// Project secret; falls back to the client default.
    pub project_secret: Option<String>,
    /// Free-form parameters forwarded under the `custom` query key.
    pub custom: BTreeMap<String, String>,
}

impl BillRequest {
    /// A rouble bill with the service defaults, activated on creation.
    pub fn new(pay_id: i64, amount: Decimal) -> Self {
        Self {
            pay_id,
            amount,
            currency: Currency::Rub,
            description: "Payment".to_owned(),
            method: None,
            email: None,
            success_url: None,
            lang: None,
            activate: true,
            project_id: None,
            project_secret: None,
            custom: BTreeMap::new(),
        }
    }
}

/// Form parameters for an authenticated POST. Absent values are skipped.
#[derive(Debug, Default)]
pub(crate) struct Params(Vec<(&'static str, String)>);

impl Params {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn set(mut self, key: &'static str, value: impl Display) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub(crate) fn set_opt(self, key: &'static str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Complete the form with the fixed credential pair.
    pub(crate) fn authenticated(self, credentials: &Credentials) -> Vec<(&'static str, String)> {
        let mut form = self.0;
        form.push(("API_ID", credentials.api_id.clone()));
        form.push(("API_KEY", credentials.api_key.clone()));
        form
    }
}

/// Signature token for a bill URL.
///
/// The service validates the MD5 of the `|`-joined fields in this exact
/// order; both the digest and the order are fixed by the wire protocol.
pub(crate) fn bill_signature(
    amount: &str,
    pay_id: i64,
    project_id: i64,
    currency: Currency,
    description: &str,
    project_secret: &str,
) -> String {
    let joined = [
        amount,
        &pay_id.to_string(),
        &project_id.to_string(),
        currency.as_str(),
        description,
        project_secret,
    ]
    .join("|");
    format!("{:x}", Md5::digest(joined.as_bytes()))
}

/// Build the signed bill URL, applying the client credential fallbacks.
pub(crate) fn bill_url(
    base_url: &str,
    credentials: &Credentials,
    bill: &BillRequest,
) -> Result<Url, Error> {
    let project_id = bill
        .project_id
        .or(credentials.project_id)
        .ok_or_else(|| Error::InvalidRequest("bill signing requires a project_id".to_owned()))?;
    let project_secret = bill
        .project_secret
        .as_deref()
        .or(credentials.project_secret.as_deref())
        .ok_or_else(|| {
            Error::InvalidRequest("bill signing requires a project_secret".to_owned())
        })?;

    // The amount string must be byte-identical in the signature and in
    // the query, or the service rejects the sign.
    let amount = bill.amount.to_string();
    let sign = bill_signature(
        &amount,
        bill.pay_id,
        project_id,
        bill.currency,
        &bill.description,
        project_secret,
    );

    let mut url = Url::parse(&format!("{base_url}/pay"))
        .map_err(|error| Error::InvalidRequest(format!("invalid base url {base_url}: {error}")))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("amount", &amount);
        query.append_pair("payment", &bill.pay_id.to_string());
        query.append_pair("shop", &project_id.to_string());
        query.append_pair("currency", bill.currency.as_str());
        query.append_pair("desc", &bill.description);
        if let Some(email) = &bill.email {
            query.append_pair("email", email);
        }
        if let Some(success_url) = &bill.success_url {
            query.append_pair("success_url", success_url);
        }
        if let Some(method) = bill.method {
            query.append_pair("method", method.as_str());
        }
        if let Some(lang) = &bill.lang {
            query.append_pair("lang", lang);
        }
        query.append_pair("sign", &sign);
        if !bill.custom.is_empty() {
            query.append_pair("custom", &serde_json::to_string(&bill.custom)?);
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn credentials() -> Credentials {
        Credentials::new("id", "key").with_project(1, "secret")
    }

    #[test]
    fn test_signature_known_answer() {
        assert_eq!(
            bill_signature("100", 1, 1, Currency::Rub, "Payment", "secret"),
            "3b8422fdfc120b655e2402efcd5339e6"
        );
        assert_eq!(
            bill_signature("250.50", 42, 7, Currency::Usd, "Order 42", "s3cr3t"),
            "1d7797d46fd3b5bd48462f216248f5a9"
        );
    }

    #[test]
    fn test_signature_is_order_sensitive() {
        let reference = bill_signature("100", 1, 1, Currency::Rub, "Payment", "secret");
        // Swapping amount and pay_id changes the joined string.
        assert_ne!(
            bill_signature("1", 100, 1, Currency::Rub, "Payment", "secret"),
            reference
        );
    }

    #[test]
    fn test_signature_depends_on_every_field() {
        let reference = bill_signature("100", 1, 1, Currency::Rub, "Payment", "secret");
        let variants = [
            bill_signature("101", 1, 1, Currency::Rub, "Payment", "secret"),
            bill_signature("100", 2, 1, Currency::Rub, "Payment", "secret"),
            bill_signature("100", 1, 2, Currency::Rub, "Payment", "secret"),
            bill_signature("100", 1, 1, Currency::Usd, "Payment", "secret"),
            bill_signature("100", 1, 1, Currency::Rub, "Payments", "secret"),
            bill_signature("100", 1, 1, Currency::Rub, "Payment", "other"),
        ];
        for variant in variants {
            assert_ne!(variant, reference);
        }
    }

    #[test]
    fn test_params_skip_absent_values() {
        let form = Params::new()
            .set("amount", 1)
            .set_opt("offset", None::<u64>)
            .set_opt("shop", Some(7))
            .authenticated(&credentials());

        assert_eq!(
            form,
            vec![
                ("amount", "1".to_owned()),
                ("shop", "7".to_owned()),
                ("API_ID", "id".to_owned()),
                ("API_KEY", "key".to_owned()),
            ]
        );
    }

    #[test]
    fn test_bill_url_assembly_and_key_order() {
        let bill = BillRequest::new(1, dec!(100));
        let url = bill_url("https://payok.io", &credentials(), &bill).unwrap();

        assert_eq!(
            url.as_str(),
            "https://payok.io/pay?amount=100&payment=1&shop=1&currency=RUB&desc=Payment\
             &sign=3b8422fdfc120b655e2402efcd5339e6"
        );
    }

    #[test]
    fn test_bill_url_includes_optional_keys_and_custom() {
        let mut bill = BillRequest::new(1, dec!(100));
        bill.email = Some("payer@example.com".to_owned());
        bill.method = Some(PaymentMethod::Card);
        bill.custom.insert("user".to_owned(), "42".to_owned());
        let url = bill_url("https://payok.io", &credentials(), &bill).unwrap();
        let query = url.query().unwrap();

        assert!(query.contains("email=payer%40example.com"));
        assert!(query.contains("method=cd"));
        assert!(query.contains("custom=%7B%22user%22%3A%2242%22%7D"));
        // sign stays ahead of custom, after the fixed keys.
        assert!(query.find("sign=").unwrap() < query.find("custom=").unwrap());
    }

    #[test]
    fn test_bill_request_overrides_beat_client_defaults() {
        let mut bill = BillRequest::new(1, dec!(100));
        bill.project_id = Some(9);
        bill.project_secret = Some("other".to_owned());
        let url = bill_url("https://payok.io", &credentials(), &bill).unwrap();

        assert!(url.query().unwrap().contains("shop=9"));
    }

    #[test]
    fn test_bill_url_requires_project_credentials() {
        let bill = BillRequest::new(1, dec!(100));
        let bare = Credentials::new("id", "key");
        let error = bill_url("https://payok.io", &bare, &bill).unwrap_err();
        assert!(matches!(error, Error::InvalidRequest(_)));
    }
}
