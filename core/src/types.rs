//! Types shared across resource families.
//!
//! # Design
//! Field names follow the API's camelCase wire format through serde renames.
//! Optional request fields are skipped when `None` so an update only touches
//! what the caller set. String enums serialize as SCREAMING_SNAKE_CASE and
//! render the same string through `Display`, which is what query flattening
//! relies on. A wire value missing from an enum decodes as `Unknown`.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Pagination envelope returned by every listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "list_object")]
    pub object: String,
    pub has_more: bool,
    pub total_count: u64,
    pub limit: u32,
    pub offset: u32,
    pub data: Vec<T>,
}

fn list_object() -> String {
    "list".to_string()
}

/// Response body of DELETE operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: bool,
    pub id: String,
}

/// Inclusive date bounds for a listing filter, flattened to `field[ge]` and
/// `field[le]`. Dates use the API's `YYYY-MM-DD` format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub le: Option<String>,
}

impl DateRange {
    pub fn between(ge: impl Into<String>, le: impl Into<String>) -> Self {
        Self {
            ge: Some(ge.into()),
            le: Some(le.into()),
        }
    }

    pub fn from(ge: impl Into<String>) -> Self {
        Self {
            ge: Some(ge.into()),
            le: None,
        }
    }

    pub fn until(le: impl Into<String>) -> Self {
        Self {
            ge: None,
            le: Some(le.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingType {
    Boleto,
    CreditCard,
    Pix,
    Undefined,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Received,
    Confirmed,
    Overdue,
    Refunded,
    ReceivedInCash,
    RefundRequested,
    ChargebackRequested,
    ChargebackDispute,
    AwaitingChargebackReversal,
    DunningRequested,
    DunningReceived,
    AwaitingRiskAnalysis,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    Expired,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionCycle {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Semiannually,
    Yearly,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// `FIXED` or `PERCENTAGE`, used by discounts and fines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Fixed,
    Percentage,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonType {
    Fisica,
    Juridica,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentLinkChargeType {
    Detached,
    Recurrent,
    Installment,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Scheduled,
    Synchronized,
    Authorized,
    ProcessingCancellation,
    Canceled,
    CancellationDenied,
    Error,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Brazilian federative unit, as accepted by credit bureau reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum State {
    Ac,
    Al,
    Am,
    Ap,
    Ba,
    Ce,
    Df,
    Es,
    Go,
    Ma,
    Mg,
    Ms,
    Mt,
    Pa,
    Pb,
    Pe,
    Pi,
    Pr,
    Rj,
    Rn,
    Ro,
    Rr,
    Rs,
    Sc,
    Se,
    Sp,
    To,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_limit_days: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ValueType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fine {
    pub value: f64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ValueType>,
}

/// One destination of a split payment: a wallet and either a fixed amount or
/// a percentage of the payment value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    pub wallet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentual_value: Option<f64>,
}

impl Split {
    pub fn fixed(wallet_id: impl Into<String>, value: f64) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            fixed_value: Some(value),
            percentual_value: None,
        }
    }

    pub fn percentual(wallet_id: impl Into<String>, percent: f64) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            fixed_value: None,
            percentual_value: Some(percent),
        }
    }
}

/// Where the hosted checkout sends the payer after completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Callback {
    pub success_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_redirect: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub holder_name: String,
    pub number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub ccv: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardHolderInfo {
    pub name: String,
    pub email: String,
    pub cpf_cnpj: String,
    pub postal_code: String,
    pub address_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
