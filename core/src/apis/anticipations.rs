//! Receivable anticipation: early settlement of future credits for a fee.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{BillingType, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AnticipationStatus {
    Pending,
    Approved,
    Denied,
    Cancelled,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Either `payment` or `installment` identifies what to anticipate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnticipationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<BillingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anticipation_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anticipation {
    pub object: String,
    pub id: String,
    pub date_created: String,
    pub status: AnticipationStatus,
    pub request_date: String,
    pub anticipation_date: Option<String>,
    pub value: f64,
    pub net_value: f64,
    pub fee: f64,
    pub billing_type: BillingType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnticipationSimulation {
    pub total_value: f64,
    pub net_value: f64,
    pub fee: f64,
    pub anticipation_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitAmount {
    pub available: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnticipationLimits {
    pub credit_card: LimitAmount,
    pub boleto: LimitAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomaticAnticipationConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnticipationListParams {
    pub status: Option<AnticipationStatus>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl AnticipationListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("status", self.status)
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnticipationsApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl AnticipationsApi<'_> {
    pub fn create(&self, data: &AnticipationData) -> Result<Anticipation, ApiError> {
        self.client.post("/anticipations", data)
    }

    pub fn list(&self, params: &AnticipationListParams) -> Result<Page<Anticipation>, ApiError> {
        self.client.get("/anticipations", params.to_query())
    }

    pub fn get(&self, id: &str) -> Result<Anticipation, ApiError> {
        self.client.get(&format!("/anticipations/{id}"), Query::new())
    }

    /// Quote the fee without requesting the anticipation.
    pub fn simulate(&self, data: &AnticipationData) -> Result<AnticipationSimulation, ApiError> {
        self.client.post("/anticipations/simulate", data)
    }

    pub fn cancel(&self, id: &str) -> Result<Anticipation, ApiError> {
        self.client.post_empty(&format!("/anticipations/{id}/cancel"))
    }

    pub fn automatic(&self) -> Result<AutomaticAnticipationConfig, ApiError> {
        self.client.get("/anticipations/automatic", Query::new())
    }

    pub fn update_automatic(&self, enabled: bool) -> Result<AutomaticAnticipationConfig, ApiError> {
        self.client
            .put("/anticipations/automatic", &AutomaticAnticipationConfig { enabled })
    }

    pub fn limits(&self) -> Result<AnticipationLimits, ApiError> {
        self.client.get("/anticipations/limits", Query::new())
    }
}
