//! Card chargebacks opened against payments.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargebackStatus {
    Analysis,
    Approved,
    Denied,
    Cancelled,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chargeback {
    pub id: String,
    pub payment: String,
    pub installment: Option<String>,
    pub reason: String,
    pub status: ChargebackStatus,
    pub created_date: String,
    pub refund_date: Option<String>,
    pub deadline: Option<String>,
    pub payment_date: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargebackListParams {
    pub payment_id: Option<String>,
    pub installment_id: Option<String>,
    pub status: Option<ChargebackStatus>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl ChargebackListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("paymentId", self.payment_id.as_deref())
            .opt("installmentId", self.installment_id.as_deref())
            .opt("status", self.status)
            .opt("startDate", self.start_date.as_deref())
            .opt("endDate", self.end_date.as_deref())
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChargebacksApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl ChargebacksApi<'_> {
    pub fn list(&self, params: &ChargebackListParams) -> Result<Page<Chargeback>, ApiError> {
        self.client.get("/chargebacks", params.to_query())
    }

    pub fn get(&self, id: &str) -> Result<Chargeback, ApiError> {
        self.client.get(&format!("/chargebacks/{id}"), Query::new())
    }
}
