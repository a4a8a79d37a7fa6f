//! Refunds of payments and installment plans.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
    Pending,
    Done,
    Cancelled,
    Failed,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Partial refund amount and reason. An empty value refunds the full amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub object: String,
    pub id: String,
    pub date_created: String,
    pub payment: String,
    pub value: f64,
    pub description: Option<String>,
    pub status: RefundStatus,
    pub transaction_receipt_url: Option<String>,
    pub refund_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefundListParams {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl RefundListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query.opt("offset", self.offset).opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RefundsApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl RefundsApi<'_> {
    pub fn refund_payment(&self, payment_id: &str, data: Option<&RefundData>) -> Result<Refund, ApiError> {
        let path = format!("/payments/{payment_id}/refund");
        match data {
            Some(data) => self.client.post(&path, data),
            None => self.client.post_empty(&path),
        }
    }

    pub fn refund_installment(
        &self,
        installment_id: &str,
        data: Option<&RefundData>,
    ) -> Result<Refund, ApiError> {
        let path = format!("/installments/{installment_id}/refund");
        match data {
            Some(data) => self.client.post(&path, data),
            None => self.client.post_empty(&path),
        }
    }

    pub fn list_payment_refunds(
        &self,
        payment_id: &str,
        params: &RefundListParams,
    ) -> Result<Page<Refund>, ApiError> {
        self.client.get(&format!("/payments/{payment_id}/refunds"), params.to_query())
    }
}
