//! Negative-list (dunning) requests for overdue payments.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NegativeListStatus {
    Pending,
    Processed,
    Failed,
    Removed,
    Denied,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegativeListData {
    pub payment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegativeListEntry {
    pub id: String,
    pub payment: String,
    pub customer: Option<String>,
    pub status: NegativeListStatus,
    pub value: f64,
    pub net_value: Option<f64>,
    pub created_date: String,
    pub removed_date: Option<String>,
    pub denial_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NegativeListParams {
    pub payment_id: Option<String>,
    pub status: Option<NegativeListStatus>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl NegativeListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("paymentId", self.payment_id.as_deref())
            .opt("status", self.status)
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NegativeListApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl NegativeListApi<'_> {
    pub fn create(&self, data: &NegativeListData) -> Result<NegativeListEntry, ApiError> {
        self.client.post("/negativeList", data)
    }

    /// Withdraw a request. The response body is ignored.
    pub fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete::<serde_json::Value>(&format!("/negativeList/{id}"))
            .map(|_| ())
    }

    pub fn list(&self, params: &NegativeListParams) -> Result<Page<NegativeListEntry>, ApiError> {
        self.client.get("/negativeList", params.to_query())
    }

    pub fn get(&self, id: &str) -> Result<NegativeListEntry, ApiError> {
        self.client.get(&format!("/negativeList/{id}"), Query::new())
    }
}
