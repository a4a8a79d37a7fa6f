//! Credit bureau (Serasa) reports on customers or documents.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{Page, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditBureauReportStatus {
    Pending,
    Processed,
    Failed,
    Cancelled,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

/// Identify the subject by `customer` or by `cpf_cnpj`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditBureauReportData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf_cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditBureauReport {
    pub id: String,
    pub customer: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub state: Option<State>,
    pub status: CreditBureauReportStatus,
    pub report_url: Option<String>,
    pub external_reference: Option<String>,
    pub created_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditBureauListParams {
    pub status: Option<CreditBureauReportStatus>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl CreditBureauListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("status", self.status)
            .opt("startDate", self.start_date.as_deref())
            .opt("endDate", self.end_date.as_deref())
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CreditBureauApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl CreditBureauApi<'_> {
    pub fn create(&self, data: &CreditBureauReportData) -> Result<CreditBureauReport, ApiError> {
        self.client.post("/creditBureauReport", data)
    }

    pub fn list(
        &self,
        params: &CreditBureauListParams,
    ) -> Result<Page<CreditBureauReport>, ApiError> {
        self.client.get("/creditBureauReport", params.to_query())
    }

    pub fn get(&self, id: &str) -> Result<CreditBureauReport, ApiError> {
        self.client.get(&format!("/creditBureauReport/{id}"), Query::new())
    }
}
