//! The authenticated account: profile, balance and statement.

use serde::{Deserialize, Serialize};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{Page, PersonType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub object: String,
    pub name: String,
    pub email: String,
    pub login_email: String,
    pub cpf_cnpj: String,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub address: Option<String>,
    pub address_number: Option<String>,
    pub complement: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub person_type: PersonType,
    pub company_type: Option<String>,
    /// Numeric city code.
    pub city: Option<u64>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub api_key: Option<String>,
    pub wallet_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialBalance {
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialTransaction {
    pub object: String,
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    pub balance: f64,
    pub description: String,
    pub payment: Option<String>,
    pub transfer: Option<String>,
    pub installment: Option<String>,
    pub subscription: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionListParams {
    pub start_date: Option<String>,
    pub finish_date: Option<String>,
    pub kind: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl TransactionListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("startDate", self.start_date.as_deref())
            .opt("finishDate", self.finish_date.as_deref())
            .opt("type", self.kind.as_deref())
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AccountApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl AccountApi<'_> {
    pub fn info(&self) -> Result<AccountInfo, ApiError> {
        self.client.get("/myAccount", Query::new())
    }

    pub fn balance(&self) -> Result<FinancialBalance, ApiError> {
        self.client.get("/finance/balance", Query::new())
    }

    pub fn transactions(
        &self,
        params: &TransactionListParams,
    ) -> Result<Page<FinancialTransaction>, ApiError> {
        self.client.get("/financialTransactions", params.to_query())
    }

    pub fn update_config(&self, data: &AccountConfig) -> Result<AccountInfo, ApiError> {
        self.client.put("/myAccount", data)
    }
}
