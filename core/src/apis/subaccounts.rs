//! White-label subaccounts owned by the authenticated account.

use serde::{Deserialize, Serialize};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{Page, PersonType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountData {
    pub name: String,
    pub email: String,
    pub cpf_cnpj: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
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
    pub income_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

/// Partial update of a subaccount. Only the fields set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf_cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
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
    pub income_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

/// A subaccount as returned by the API. `api_key` is only present in the
/// creation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subaccount {
    pub object: String,
    pub id: String,
    pub name: String,
    pub email: String,
    pub login_email: Option<String>,
    pub cpf_cnpj: String,
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub mobile_phone: Option<String>,
    pub address: Option<String>,
    pub address_number: Option<String>,
    pub complement: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub person_type: Option<PersonType>,
    pub company_type: Option<String>,
    pub city: Option<u64>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub api_key: Option<String>,
    pub wallet_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubaccountListParams {
    pub email: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl SubaccountListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("email", self.email.as_deref())
            .opt("cpfCnpj", self.cpf_cnpj.as_deref())
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SubaccountsApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl SubaccountsApi<'_> {
    pub fn create(&self, data: &SubaccountData) -> Result<Subaccount, ApiError> {
        self.client.post("/subaccounts", data)
    }

    pub fn list(&self, params: &SubaccountListParams) -> Result<Page<Subaccount>, ApiError> {
        self.client.get("/subaccounts", params.to_query())
    }

    pub fn get(&self, id: &str) -> Result<Subaccount, ApiError> {
        self.client.get(&format!("/subaccounts/{id}"), Query::new())
    }

    pub fn update(&self, id: &str, data: &SubaccountUpdate) -> Result<Subaccount, ApiError> {
        self.client.put(&format!("/subaccounts/{id}"), data)
    }

    /// Documents still pending for onboarding of subaccount `id`.
    pub fn documents(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.client.get(&format!("/subaccounts/{id}/documents"), Query::new())
    }

    pub fn send_documents(
        &self,
        id: &str,
        data: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.client.post(&format!("/subaccounts/{id}/documents"), data)
    }
}
