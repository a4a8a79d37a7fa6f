//! Customers: the payers every charge is issued against.

use serde::{Deserialize, Serialize};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{DeletedResponse, Page};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerData {
    pub name: String,
    pub email: String,
    pub cpf_cnpj: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
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
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_emails: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

/// Partial update payload; only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf_cnpj: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
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
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_emails: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub object: String,
    pub id: String,
    pub date_created: String,
    pub name: String,
    pub email: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub mobile_phone: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub address_number: Option<String>,
    pub complement: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub external_reference: Option<String>,
    pub notification_disabled: Option<bool>,
    pub additional_emails: Option<String>,
    pub observations: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerListParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl CustomerListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("name", self.name.as_deref())
            .opt("email", self.email.as_deref())
            .opt("cpfCnpj", self.cpf_cnpj.as_deref())
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

/// Operations under `/customers`.
#[derive(Debug, Clone, Copy)]
pub struct CustomersApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl CustomersApi<'_> {
    pub fn create(&self, data: &CustomerData) -> Result<Customer, ApiError> {
        self.client.post("/customers", data)
    }

    pub fn list(&self, params: &CustomerListParams) -> Result<Page<Customer>, ApiError> {
        self.client.get("/customers", params.to_query())
    }

    pub fn get(&self, id: &str) -> Result<Customer, ApiError> {
        self.client.get(&format!("/customers/{id}"), Query::new())
    }

    pub fn update(&self, id: &str, data: &CustomerUpdate) -> Result<Customer, ApiError> {
        self.client.put(&format!("/customers/{id}"), data)
    }

    pub fn delete(&self, id: &str) -> Result<DeletedResponse, ApiError> {
        self.client.delete(&format!("/customers/{id}"))
    }

    /// Undo a previous `delete`.
    pub fn restore(&self, id: &str) -> Result<Customer, ApiError> {
        self.client.post_empty(&format!("/customers/{id}/restore"))
    }

    pub fn notifications(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.client.get(&format!("/customers/{id}/notifications"), Query::new())
    }
}
