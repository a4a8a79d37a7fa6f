//! Installment plans: one purchase split into several payments.

use serde::{Deserialize, Serialize};

use crate::apis::payments::Payment;
use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{BillingType, DeletedResponse, Discount, Fine, Interest, Page, Split};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentData {
    pub customer: String,
    pub billing_type: BillingType,
    pub value: f64,
    pub due_date: String,
    pub installment_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Split>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_service: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    pub object: String,
    pub id: String,
    pub date_created: String,
    pub customer: String,
    pub billing_type: BillingType,
    pub value: f64,
    pub description: Option<String>,
    pub external_reference: Option<String>,
    pub installment_count: u32,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallmentListParams {
    pub customer: Option<String>,
    pub billing_type: Option<BillingType>,
    pub external_reference: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl InstallmentListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("customer", self.customer.as_deref())
            .opt("billingType", self.billing_type)
            .opt("externalReference", self.external_reference.as_deref())
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InstallmentsApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl InstallmentsApi<'_> {
    pub fn create(&self, data: &InstallmentData) -> Result<Installment, ApiError> {
        self.client.post("/installments", data)
    }

    pub fn list(&self, params: &InstallmentListParams) -> Result<Page<Installment>, ApiError> {
        self.client.get("/installments", params.to_query())
    }

    pub fn get(&self, id: &str) -> Result<Installment, ApiError> {
        self.client.get(&format!("/installments/{id}"), Query::new())
    }

    pub fn delete(&self, id: &str) -> Result<DeletedResponse, ApiError> {
        self.client.delete(&format!("/installments/{id}"))
    }

    pub fn payments(&self, id: &str) -> Result<Page<Payment>, ApiError> {
        self.client.get(&format!("/installments/{id}/payments"), Query::new())
    }

    pub fn payment_book(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.client.get(&format!("/installments/{id}/paymentBook"), Query::new())
    }

    pub fn update_splits(&self, id: &str, data: &serde_json::Value) -> Result<Installment, ApiError> {
        self.client.put(&format!("/installments/{id}/splits"), data)
    }

    /// Cancel every pending or overdue payment of the plan.
    pub fn cancel_pending_payments(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.client.delete(&format!("/installments/{id}/payments"))
    }
}
