//! Shareable payment links.

use serde::{Deserialize, Serialize};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{
    BillingType, Callback, DeletedResponse, Page, PaymentLinkChargeType, Split, SubscriptionCycle,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinkData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub value: f64,
    pub billing_type: BillingType,
    pub charge_type: PaymentLinkChargeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_limit_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_installment_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_cycle: Option<SubscriptionCycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Split>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Callback>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLink {
    pub object: String,
    pub id: String,
    pub date_created: String,
    pub name: String,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub billing_type: BillingType,
    pub charge_type: PaymentLinkChargeType,
    pub due_date_limit_days: Option<u32>,
    pub max_installment_count: Option<u32>,
    pub subscription_cycle: Option<SubscriptionCycle>,
    pub notification_enabled: Option<bool>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    pub active: bool,
    pub url: String,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub payment_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLinkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<BillingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_type: Option<PaymentLinkChargeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_limit_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_installment_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentLinkListParams {
    pub name: Option<String>,
    pub active: Option<bool>,
    pub include_deleted: Option<bool>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl PaymentLinkListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("name", self.name.as_deref())
            .opt("active", self.active)
            .opt("includeDeleted", self.include_deleted)
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PaymentLinksApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl PaymentLinksApi<'_> {
    pub fn create(&self, data: &PaymentLinkData) -> Result<PaymentLink, ApiError> {
        self.client.post("/paymentLinks", data)
    }

    pub fn list(&self, params: &PaymentLinkListParams) -> Result<Page<PaymentLink>, ApiError> {
        self.client.get("/paymentLinks", params.to_query())
    }

    pub fn get(&self, id: &str) -> Result<PaymentLink, ApiError> {
        self.client.get(&format!("/paymentLinks/{id}"), Query::new())
    }

    pub fn update(&self, id: &str, data: &PaymentLinkUpdate) -> Result<PaymentLink, ApiError> {
        self.client.put(&format!("/paymentLinks/{id}"), data)
    }

    pub fn delete(&self, id: &str) -> Result<DeletedResponse, ApiError> {
        self.client.delete(&format!("/paymentLinks/{id}"))
    }

    pub fn restore(&self, id: &str) -> Result<PaymentLink, ApiError> {
        self.client.post_empty(&format!("/paymentLinks/{id}/restore"))
    }

    pub fn remove_image(&self, id: &str, image_id: &str) -> Result<DeletedResponse, ApiError> {
        self.client.delete(&format!("/paymentLinks/{id}/images/{image_id}"))
    }
}
