//! Recurring subscriptions and their generated payments.

use serde::{Deserialize, Serialize};

use crate::apis::payments::Payment;
use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{
    BillingType, CreditCard, CreditCardHolderInfo, DeletedResponse, Discount, Fine, Interest,
    Page, SubscriptionCycle, SubscriptionStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionData {
    pub customer: String,
    pub billing_type: BillingType,
    pub cycle: SubscriptionCycle,
    pub value: f64,
    pub next_due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_payments: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,
}

/// Subscription charged to a credit card, either raw card data plus holder
/// info or a previously issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionWithCardData {
    #[serde(flatten)]
    pub subscription: SubscriptionData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_holder_info: Option<CreditCardHolderInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub object: String,
    pub id: String,
    pub date_created: String,
    pub customer: String,
    pub billing_type: BillingType,
    pub cycle: SubscriptionCycle,
    pub value: f64,
    pub next_due_date: String,
    pub status: SubscriptionStatus,
    pub description: Option<String>,
    pub end_date: Option<String>,
    pub max_payments: Option<u32>,
    pub external_reference: Option<String>,
    pub payment_link: Option<String>,
    pub discount: Option<Discount>,
    pub interest: Option<Interest>,
    pub fine: Option<Fine>,
    pub split: Option<serde_json::Value>,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_type: Option<BillingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<SubscriptionCycle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Also apply the change to payments already generated and still pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_pending_payments: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionListParams {
    pub customer: Option<String>,
    pub billing_type: Option<BillingType>,
    pub status: Option<SubscriptionStatus>,
    pub deleted_only: Option<bool>,
    pub include_deleted: Option<bool>,
    pub external_reference: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl SubscriptionListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("customer", self.customer.as_deref())
            .opt("billingType", self.billing_type)
            .opt("status", self.status)
            .opt("deletedOnly", self.deleted_only)
            .opt("includeDeleted", self.include_deleted)
            .opt("externalReference", self.external_reference.as_deref())
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

/// Operations under `/subscriptions`.
#[derive(Debug, Clone, Copy)]
pub struct SubscriptionsApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl SubscriptionsApi<'_> {
    /// Create a boleto or PIX subscription.
    pub fn create(&self, data: &SubscriptionData) -> Result<Subscription, ApiError> {
        self.client.post("/subscriptions", data)
    }

    pub fn create_with_card(&self, data: &SubscriptionWithCardData) -> Result<Subscription, ApiError> {
        self.client.post("/subscriptions", data)
    }

    pub fn list(&self, params: &SubscriptionListParams) -> Result<Page<Subscription>, ApiError> {
        self.client.get("/subscriptions", params.to_query())
    }

    pub fn get(&self, id: &str) -> Result<Subscription, ApiError> {
        self.client.get(&format!("/subscriptions/{id}"), Query::new())
    }

    pub fn update(&self, id: &str, data: &SubscriptionUpdate) -> Result<Subscription, ApiError> {
        self.client.put(&format!("/subscriptions/{id}"), data)
    }

    pub fn delete(&self, id: &str) -> Result<DeletedResponse, ApiError> {
        self.client.delete(&format!("/subscriptions/{id}"))
    }

    /// Replace the card on file without charging it.
    pub fn update_credit_card(
        &self,
        id: &str,
        data: &serde_json::Value,
    ) -> Result<Subscription, ApiError> {
        self.client.put(&format!("/subscriptions/{id}/creditCard"), data)
    }

    pub fn payments(&self, id: &str) -> Result<Page<Payment>, ApiError> {
        self.client.get(&format!("/subscriptions/{id}/payments"), Query::new())
    }

    /// Booklet ("carnê") with every boleto of the subscription.
    pub fn payment_book(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.client.get(&format!("/subscriptions/{id}/paymentBook"), Query::new())
    }

    pub fn create_invoice_settings(
        &self,
        id: &str,
        data: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.client.post(&format!("/subscriptions/{id}/invoiceSettings"), data)
    }

    pub fn invoice_settings(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.client.get(&format!("/subscriptions/{id}/invoiceSettings"), Query::new())
    }

    pub fn update_invoice_settings(
        &self,
        id: &str,
        data: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.client.put(&format!("/subscriptions/{id}/invoiceSettings"), data)
    }

    pub fn delete_invoice_settings(&self, id: &str) -> Result<DeletedResponse, ApiError> {
        self.client.delete(&format!("/subscriptions/{id}/invoiceSettings"))
    }

    pub fn invoices(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.client.get(&format!("/subscriptions/{id}/invoices"), Query::new())
    }
}
