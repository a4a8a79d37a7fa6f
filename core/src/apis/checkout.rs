//! Hosted checkout: create a charge and hand the payer its invoice page.

use serde::{Deserialize, Serialize};

use crate::apis::payments::Payment;
use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{BillingType, Callback};

/// Fallback page when a payment carries no `invoiceUrl`.
pub const CHECKOUT_BASE_URL: &str = "https://www.asaas.com/c";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutData {
    pub customer: String,
    pub billing_type: BillingType,
    pub value: f64,
    pub due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Callback>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResult {
    pub payment_id: String,
    pub checkout_url: String,
}

impl From<Payment> for CheckoutResult {
    fn from(payment: Payment) -> Self {
        let checkout_url = payment
            .invoice_url
            .unwrap_or_else(|| format!("{CHECKOUT_BASE_URL}/{}", payment.id));
        Self {
            payment_id: payment.id,
            checkout_url,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CheckoutApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl CheckoutApi<'_> {
    pub fn create_checkout(&self, data: &CheckoutData) -> Result<CheckoutResult, ApiError> {
        let payment: Payment = self.client.post("/payments", data)?;
        Ok(payment.into())
    }

    pub fn checkout_url(&self, payment_id: &str) -> Result<CheckoutResult, ApiError> {
        let payment: Payment = self.client.get(&format!("/payments/{payment_id}"), Query::new())?;
        Ok(payment.into())
    }
}
