//! Payments (charges): boleto, credit card and PIX billing.

use serde::{Deserialize, Serialize};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{
    BillingType, Callback, DateRange, DeletedResponse, Discount, Fine, Interest, Page,
    PaymentStatus, Split,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    pub customer: String,
    pub billing_type: BillingType,
    pub value: f64,
    pub due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<Interest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<Fine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_service: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Split>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Callback>,
}

impl PaymentData {
    /// Minimal charge: customer, billing type, value and due date.
    pub fn new(
        customer: impl Into<String>,
        billing_type: BillingType,
        value: f64,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            customer: customer.into(),
            billing_type,
            value,
            due_date: due_date.into(),
            description: None,
            external_reference: None,
            installment_count: None,
            installment_value: None,
            discount: None,
            interest: None,
            fine: None,
            postal_service: None,
            split: None,
            callback: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub object: String,
    pub id: String,
    pub date_created: String,
    pub customer: String,
    pub billing_type: BillingType,
    pub value: f64,
    pub due_date: String,
    pub status: PaymentStatus,
    pub description: Option<String>,
    pub external_reference: Option<String>,
    pub subscription: Option<String>,
    pub installment: Option<String>,
    pub installment_number: Option<u32>,
    pub net_value: Option<f64>,
    pub confirmed_date: Option<String>,
    pub payment_date: Option<String>,
    pub client_payment_date: Option<String>,
    pub invoice_url: Option<String>,
    pub bank_slip_url: Option<String>,
    pub transaction_receipt_url: Option<String>,
    pub invoice_number: Option<String>,
    pub discount: Option<Discount>,
    pub interest: Option<Interest>,
    pub fine: Option<Fine>,
    pub postal_service: Option<bool>,
    pub split: Option<Vec<Split>>,
    pub callback: Option<Callback>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub anticipated: bool,
    #[serde(default)]
    pub anticipable: bool,
    pub refunds: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
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
}

/// Body of `receive_in_cash`; both fields default server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveInCash {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixQrCode {
    pub encoded_image: String,
    pub payload: String,
    pub expiration_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatusResponse {
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentListParams {
    pub customer: Option<String>,
    pub billing_type: Option<BillingType>,
    pub status: Option<PaymentStatus>,
    pub subscription: Option<String>,
    pub installment: Option<String>,
    pub external_reference: Option<String>,
    pub payment_date: Option<DateRange>,
    pub estimated_credit_date: Option<DateRange>,
    pub due_date: Option<DateRange>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl PaymentListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("customer", self.customer.as_deref())
            .opt("billingType", self.billing_type)
            .opt("status", self.status)
            .opt("subscription", self.subscription.as_deref())
            .opt("installment", self.installment.as_deref())
            .opt("externalReference", self.external_reference.as_deref())
            .range("paymentDate", self.payment_date.as_ref())
            .range("estimatedCreditDate", self.estimated_credit_date.as_ref())
            .range("dueDate", self.due_date.as_ref())
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

/// Operations under `/payments`.
#[derive(Debug, Clone, Copy)]
pub struct PaymentsApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl PaymentsApi<'_> {
    pub fn create(&self, data: &PaymentData) -> Result<Payment, ApiError> {
        self.client.post("/payments", data)
    }

    pub fn list(&self, params: &PaymentListParams) -> Result<Page<Payment>, ApiError> {
        self.client.get("/payments", params.to_query())
    }

    pub fn get(&self, id: &str) -> Result<Payment, ApiError> {
        self.client.get(&format!("/payments/{id}"), Query::new())
    }

    pub fn update(&self, id: &str, data: &PaymentUpdate) -> Result<Payment, ApiError> {
        self.client.put(&format!("/payments/{id}"), data)
    }

    pub fn delete(&self, id: &str) -> Result<DeletedResponse, ApiError> {
        self.client.delete(&format!("/payments/{id}"))
    }

    pub fn restore(&self, id: &str) -> Result<Payment, ApiError> {
        self.client.post_empty(&format!("/payments/{id}/restore"))
    }

    pub fn status(&self, id: &str) -> Result<PaymentStatusResponse, ApiError> {
        self.client.get(&format!("/payments/{id}/status"), Query::new())
    }

    pub fn pix_qr_code(&self, id: &str) -> Result<PixQrCode, ApiError> {
        self.client.get(&format!("/payments/{id}/pixQrCode"), Query::new())
    }

    /// Boleto digitable line ("linha digitável") and barcode.
    pub fn identification_field(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.client.get(&format!("/payments/{id}/identificationField"), Query::new())
    }

    /// Confirm a payment received outside Asaas. `None` sends no body.
    pub fn receive_in_cash(&self, id: &str, data: Option<&ReceiveInCash>) -> Result<Payment, ApiError> {
        let path = format!("/payments/{id}/receiveInCash");
        match data {
            Some(data) => self.client.post(&path, data),
            None => self.client.post_empty(&path),
        }
    }

    pub fn undo_received_in_cash(&self, id: &str) -> Result<Payment, ApiError> {
        self.client.post_empty(&format!("/payments/{id}/undoReceivedInCash"))
    }

    pub fn billing_info(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.client.get(&format!("/payments/{id}/billingInfo"), Query::new())
    }

    pub fn viewing_info(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.client.get(&format!("/payments/{id}/viewingInfo"), Query::new())
    }
}
