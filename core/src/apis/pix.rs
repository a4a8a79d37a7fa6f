//! PIX: address keys, QR-code transactions and automatic debit.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{DeletedResponse, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PixKeyType {
    Evp,
    Email,
    Phone,
    Cpf,
    Cnpj,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PixKeyStatus {
    AwaitingActivation,
    Active,
    Deleted,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PixTransactionType {
    Debit,
    Credit,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PixTransactionStatus {
    Pending,
    Done,
    Cancelled,
    Failed,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PixAuthorizationStatus {
    Pending,
    Active,
    Cancelled,
    Expired,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PixInstructionStatus {
    Pending,
    Received,
    Confirmed,
    Cancelled,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixAddressKeyData {
    #[serde(rename = "type")]
    pub kind: PixKeyType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixAddressKey {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PixKeyType,
    pub key: String,
    pub status: PixKeyStatus,
    pub date_created: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixQrCodePayload {
    pub payload: String,
}

/// Pay a PIX QR code, optionally scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixTransactionData {
    pub qr_code: PixQrCodePayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PixTransactionType,
    pub value: f64,
    pub status: PixTransactionStatus,
    pub description: Option<String>,
    pub schedule_date: Option<String>,
    pub date_created: String,
    pub effective_date: Option<String>,
    pub end_to_end_identifier: Option<String>,
    pub qr_code: Option<PixQrCodePayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixRecipient {
    pub name: String,
    pub cpf_cnpj: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixQrCodeDecoded {
    pub payload: String,
    pub value: Option<f64>,
    pub due_date: Option<String>,
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub can_be_paid_with_different_value: bool,
    pub recipient: Option<PixRecipient>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixTransactionListParams {
    pub kind: Option<PixTransactionType>,
    pub status: Option<PixTransactionStatus>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl PixTransactionListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("type", self.kind)
            .opt("status", self.status)
            .opt("startDate", self.start_date.as_deref())
            .opt("endDate", self.end_date.as_deref())
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixAutomaticDebitAuthorizationData {
    pub customer: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_info: Option<PixRecipient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixAuthorizationQrCode {
    pub encoded_image: String,
    pub payload: String,
    pub expiration_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixAutomaticDebitAuthorization {
    pub id: String,
    pub customer: String,
    pub value: f64,
    pub status: PixAuthorizationStatus,
    pub description: Option<String>,
    pub external_reference: Option<String>,
    pub schedule_date: Option<String>,
    pub date_created: String,
    pub authorization_url: Option<String>,
    pub qr_code: Option<PixAuthorizationQrCode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixAuthorizationListParams {
    pub customer: Option<String>,
    pub status: Option<PixAuthorizationStatus>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl PixAuthorizationListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("customer", self.customer.as_deref())
            .opt("status", self.status)
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixPaymentInstruction {
    pub id: String,
    pub authorization: String,
    pub value: f64,
    pub status: PixInstructionStatus,
    pub due_date: String,
    pub payment_date: Option<String>,
}

const AUTHORIZATIONS: &str = "/pix/automaticDebit/authorizations";
const PAYMENT_INSTRUCTIONS: &str = "/pix/automaticDebit/paymentInstructions";

/// Operations under `/pix`.
#[derive(Debug, Clone, Copy)]
pub struct PixApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl PixApi<'_> {
    pub fn create_address_key(&self, data: &PixAddressKeyData) -> Result<PixAddressKey, ApiError> {
        self.client.post("/pix/addressKeys", data)
    }

    pub fn list_address_keys(&self) -> Result<Page<PixAddressKey>, ApiError> {
        self.client.get("/pix/addressKeys", Query::new())
    }

    pub fn get_address_key(&self, id: &str) -> Result<PixAddressKey, ApiError> {
        self.client.get(&format!("/pix/addressKeys/{id}"), Query::new())
    }

    pub fn delete_address_key(&self, id: &str) -> Result<DeletedResponse, ApiError> {
        self.client.delete(&format!("/pix/addressKeys/{id}"))
    }

    /// Pay a QR code.
    pub fn create_transaction(&self, data: &PixTransactionData) -> Result<PixTransaction, ApiError> {
        self.client.post("/pix/transactions", data)
    }

    pub fn decode_qr_code(&self, payload: &str) -> Result<PixQrCodeDecoded, ApiError> {
        self.client.post(
            "/pix/qrCodes/decode",
            &PixQrCodePayload {
                payload: payload.to_string(),
            },
        )
    }

    pub fn get_transaction(&self, id: &str) -> Result<PixTransaction, ApiError> {
        self.client.get(&format!("/pix/transactions/{id}"), Query::new())
    }

    pub fn list_transactions(
        &self,
        params: &PixTransactionListParams,
    ) -> Result<Page<PixTransaction>, ApiError> {
        self.client.get("/pix/transactions", params.to_query())
    }

    /// Cancel a scheduled transaction.
    pub fn cancel_transaction(&self, id: &str) -> Result<PixTransaction, ApiError> {
        self.client.post_empty(&format!("/pix/transactions/{id}/cancel"))
    }

    pub fn create_authorization(
        &self,
        data: &PixAutomaticDebitAuthorizationData,
    ) -> Result<PixAutomaticDebitAuthorization, ApiError> {
        self.client.post(AUTHORIZATIONS, data)
    }

    pub fn list_authorizations(
        &self,
        params: &PixAuthorizationListParams,
    ) -> Result<Page<PixAutomaticDebitAuthorization>, ApiError> {
        self.client.get(AUTHORIZATIONS, params.to_query())
    }

    pub fn get_authorization(&self, id: &str) -> Result<PixAutomaticDebitAuthorization, ApiError> {
        self.client.get(&format!("{AUTHORIZATIONS}/{id}"), Query::new())
    }

    pub fn cancel_authorization(&self, id: &str) -> Result<DeletedResponse, ApiError> {
        self.client.delete(&format!("{AUTHORIZATIONS}/{id}"))
    }

    pub fn get_payment_instruction(&self, id: &str) -> Result<PixPaymentInstruction, ApiError> {
        self.client.get(&format!("{PAYMENT_INSTRUCTIONS}/{id}"), Query::new())
    }

    pub fn list_payment_instructions(&self) -> Result<Page<PixPaymentInstruction>, ApiError> {
        self.client.get(PAYMENT_INSTRUCTIONS, Query::new())
    }
}
