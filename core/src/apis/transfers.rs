//! Outgoing transfers to bank accounts, PIX keys or other Asaas accounts.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::apis::pix::PixKeyType;
use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    Pending,
    BankProcessing,
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
pub enum TransferType {
    BankAccount,
    AsaasAccount,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Pix,
    Ted,
    Internal,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BankAccountType {
    ContaCorrente,
    ContaPoupanca,
    /// A value this client does not know yet.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ispb: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub bank: Bank,
    pub account_name: String,
    pub owner_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_birth_date: Option<String>,
    pub cpf_cnpj: String,
    pub agency: String,
    pub account: String,
    pub account_digit: String,
    pub bank_account_type: BankAccountType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferData {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<OperationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pix_address_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pix_address_key_type: Option<PixKeyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub object: String,
    pub id: String,
    pub date_created: String,
    pub value: f64,
    pub net_value: f64,
    pub status: TransferStatus,
    pub effective_date: Option<String>,
    pub end_to_end_identifier: Option<String>,
    pub schedule_date: Option<String>,
    #[serde(default)]
    pub authorized: bool,
    pub fail_reason: Option<String>,
    pub bank_account: Option<BankAccount>,
    pub transaction_receipt_url: Option<String>,
    pub operation_type: OperationType,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferListParams {
    pub status: Option<TransferStatus>,
    pub date_created: Option<String>,
    pub transfer_date: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl TransferListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .opt("status", self.status)
            .opt("dateCreated", self.date_created.as_deref())
            .opt("transferDate", self.transfer_date.as_deref())
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TransfersApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl TransfersApi<'_> {
    pub fn create(&self, data: &TransferData) -> Result<Transfer, ApiError> {
        self.client.post("/transfers", data)
    }

    pub fn list(&self, params: &TransferListParams) -> Result<Page<Transfer>, ApiError> {
        self.client.get("/transfers", params.to_query())
    }

    pub fn get(&self, id: &str) -> Result<Transfer, ApiError> {
        self.client.get(&format!("/transfers/{id}"), Query::new())
    }

    pub fn cancel(&self, id: &str) -> Result<Transfer, ApiError> {
        self.client.post_empty(&format!("/transfers/{id}/cancel"))
    }
}
