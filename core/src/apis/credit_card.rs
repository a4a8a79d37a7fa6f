//! Credit card tokenization.

use serde::{Deserialize, Serialize};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::types::{CreditCard, CreditCardHolderInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizeData {
    pub credit_card: CreditCard,
    pub credit_card_holder_info: CreditCardHolderInfo,
    pub customer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardToken {
    pub credit_card_token: String,
    #[serde(default)]
    pub credit_card_number: Option<String>,
    #[serde(default)]
    pub credit_card_brand: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct CreditCardApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl CreditCardApi<'_> {
    /// Exchange card data for a reusable token bound to `customer`.
    pub fn tokenize(&self, data: &TokenizeData) -> Result<CreditCardToken, ApiError> {
        self.client.post("/creditCard/tokenize", data)
    }
}
