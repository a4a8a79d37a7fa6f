//! Webhook endpoint registration.
//!
//! Delivery payloads are not verified here; this module only manages the
//! endpoints Asaas posts to.

use serde::{Deserialize, Serialize};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{DeletedResponse, Page};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookData {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    pub events: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: String,
    pub name: String,
    pub url: String,
    pub email: Option<String>,
    pub api_version: Option<u32>,
    pub enabled: Option<bool>,
    pub interrupted: Option<bool>,
    pub auth_token: Option<String>,
    #[serde(default)]
    pub events: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interrupted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy)]
pub struct WebhooksApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl WebhooksApi<'_> {
    pub fn create(&self, data: &WebhookData) -> Result<Webhook, ApiError> {
        self.client.post("/webhooks", data)
    }

    pub fn list(&self) -> Result<Page<Webhook>, ApiError> {
        self.client.get("/webhooks", Query::new())
    }

    pub fn get(&self, id: &str) -> Result<Webhook, ApiError> {
        self.client.get(&format!("/webhooks/{id}"), Query::new())
    }

    pub fn update(&self, id: &str, data: &WebhookUpdate) -> Result<Webhook, ApiError> {
        self.client.put(&format!("/webhooks/{id}"), data)
    }

    pub fn delete(&self, id: &str) -> Result<DeletedResponse, ApiError> {
        self.client.delete(&format!("/webhooks/{id}"))
    }

    /// Clear the delivery penalty after the queue was interrupted by failures.
    pub fn remove_backoff(&self, id: &str) -> Result<Webhook, ApiError> {
        self.client.post_empty(&format!("/webhooks/{id}/removeBackoff"))
    }
}
