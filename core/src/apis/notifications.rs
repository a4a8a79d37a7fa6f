//! Per-customer notification settings.

use serde::{Deserialize, Serialize};

use crate::client::AsaasClient;
use crate::error::ApiError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_enabled_for_provider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_enabled_for_provider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_enabled_for_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_enabled_for_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_call_enabled_for_customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_enabled_for_customer: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationBatchEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_enabled_for_provider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_enabled_for_provider: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationBatch {
    pub notifications: Vec<NotificationBatchEntry>,
}

#[derive(Debug, Clone, Copy)]
pub struct NotificationsApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl NotificationsApi<'_> {
    pub fn update(
        &self,
        id: &str,
        data: &NotificationUpdate,
    ) -> Result<serde_json::Value, ApiError> {
        self.client.put(&format!("/notifications/{id}"), data)
    }

    pub fn update_batch(&self, data: &NotificationBatch) -> Result<serde_json::Value, ApiError> {
        self.client.put("/notifications/batch", data)
    }
}
