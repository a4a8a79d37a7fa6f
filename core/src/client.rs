//! The request pipeline shared by every resource operation.
//!
//! # Design
//! `AsaasClient` holds the immutable endpoint configuration and a shared
//! `Transport`. A call goes through three steps:
//! - `build_request` turns an `ApiRequest` into a wire-level `HttpRequest`
//!   (URL, fixed headers, JSON body),
//! - the transport executes it,
//! - `parse_response` resolves the `HttpResponse` into the declared type or
//!   an `ApiError`.
//!
//! Both `build_request` and `parse_response` are pure and public, so the
//! pipeline can be exercised without a network and driven by a caller-owned
//! HTTP stack. Nothing is retried and no state survives between calls.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::AsaasConfig;
use crate::error::{ApiError, ErrorEntry, ErrorEnvelope};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::query::Query;
use crate::transport::{Transport, UreqTransport};

/// Name of the header carrying the API key.
pub const AUTH_HEADER: &str = "access_token";

/// A logical API operation: verb, path relative to the base URL, optional
/// JSON body and query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub query: Query,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Query::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach a JSON body. Only sent for methods that carry one.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }
}

/// Client for the Asaas REST API.
///
/// Cheap to clone and safe to share across threads; every call is
/// independent.
#[derive(Clone)]
pub struct AsaasClient {
    config: AsaasConfig,
    transport: Arc<dyn Transport>,
}

impl AsaasClient {
    /// Client using the default blocking `UreqTransport`.
    pub fn new(config: AsaasConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }

    pub fn with_transport(config: AsaasConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &AsaasConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Resolve base URL, path and query into the full request URL. No `?`
    /// is appended for an empty query.
    pub fn url_for(&self, path: &str, query: &Query) -> String {
        let mut url = format!("{}{path}", self.base_url());
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.encode());
        }
        url
    }

    /// Build the wire request for `request`. Every request carries exactly
    /// `Content-Type: application/json` and the `access_token` header.
    pub fn build_request(&self, request: &ApiRequest) -> HttpRequest {
        let body = if request.method.carries_body() {
            request.body.as_ref().map(|b| b.to_string())
        } else {
            None
        };
        HttpRequest {
            method: request.method,
            url: self.url_for(&request.path, &request.query),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                (AUTH_HEADER.to_string(), self.config.api_key().to_string()),
            ],
            body,
        }
    }

    /// Resolve a response into the declared type.
    ///
    /// Non-2xx bodies are decoded as the error envelope; when that fails a
    /// single `HTTP_<status>` entry is synthesized from the status text. An
    /// empty 2xx body decodes as JSON `null`.
    pub fn parse_response<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        if !response.is_success() {
            let errors = match serde_json::from_str::<ErrorEnvelope>(&response.body) {
                Ok(envelope) => envelope.errors,
                Err(_) => vec![ErrorEntry::new(
                    format!("HTTP_{}", response.status),
                    response.status_text.clone(),
                )],
            };
            return Err(ApiError::Http {
                status: response.status,
                status_text: response.status_text,
                errors,
            });
        }

        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization {
            status: response.status,
            message: e.to_string(),
        })
    }

    /// Run one operation through the pipeline.
    pub fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let http_request = self.build_request(&request);
        debug!(method = %http_request.method, url = %http_request.url, "sending Asaas request");

        let response = match self.transport.send(&http_request) {
            Ok(response) => response,
            Err(e) => {
                warn!(method = %http_request.method, url = %http_request.url, error = %e, "Asaas request failed");
                return Err(ApiError::network(e.0));
            }
        };
        debug!(status = response.status, "received Asaas response");

        let result = self.parse_response(response);
        if let Err(ApiError::Http { status, errors, .. }) = &result {
            let code = errors.first().map(|e| e.code.as_str()).unwrap_or_default();
            warn!(status, code, path = %request.path, "Asaas request rejected");
        }
        result
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<T, ApiError> {
        self.execute(ApiRequest::get(path).query(query))
    }

    pub fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(ApiRequest::post(path).json(body)?)
    }

    /// POST without a payload (restore, cancel and similar actions).
    pub fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::post(path))
    }

    pub fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(ApiRequest::put(path).json(body)?)
    }

    pub fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(ApiRequest::delete(path))
    }
}

impl fmt::Debug for AsaasClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsaasClient").field("config", &self.config).finish_non_exhaustive()
    }
}
