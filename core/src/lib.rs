//! Blocking client for the Asaas payments API (v3).
//!
//! # Overview
//! Every operation goes through one pipeline: an `ApiRequest` is turned into
//! an `HttpRequest` by `AsaasClient::build_request`, sent by a `Transport`,
//! and the `HttpResponse` is decoded by `AsaasClient::parse_response`. The
//! build and parse halves never touch the network, so they are tested
//! without a server.
//!
//! # Design
//! - `AsaasClient` holds immutable configuration and a shared transport; it
//!   is cheap to clone and safe to use from many threads.
//! - Resource families (`client.customers()`, `client.pix()`, ...) are thin
//!   borrowing handles. They add no state and no retries.
//! - API failures keep the server's error envelope (`errors[].code` and
//!   `errors[].description`) alongside the HTTP status. Transport failures
//!   use status 0 and the `NETWORK_ERROR` code.
//! - Models are defined independently from the mock-server crate; the
//!   integration tests catch schema drift.
//!
//! ```no_run
//! use asaas_core::{AsaasClient, AsaasConfig};
//! use asaas_core::apis::customers::CustomerData;
//!
//! # fn main() -> Result<(), asaas_core::ApiError> {
//! let client = AsaasClient::new(AsaasConfig::new("$aact_key"));
//! let customer = client.customers().create(&CustomerData {
//!     name: "Maria".to_string(),
//!     email: "maria@example.com".to_string(),
//!     cpf_cnpj: "24971563792".to_string(),
//!     ..Default::default()
//! })?;
//! println!("{}", customer.id);
//! # Ok(())
//! # }
//! ```

pub mod apis;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod transport;
pub mod types;

pub use apis::split::{validate_splits, SplitConfigError};
pub use client::{ApiRequest, AsaasClient};
pub use config::{AsaasConfig, Environment};
pub use error::{ApiError, ConfigError, ErrorEntry};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::Query;
pub use transport::{Transport, TransportError, UreqTransport};
pub use types::{DateRange, DeletedResponse, Page};
