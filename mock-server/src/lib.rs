//! In-memory imitation of a slice of the Asaas v3 REST API.
//!
//! Serves customers and payments with the real wire shapes: camelCase JSON,
//! the `{object, hasMore, totalCount, limit, offset, data}` listing envelope,
//! soft deletes with restore, and `{errors: [...]}` error bodies. Every route
//! requires the `access_token` header to match the configured key. Unknown
//! routes fall through to axum's empty 404.

pub mod error;

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, Query, Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub use error::MockError;

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub object: String,
    pub id: String,
    pub date_created: String,
    pub name: String,
    pub email: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub mobile_phone: Option<String>,
    pub external_reference: Option<String>,
    pub deleted: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    pub name: String,
    pub email: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub mobile_phone: Option<String>,
    pub external_reference: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub cpf_cnpj: Option<String>,
    pub mobile_phone: Option<String>,
    pub external_reference: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    pub wallet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentual_value: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub object: String,
    pub id: String,
    pub date_created: String,
    pub customer: String,
    pub billing_type: String,
    pub value: f64,
    pub net_value: f64,
    pub due_date: String,
    pub status: String,
    pub description: Option<String>,
    pub external_reference: Option<String>,
    pub payment_date: Option<String>,
    pub invoice_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Vec<Split>>,
    pub deleted: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayment {
    pub customer: String,
    pub billing_type: String,
    pub value: f64,
    pub due_date: String,
    pub description: Option<String>,
    pub external_reference: Option<String>,
    pub split: Option<Vec<Split>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayment {
    pub value: Option<f64>,
    pub due_date: Option<String>,
    pub description: Option<String>,
    pub external_reference: Option<String>,
    pub split: Option<Vec<Split>>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveInCash {
    pub payment_date: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub object: String,
    pub has_more: bool,
    pub total_count: usize,
    pub limit: usize,
    pub offset: usize,
    pub data: Vec<T>,
}

/// Records in insertion order, so listings are stable.
#[derive(Default)]
pub struct Store {
    pub customers: Vec<Customer>,
    pub payments: Vec<Payment>,
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct AppState {
    pub api_key: Arc<str>,
    pub db: Db,
}

pub fn app(api_key: &str) -> Router {
    let state = AppState {
        api_key: Arc::from(api_key),
        db: Arc::new(RwLock::new(Store::default())),
    };
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/customers/{id}/restore", post(restore_customer))
        .route("/payments", get(list_payments).post(create_payment))
        .route(
            "/payments/{id}",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
        .route("/payments/{id}/restore", post(restore_payment))
        .route("/payments/{id}/status", get(payment_status))
        .route("/payments/{id}/receiveInCash", post(receive_in_cash))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_access_token))
        .with_state(state)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

async fn require_access_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, MockError> {
    let authorized = request
        .headers()
        .get("access_token")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == &*state.api_key);
    if !authorized {
        tracing::warn!(path = %request.uri().path(), "rejected request without valid access_token");
        return Err(MockError::Unauthorized);
    }
    Ok(next.run(request).await)
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn new_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

/// Slice `items` by the `offset`/`limit` query parameters.
fn paginate<T>(items: Vec<T>, params: &HashMap<String, String>) -> Result<Page<T>, MockError> {
    let offset = parse_usize(params, "offset")?.unwrap_or(0);
    let limit = parse_usize(params, "limit")?.unwrap_or(DEFAULT_LIMIT);
    if limit > MAX_LIMIT {
        return Err(MockError::invalid(
            "invalid_limit",
            format!("limit must not exceed {MAX_LIMIT}"),
        ));
    }
    let total_count = items.len();
    let data: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    Ok(Page {
        object: "list".to_string(),
        has_more: offset + data.len() < total_count,
        total_count,
        limit,
        offset,
        data,
    })
}

fn parse_usize(params: &HashMap<String, String>, key: &'static str) -> Result<Option<usize>, MockError> {
    params
        .get(key)
        .map(|raw| {
            raw.parse()
                .map_err(|_| MockError::invalid("invalid_parameter", format!("{key} must be a non-negative integer")))
        })
        .transpose()
}

fn matches_filter(params: &HashMap<String, String>, key: &str, value: Option<&str>) -> bool {
    params.get(key).map_or(true, |wanted| value == Some(wanted.as_str()))
}

fn customer_not_found(id: &str) -> MockError {
    MockError::NotFound {
        kind: "customer",
        id: id.to_string(),
    }
}

fn payment_not_found(id: &str) -> MockError {
    MockError::NotFound {
        kind: "payment",
        id: id.to_string(),
    }
}

// --- customers ---

async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Page<Customer>>, MockError> {
    let store = state.db.read().await;
    let matching: Vec<Customer> = store
        .customers
        .iter()
        .filter(|c| !c.deleted)
        .filter(|c| matches_filter(&params, "name", Some(c.name.as_str())))
        .filter(|c| matches_filter(&params, "email", c.email.as_deref()))
        .filter(|c| matches_filter(&params, "cpfCnpj", c.cpf_cnpj.as_deref()))
        .filter(|c| matches_filter(&params, "externalReference", c.external_reference.as_deref()))
        .cloned()
        .collect();
    paginate(matching, &params).map(Json)
}

async fn create_customer(
    State(state): State<AppState>,
    Json(input): Json<CreateCustomer>,
) -> Result<Json<Customer>, MockError> {
    if input.name.trim().is_empty() {
        return Err(MockError::invalid("invalid_name", "name is required"));
    }
    let customer = Customer {
        object: "customer".to_string(),
        id: new_id("cus"),
        date_created: today(),
        name: input.name,
        email: input.email,
        cpf_cnpj: input.cpf_cnpj,
        mobile_phone: input.mobile_phone,
        external_reference: input.external_reference,
        deleted: false,
    };
    tracing::info!(id = %customer.id, "customer created");
    state.db.write().await.customers.push(customer.clone());
    Ok(Json(customer))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, MockError> {
    let store = state.db.read().await;
    store
        .customers
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| customer_not_found(&id))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCustomer>,
) -> Result<Json<Customer>, MockError> {
    let mut store = state.db.write().await;
    let customer = store
        .customers
        .iter_mut()
        .find(|c| c.id == id && !c.deleted)
        .ok_or_else(|| customer_not_found(&id))?;
    if let Some(name) = input.name {
        customer.name = name;
    }
    if input.email.is_some() {
        customer.email = input.email;
    }
    if input.cpf_cnpj.is_some() {
        customer.cpf_cnpj = input.cpf_cnpj;
    }
    if input.mobile_phone.is_some() {
        customer.mobile_phone = input.mobile_phone;
    }
    if input.external_reference.is_some() {
        customer.external_reference = input.external_reference;
    }
    tracing::info!(%id, "customer updated");
    Ok(Json(customer.clone()))
}

async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, MockError> {
    let mut store = state.db.write().await;
    let customer = store
        .customers
        .iter_mut()
        .find(|c| c.id == id && !c.deleted)
        .ok_or_else(|| customer_not_found(&id))?;
    customer.deleted = true;
    tracing::info!(%id, "customer deleted");
    Ok(Json(serde_json::json!({ "deleted": true, "id": id })))
}

async fn restore_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, MockError> {
    let mut store = state.db.write().await;
    let customer = store
        .customers
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| customer_not_found(&id))?;
    if !customer.deleted {
        return Err(MockError::invalid("invalid_action", "customer is not deleted"));
    }
    customer.deleted = false;
    tracing::info!(%id, "customer restored");
    Ok(Json(customer.clone()))
}

// --- payments ---

async fn list_payments(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Page<Payment>>, MockError> {
    let due_from = params.get("dueDate[ge]");
    let due_until = params.get("dueDate[le]");
    let store = state.db.read().await;
    let matching: Vec<Payment> = store
        .payments
        .iter()
        .filter(|p| !p.deleted)
        .filter(|p| matches_filter(&params, "customer", Some(p.customer.as_str())))
        .filter(|p| matches_filter(&params, "status", Some(p.status.as_str())))
        .filter(|p| matches_filter(&params, "billingType", Some(p.billing_type.as_str())))
        .filter(|p| matches_filter(&params, "externalReference", p.external_reference.as_deref()))
        .filter(|p| due_from.map_or(true, |from| p.due_date.as_str() >= from.as_str()))
        .filter(|p| due_until.map_or(true, |until| p.due_date.as_str() <= until.as_str()))
        .cloned()
        .collect();
    paginate(matching, &params).map(Json)
}

async fn create_payment(
    State(state): State<AppState>,
    Json(input): Json<CreatePayment>,
) -> Result<Json<Payment>, MockError> {
    if input.value <= 0.0 {
        return Err(MockError::invalid("invalid_value", "value must be greater than zero"));
    }
    let mut store = state.db.write().await;
    if !store.customers.iter().any(|c| c.id == input.customer && !c.deleted) {
        return Err(MockError::invalid(
            "invalid_customer",
            format!("customer {} does not exist", input.customer),
        ));
    }
    let id = new_id("pay");
    let payment = Payment {
        object: "payment".to_string(),
        invoice_url: format!("https://sandbox.asaas.com/i/{}", id.trim_start_matches("pay_")),
        id,
        date_created: today(),
        customer: input.customer,
        billing_type: input.billing_type,
        value: input.value,
        net_value: input.value,
        due_date: input.due_date,
        status: "PENDING".to_string(),
        description: input.description,
        external_reference: input.external_reference,
        payment_date: None,
        split: input.split,
        deleted: false,
    };
    tracing::info!(id = %payment.id, customer = %payment.customer, "payment created");
    store.payments.push(payment.clone());
    Ok(Json(payment))
}

async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Payment>, MockError> {
    let store = state.db.read().await;
    store
        .payments
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| payment_not_found(&id))
}

async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdatePayment>,
) -> Result<Json<Payment>, MockError> {
    let mut store = state.db.write().await;
    let payment = store
        .payments
        .iter_mut()
        .find(|p| p.id == id && !p.deleted)
        .ok_or_else(|| payment_not_found(&id))?;
    if let Some(value) = input.value {
        payment.value = value;
        payment.net_value = value;
    }
    if let Some(due_date) = input.due_date {
        payment.due_date = due_date;
    }
    if input.description.is_some() {
        payment.description = input.description;
    }
    if input.external_reference.is_some() {
        payment.external_reference = input.external_reference;
    }
    if let Some(split) = input.split {
        payment.split = if split.is_empty() { None } else { Some(split) };
    }
    tracing::info!(%id, "payment updated");
    Ok(Json(payment.clone()))
}

async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, MockError> {
    let mut store = state.db.write().await;
    let payment = store
        .payments
        .iter_mut()
        .find(|p| p.id == id && !p.deleted)
        .ok_or_else(|| payment_not_found(&id))?;
    payment.deleted = true;
    tracing::info!(%id, "payment deleted");
    Ok(Json(serde_json::json!({ "deleted": true, "id": id })))
}

async fn restore_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Payment>, MockError> {
    let mut store = state.db.write().await;
    let payment = store
        .payments
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| payment_not_found(&id))?;
    if !payment.deleted {
        return Err(MockError::invalid("invalid_action", "payment is not deleted"));
    }
    payment.deleted = false;
    tracing::info!(%id, "payment restored");
    Ok(Json(payment.clone()))
}

async fn payment_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, MockError> {
    let store = state.db.read().await;
    let payment = store
        .payments
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| payment_not_found(&id))?;
    Ok(Json(serde_json::json!({ "status": payment.status })))
}

async fn receive_in_cash(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Payment>, MockError> {
    let input: ReceiveInCash = if body.is_empty() {
        ReceiveInCash::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| MockError::invalid("invalid_body", e.to_string()))?
    };
    let mut store = state.db.write().await;
    let payment = store
        .payments
        .iter_mut()
        .find(|p| p.id == id && !p.deleted)
        .ok_or_else(|| payment_not_found(&id))?;
    if payment.status != "PENDING" && payment.status != "OVERDUE" {
        return Err(MockError::invalid(
            "invalid_action",
            format!("payment with status {} cannot be received in cash", payment.status),
        ));
    }
    payment.status = "RECEIVED_IN_CASH".to_string();
    payment.payment_date = Some(input.payment_date.unwrap_or_else(today));
    if let Some(value) = input.value {
        payment.value = value;
        payment.net_value = value;
    }
    tracing::info!(%id, "payment received in cash");
    Ok(Json(payment.clone()))
}
