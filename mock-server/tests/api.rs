use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use asaas_mock::{app, Customer, Page, Payment};
use serde_json::Value;
use tower::ServiceExt;

const KEY: &str = "test-api-key";

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("access_token", KEY)
        .body(String::new())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .header("access_token", KEY)
        .body(body.to_string())
        .unwrap()
}

async fn call(app: &mut Router, req: Request<String>) -> axum::response::Response {
    use tower::Service;

    ServiceExt::<Request<String>>::ready(app)
        .await
        .unwrap()
        .call(req)
        .await
        .unwrap()
}

async fn create_customer(app: &mut Router, name: &str) -> Customer {
    let body = format!(r#"{{"name":"{name}","email":"{name}@example.com","cpfCnpj":"24971563792"}}"#);
    let resp = call(app, json_request("POST", "/customers", &body)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

async fn create_payment(app: &mut Router, customer: &str, due_date: &str) -> Payment {
    let body = format!(
        r#"{{"customer":"{customer}","billingType":"PIX","value":100.0,"dueDate":"{due_date}"}}"#
    );
    let resp = call(app, json_request("POST", "/payments", &body)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

// --- auth ---

#[tokio::test]
async fn missing_access_token_returns_401_envelope() {
    let resp = app(KEY)
        .oneshot(Request::builder().uri("/customers").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["errors"][0]["code"], "invalid_access_token");
}

#[tokio::test]
async fn wrong_access_token_returns_401() {
    let resp = app(KEY)
        .oneshot(
            Request::builder()
                .uri("/payments")
                .header("access_token", "nope")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_route_returns_empty_404() {
    let resp = app(KEY).oneshot(request("GET", "/nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

// --- customers ---

#[tokio::test]
async fn list_customers_empty_page() {
    let resp = app(KEY).oneshot(request("GET", "/customers")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<Customer> = body_json(resp).await;
    assert_eq!(page.object, "list");
    assert_eq!(page.total_count, 0);
    assert_eq!(page.limit, 10);
    assert!(!page.has_more);
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn create_customer_without_name_returns_400_envelope() {
    let resp = app(KEY)
        .oneshot(json_request("POST", "/customers", r#"{"name":"  "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["errors"][0]["code"], "invalid_name");
}

#[tokio::test]
async fn get_customer_not_found_returns_envelope() {
    let resp = app(KEY).oneshot(request("GET", "/customers/cus_missing")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body["errors"][0]["code"], "not_found");
    assert_eq!(body["errors"][0]["description"], "customer cus_missing not found");
}

#[tokio::test]
async fn customer_lifecycle() {
    let mut app = app(KEY);

    let created = create_customer(&mut app, "maria").await;
    assert!(created.id.starts_with("cus_"));
    assert_eq!(created.object, "customer");
    let id = created.id.clone();

    // update: only the phone changes
    let resp = call(
        &mut app,
        json_request("PUT", &format!("/customers/{id}"), r#"{"mobilePhone":"4799999999"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Customer = body_json(resp).await;
    assert_eq!(updated.name, "maria");
    assert_eq!(updated.mobile_phone.as_deref(), Some("4799999999"));

    // filter by email
    let resp = call(&mut app, request("GET", "/customers?email=maria%40example.com")).await;
    let page: Page<Customer> = body_json(resp).await;
    assert_eq!(page.total_count, 1);
    let resp = call(&mut app, request("GET", "/customers?email=other%40example.com")).await;
    let page: Page<Customer> = body_json(resp).await;
    assert_eq!(page.total_count, 0);

    // delete is soft: still readable, hidden from listings
    let resp = call(&mut app, request("DELETE", &format!("/customers/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({"deleted": true, "id": id}));

    let resp = call(&mut app, request("GET", &format!("/customers/{id}"))).await;
    let fetched: Customer = body_json(resp).await;
    assert!(fetched.deleted);

    let resp = call(&mut app, request("GET", "/customers")).await;
    let page: Page<Customer> = body_json(resp).await;
    assert!(page.data.is_empty());

    // restore
    let resp = call(&mut app, request("POST", &format!("/customers/{id}/restore"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let restored: Customer = body_json(resp).await;
    assert!(!restored.deleted);

    // restoring twice is rejected
    let resp = call(&mut app, request("POST", &format!("/customers/{id}/restore"))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn customers_paginate() {
    let mut app = app(KEY);
    for i in 0..3 {
        create_customer(&mut app, &format!("c{i}")).await;
    }

    let resp = call(&mut app, request("GET", "/customers?offset=1&limit=1")).await;
    let page: Page<Customer> = body_json(resp).await;
    assert_eq!(page.total_count, 3);
    assert_eq!(page.offset, 1);
    assert_eq!(page.limit, 1);
    assert!(page.has_more);
    assert_eq!(page.data[0].name, "c1");

    let resp = call(&mut app, request("GET", "/customers?limit=500")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- payments ---

#[tokio::test]
async fn create_payment_for_unknown_customer_returns_400() {
    let resp = app(KEY)
        .oneshot(json_request(
            "POST",
            "/payments",
            r#"{"customer":"cus_x","billingType":"BOLETO","value":10.0,"dueDate":"2024-01-01"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["errors"][0]["code"], "invalid_customer");
}

#[tokio::test]
async fn payments_filter_by_due_date_range() {
    let mut app = app(KEY);
    let customer = create_customer(&mut app, "ana").await;
    create_payment(&mut app, &customer.id, "2023-12-31").await;
    let january = create_payment(&mut app, &customer.id, "2024-01-15").await;
    create_payment(&mut app, &customer.id, "2024-02-01").await;

    let resp = call(
        &mut app,
        request("GET", "/payments?dueDate%5Bge%5D=2024-01-01&dueDate%5Ble%5D=2024-01-31"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page: Page<Payment> = body_json(resp).await;
    assert_eq!(page.total_count, 1);
    assert_eq!(page.data[0].id, january.id);
}

#[tokio::test]
async fn payment_lifecycle() {
    let mut app = app(KEY);
    let customer = create_customer(&mut app, "joao").await;
    let payment = create_payment(&mut app, &customer.id, "2024-03-10").await;
    let id = payment.id.clone();
    assert!(id.starts_with("pay_"));
    assert_eq!(payment.status, "PENDING");
    assert!(payment.invoice_url.ends_with(id.trim_start_matches("pay_")));

    // attach and remove a split
    let resp = call(
        &mut app,
        json_request(
            "PUT",
            &format!("/payments/{id}"),
            r#"{"split":[{"walletId":"wal_1","percentualValue":10.0}]}"#,
        ),
    )
    .await;
    let updated: Payment = body_json(resp).await;
    assert_eq!(updated.split.as_ref().map(Vec::len), Some(1));

    let resp = call(&mut app, json_request("PUT", &format!("/payments/{id}"), r#"{"split":[]}"#)).await;
    let updated: Payment = body_json(resp).await;
    assert!(updated.split.is_none());

    // receive in cash with an empty body
    let resp = call(&mut app, json_request("POST", &format!("/payments/{id}/receiveInCash"), "")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let received: Payment = body_json(resp).await;
    assert_eq!(received.status, "RECEIVED_IN_CASH");
    assert!(received.payment_date.is_some());

    let resp = call(&mut app, request("GET", &format!("/payments/{id}/status"))).await;
    let status: Value = body_json(resp).await;
    assert_eq!(status["status"], "RECEIVED_IN_CASH");

    // delete and restore
    let resp = call(&mut app, request("DELETE", &format!("/payments/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = call(&mut app, request("DELETE", &format!("/payments/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = call(&mut app, request("POST", &format!("/payments/{id}/restore"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
