//! Every resource family maps its operations onto the expected verb, path,
//! query and body. A recording transport answers with a canned body and
//! keeps the requests it saw.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use asaas_core::apis::account::TransactionListParams;
use asaas_core::apis::anticipations::AnticipationData;
use asaas_core::apis::chargebacks::{ChargebackListParams, ChargebackStatus};
use asaas_core::apis::checkout::CheckoutData;
use asaas_core::apis::credit_bureau::{CreditBureauListParams, CreditBureauReportData};
use asaas_core::apis::credit_card::TokenizeData;
use asaas_core::apis::installments::InstallmentListParams;
use asaas_core::apis::invoices::{FiscalInfoData, InvoiceListParams};
use asaas_core::apis::negative_list::NegativeListData;
use asaas_core::apis::notifications::{NotificationBatch, NotificationBatchEntry, NotificationUpdate};
use asaas_core::apis::payment_links::PaymentLinkListParams;
use asaas_core::apis::payments::{PaymentData, PaymentListParams};
use asaas_core::apis::refunds::{RefundData, RefundListParams};
use asaas_core::apis::subaccounts::{SubaccountData, SubaccountListParams, SubaccountUpdate};
use asaas_core::apis::transfers::{TransferListParams, TransferStatus};
use asaas_core::apis::webhooks::WebhookData;
use asaas_core::types::{
    BillingType, CreditCard, CreditCardHolderInfo, DateRange, PaymentStatus, Split, State,
};
use asaas_core::{
    AsaasClient, AsaasConfig, HttpMethod, HttpRequest, HttpResponse, Transport, TransportError,
};

const BASE: &str = "https://api.test/v3";
const EMPTY_PAGE: &str = r#"{"object":"list","hasMore":false,"totalCount":0,"limit":10,"offset":0,"data":[]}"#;
const DELETED: &str = r#"{"deleted":true,"id":"x"}"#;

struct Recorder {
    body: String,
    seen: Mutex<Vec<HttpRequest>>,
}

impl Transport for Recorder {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(HttpResponse {
            status: 200,
            status_text: "OK".to_string(),
            headers: Vec::new(),
            body: self.body.clone(),
        })
    }
}

/// Run `call` against a client whose transport answers with `body`, and
/// return the call's result with the single request it produced.
fn record<R>(body: &str, call: impl FnOnce(&AsaasClient) -> R) -> (R, HttpRequest) {
    let recorder = Arc::new(Recorder {
        body: body.to_string(),
        seen: Mutex::new(Vec::new()),
    });
    let client = AsaasClient::with_transport(AsaasConfig::new("key").with_base_url(BASE), recorder.clone());
    let result = call(&client);
    let mut seen = recorder.seen.lock().unwrap();
    assert_eq!(seen.len(), 1, "expected exactly one request");
    (result, seen.remove(0))
}

/// Method and URL relative to the base.
fn route(request: &HttpRequest) -> (HttpMethod, &str) {
    (request.method, request.url.strip_prefix(BASE).unwrap())
}

fn body_json(request: &HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
}

#[test]
fn customers_routes() {
    let (_, req) = record("{}", |c| c.customers().notifications("cus_1"));
    assert_eq!(route(&req), (HttpMethod::Get, "/customers/cus_1/notifications"));

    let (result, req) = record(DELETED, |c| c.customers().delete("cus_1"));
    assert!(result.unwrap().deleted);
    assert_eq!(route(&req), (HttpMethod::Delete, "/customers/cus_1"));
    assert!(req.body.is_none());

    let (_, req) = record("{}", |c| c.customers().restore("cus_1"));
    assert_eq!(route(&req), (HttpMethod::Post, "/customers/cus_1/restore"));
    assert!(req.body.is_none());
}

#[test]
fn payments_routes() {
    for (path, op) in [
        ("/payments/pay_1/pixQrCode", "pix_qr_code"),
        ("/payments/pay_1/identificationField", "identification_field"),
        ("/payments/pay_1/billingInfo", "billing_info"),
        ("/payments/pay_1/viewingInfo", "viewing_info"),
        ("/payments/pay_1/status", "status"),
    ] {
        let (_, req) = record("{}", |c| match op {
            "pix_qr_code" => c.payments().pix_qr_code("pay_1").map(|_| ()),
            "identification_field" => c.payments().identification_field("pay_1").map(|_| ()),
            "billing_info" => c.payments().billing_info("pay_1").map(|_| ()),
            "viewing_info" => c.payments().viewing_info("pay_1").map(|_| ()),
            _ => c.payments().status("pay_1").map(|_| ()),
        });
        assert_eq!(route(&req), (HttpMethod::Get, path), "{op}");
    }

    let (_, req) = record("{}", |c| c.payments().undo_received_in_cash("pay_1"));
    assert_eq!(route(&req), (HttpMethod::Post, "/payments/pay_1/undoReceivedInCash"));
}

#[test]
fn payment_create_sends_camel_case_body() {
    let mut data = PaymentData::new("cus_1", BillingType::Boleto, 99.9, "2024-05-10");
    data.external_reference = Some("order-7".to_string());
    let (_, req) = record("{}", |c| c.payments().create(&data));
    assert_eq!(route(&req), (HttpMethod::Post, "/payments"));
    assert_eq!(
        body_json(&req),
        json!({
            "customer": "cus_1",
            "billingType": "BOLETO",
            "value": 99.9,
            "dueDate": "2024-05-10",
            "externalReference": "order-7"
        })
    );
}

#[test]
fn subscriptions_routes() {
    let (result, req) = record(EMPTY_PAGE, |c| c.subscriptions().payments("sub_1"));
    assert!(result.unwrap().data.is_empty());
    assert_eq!(route(&req), (HttpMethod::Get, "/subscriptions/sub_1/payments"));

    let (_, req) = record("{}", |c| c.subscriptions().payment_book("sub_1"));
    assert_eq!(route(&req), (HttpMethod::Get, "/subscriptions/sub_1/paymentBook"));

    let settings = json!({"municipalServiceCode": "1.01", "effectiveDatePeriod": "ON_PAYMENT_CONFIRMATION"});
    let (_, req) = record("{}", |c| c.subscriptions().create_invoice_settings("sub_1", &settings));
    assert_eq!(route(&req), (HttpMethod::Post, "/subscriptions/sub_1/invoiceSettings"));
    assert_eq!(body_json(&req), settings);

    let (_, req) = record("{}", |c| c.subscriptions().update_invoice_settings("sub_1", &settings));
    assert_eq!(route(&req), (HttpMethod::Put, "/subscriptions/sub_1/invoiceSettings"));

    let (_, req) = record(DELETED, |c| c.subscriptions().delete_invoice_settings("sub_1"));
    assert_eq!(route(&req), (HttpMethod::Delete, "/subscriptions/sub_1/invoiceSettings"));

    let (_, req) = record("{}", |c| c.subscriptions().update_credit_card("sub_1", &json!({})));
    assert_eq!(route(&req), (HttpMethod::Put, "/subscriptions/sub_1/creditCard"));

    let (_, req) = record("{}", |c| c.subscriptions().invoices("sub_1"));
    assert_eq!(route(&req), (HttpMethod::Get, "/subscriptions/sub_1/invoices"));
}

#[test]
fn pix_routes() {
    let (_, req) = record(EMPTY_PAGE, |c| c.pix().list_address_keys());
    assert_eq!(route(&req), (HttpMethod::Get, "/pix/addressKeys"));

    let (_, req) = record("{}", |c| c.pix().decode_qr_code("00020126"));
    assert_eq!(route(&req), (HttpMethod::Post, "/pix/qrCodes/decode"));
    assert_eq!(body_json(&req), json!({"payload": "00020126"}));

    let (_, req) = record("{}", |c| c.pix().cancel_transaction("tx_1"));
    assert_eq!(route(&req), (HttpMethod::Post, "/pix/transactions/tx_1/cancel"));

    let (_, req) = record(DELETED, |c| c.pix().cancel_authorization("auth_1"));
    assert_eq!(route(&req).0, HttpMethod::Delete);
    assert!(route(&req).1.ends_with("/auth_1"));

    let (_, req) = record(EMPTY_PAGE, |c| c.pix().list_payment_instructions());
    assert_eq!(req.method, HttpMethod::Get);
}

#[test]
fn webhooks_routes() {
    let data = WebhookData {
        name: "orders".to_string(),
        url: "https://example.com/hook".to_string(),
        enabled: Some(true),
        events: vec!["PAYMENT_RECEIVED".to_string()],
        ..Default::default()
    };
    let (_, req) = record("{}", |c| c.webhooks().create(&data));
    assert_eq!(route(&req), (HttpMethod::Post, "/webhooks"));
    assert_eq!(
        body_json(&req),
        json!({
            "name": "orders",
            "url": "https://example.com/hook",
            "enabled": true,
            "events": ["PAYMENT_RECEIVED"]
        })
    );

    let (_, req) = record("{}", |c| c.webhooks().remove_backoff("wh_1"));
    assert_eq!(route(&req), (HttpMethod::Post, "/webhooks/wh_1/removeBackoff"));
}

#[test]
fn installments_routes() {
    let (_, req) = record(EMPTY_PAGE, |c| {
        c.installments().list(&InstallmentListParams {
            customer: Some("cus_1".to_string()),
            ..Default::default()
        })
    });
    assert_eq!(route(&req), (HttpMethod::Get, "/installments?customer=cus_1"));

    let splits = json!({"splits": [{"walletId": "wal_1", "fixedValue": 5.0}]});
    let (_, req) = record("{}", |c| c.installments().update_splits("ins_1", &splits));
    assert_eq!(route(&req), (HttpMethod::Put, "/installments/ins_1/splits"));

    let (_, req) = record("{}", |c| c.installments().cancel_pending_payments("ins_1"));
    assert_eq!(route(&req), (HttpMethod::Delete, "/installments/ins_1/payments"));

    let (_, req) = record("{}", |c| c.installments().payment_book("ins_1"));
    assert_eq!(route(&req), (HttpMethod::Get, "/installments/ins_1/paymentBook"));
}

#[test]
fn transfers_routes() {
    let (_, req) = record(EMPTY_PAGE, |c| {
        c.transfers().list(&TransferListParams {
            status: Some(TransferStatus::BankProcessing),
            offset: Some(0),
            ..Default::default()
        })
    });
    assert_eq!(route(&req), (HttpMethod::Get, "/transfers?status=BANK_PROCESSING&offset=0"));

    let (_, req) = record("{}", |c| c.transfers().cancel("tra_1"));
    assert_eq!(route(&req), (HttpMethod::Post, "/transfers/tra_1/cancel"));
}

#[test]
fn refunds_routes() {
    let (_, req) = record("{}", |c| c.refunds().refund_payment("pay_1", None));
    assert_eq!(route(&req), (HttpMethod::Post, "/payments/pay_1/refund"));
    assert!(req.body.is_none());

    let partial = RefundData {
        value: Some(10.0),
        description: Some("damaged".to_string()),
    };
    let (_, req) = record("{}", |c| c.refunds().refund_payment("pay_1", Some(&partial)));
    assert_eq!(body_json(&req), json!({"value": 10.0, "description": "damaged"}));

    let (_, req) = record("{}", |c| c.refunds().refund_installment("ins_1", None));
    assert_eq!(route(&req), (HttpMethod::Post, "/installments/ins_1/refund"));

    let (_, req) = record(EMPTY_PAGE, |c| {
        c.refunds().list_payment_refunds("pay_1", &RefundListParams { offset: None, limit: Some(5) })
    });
    assert_eq!(route(&req), (HttpMethod::Get, "/payments/pay_1/refunds?limit=5"));
}

#[test]
fn anticipations_routes() {
    let data = AnticipationData {
        payment: Some("pay_1".to_string()),
        ..Default::default()
    };
    let body = r#"{"totalValue":100.0,"netValue":97.5,"fee":2.5,"anticipationDays":30}"#;
    let (result, req) = record(body, |c| c.anticipations().simulate(&data));
    assert_eq!(result.unwrap().fee, 2.5);
    assert_eq!(route(&req), (HttpMethod::Post, "/anticipations/simulate"));
    assert_eq!(body_json(&req), json!({"payment": "pay_1"}));

    let (result, req) = record(r#"{"enabled":false}"#, |c| c.anticipations().automatic());
    assert!(!result.unwrap().enabled);
    assert_eq!(route(&req), (HttpMethod::Get, "/anticipations/automatic"));

    let (_, req) = record(r#"{"enabled":true}"#, |c| c.anticipations().update_automatic(true));
    assert_eq!(route(&req), (HttpMethod::Put, "/anticipations/automatic"));
    assert_eq!(body_json(&req), json!({"enabled": true}));

    let limits = r#"{"creditCard":{"available":10.0,"total":20.0},"boleto":{"available":0.0,"total":5.0}}"#;
    let (result, req) = record(limits, |c| c.anticipations().limits());
    assert_eq!(result.unwrap().credit_card.total, 20.0);
    assert_eq!(route(&req), (HttpMethod::Get, "/anticipations/limits"));

    let (_, req) = record("{}", |c| c.anticipations().cancel("ant_1"));
    assert_eq!(route(&req), (HttpMethod::Post, "/anticipations/ant_1/cancel"));
}

#[test]
fn account_routes() {
    let (result, req) = record(r#"{"balance":1234.56}"#, |c| c.account().balance());
    assert_eq!(result.unwrap().balance, 1234.56);
    assert_eq!(route(&req), (HttpMethod::Get, "/finance/balance"));

    let (_, req) = record(EMPTY_PAGE, |c| {
        c.account().transactions(&TransactionListParams {
            start_date: Some("2024-01-01".to_string()),
            finish_date: Some("2024-01-31".to_string()),
            ..Default::default()
        })
    });
    assert_eq!(
        route(&req),
        (HttpMethod::Get, "/financialTransactions?startDate=2024-01-01&finishDate=2024-01-31")
    );

    let (_, req) = record("{}", |c| c.account().info());
    assert_eq!(route(&req), (HttpMethod::Get, "/myAccount"));
}

#[test]
fn subaccounts_routes() {
    let (_, req) = record(EMPTY_PAGE, |c| {
        c.subaccounts().list(&SubaccountListParams {
            cpf_cnpj: Some("66625514000140".to_string()),
            ..Default::default()
        })
    });
    assert_eq!(route(&req), (HttpMethod::Get, "/subaccounts?cpfCnpj=66625514000140"));

    let (_, req) = record(r#"{"object":"account","id":"acc_1","name":"Loja","email":"loja@example.com","cpfCnpj":"66625514000140"}"#, |c| {
        c.subaccounts().create(&SubaccountData {
            name: "Loja".to_string(),
            email: "loja@example.com".to_string(),
            cpf_cnpj: "66625514000140".to_string(),
            ..Default::default()
        })
    });
    assert_eq!(route(&req), (HttpMethod::Post, "/subaccounts"));
    assert_eq!(
        body_json(&req),
        json!({"name": "Loja", "email": "loja@example.com", "cpfCnpj": "66625514000140"})
    );

    let (_, req) = record(r#"{"object":"account","id":"acc_1","name":"Loja","email":"loja@example.com","cpfCnpj":"66625514000140"}"#, |c| {
        c.subaccounts().get("acc_1")
    });
    assert_eq!(route(&req), (HttpMethod::Get, "/subaccounts/acc_1"));

    let (result, req) = record(r#"{"object":"account","id":"acc_1","name":"Loja","email":"novo@example.com","cpfCnpj":"66625514000140"}"#, |c| {
        c.subaccounts().update(
            "acc_1",
            &SubaccountUpdate {
                email: Some("novo@example.com".to_string()),
                ..Default::default()
            },
        )
    });
    assert_eq!(result.unwrap().email, "novo@example.com");
    assert_eq!(route(&req), (HttpMethod::Put, "/subaccounts/acc_1"));
    assert_eq!(body_json(&req), json!({"email": "novo@example.com"}));

    let (_, req) = record("{}", |c| c.subaccounts().documents("acc_1"));
    assert_eq!(route(&req), (HttpMethod::Get, "/subaccounts/acc_1/documents"));

    let (_, req) = record("{}", |c| c.subaccounts().send_documents("acc_1", &json!({"type": "IDENTIFICATION"})));
    assert_eq!(route(&req), (HttpMethod::Post, "/subaccounts/acc_1/documents"));
}

#[test]
fn credit_card_tokenize() {
    let data = TokenizeData {
        credit_card: CreditCard {
            holder_name: "Maria".to_string(),
            number: "5162306219378829".to_string(),
            expiry_month: "05".to_string(),
            expiry_year: "2030".to_string(),
            ccv: "318".to_string(),
        },
        credit_card_holder_info: CreditCardHolderInfo {
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            cpf_cnpj: "24971563792".to_string(),
            postal_code: "89223005".to_string(),
            address_number: "277".to_string(),
            phone: None,
        },
        customer: "cus_1".to_string(),
    };
    let (result, req) = record(r#"{"creditCardToken":"tok_1"}"#, |c| c.credit_card().tokenize(&data));
    assert_eq!(result.unwrap().credit_card_token, "tok_1");
    assert_eq!(route(&req), (HttpMethod::Post, "/creditCard/tokenize"));
    let body = body_json(&req);
    assert_eq!(body["creditCard"]["expiryYear"], "2030");
    assert_eq!(body["creditCardHolderInfo"]["postalCode"], "89223005");
    assert!(body["creditCardHolderInfo"].get("phone").is_none());
}

#[test]
fn notifications_routes() {
    let update = NotificationUpdate {
        enabled: Some(false),
        ..Default::default()
    };
    let (_, req) = record("{}", |c| c.notifications().update("not_1", &update));
    assert_eq!(route(&req), (HttpMethod::Put, "/notifications/not_1"));
    assert_eq!(body_json(&req), json!({"enabled": false}));

    let batch = NotificationBatch {
        notifications: vec![NotificationBatchEntry {
            id: "not_1".to_string(),
            sms_enabled_for_provider: Some(true),
            ..Default::default()
        }],
    };
    let (_, req) = record("{}", |c| c.notifications().update_batch(&batch));
    assert_eq!(route(&req), (HttpMethod::Put, "/notifications/batch"));
    assert_eq!(
        body_json(&req),
        json!({"notifications": [{"id": "not_1", "smsEnabledForProvider": true}]})
    );
}

#[test]
fn payment_links_routes() {
    let (_, req) = record(EMPTY_PAGE, |c| {
        c.payment_links().list(&PaymentLinkListParams {
            include_deleted: Some(false),
            ..Default::default()
        })
    });
    assert_eq!(route(&req), (HttpMethod::Get, "/paymentLinks?includeDeleted=false"));

    let (_, req) = record(DELETED, |c| c.payment_links().remove_image("lnk_1", "img_1"));
    assert_eq!(route(&req), (HttpMethod::Delete, "/paymentLinks/lnk_1/images/img_1"));

    let (_, req) = record("{}", |c| c.payment_links().restore("lnk_1"));
    assert_eq!(route(&req), (HttpMethod::Post, "/paymentLinks/lnk_1/restore"));
}

#[test]
fn invoices_routes() {
    let (_, req) = record(EMPTY_PAGE, |c| {
        c.invoices().list(&InvoiceListParams {
            effective_date: Some(DateRange::from("2024-01-01")),
            customer: Some("cus_1".to_string()),
            ..Default::default()
        })
    });
    assert_eq!(
        route(&req),
        (HttpMethod::Get, "/invoices?effectiveDate%5Bge%5D=2024-01-01&customer=cus_1")
    );

    let (_, req) = record(EMPTY_PAGE, |c| c.invoices().municipal_services());
    assert_eq!(route(&req), (HttpMethod::Get, "/invoices/municipalServices"));

    let (_, req) = record("{}", |c| c.invoices().authorize("inv_1"));
    assert_eq!(route(&req), (HttpMethod::Post, "/invoices/inv_1/authorize"));

    let fiscal = FiscalInfoData {
        municipal_inscription: "123".to_string(),
        cnae: "6201501".to_string(),
        ..Default::default()
    };
    let (_, req) = record("{}", |c| c.invoices().configure_fiscal_info(&fiscal));
    assert_eq!(route(&req), (HttpMethod::Post, "/fiscalInfo/nationalPortal"));
    assert_eq!(
        body_json(&req),
        json!({
            "municipalInscription": "123",
            "simplesNacional": false,
            "culturalProjectsPromoter": false,
            "cnae": "6201501"
        })
    );
}

fn payment_body(invoice_url: Option<&str>) -> String {
    let mut payment = json!({
        "object": "payment",
        "id": "pay_9",
        "dateCreated": "2024-01-01",
        "customer": "cus_1",
        "billingType": "UNDEFINED",
        "value": 50.0,
        "dueDate": "2024-01-10",
        "status": "PENDING",
        "split": [{"walletId": "wal_1", "fixedValue": 5.0}]
    });
    if let Some(url) = invoice_url {
        payment["invoiceUrl"] = json!(url);
    }
    payment.to_string()
}

#[test]
fn unlisted_status_does_not_drop_the_page() {
    let mut refunding: Value = serde_json::from_str(&payment_body(None)).unwrap();
    refunding["id"] = json!("pay_10");
    refunding["status"] = json!("REFUND_IN_PROGRESS");
    refunding["billingType"] = json!("BITCOIN");
    let pending: Value = serde_json::from_str(&payment_body(None)).unwrap();
    let body = json!({
        "object": "list",
        "hasMore": false,
        "totalCount": 2,
        "limit": 10,
        "offset": 0,
        "data": [pending, refunding]
    })
    .to_string();

    let (result, _) = record(&body, |c| c.payments().list(&PaymentListParams::default()));
    let page = result.unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].status, PaymentStatus::Pending);
    assert_eq!(page.data[1].id, "pay_10");
    assert_eq!(page.data[1].status, PaymentStatus::Unknown);
    assert_eq!(page.data[1].billing_type, BillingType::Unknown);
}

#[test]
fn checkout_creates_payment_and_returns_url() {
    let data = CheckoutData {
        customer: "cus_1".to_string(),
        billing_type: BillingType::Undefined,
        value: 50.0,
        due_date: "2024-01-10".to_string(),
        description: None,
        external_reference: None,
        callback: None,
    };
    let body = payment_body(Some("https://sandbox.asaas.com/i/9"));
    let (result, req) = record(&body, |c| c.checkout().create_checkout(&data));
    let checkout = result.unwrap();
    assert_eq!(checkout.payment_id, "pay_9");
    assert_eq!(checkout.checkout_url, "https://sandbox.asaas.com/i/9");
    assert_eq!(route(&req), (HttpMethod::Post, "/payments"));
    assert_eq!(
        body_json(&req),
        json!({"customer": "cus_1", "billingType": "UNDEFINED", "value": 50.0, "dueDate": "2024-01-10"})
    );
}

#[test]
fn checkout_url_falls_back_to_payment_page() {
    let body = payment_body(None);
    let (result, req) = record(&body, |c| c.checkout().checkout_url("pay_9"));
    assert_eq!(result.unwrap().checkout_url, "https://www.asaas.com/c/pay_9");
    assert_eq!(route(&req), (HttpMethod::Get, "/payments/pay_9"));
}

#[test]
fn split_routes() {
    let splits = [Split::fixed("wal_1", 5.0)];
    let (_, req) = record(&payment_body(None), |c| c.split().update_payment_split("pay_9", &splits));
    assert_eq!(route(&req), (HttpMethod::Put, "/payments/pay_9"));
    assert_eq!(body_json(&req), json!({"split": [{"walletId": "wal_1", "fixedValue": 5.0}]}));

    let (_, req) = record(&payment_body(None), |c| c.split().remove_payment_split("pay_9"));
    assert_eq!(body_json(&req), json!({"split": []}));

    let (result, _) = record(&payment_body(None), |c| c.split().payment_splits("pay_9"));
    assert_eq!(result.unwrap(), vec![Split::fixed("wal_1", 5.0)]);

    let data = PaymentData::new("cus_1", BillingType::Pix, 50.0, "2024-01-10");
    let (_, req) = record(&payment_body(None), |c| c.split().create_payment_with_split(&data, &splits));
    assert_eq!(route(&req), (HttpMethod::Post, "/payments"));
    assert_eq!(body_json(&req)["split"][0]["walletId"], "wal_1");
}

#[test]
fn chargebacks_routes() {
    let (_, req) = record(EMPTY_PAGE, |c| {
        c.chargebacks().list(&ChargebackListParams {
            payment_id: Some("pay_1".to_string()),
            status: Some(ChargebackStatus::Analysis),
            ..Default::default()
        })
    });
    assert_eq!(route(&req), (HttpMethod::Get, "/chargebacks?paymentId=pay_1&status=ANALYSIS"));
}

#[test]
fn credit_bureau_routes() {
    let data = CreditBureauReportData {
        customer: Some("cus_1".to_string()),
        state: Some(State::Rj),
        ..Default::default()
    };
    let (_, req) = record("{}", |c| c.credit_bureau().create(&data));
    assert_eq!(route(&req), (HttpMethod::Post, "/creditBureauReport"));
    assert_eq!(body_json(&req), json!({"customer": "cus_1", "state": "RJ"}));

    let (_, req) = record(EMPTY_PAGE, |c| {
        c.credit_bureau().list(&CreditBureauListParams {
            start_date: Some("2024-01-01".to_string()),
            ..Default::default()
        })
    });
    assert_eq!(route(&req), (HttpMethod::Get, "/creditBureauReport?startDate=2024-01-01"));
}

#[test]
fn negative_list_routes() {
    let data = NegativeListData {
        payment: "pay_1".to_string(),
        description: None,
    };
    let (_, req) = record("{}", |c| c.negative_list().create(&data));
    assert_eq!(route(&req), (HttpMethod::Post, "/negativeList"));
    assert_eq!(body_json(&req), json!({"payment": "pay_1"}));

    let (result, req) = record("", |c| c.negative_list().delete("neg_1"));
    result.unwrap();
    assert_eq!(route(&req), (HttpMethod::Delete, "/negativeList/neg_1"));
}
