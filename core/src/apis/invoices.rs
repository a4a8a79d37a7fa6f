//! Service invoices (NFS-e) and the fiscal configuration they depend on.

use serde::{Deserialize, Serialize};

use crate::client::AsaasClient;
use crate::error::ApiError;
use crate::query::Query;
use crate::types::{DateRange, InvoiceStatus, Page};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTaxes {
    pub retain_iss: bool,
    pub iss: f64,
    pub cofins: f64,
    pub csll: f64,
    pub inss: f64,
    pub ir: f64,
    pub pis: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    pub service_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deductions: Option<f64>,
    pub effective_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipal_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipal_service_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipal_service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes: Option<InvoiceTaxes>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub object: String,
    pub id: String,
    pub status: InvoiceStatus,
    pub date_created: String,
    pub payment: Option<String>,
    pub installment: Option<String>,
    pub customer: Option<String>,
    pub service_description: String,
    pub observations: Option<String>,
    pub value: f64,
    pub deductions: Option<f64>,
    pub effective_date: String,
    pub municipal_service_id: Option<String>,
    pub municipal_service_code: Option<String>,
    pub municipal_service_name: Option<String>,
    pub external_reference: Option<String>,
    pub taxes: Option<InvoiceTaxes>,
    pub number: Option<String>,
    pub rps_serie: Option<String>,
    pub rps_number: Option<String>,
    pub pdf_url: Option<String>,
    pub xml_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deductions: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes: Option<InvoiceTaxes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalService {
    pub id: String,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalInfoData {
    pub municipal_inscription: String,
    pub simples_nacional: bool,
    pub cultural_projects_promoter: bool,
    pub cnae: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_regime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_list_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rps_serie: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rps_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lote_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalInfo {
    pub object: String,
    pub environment: String,
    pub municipal_inscription: Option<String>,
    pub simples_nacional: Option<bool>,
    pub cultural_projects_promoter: Option<bool>,
    pub cnae: Option<String>,
    pub special_regime: Option<String>,
    pub service_list_item: Option<String>,
    pub rps_serie: Option<String>,
    pub rps_number: Option<u64>,
    pub lote_number: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceListParams {
    pub effective_date: Option<DateRange>,
    pub status: Option<InvoiceStatus>,
    pub payment: Option<String>,
    pub installment: Option<String>,
    pub customer: Option<String>,
    pub external_reference: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl InvoiceListParams {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        query
            .range("effectiveDate", self.effective_date.as_ref())
            .opt("status", self.status)
            .opt("payment", self.payment.as_deref())
            .opt("installment", self.installment.as_deref())
            .opt("customer", self.customer.as_deref())
            .opt("externalReference", self.external_reference.as_deref())
            .opt("offset", self.offset)
            .opt("limit", self.limit);
        query
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InvoicesApi<'a> {
    pub(crate) client: &'a AsaasClient,
}

impl InvoicesApi<'_> {
    /// Schedule an invoice. It is issued on `effective_date`.
    pub fn create(&self, data: &InvoiceData) -> Result<Invoice, ApiError> {
        self.client.post("/invoices", data)
    }

    pub fn list(&self, params: &InvoiceListParams) -> Result<Page<Invoice>, ApiError> {
        self.client.get("/invoices", params.to_query())
    }

    pub fn get(&self, id: &str) -> Result<Invoice, ApiError> {
        self.client.get(&format!("/invoices/{id}"), Query::new())
    }

    pub fn update(&self, id: &str, data: &InvoiceUpdate) -> Result<Invoice, ApiError> {
        self.client.put(&format!("/invoices/{id}"), data)
    }

    /// Issue a scheduled invoice immediately.
    pub fn authorize(&self, id: &str) -> Result<Invoice, ApiError> {
        self.client.post_empty(&format!("/invoices/{id}/authorize"))
    }

    pub fn cancel(&self, id: &str) -> Result<Invoice, ApiError> {
        self.client.post_empty(&format!("/invoices/{id}/cancel"))
    }

    pub fn municipal_services(&self) -> Result<Page<MunicipalService>, ApiError> {
        self.client.get("/invoices/municipalServices", Query::new())
    }

    pub fn configure_fiscal_info(&self, data: &FiscalInfoData) -> Result<FiscalInfo, ApiError> {
        self.client.post("/fiscalInfo/nationalPortal", data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_date_range_flattens() {
        let params = InvoiceListParams {
            effective_date: Some(DateRange::between("2024-01-01", "2024-01-31")),
            status: Some(InvoiceStatus::Authorized),
            ..Default::default()
        };
        let query = params.to_query();
        assert_eq!(query.get("effectiveDate[ge]"), Some("2024-01-01"));
        assert_eq!(query.get("effectiveDate[le]"), Some("2024-01-31"));
        assert_eq!(query.get("effectiveDate"), None);
        assert_eq!(query.get("status"), Some("AUTHORIZED"));
    }

    #[test]
    fn invoice_decodes_without_fiscal_numbers() {
        let raw = r#"{
            "object": "invoice", "id": "inv_1", "status": "SCHEDULED",
            "dateCreated": "2024-01-02", "payment": "pay_1",
            "serviceDescription": "Consulting", "value": 300.0,
            "effectiveDate": "2024-01-10"
        }"#;
        let invoice: Invoice = serde_json::from_str(raw).unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Scheduled);
        assert!(invoice.number.is_none());
        assert!(invoice.pdf_url.is_none());
    }
}
