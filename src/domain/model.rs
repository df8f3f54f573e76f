use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerCompanyData {
    pub director_name: String,
    pub founded: NaiveDate,
    pub name: String,
    pub number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectiveInvoiceDiscount {
    pub id: i32,
    pub invoice_amount: Decimal,
    pub advance_percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidentialInvoiceDiscount {
    pub id: i32,
    pub total_ledger_networth: Decimal,
    pub advance_percentage: Decimal,
    pub vat_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessLoans {
    pub interest_rate_per_annum: Decimal,
    pub loan_amount: Decimal,
}

/// The financial product a seller is applying for.
///
/// `Unsupported` stands in for any product type the dispatcher has no backend
/// for, e.g. an unknown `type` tag in an application file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Product {
    SelectiveInvoiceDiscount(SelectiveInvoiceDiscount),
    ConfidentialInvoiceDiscount(ConfidentialInvoiceDiscount),
    BusinessLoans(BusinessLoans),
    #[serde(other)]
    Unsupported,
}

impl Product {
    pub fn kind(&self) -> &'static str {
        match self {
            Product::SelectiveInvoiceDiscount(_) => "selective_invoice_discount",
            Product::ConfidentialInvoiceDiscount(_) => "confidential_invoice_discount",
            Product::BusinessLoans(_) => "business_loans",
            Product::Unsupported => "unsupported",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerApplication {
    #[serde(rename = "company")]
    pub company_data: SellerCompanyData,
    pub product: Product,
}

/// Outcome reported by the confidential invoice and business loans backends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationResult {
    pub success: bool,
    pub application_id: Option<i32>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDataRequest {
    pub company_founded: NaiveDate,
    pub company_number: u32,
    pub company_name: String,
    pub director_name: String,
}

impl From<&SellerCompanyData> for CompanyDataRequest {
    fn from(company: &SellerCompanyData) -> Self {
        Self {
            company_founded: company.founded,
            company_number: company.number,
            company_name: company.name.clone(),
            director_name: company.director_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoansRequest {
    pub interest_rate_per_annum: Decimal,
    pub loan_amount: Decimal,
}

impl From<&BusinessLoans> for LoansRequest {
    fn from(loans: &BusinessLoans) -> Self {
        Self {
            interest_rate_per_annum: loans.interest_rate_per_annum,
            loan_amount: loans.loan_amount,
        }
    }
}
