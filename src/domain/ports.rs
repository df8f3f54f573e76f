use crate::domain::model::{ApplicationResult, CompanyDataRequest, LoansRequest};
use crate::utils::error::BackendError;
use rust_decimal::Decimal;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait SelectInvoiceService: Send + Sync {
    fn submit_application_for(
        &self,
        company_number: &str,
        invoice_amount: Decimal,
        advance_percentage: Decimal,
    ) -> Result<i32, BackendError>;
}

#[cfg_attr(test, automock)]
pub trait ConfidentialInvoiceService: Send + Sync {
    fn submit_application_for(
        &self,
        company: &CompanyDataRequest,
        total_ledger_networth: Decimal,
        advance_percentage: Decimal,
        vat_rate: Decimal,
    ) -> Result<ApplicationResult, BackendError>;
}

#[cfg_attr(test, automock)]
pub trait BusinessLoansService: Send + Sync {
    fn submit_application_for(
        &self,
        company: &CompanyDataRequest,
        loans: &LoansRequest,
    ) -> Result<ApplicationResult, BackendError>;
}
