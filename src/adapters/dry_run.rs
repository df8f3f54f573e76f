use crate::config::toml_config::DryRunConfig;
use crate::domain::model::{ApplicationResult, CompanyDataRequest, LoansRequest};
use crate::domain::ports::{BusinessLoansService, ConfidentialInvoiceService, SelectInvoiceService};
use crate::utils::error::BackendError;
use rust_decimal::Decimal;

/// Stand-in for all three backends that logs each request and answers from configuration.
#[derive(Debug, Clone, Default)]
pub struct DryRunBackends {
    responses: DryRunConfig,
}

impl DryRunBackends {
    pub fn new(responses: DryRunConfig) -> Self {
        Self { responses }
    }
}

impl SelectInvoiceService for DryRunBackends {
    fn submit_application_for(
        &self,
        company_number: &str,
        invoice_amount: Decimal,
        advance_percentage: Decimal,
    ) -> Result<i32, BackendError> {
        tracing::info!(
            "[dry-run] select invoice: company {}, invoice amount {}, advance {}%",
            company_number,
            invoice_amount,
            advance_percentage
        );
        Ok(self.responses.select_invoice_result)
    }
}

impl ConfidentialInvoiceService for DryRunBackends {
    fn submit_application_for(
        &self,
        company: &CompanyDataRequest,
        total_ledger_networth: Decimal,
        advance_percentage: Decimal,
        vat_rate: Decimal,
    ) -> Result<ApplicationResult, BackendError> {
        tracing::info!(
            "[dry-run] confidential invoice: company {} ({}), net worth {}, advance {}%, vat {}%",
            company.company_number,
            company.company_name,
            total_ledger_networth,
            advance_percentage,
            vat_rate
        );
        Ok(self.responses.confidential_invoice.clone())
    }
}

impl BusinessLoansService for DryRunBackends {
    fn submit_application_for(
        &self,
        company: &CompanyDataRequest,
        loans: &LoansRequest,
    ) -> Result<ApplicationResult, BackendError> {
        tracing::info!(
            "[dry-run] business loans: company {} ({}), amount {}, rate {}%",
            company.company_number,
            company.company_name,
            loans.loan_amount,
            loans.interest_rate_per_annum
        );
        Ok(self.responses.business_loans.clone())
    }
}
