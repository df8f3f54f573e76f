use crate::domain::model::{
    ApplicationResult, BusinessLoans, CompanyDataRequest, ConfidentialInvoiceDiscount,
    LoansRequest, Product, SelectiveInvoiceDiscount, SellerApplication, SellerCompanyData,
};
use crate::domain::ports::{BusinessLoansService, ConfidentialInvoiceService, SelectInvoiceService};
use crate::utils::error::{ApplicationError, Result};

/// Outcome returned when a backend reports failure or accepts without an identifier.
/// Never a valid application identifier.
pub const FAILED_APPLICATION: i32 = -1;

/// Collapses a backend's success flag and identifier into a single outcome code.
pub fn reduce_outcome(success: bool, application_id: Option<i32>) -> i32 {
    match (success, application_id) {
        (true, Some(id)) => id,
        _ => FAILED_APPLICATION,
    }
}

pub trait ProductApplicationService {
    /// Submits an application for whichever product it carries.
    #[deprecated(note = "use the product specific submit_* methods")]
    fn route(&self, application: &SellerApplication) -> Result<i32>;

    fn submit_selective_invoice_discount(
        &self,
        company: &SellerCompanyData,
        invoice_discount: &SelectiveInvoiceDiscount,
    ) -> Result<i32>;

    fn submit_confidential_invoice_discount(
        &self,
        company: &SellerCompanyData,
        invoice_discount: &ConfidentialInvoiceDiscount,
    ) -> Result<i32>;

    fn submit_business_loans(&self, company: &SellerCompanyData, loans: &BusinessLoans)
        -> Result<i32>;
}

/// Routes seller applications to the injected backend services.
pub struct ApplicationDispatcher<S, C, B>
where
    S: SelectInvoiceService,
    C: ConfidentialInvoiceService,
    B: BusinessLoansService,
{
    select_invoice: S,
    confidential_invoice: C,
    business_loans: B,
}

impl<S, C, B> ApplicationDispatcher<S, C, B>
where
    S: SelectInvoiceService,
    C: ConfidentialInvoiceService,
    B: BusinessLoansService,
{
    pub fn new(select_invoice: S, confidential_invoice: C, business_loans: B) -> Self {
        Self {
            select_invoice,
            confidential_invoice,
            business_loans,
        }
    }

    fn reduce(&self, service: &str, result: &ApplicationResult) -> i32 {
        let outcome = reduce_outcome(result.success, result.application_id);
        let error_count = result.errors.as_ref().map_or(0, Vec::len);

        if outcome == FAILED_APPLICATION {
            tracing::warn!(
                "{} did not accept the application (success: {}, application id present: {}, errors: {})",
                service,
                result.success,
                result.application_id.is_some(),
                error_count
            );
        } else {
            tracing::info!("{} accepted application {}", service, outcome);
        }

        outcome
    }
}

impl<S, C, B> ProductApplicationService for ApplicationDispatcher<S, C, B>
where
    S: SelectInvoiceService,
    C: ConfidentialInvoiceService,
    B: BusinessLoansService,
{
    fn route(&self, application: &SellerApplication) -> Result<i32> {
        let company = &application.company_data;
        tracing::debug!(
            "Routing {} application for company {}",
            application.product.kind(),
            company.number
        );

        // No new products here; they only get a direct submit_* method.
        match &application.product {
            Product::SelectiveInvoiceDiscount(sid) => {
                self.submit_selective_invoice_discount(company, sid)
            }
            Product::ConfidentialInvoiceDiscount(cid) => {
                self.submit_confidential_invoice_discount(company, cid)
            }
            Product::BusinessLoans(loans) => self.submit_business_loans(company, loans),
            Product::Unsupported => {
                tracing::error!(
                    "Unsupported product submitted for company {}",
                    company.number
                );
                Err(ApplicationError::UnsupportedProduct)
            }
        }
    }

    fn submit_selective_invoice_discount(
        &self,
        company: &SellerCompanyData,
        invoice_discount: &SelectiveInvoiceDiscount,
    ) -> Result<i32> {
        tracing::debug!(
            "Submitting selective invoice discount {} for company {}",
            invoice_discount.id,
            company.number
        );

        let result = self.select_invoice.submit_application_for(
            &company.number.to_string(),
            invoice_discount.invoice_amount,
            invoice_discount.advance_percentage,
        )?;

        tracing::info!("select invoice service returned {}", result);
        Ok(result)
    }

    fn submit_confidential_invoice_discount(
        &self,
        company: &SellerCompanyData,
        invoice_discount: &ConfidentialInvoiceDiscount,
    ) -> Result<i32> {
        let request = CompanyDataRequest::from(company);
        tracing::debug!(
            "Submitting confidential invoice discount {} with {:?}",
            invoice_discount.id,
            request
        );

        let result = self.confidential_invoice.submit_application_for(
            &request,
            invoice_discount.total_ledger_networth,
            invoice_discount.advance_percentage,
            invoice_discount.vat_rate,
        )?;

        Ok(self.reduce("confidential invoice service", &result))
    }

    fn submit_business_loans(
        &self,
        company: &SellerCompanyData,
        loans: &BusinessLoans,
    ) -> Result<i32> {
        let company_request = CompanyDataRequest::from(company);
        let loans_request = LoansRequest::from(loans);
        tracing::debug!(
            "Submitting business loans {:?} with {:?}",
            loans_request,
            company_request
        );

        let result = self
            .business_loans
            .submit_application_for(&company_request, &loans_request)?;

        Ok(self.reduce("business loans service", &result))
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        MockBusinessLoansService, MockConfidentialInvoiceService, MockSelectInvoiceService,
    };
    use crate::utils::error::BackendError;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    type MockDispatcher = ApplicationDispatcher<
        MockSelectInvoiceService,
        MockConfidentialInvoiceService,
        MockBusinessLoansService,
    >;

    fn dispatcher(
        select_invoice: MockSelectInvoiceService,
        confidential_invoice: MockConfidentialInvoiceService,
        business_loans: MockBusinessLoansService,
    ) -> MockDispatcher {
        ApplicationDispatcher::new(select_invoice, confidential_invoice, business_loans)
    }

    fn bob_inc() -> SellerCompanyData {
        SellerCompanyData {
            director_name: "Bob".to_string(),
            founded: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap(),
            name: "Bob Inc.".to_string(),
            number: 123,
        }
    }

    fn selective_invoice_application() -> SellerApplication {
        SellerApplication {
            company_data: bob_inc(),
            product: Product::SelectiveInvoiceDiscount(SelectiveInvoiceDiscount {
                id: 123,
                invoice_amount: Decimal::from(456),
                advance_percentage: Decimal::new(25, 1),
            }),
        }
    }

    fn confidential_invoice_application() -> SellerApplication {
        SellerApplication {
            company_data: bob_inc(),
            product: Product::ConfidentialInvoiceDiscount(ConfidentialInvoiceDiscount {
                id: 123,
                total_ledger_networth: Decimal::from(456),
                advance_percentage: Decimal::new(25, 1),
                vat_rate: Decimal::new(25, 1),
            }),
        }
    }

    fn business_loans_application() -> SellerApplication {
        SellerApplication {
            company_data: bob_inc(),
            product: Product::BusinessLoans(BusinessLoans {
                interest_rate_per_annum: Decimal::new(25, 1),
                loan_amount: Decimal::from(234),
            }),
        }
    }

    fn backend_result(application_id: Option<i32>, success: bool) -> ApplicationResult {
        ApplicationResult {
            success,
            application_id,
            errors: None,
        }
    }

    fn confidential_returning(result: ApplicationResult) -> MockConfidentialInvoiceService {
        let mut service = MockConfidentialInvoiceService::new();
        service
            .expect_submit_application_for()
            .withf(|company, networth, advance, vat| {
                company.company_number == 123
                    && company.company_name == "Bob Inc."
                    && company.director_name == "Bob"
                    && company.company_founded == NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
                    && *networth == Decimal::from(456)
                    && *advance == Decimal::new(25, 1)
                    && *vat == Decimal::new(25, 1)
            })
            .times(1)
            .returning(move |_, _, _, _| Ok(result.clone()));
        service
    }

    fn loans_returning(result: ApplicationResult) -> MockBusinessLoansService {
        let mut service = MockBusinessLoansService::new();
        service
            .expect_submit_application_for()
            .withf(|company, loans| {
                company.company_number == 123
                    && company.company_name == "Bob Inc."
                    && company.director_name == "Bob"
                    && company.company_founded == NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
                    && loans.loan_amount == Decimal::from(234)
                    && loans.interest_rate_per_annum == Decimal::new(25, 1)
            })
            .times(1)
            .returning(move |_, _| Ok(result.clone()));
        service
    }

    #[test]
    fn test_reduce_outcome() {
        assert_eq!(reduce_outcome(true, Some(999)), 999);
        assert_eq!(reduce_outcome(true, Some(0)), 0);
        assert_eq!(reduce_outcome(false, Some(999)), FAILED_APPLICATION);
        assert_eq!(reduce_outcome(true, None), FAILED_APPLICATION);
        assert_eq!(reduce_outcome(false, None), FAILED_APPLICATION);
    }

    #[test]
    fn test_route_selective_invoice_returns_backend_value_unmodified() {
        let mut select_invoice = MockSelectInvoiceService::new();
        select_invoice
            .expect_submit_application_for()
            .withf(|number, amount, advance| {
                number == "123"
                    && *amount == Decimal::from(456)
                    && *advance == Decimal::new(25, 1)
            })
            .times(1)
            .returning(|_, _, _| Ok(999));

        let sut = dispatcher(
            select_invoice,
            MockConfidentialInvoiceService::new(),
            MockBusinessLoansService::new(),
        );

        assert_eq!(sut.route(&selective_invoice_application()).unwrap(), 999);
    }

    #[test]
    fn test_route_selective_invoice_does_not_reduce_negative_values() {
        let mut select_invoice = MockSelectInvoiceService::new();
        select_invoice
            .expect_submit_application_for()
            .times(1)
            .returning(|_, _, _| Ok(-7));

        let sut = dispatcher(
            select_invoice,
            MockConfidentialInvoiceService::new(),
            MockBusinessLoansService::new(),
        );

        assert_eq!(sut.route(&selective_invoice_application()).unwrap(), -7);
    }

    #[test]
    fn test_submit_selective_invoice_directly() {
        let mut select_invoice = MockSelectInvoiceService::new();
        select_invoice
            .expect_submit_application_for()
            .withf(|number, amount, advance| {
                number == "123"
                    && *amount == Decimal::from(456)
                    && *advance == Decimal::new(25, 1)
            })
            .times(1)
            .returning(|_, _, _| Ok(31));

        let sut = dispatcher(
            select_invoice,
            MockConfidentialInvoiceService::new(),
            MockBusinessLoansService::new(),
        );
        let application = selective_invoice_application();
        let Product::SelectiveInvoiceDiscount(sid) = &application.product else {
            unreachable!()
        };

        let outcome = sut
            .submit_selective_invoice_discount(&application.company_data, sid)
            .unwrap();
        assert_eq!(outcome, 31);
    }

    #[test]
    fn test_route_confidential_invoice_returns_application_id() {
        let sut = dispatcher(
            MockSelectInvoiceService::new(),
            confidential_returning(backend_result(Some(999), true)),
            MockBusinessLoansService::new(),
        );

        assert_eq!(sut.route(&confidential_invoice_application()).unwrap(), 999);
    }

    #[test]
    fn test_route_confidential_invoice_failure_returns_minus_one() {
        let sut = dispatcher(
            MockSelectInvoiceService::new(),
            confidential_returning(backend_result(Some(999), false)),
            MockBusinessLoansService::new(),
        );

        assert_eq!(sut.route(&confidential_invoice_application()).unwrap(), -1);
    }

    #[test]
    fn test_route_confidential_invoice_missing_id_returns_minus_one() {
        let sut = dispatcher(
            MockSelectInvoiceService::new(),
            confidential_returning(backend_result(None, true)),
            MockBusinessLoansService::new(),
        );

        assert_eq!(sut.route(&confidential_invoice_application()).unwrap(), -1);
    }

    #[test]
    fn test_route_business_loans_returns_application_id() {
        let sut = dispatcher(
            MockSelectInvoiceService::new(),
            MockConfidentialInvoiceService::new(),
            loans_returning(backend_result(Some(999), true)),
        );

        assert_eq!(sut.route(&business_loans_application()).unwrap(), 999);
    }

    #[test]
    fn test_route_business_loans_failure_returns_minus_one() {
        let sut = dispatcher(
            MockSelectInvoiceService::new(),
            MockConfidentialInvoiceService::new(),
            loans_returning(backend_result(Some(999), false)),
        );

        assert_eq!(sut.route(&business_loans_application()).unwrap(), -1);
    }

    #[test]
    fn test_route_business_loans_missing_id_returns_minus_one() {
        let sut = dispatcher(
            MockSelectInvoiceService::new(),
            MockConfidentialInvoiceService::new(),
            loans_returning(backend_result(None, true)),
        );

        assert_eq!(sut.route(&business_loans_application()).unwrap(), -1);
    }

    #[test]
    fn test_errors_do_not_change_successful_outcome() {
        let result = ApplicationResult {
            success: true,
            application_id: Some(999),
            errors: Some(vec!["late filing".to_string()]),
        };
        let sut = dispatcher(
            MockSelectInvoiceService::new(),
            MockConfidentialInvoiceService::new(),
            loans_returning(result),
        );

        assert_eq!(sut.route(&business_loans_application()).unwrap(), 999);
    }

    #[test]
    fn test_route_unsupported_product_calls_no_backend() {
        let mut select_invoice = MockSelectInvoiceService::new();
        select_invoice.expect_submit_application_for().never();
        let mut confidential_invoice = MockConfidentialInvoiceService::new();
        confidential_invoice.expect_submit_application_for().never();
        let mut business_loans = MockBusinessLoansService::new();
        business_loans.expect_submit_application_for().never();

        let sut = dispatcher(select_invoice, confidential_invoice, business_loans);
        let application = SellerApplication {
            company_data: bob_inc(),
            product: Product::Unsupported,
        };

        let err = sut.route(&application).unwrap_err();
        assert!(matches!(err, ApplicationError::UnsupportedProduct));
    }

    #[test]
    fn test_backend_failure_is_propagated() {
        let mut business_loans = MockBusinessLoansService::new();
        business_loans
            .expect_submit_application_for()
            .times(1)
            .returning(|_, _| Err(BackendError::new("business-loans", "timed out")));

        let sut = dispatcher(
            MockSelectInvoiceService::new(),
            MockConfidentialInvoiceService::new(),
            business_loans,
        );

        let err = sut.route(&business_loans_application()).unwrap_err();
        match err {
            ApplicationError::Backend(inner) => {
                assert_eq!(inner, BackendError::new("business-loans", "timed out"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_direct_entry_point_matches_route() {
        let sut = dispatcher(
            MockSelectInvoiceService::new(),
            confidential_returning(backend_result(Some(42), true)),
            MockBusinessLoansService::new(),
        );
        let application = confidential_invoice_application();
        let Product::ConfidentialInvoiceDiscount(cid) = &application.product else {
            unreachable!()
        };

        let outcome = sut
            .submit_confidential_invoice_discount(&application.company_data, cid)
            .unwrap();
        assert_eq!(outcome, 42);
    }
}
