pub mod dispatcher;

pub use crate::domain::model::{
    ApplicationResult, BusinessLoans, CompanyDataRequest, ConfidentialInvoiceDiscount,
    LoansRequest, Product, SelectiveInvoiceDiscount, SellerApplication, SellerCompanyData,
};
pub use crate::domain::ports::{BusinessLoansService, ConfidentialInvoiceService, SelectInvoiceService};
pub use crate::utils::error::Result;
