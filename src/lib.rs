pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::DryRunBackends;
pub use config::DispatcherConfig;
pub use core::dispatcher::{
    reduce_outcome, ApplicationDispatcher, ProductApplicationService, FAILED_APPLICATION,
};
pub use domain::model::{
    ApplicationResult, BusinessLoans, CompanyDataRequest, ConfidentialInvoiceDiscount,
    LoansRequest, Product, SelectiveInvoiceDiscount, SellerApplication, SellerCompanyData,
};
pub use domain::ports::{BusinessLoansService, ConfidentialInvoiceService, SelectInvoiceService};
pub use utils::error::{ApplicationError, BackendError, Result};
