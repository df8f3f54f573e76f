//! Loading seller applications from TOML files.
//!
//! ```toml
//! [company]
//! director_name = "Bob"
//! founded = "1900-01-01"
//! name = "Bob Inc."
//! number = 123
//!
//! [product]
//! type = "business_loans"
//! interest_rate_per_annum = "2.5"
//! loan_amount = "234"
//! ```
//!
//! Decimals may be written as strings or numbers. A `type` this crate does not
//! know loads as [`Product::Unsupported`](crate::domain::model::Product::Unsupported).

use crate::config::toml_config::substitute_env_vars;
use crate::domain::model::SellerApplication;
use crate::utils::error::{ApplicationError, Result};
use crate::utils::validation::validate_path;
use std::path::Path;

pub fn load_application<P: AsRef<Path>>(path: P) -> Result<SellerApplication> {
    validate_path("application", &path.as_ref().to_string_lossy())?;
    let content = std::fs::read_to_string(&path).map_err(ApplicationError::IoError)?;
    parse_application(&content)
}

pub fn parse_application(content: &str) -> Result<SellerApplication> {
    let processed_content = substitute_env_vars(content);

    toml::from_str(&processed_content).map_err(|e| ApplicationError::ValidationError {
        field: "application".to_string(),
        reason: format!("TOML parsing error: {}", e),
    })
}
