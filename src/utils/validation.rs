use crate::domain::model::{Product, SellerApplication, SellerCompanyData};
use crate::utils::error::{ApplicationError, Result};
use rust_decimal::Decimal;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ApplicationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ApplicationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ApplicationError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApplicationError::ValidationError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ApplicationError::ValidationError {
            field: field_name.to_string(),
            reason: format!("Value must not be negative, got {}", value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ApplicationError::ValidationError {
            field: field_name.to_string(),
            reason: format!("Value {} must be between {} and {}", value, min, max),
        });
    }
    Ok(())
}

pub fn validate_percentage(field_name: &str, value: Decimal) -> Result<()> {
    validate_range(field_name, value, Decimal::ZERO, Decimal::ONE_HUNDRED)
}

impl Validate for SellerCompanyData {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("company.name", &self.name)?;
        validate_non_empty_string("company.director_name", &self.director_name)
    }
}

impl Validate for SellerApplication {
    fn validate(&self) -> Result<()> {
        self.company_data.validate()?;

        match &self.product {
            Product::SelectiveInvoiceDiscount(sid) => {
                validate_non_negative("product.invoice_amount", sid.invoice_amount)?;
                validate_percentage("product.advance_percentage", sid.advance_percentage)
            }
            Product::ConfidentialInvoiceDiscount(cid) => {
                validate_non_negative("product.total_ledger_networth", cid.total_ledger_networth)?;
                validate_percentage("product.advance_percentage", cid.advance_percentage)?;
                validate_percentage("product.vat_rate", cid.vat_rate)
            }
            Product::BusinessLoans(loans) => {
                validate_non_negative("product.loan_amount", loans.loan_amount)?;
                validate_percentage("product.interest_rate_per_annum", loans.interest_rate_per_annum)
            }
            // Rejected by the dispatcher itself, not here.
            Product::Unsupported => Ok(()),
        }
    }
}
