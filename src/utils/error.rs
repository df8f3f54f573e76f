use thiserror::Error;

/// Failure raised by a backend service while handling a submission.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{service} call failed: {message}")]
pub struct BackendError {
    pub service: String,
    pub message: String,
}

impl BackendError {
    pub fn new(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Product type is not supported for submission")]
    UnsupportedProduct,

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid application: {field}: {reason}")]
    ValidationError { field: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Contract,
    Backend,
    Configuration,
    Input,
}

impl ApplicationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApplicationError::UnsupportedProduct => ErrorCategory::Contract,
            ApplicationError::Backend(_) => ErrorCategory::Backend,
            ApplicationError::IoError(_)
            | ApplicationError::ConfigValidationError { .. }
            | ApplicationError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ApplicationError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApplicationError::UnsupportedProduct => {
                "The application names a product type that cannot be submitted".to_string()
            }
            ApplicationError::Backend(e) => format!("Backend rejected the call: {}", e),
            ApplicationError::IoError(e) => format!("Could not read input file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Input => 3,
            ErrorCategory::Contract => 4,
            ErrorCategory::Backend => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApplicationError>;
