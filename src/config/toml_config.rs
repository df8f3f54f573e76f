use crate::domain::model::ApplicationResult;
use crate::utils::error::{ApplicationError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatcherConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub dry_run: DryRunConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: default_log_format(),
        }
    }
}

fn default_log_format() -> String {
    "compact".to_string()
}

/// Canned responses served by the dry-run backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DryRunConfig {
    #[serde(default = "default_select_invoice_result")]
    pub select_invoice_result: i32,
    #[serde(default = "accepted")]
    pub confidential_invoice: ApplicationResult,
    #[serde(default = "accepted")]
    pub business_loans: ApplicationResult,
}

impl Default for DryRunConfig {
    fn default() -> Self {
        Self {
            select_invoice_result: default_select_invoice_result(),
            confidential_invoice: accepted(),
            business_loans: accepted(),
        }
    }
}

fn default_select_invoice_result() -> i32 {
    1
}

fn accepted() -> ApplicationResult {
    ApplicationResult {
        success: true,
        application_id: Some(1),
        errors: None,
    }
}

impl DispatcherConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ApplicationError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ApplicationError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }
}

/// Replaces `${VAR_NAME}` with the environment value, leaving unknown variables as written.
pub(crate) fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    use std::sync::OnceLock;

    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
    });

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

impl Validate for DispatcherConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("logging.format", &self.logging.format, &["compact", "json"])?;

        if let Some(level) = &self.logging.level {
            validate_one_of(
                "logging.level",
                level,
                &["trace", "debug", "info", "warn", "error"],
            )?;
        }

        Ok(())
    }
}
