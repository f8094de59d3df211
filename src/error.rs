//! Error types for settings loading and listing input
//!
//! The cashflow engine itself is infallible; these errors only come from the
//! outer layers that read configuration and listing files.

use thiserror::Error;

/// Result alias used by the fallible parts of the crate
pub type Result<T> = std::result::Result<T, CashflowError>;

#[derive(Error, Debug)]
pub enum CashflowError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A settings field failed validation
    #[error("Invalid setting {field} = {value}: {reason}")]
    InvalidSetting {
        field: &'static str,
        value: f64,
        reason: String,
    },

    /// A listing row could not be turned into property data
    #[error("Invalid listing record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}

impl CashflowError {
    pub(crate) fn invalid_setting(field: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field,
            value,
            reason: reason.into(),
        }
    }
}
