//! Error types for the realty index.

use thiserror::Error;

/// Every failure the index can report.
///
/// Input errors are raised at the boundary, before any mutation, so a rejected
/// call never leaves the tree half-updated.
#[derive(Debug, Error)]
pub enum RealtyError {
    /// A rectangle whose minimum exceeds its maximum, or a non-finite coordinate.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A negative or non-finite price, area, radius or threshold.
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(String),
}

impl RealtyError {
    /// True for errors caused by caller-supplied values rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RealtyError::InvalidGeometry(_) | RealtyError::InvalidAttribute(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RealtyError>;
