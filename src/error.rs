//! Error type for correction calculations.

use thiserror::Error;

/// Result type for ballistics operations
pub type BallisticsResult<T> = Result<T, BallisticsError>;

/// Errors raised by the estimators.
///
/// Every estimator either fully succeeds or fails with one of these; there
/// are no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BallisticsError {
    /// A parameter is outside the domain the model is defined on.
    #[error("Invalid input: {field} {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
}

impl BallisticsError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        BallisticsError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter.
    pub fn field(&self) -> &'static str {
        match self {
            BallisticsError::InvalidInput { field, .. } => field,
        }
    }
}

/// Require a finite, strictly positive value.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> BallisticsResult<()> {
    if !value.is_finite() {
        return Err(BallisticsError::invalid_input(field, format!("must be finite, got {value}")));
    }
    if value <= 0.0 {
        return Err(BallisticsError::invalid_input(field, format!("must be > 0, got {value}")));
    }
    Ok(())
}

/// Require a finite, non-negative value.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> BallisticsResult<()> {
    if !value.is_finite() {
        return Err(BallisticsError::invalid_input(field, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(BallisticsError::invalid_input(field, format!("must be >= 0, got {value}")));
    }
    Ok(())
}

/// Require a finite value.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> BallisticsResult<()> {
    if !value.is_finite() {
        return Err(BallisticsError::invalid_input(field, format!("must be finite, got {value}")));
    }
    Ok(())
}
