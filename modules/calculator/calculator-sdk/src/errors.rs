//! Error types for the calculator module.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Division by exactly zero.
///
/// Carries both operands of the rejected request.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct DivisionByZeroError {
    pub message: String,
    pub operand1: f64,
    pub operand2: f64,
}

impl DivisionByZeroError {
    pub const MESSAGE: &'static str = "Division by zero is not allowed.";

    #[must_use]
    pub fn new(operand1: f64, operand2: f64) -> Self {
        Self {
            message: Self::MESSAGE.to_owned(),
            operand1,
            operand2,
        }
    }
}

/// Errors returned by [`crate::CalculatorApi::calculate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// The divisor of a `divide` request was zero.
    #[error(transparent)]
    DivisionByZero(#[from] DivisionByZeroError),

    /// The operation tag is not one of the supported operations.
    #[error("invalid operation: {operation}")]
    InvalidOperation {
        /// The rejected tag, verbatim.
        operation: String,
    },
}

impl CalculatorError {
    #[must_use]
    pub fn invalid_operation(operation: impl Into<String>) -> Self {
        Self::InvalidOperation {
            operation: operation.into(),
        }
    }

    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero(_))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_message() {
        let err = CalculatorError::from(DivisionByZeroError::new(10.0, 0.0));
        assert_eq!(err.to_string(), "Division by zero is not allowed.");
        assert!(err.is_division_by_zero());
    }

    #[test]
    fn test_invalid_operation_message() {
        let err = CalculatorError::invalid_operation("pow");
        assert_eq!(err.to_string(), "invalid operation: pow");
        assert!(!err.is_division_by_zero());
    }

    #[test]
    fn test_division_by_zero_wire_names() {
        let value = serde_json::to_value(DivisionByZeroError::new(3.0, 0.0)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "Division by zero is not allowed.",
                "operand1": 3.0,
                "operand2": 0.0
            })
        );
    }
}
