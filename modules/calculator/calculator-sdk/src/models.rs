//! Public models for the calculator module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the calculator and its consumers. Serialized field names are
//! part of that contract.

use serde::{Deserialize, Serialize};

use crate::operation::Operation;

/// A single two-operand calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub operand1: f64,
    pub operand2: f64,
    /// Operation tag: `add`, `subtract`, `multiply` or `divide`.
    pub operation: String,
}

impl CalculationRequest {
    #[must_use]
    pub fn new(operand1: f64, operand2: f64, operation: impl Into<String>) -> Self {
        Self {
            operand1,
            operand2,
            operation: operation.into(),
        }
    }

    /// Build a request from a typed operation.
    #[must_use]
    pub fn with_operation(operand1: f64, operand2: f64, operation: Operation) -> Self {
        Self::new(operand1, operand2, operation.as_tag())
    }
}

/// Outcome of a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub result: f64,
    pub message: String,
}

impl CalculationResult {
    pub const SUCCESS_MESSAGE: &'static str = "Calculation successful.";

    #[must_use]
    pub fn success(result: f64) -> Self {
        Self {
            result,
            message: Self::SUCCESS_MESSAGE.to_owned(),
        }
    }
}

/// History entry recorded for every successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    pub request: CalculationRequest,
    pub result: CalculationResult,
    /// RFC 3339 time at which the calculation was performed.
    pub timestamp: String,
}
