//! Domain service for calculator
//!
//! Evaluates requests and owns the calculation history.

use std::fmt;
use std::sync::Arc;

use calculator_sdk::{
    CalculationHistory, CalculationRequest, CalculationResult, CalculatorApi, CalculatorError,
    DivisionByZeroError, Operation,
};
use chrono::SecondsFormat;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use crate::config::CalculatorConfig;

/// Four-operation calculator with an in-memory history.
///
/// Every successful [`CalculatorApi::calculate`] call appends one
/// [`CalculationHistory`] entry; failed calls leave the history untouched.
/// Entries are never edited or removed individually, only cleared together.
pub struct Calculator {
    history: Vec<CalculationHistory>,
    clock: Arc<dyn Clock>,
    config: CalculatorConfig,
}

impl Calculator {
    /// Create a calculator using the system clock and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self::with_clock(Arc::new(SystemClock), config)
    }

    /// Create a calculator that stamps history entries using `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>, config: CalculatorConfig) -> Self {
        Self {
            history: Vec::new(),
            clock,
            config,
        }
    }

    /// Number of recorded calculations.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn evaluate(request: &CalculationRequest) -> Result<f64, CalculatorError> {
        let operation: Operation = request.operation.parse()?;
        if operation == Operation::Divide && request.operand2 == 0.0 {
            return Err(DivisionByZeroError::new(request.operand1, request.operand2).into());
        }
        Ok(operation.apply(request.operand1, request.operand2))
    }

    fn timestamp(&self) -> String {
        self.clock
            .now()
            .to_rfc3339_opts(SecondsFormat::from(self.config.timestamp_precision), true)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("history", &self.history)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CalculatorApi for Calculator {
    fn calculate(
        &mut self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, CalculatorError> {
        let value = Self::evaluate(request).inspect_err(|e| {
            debug!(
                operation = %request.operation,
                operand1 = request.operand1,
                operand2 = request.operand2,
                error = %e,
                "calculation rejected"
            );
        })?;

        let result = CalculationResult::success(value);
        let timestamp = self.timestamp();
        self.history.push(CalculationHistory {
            request: request.clone(),
            result: result.clone(),
            timestamp,
        });

        debug!(
            operation = %request.operation,
            operand1 = request.operand1,
            operand2 = request.operand2,
            result = value,
            history_len = self.history.len(),
            "calculation recorded"
        );
        Ok(result)
    }

    fn get_history(&self) -> Vec<CalculationHistory> {
        self.history.clone()
    }

    fn clear_history(&mut self) {
        let dropped = self.history.len();
        self.history.clear();
        debug!(dropped, "calculation history cleared");
    }
}
