//! Calculator API trait
//!
//! Contract trait for the calculator service.

use crate::errors::CalculatorError;
use crate::models::{CalculationHistory, CalculationRequest, CalculationResult};

/// Calculator API trait
///
/// Evaluates two-operand arithmetic requests and keeps an ordered log of
/// the successful ones.
///
/// Mutating methods take `&mut self`: the history is owned by a single caller.
/// Implementations shared across threads need external locking.
pub trait CalculatorApi {
    /// Evaluate `request` and record it in the history on success.
    ///
    /// # Errors
    ///
    /// - [`CalculatorError::DivisionByZero`] if the operation is `divide` and
    ///   the second operand is exactly zero
    /// - [`CalculatorError::InvalidOperation`] if the operation tag is unknown
    ///
    /// The history is left untouched when an error is returned.
    fn calculate(
        &mut self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, CalculatorError>;

    /// Snapshot of the history in insertion order.
    fn get_history(&self) -> Vec<CalculationHistory>;

    /// Drop all history entries. Calling it on an empty history is a no-op.
    fn clear_history(&mut self);
}
