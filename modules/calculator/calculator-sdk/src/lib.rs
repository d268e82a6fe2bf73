#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Calculator SDK
//!
//! This crate provides the public contract of the calculator module:
//!
//! - [`CalculatorApi`] - API trait implemented by the calculator
//! - [`CalculationRequest`], [`CalculationResult`], [`CalculationHistory`] - Models
//! - [`Operation`] - Typed operation tag
//! - [`CalculatorError`], [`DivisionByZeroError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculationRequest, CalculatorApi, CalculatorError};
//!
//! let result = calculator.calculate(&CalculationRequest::new(10.0, 5.0, "add"))?;
//! assert_eq!(result.result, 15.0);
//!
//! match calculator.calculate(&CalculationRequest::new(10.0, 0.0, "divide")) {
//!     Err(CalculatorError::DivisionByZero(e)) => println!("{}", e.message),
//!     other => println!("{other:?}"),
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;
pub mod operation;

pub use api::CalculatorApi;
pub use errors::{CalculatorError, DivisionByZeroError};
pub use models::{CalculationHistory, CalculationRequest, CalculationResult};
pub use operation::Operation;
