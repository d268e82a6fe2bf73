#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Calculator Module
//!
//! Evaluates two-operand arithmetic requests and keeps an in-memory,
//! insertion-ordered history of the successful ones.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - `Calculator`, the [`CalculatorApi`] implementation
//! - `domain/clock.rs` - Time source used to stamp history entries
//! - `config.rs` - Module configuration
//!
//! The public contract is defined in `calculator-sdk` and re-exported here.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub use calculator_sdk::{
    CalculationHistory, CalculationRequest, CalculationResult, CalculatorApi, CalculatorError,
    DivisionByZeroError, Operation,
};

pub mod config;
pub mod domain;


pub use config::{CalculatorConfig, TimestampPrecision};
pub use domain::{Calculator, Clock, SystemClock};
