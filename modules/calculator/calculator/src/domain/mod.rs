//! Domain layer for calculator module
//!
//! Contains the calculation logic and the history it records.

pub mod clock;
pub mod service;

pub use clock::{Clock, SystemClock};
pub use service::Calculator;
