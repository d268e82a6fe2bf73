//! Configuration for the calculator module.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

/// Module configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Fractional-second precision of history timestamps.
    pub timestamp_precision: TimestampPrecision,
}

/// Fractional-second precision of an RFC 3339 timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampPrecision {
    /// `2025-01-28T22:28:03Z`
    #[default]
    Seconds,
    /// `2025-01-28T22:28:03.123Z`
    Millis,
    Micros,
    Nanos,
}

impl From<TimestampPrecision> for SecondsFormat {
    fn from(p: TimestampPrecision) -> Self {
        match p {
            TimestampPrecision::Seconds => Self::Secs,
            TimestampPrecision::Millis => Self::Millis,
            TimestampPrecision::Micros => Self::Micros,
            TimestampPrecision::Nanos => Self::Nanos,
        }
    }
}
