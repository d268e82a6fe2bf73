//! Typed operation tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalculatorError;

/// Arithmetic operation selected by a request's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All supported operations, in tag order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Canonical wire tag.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Parse a canonical tag. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_tag() == tag)
    }

    /// Apply the operation without any zero-divisor check.
    ///
    /// IEEE-754 semantics apply, so `Divide` with a zero divisor yields an
    /// infinity or NaN. Callers that must reject it check the divisor first.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| CalculatorError::invalid_operation(s))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_from_tag() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_tag(op.as_tag()), Some(op));
        }
    }

    #[test]
    fn test_from_tag_is_case_sensitive() {
        assert_eq!(Operation::from_tag("Add"), None);
        assert_eq!(Operation::from_tag("ADD"), None);
        assert_eq!(Operation::from_tag(" add"), None);
        assert_eq!(Operation::from_tag("+"), None);
    }

    #[test]
    fn test_from_str_unknown_tag_is_invalid_operation() {
        let err = "modulo".parse::<Operation>().unwrap_err();
        assert_eq!(
            err,
            CalculatorError::InvalidOperation {
                operation: "modulo".to_owned()
            }
        );
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(10.0, 5.0), 15.0);
        assert_eq!(Operation::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operation::Multiply.apply(4.0, 5.0), 20.0);
        assert_eq!(Operation::Divide.apply(10.0, 2.0), 5.0);
    }

    #[test]
    fn test_apply_divide_by_zero_follows_ieee() {
        assert!(Operation::Divide.apply(1.0, 0.0).is_infinite());
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_display_uses_tag() {
        assert_eq!(Operation::Multiply.to_string(), "multiply");
    }
}
