//! Parsing of interactive input lines.

use calculator::{CalculationRequest, Operation};

/// A parsed line of interactive input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Calculate(CalculationRequest),
    History,
    Clear,
    Help,
    Exit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("expected '<operand1> <operation> <operand2>', got '{0}'")]
    Malformed(String),
}

/// Parse one line of interactive input.
///
/// # Errors
///
/// Returns [`InputError`] when the line is neither a known command nor a
/// well-formed `<operand1> <operation> <operand2>` triple. Unknown operation
/// tokens are passed through so the calculator reports them.
pub fn parse_line(line: &str) -> Result<Command, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Ok(Command::Empty),
        [word] => match word.to_ascii_lowercase().as_str() {
            "history" => Ok(Command::History),
            "clear" => Ok(Command::Clear),
            "help" | "?" => Ok(Command::Help),
            "exit" | "quit" => Ok(Command::Exit),
            _ => Err(InputError::Malformed(line.trim().to_owned())),
        },
        [lhs, op, rhs] => Ok(Command::Calculate(CalculationRequest::new(
            parse_operand(lhs)?,
            parse_operand(rhs)?,
            operation_tag(op),
        ))),
        _ => Err(InputError::Malformed(line.trim().to_owned())),
    }
}

/// Parse an operand as `f64`, accepting `inf` and `NaN` spellings.
///
/// # Errors
///
/// Returns [`InputError::InvalidNumber`] if `token` is not a number.
pub fn parse_operand(token: &str) -> Result<f64, InputError> {
    token
        .parse()
        .map_err(|_| InputError::InvalidNumber(token.to_owned()))
}

/// Map an arithmetic symbol to its canonical tag; other tokens pass through.
#[must_use]
pub fn operation_tag(token: &str) -> &str {
    match token {
        "+" => Operation::Add.as_tag(),
        "-" => Operation::Subtract.as_tag(),
        "*" | "x" => Operation::Multiply.as_tag(),
        "/" => Operation::Divide.as_tag(),
        other => other,
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbol_calculation() {
        assert_eq!(
            parse_line("10 + 5").unwrap(),
            Command::Calculate(CalculationRequest::new(10.0, 5.0, "add"))
        );
        assert_eq!(
            parse_line("  4 x 2.5 ").unwrap(),
            Command::Calculate(CalculationRequest::new(4.0, 2.5, "multiply"))
        );
    }

    #[test]
    fn test_parse_tag_calculation() {
        assert_eq!(
            parse_line("-3 divide 2").unwrap(),
            Command::Calculate(CalculationRequest::new(-3.0, 2.0, "divide"))
        );
    }

    #[test]
    fn test_unknown_operation_passes_through() {
        assert_eq!(
            parse_line("2 ^ 3").unwrap(),
            Command::Calculate(CalculationRequest::new(2.0, 3.0, "^"))
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse_line("history").unwrap(), Command::History);
        assert_eq!(parse_line("CLEAR").unwrap(), Command::Clear);
        assert_eq!(parse_line("quit").unwrap(), Command::Exit);
        assert_eq!(parse_line("exit").unwrap(), Command::Exit);
        assert_eq!(parse_line("?").unwrap(), Command::Help);
        assert_eq!(parse_line("   ").unwrap(), Command::Empty);
    }

    #[test]
    fn test_invalid_number() {
        assert_eq!(
            parse_line("ten + 5").unwrap_err(),
            InputError::InvalidNumber("ten".to_owned())
        );
    }

    #[test]
    fn test_malformed_line() {
        assert_eq!(
            parse_line("1 + 2 + 3").unwrap_err(),
            InputError::Malformed("1 + 2 + 3".to_owned())
        );
        assert!(matches!(
            parse_line("hello"),
            Err(InputError::Malformed(_))
        ));
    }
}
