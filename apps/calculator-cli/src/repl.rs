//! Interactive read-eval-print loop.

use std::io::{self, BufRead, Write};

use calculator::{CalculationHistory, CalculatorApi};
use tracing::{debug, info};

use crate::input::{Command, parse_line};

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  <operand1> <operation> <operand2>   e.g. `10 + 5` or `10 divide 2`
  history                             show recorded calculations
  clear                               clear the history
  help                                show this help
  exit | quit                         leave the calculator
Operations: add (+), subtract (-), multiply (*, x), divide (/)";

/// Run the loop until `exit`/`quit` or end of input.
///
/// Input and calculation errors are reported on `output` and the loop
/// continues.
///
/// # Errors
///
/// Returns an error only if reading `input` or writing `output` fails.
pub fn run<R, W>(
    calculator: &mut dyn CalculatorApi,
    mut input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("interactive session started");
    writeln!(output, "Calculator ready. Type 'help' for commands.")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            break;
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            debug!(len = buf.len(), "input line is not valid UTF-8");
            writeln!(output, "Error: input is not valid UTF-8")?;
            continue;
        };

        match parse_line(line) {
            Ok(Command::Calculate(request)) => match calculator.calculate(&request) {
                Ok(result) => writeln!(
                    output,
                    "{} {} {} = {}",
                    request.operand1, request.operation, request.operand2, result.result
                )?,
                Err(e) => writeln!(output, "Error: {e}")?,
            },
            Ok(Command::History) => write_history(output, &calculator.get_history())?,
            Ok(Command::Clear) => {
                calculator.clear_history();
                writeln!(output, "History cleared.")?;
            }
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::Exit) => break,
            Ok(Command::Empty) => {}
            Err(e) => {
                debug!(error = %e, "unparseable input");
                writeln!(output, "Error: {e}")?;
            }
        }
    }

    writeln!(output, "Goodbye.")?;
    info!("interactive session finished");
    Ok(())
}

/// Print history entries one per line, oldest first.
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn write_history<W: Write>(output: &mut W, history: &[CalculationHistory]) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(output, "History is empty.");
    }
    for (i, entry) in history.iter().enumerate() {
        writeln!(
            output,
            "{}. [{}] {} {} {} = {}",
            i + 1,
            entry.timestamp,
            entry.request.operand1,
            entry.request.operation,
            entry.request.operand2,
            entry.result.result
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use calculator::Calculator;

    fn run_session(script: &str) -> (String, Calculator) {
        let mut calculator = Calculator::new();
        let mut output = Vec::new();
        run(&mut calculator, script.as_bytes(), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), calculator)
    }

    #[test]
    fn test_calculations_are_printed_and_recorded() {
        let (out, calculator) = run_session("10 + 5\n10 / 4\nexit\n");

        assert!(out.contains("10 add 5 = 15"));
        assert!(out.contains("10 divide 4 = 2.5"));
        assert!(out.ends_with("Goodbye.\n"));
        assert_eq!(calculator.history_len(), 2);
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let (out, calculator) = run_session("10 / 0\n1 ^ 2\nabc + 1\n2 * 3\n");

        assert!(out.contains("Error: Division by zero is not allowed."));
        assert!(out.contains("Error: invalid operation: ^"));
        assert!(out.contains("Error: invalid number 'abc'"));
        assert!(out.contains("2 multiply 3 = 6"));
        assert_eq!(calculator.history_len(), 1);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_stop_the_loop() {
        let mut calculator = Calculator::new();
        let mut output = Vec::new();

        let input: &[u8] = b"\xff\xfe + 1\n2 * 3\n";
        run(&mut calculator, input, &mut output).unwrap();

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Error: input is not valid UTF-8"));
        assert!(out.contains("2 multiply 3 = 6"));
        assert_eq!(calculator.history_len(), 1);
    }

    #[test]
    fn test_last_line_without_newline_is_evaluated() {
        let (out, calculator) = run_session("4 / 2");
        assert!(out.contains("4 divide 2 = 2"));
        assert_eq!(calculator.history_len(), 1);
    }

    #[test]
    fn test_history_and_clear() {
        let (out, calculator) = run_session("1 + 1\n3 - 1\nhistory\nclear\nhistory\n");

        let first = out.find("1. [").unwrap();
        let second = out.find("2. [").unwrap();
        assert!(first < second);
        assert!(out.contains("] 1 add 1 = 2"));
        assert!(out.contains("] 3 subtract 1 = 2"));
        assert!(out.contains("History cleared."));
        assert!(out.contains("History is empty."));
        assert_eq!(calculator.history_len(), 0);
    }

    #[test]
    fn test_end_of_input_finishes_session() {
        let (out, _) = run_session("");
        assert!(out.starts_with("Calculator ready."));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_lines_after_exit_are_ignored() {
        let (_, calculator) = run_session("exit\n1 + 1\n");
        assert_eq!(calculator.history_len(), 0);
    }

    #[test]
    fn test_help_lists_operations() {
        let (out, _) = run_session("help\n");
        assert!(out.contains("divide (/)"));
    }
}
