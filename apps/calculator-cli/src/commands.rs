//! Non-interactive subcommands.

use std::io::Write;

use anyhow::{Context, Result};
use calculator::{CalculationRequest, CalculatorApi};

use crate::config::AppConfig;
use crate::input::operation_tag;
use crate::repl::write_history;

/// Evaluate one calculation and print its result.
///
/// # Errors
///
/// Returns the calculation error, or an error if writing `output` fails.
pub fn eval<W: Write>(
    calculator: &mut dyn CalculatorApi,
    request: &CalculationRequest,
    json: bool,
    output: &mut W,
) -> Result<()> {
    let request = CalculationRequest::new(
        request.operand1,
        request.operand2,
        operation_tag(&request.operation),
    );
    let result = calculator.calculate(&request)?;

    if json {
        serde_json::to_writer_pretty(&mut *output, &result)?;
        writeln!(output)?;
    } else {
        writeln!(output, "{}", result.result)?;
    }
    Ok(())
}

/// Scripted walkthrough of the calculator: one success, one failure, then
/// history inspection and clearing.
///
/// # Errors
///
/// Returns an error if writing `output` fails.
pub fn demo<W: Write>(calculator: &mut dyn CalculatorApi, output: &mut W) -> Result<()> {
    let requests = [
        CalculationRequest::new(10.0, 5.0, "add"),
        CalculationRequest::new(10.0, 0.0, "divide"),
    ];

    for request in &requests {
        match calculator.calculate(request) {
            Ok(result) => writeln!(output, "Result: {}", result.result)?,
            Err(e) => writeln!(output, "Error: {e}")?,
        }
    }

    let history = calculator.get_history();
    writeln!(output, "Calculation history:")?;
    write_history(output, &history)?;
    writeln!(output, "As JSON:")?;
    serde_json::to_writer_pretty(&mut *output, &history)?;
    writeln!(output)?;

    calculator.clear_history();
    writeln!(output, "History after clearing:")?;
    write_history(output, &calculator.get_history())?;
    Ok(())
}

/// Print the effective configuration as JSON.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized or written.
pub fn print_config<W: Write>(config: &AppConfig, output: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *output, config)
        .context("failed to serialize configuration")?;
    writeln!(output)?;
    Ok(())
}
