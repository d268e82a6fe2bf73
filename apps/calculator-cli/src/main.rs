mod commands;
mod config;
mod input;
mod logging;
mod repl;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use calculator::{CalculationRequest, Calculator};
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Calculator - four-operation arithmetic with calculation history
#[derive(Parser)]
#[command(name = "calculator")]
#[command(about = "Calculator - four-operation arithmetic with calculation history")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single calculation
    #[command(allow_negative_numbers = true)]
    Eval {
        operand1: f64,
        /// add, subtract, multiply, divide (or + - * x /)
        operation: String,
        operand2: f64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a scripted walkthrough
    Demo,
    /// Start the interactive calculator (default)
    Repl,
    /// Validate configuration and exit
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config: defaults -> YAML (if provided) -> env (CALCULATOR__*) -> CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.verbose);

    logging::init_logging(&config.logging)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.print_config {
        return commands::print_config(&config, &mut out);
    }

    let mut calculator = Calculator::with_config(config.calculator.clone());
    tracing::debug!(log_level = %config.logging.level, "calculator starting");

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Eval {
            operand1,
            operation,
            operand2,
            json,
        } => commands::eval(
            &mut calculator,
            &CalculationRequest::new(operand1, operand2, operation),
            json,
            &mut out,
        ),
        Commands::Demo => commands::demo(&mut calculator, &mut out),
        Commands::Repl => {
            let stdin = io::stdin();
            repl::run(&mut calculator, stdin.lock(), &mut out)?;
            Ok(())
        }
        Commands::Check => {
            writeln!(out, "Configuration is valid")?;
            commands::print_config(&config, &mut out)
        }
    }
}
