mod commands;
mod input;
mod logging;
mod output;
mod store;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::budget::BudgetArgs;
use commands::format::FormatArgs;
use commands::inflation::InflationArgs;
use commands::sip::{SipArgs, StepUpSipArgs};
use commands::tax::IncomeTaxArgs;

/// Personal finance calculations
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "SIP projections, income tax, inflation and budgeting",
    long_about = "A CLI for personal finance calculations with decimal precision. \
                  Projects SIP and step-up SIP growth, computes Indian income tax \
                  under the new regime, measures inflation impact and splits a \
                  monthly budget."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log calculation steps to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a monthly SIP
    Sip(SipArgs),
    /// Project a SIP whose monthly amount rises every year
    StepUpSip(StepUpSipArgs),
    /// Compute income tax under a slab regime
    IncomeTax(IncomeTaxArgs),
    /// Inflation impact on a future sum, or the rate implied by a price change
    Inflation(InflationArgs),
    /// Split income into needs, wants and savings
    Budget(BudgetArgs),
    /// Format an amount in rupees
    Format(FormatArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Sip(args) => commands::sip::run_sip(args),
        Commands::StepUpSip(args) => commands::sip::run_step_up_sip(args),
        Commands::IncomeTax(args) => commands::tax::run_income_tax(args),
        Commands::Inflation(args) => commands::inflation::run_inflation(args),
        Commands::Budget(args) => commands::budget::run_budget(args),
        Commands::Format(args) => commands::format::run_format(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
