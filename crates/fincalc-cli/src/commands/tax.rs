use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::tax::{self, IncomeTaxInput, TaxRegime};

use crate::input;

/// Arguments for income tax
#[derive(Args)]
pub struct IncomeTaxArgs {
    /// Gross annual income in rupees
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Apply the salaried standard deduction
    #[arg(long)]
    pub salaried: bool,

    /// Slab table to use instead of the built-in regime (.json, .yaml or .yml)
    #[arg(long)]
    pub regime: Option<String>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_income_tax(args: IncomeTaxArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut tax_input: IncomeTaxInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        IncomeTaxInput {
            gross_income: args
                .income
                .ok_or("--income is required (or provide --input)")?,
            is_salaried: args.salaried,
            regime: None,
        }
    };

    if let Some(ref path) = args.regime {
        let regime: TaxRegime = input::file::read_config(path)?;
        tracing::debug!(path = %path, name = %regime.name, "loaded tax regime");
        tax_input.regime = Some(regime);
    }

    let result = tax::calculate_income_tax(&tax_input)?;
    Ok(serde_json::to_value(result)?)
}
