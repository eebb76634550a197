use clap::Args;
use serde_json::{json, Value};

use fincalc_core::currency::{format_currency, parse_amount};

/// Arguments for rupee formatting
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FormatArgs {
    /// Amount to format; grouping commas and a leading ₹ are accepted
    #[arg(long)]
    pub value: String,
}

pub fn run_format(args: FormatArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let amount = parse_amount(&args.value)?;
    let formatted = format_currency(amount);
    Ok(json!({ "result": formatted }))
}
