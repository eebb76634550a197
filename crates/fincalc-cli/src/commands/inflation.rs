use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use fincalc_core::inflation::{self, InflationInput};

use crate::input;

/// Arguments for inflation impact
#[derive(Args)]
pub struct InflationArgs {
    /// Amount at the end of the horizon
    #[arg(long)]
    pub future_value: Option<Decimal>,

    /// Annual inflation, percent
    #[arg(long, default_value = "6")]
    pub inflation: Decimal,

    /// Years until the amount is received
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Earlier price, for the implied inflation rate
    #[arg(long, requires = "new_price", conflicts_with = "future_value")]
    pub old_price: Option<Decimal>,

    /// Later price, for the implied inflation rate
    #[arg(long, requires = "old_price")]
    pub new_price: Option<Decimal>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_inflation(args: InflationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if let (Some(old_price), Some(new_price)) = (args.old_price, args.new_price) {
        return implied_rate(old_price, new_price);
    }

    let inflation_input: InflationInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        InflationInput {
            future_value: args
                .future_value
                .ok_or("--future-value is required (or provide --input)")?,
            inflation_rate_percent: args.inflation,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };
    let result = inflation::calculate_inflation_impact(&inflation_input)?;
    Ok(serde_json::to_value(result)?)
}

fn implied_rate(old_price: Decimal, new_price: Decimal) -> Result<Value, Box<dyn std::error::Error>> {
    let rate = inflation::implied_inflation_rate(old_price, new_price)?;
    Ok(json!({
        "result": {
            "old_price": old_price,
            "new_price": new_price,
            "implied_inflation_rate_percent": rate,
        },
        "methodology": "(new - old) / old * 100",
        "warnings": [],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn implied_rate_uses_the_envelope_shape() {
        let value = implied_rate(dec!(200), dec!(212)).unwrap();
        let rate: Decimal = value["result"]["implied_inflation_rate_percent"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(rate, dec!(6));
        assert!(value["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn zero_old_price_is_an_error() {
        assert!(implied_rate(dec!(0), dec!(10)).is_err());
    }
}
