use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::sip::{self, SipInput, StepUpSipInput};
use fincalc_core::types::ContributionTiming;

use crate::input;

/// When each monthly deposit is made
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TimingArg {
    /// First day of the month (annuity due)
    Start,
    /// Last day of the month (ordinary annuity)
    End,
}

impl From<TimingArg> for ContributionTiming {
    fn from(t: TimingArg) -> Self {
        match t {
            TimingArg::Start => ContributionTiming::Start,
            TimingArg::End => ContributionTiming::End,
        }
    }
}

/// Arguments for a level SIP projection
#[derive(Args)]
pub struct SipArgs {
    /// Monthly investment in rupees
    #[arg(long, default_value = "5000")]
    pub amount: Decimal,

    /// Expected annual return, percent (e.g. 12 for 12%)
    #[arg(long, default_value = "12")]
    pub rate: Decimal,

    /// Investment horizon in years (fractions allowed)
    #[arg(long, default_value = "15")]
    pub years: Decimal,

    /// Annual inflation, percent, for present values
    #[arg(long, default_value = "6")]
    pub inflation: Decimal,

    /// Deposit timing within each month
    #[arg(long, value_enum, default_value = "start")]
    pub timing: TimingArg,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a step-up SIP projection
#[derive(Args)]
pub struct StepUpSipArgs {
    /// Monthly investment in the first year
    #[arg(long, default_value = "5000")]
    pub amount: Decimal,

    /// Yearly increase of the monthly investment, percent
    #[arg(long, default_value = "10")]
    pub step_up: Decimal,

    /// Expected annual return, percent
    #[arg(long, default_value = "12")]
    pub rate: Decimal,

    /// Investment horizon in years
    #[arg(long, default_value = "15")]
    pub years: Decimal,

    /// Annual inflation, percent
    #[arg(long, default_value = "6")]
    pub inflation: Decimal,

    /// Deposit timing within each month
    #[arg(long, value_enum, default_value = "start")]
    pub timing: TimingArg,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

fn sip_input_from_flags(args: &SipArgs) -> SipInput {
    SipInput {
        monthly_amount: args.amount,
        annual_rate_percent: args.rate,
        duration_years: args.years,
        timing: args.timing.into(),
        inflation_rate_percent: args.inflation,
    }
}

fn step_up_input_from_flags(args: &StepUpSipArgs) -> StepUpSipInput {
    StepUpSipInput {
        initial_monthly_amount: args.amount,
        annual_step_up_percent: args.step_up,
        annual_rate_percent: args.rate,
        duration_years: args.years,
        timing: args.timing.into(),
        inflation_rate_percent: args.inflation,
    }
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sip_input: SipInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        sip_input_from_flags(&args)
    };
    let result = sip::calculate_sip(&sip_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_step_up_sip(args: StepUpSipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let step_input: StepUpSipInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        step_up_input_from_flags(&args)
    };
    let result = sip::calculate_step_up_sip(&step_input)?;
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rust_decimal_macros::dec;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        sip: SipArgs,
    }

    #[test]
    fn defaults_match_the_calculator_form() {
        let cli = TestCli::parse_from(["fincalc"]);
        let input = sip_input_from_flags(&cli.sip);
        assert_eq!(input.monthly_amount, dec!(5000));
        assert_eq!(input.annual_rate_percent, dec!(12));
        assert_eq!(input.duration_years, dec!(15));
        assert_eq!(input.inflation_rate_percent, dec!(6));
        assert_eq!(input.timing, ContributionTiming::Start);
    }

    #[test]
    fn flags_feed_the_projection() {
        let cli = TestCli::parse_from([
            "fincalc", "--amount", "5000", "--rate", "12", "--years", "2", "--timing", "end",
        ]);
        let input = sip_input_from_flags(&cli.sip);
        assert_eq!(input.timing, ContributionTiming::End);
        let out = sip::calculate_sip(&input).unwrap();
        assert_eq!(out.result.total_invested, dec!(120000));
        assert_eq!(out.result.year_by_year.len(), 2);
    }
}
