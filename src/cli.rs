use crate::rounding::RoundMode;
use crate::solver::SubsetSum;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rust_decimal::Decimal;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Rounding mode for halfway cases
#[derive(Debug, Clone, ValueEnum)]
pub enum RoundModeArg {
    HalfUp,
    HalfDown,
    HalfEven,
    HalfOdd,
}

impl RoundModeArg {
    pub fn to_round_mode(&self) -> RoundMode {
        match self {
            RoundModeArg::HalfUp => RoundMode::HalfUp,
            RoundModeArg::HalfDown => RoundMode::HalfDown,
            RoundModeArg::HalfEven => RoundMode::HalfEven,
            RoundModeArg::HalfOdd => RoundMode::HalfOdd,
        }
    }
}

/// Subset-sum - Find combinations of numbers that sum up to a target value
#[derive(Parser, Debug)]
#[command(name = "subset-sum")]
#[command(about = "Find every combination of numbers from a stack that sums up to a target value")]
#[command(version)]
pub struct CliArgs {
    /// The number to search for
    #[arg(allow_negative_numbers = true)]
    pub target: Decimal,

    /// The stack of numbers to search in
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub stack: Vec<Decimal>,

    /// Amount of decimals to round to
    #[arg(short, long, default_value_t = 2)]
    pub precision: i32,

    /// Rounding mode for halfway cases (default: half-up)
    #[arg(short, long, value_enum, default_value = "half-up")]
    pub round_mode: RoundModeArg,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: Decimal,
    pub stack: Vec<Decimal>,
    pub precision: i32,
    pub round_mode: RoundMode,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    Ok(CliConfig {
        target: args.target,
        stack: args.stack,
        precision: args.precision,
        round_mode: args.round_mode.to_round_mode(),
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let mut subset = SubsetSum::new(config.target, &config.stack);

    subset
        .set_precision(config.precision, config.round_mode)
        .context("Invalid precision")?;

    info!(
        "Searching {} numbers for combinations that sum up to {}",
        config.stack.len(),
        subset.sum()
    );

    if !subset.has_matches() {
        warn!("No matching combination found");
        println!("No matches.");
        return Ok(());
    }

    for found in subset.matches() {
        println!("{}", format_match(found));
    }

    Ok(())
}

/// Renders a match as a sum, e.g. `3 + 5 + 7 + 10 = 25`.
fn format_match(numbers: &[Decimal]) -> String {
    let total: Decimal = numbers.iter().copied().sum();
    let parts: Vec<String> = numbers.iter().map(Decimal::to_string).collect();

    format!("{} = {}", parts.join(" + "), total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_mode_mapping() {
        assert_eq!(RoundModeArg::HalfUp.to_round_mode(), RoundMode::HalfUp);
        assert_eq!(RoundModeArg::HalfDown.to_round_mode(), RoundMode::HalfDown);
        assert_eq!(RoundModeArg::HalfEven.to_round_mode(), RoundMode::HalfEven);
        assert_eq!(RoundModeArg::HalfOdd.to_round_mode(), RoundMode::HalfOdd);
    }

    #[test]
    fn test_parse_target_number() {
        let target: Result<Decimal, _> = "42.5".parse();
        assert!(target.is_ok());

        let target: Result<Decimal, _> = "not-a-number".parse();
        assert!(target.is_err());
    }

    #[test]
    fn test_format_match() {
        let numbers = vec![Decimal::from(3), Decimal::from(5), Decimal::from(7)];
        assert_eq!(format_match(&numbers), "3 + 5 + 7 = 15");
    }
}
