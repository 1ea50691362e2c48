//! CLI definition and dispatch.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report::TextReportAdapter;
use crate::domain::error::MortgageError;
use crate::domain::loan::{
    LoanParameters, DEFAULT_DOWN_PAYMENT_FLAT, DEFAULT_DOWN_PAYMENT_PCT, DEFAULT_HOUSE_PRICE,
    DEFAULT_INSURANCE_PAYMENT, DEFAULT_INTEREST_RATE, DEFAULT_PROPERTY_TAX_RATE,
    DEFAULT_TERM_YEARS,
};
use crate::domain::payment::PaymentSummary;
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;

/// INI section holding loan parameters.
pub const CONFIG_SECTION: &str = "mortgage";

#[derive(Parser, Debug, Default)]
#[command(name = "mortgage", about = "Monthly mortgage payment calculator")]
pub struct Cli {
    /// House price in whole dollars [default: 300000]
    #[arg(long, allow_negative_numbers = true)]
    pub house_price: Option<i64>,
    /// Down payment as a flat dollar amount [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub down_payment_flat: Option<i64>,
    /// Down payment as a fraction of the house price, e.g. 0.2 for 20% [default: 0.2]
    #[arg(long, allow_negative_numbers = true)]
    pub down_payment_pct: Option<f64>,
    /// Mortgage term in years, e.g. 30 or 15 [default: 30]
    #[arg(long)]
    pub term_years: Option<u32>,
    /// Annual interest rate, e.g. 0.0275 for 2.75% [default: 0.0275]
    #[arg(long, allow_negative_numbers = true)]
    pub interest_rate: Option<f64>,
    /// Property tax rate, e.g. 0.0079 for 0.79% [default: 0.0079]
    #[arg(long, allow_negative_numbers = true)]
    pub property_tax: Option<f64>,
    /// Annual homeowner's insurance payment [default: 1200]
    #[arg(long, allow_negative_numbers = true)]
    pub homeowners_insurance: Option<i64>,
    /// INI file with a [mortgage] section; flags override its values
    #[arg(short, long, env = "MORTGAGE_CONFIG")]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(cli: Cli) -> ExitCode {
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(&cli, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Resolves parameters, computes the breakdown, and writes the report to `out`.
pub fn execute(cli: &Cli, out: &mut dyn Write) -> Result<PaymentSummary, MortgageError> {
    let adapter = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Some(load_config(path)?)
        }
        None => None,
    };

    let params = build_loan_parameters(cli, adapter.as_ref().map(|a| a as &dyn ConfigPort))?;
    debug!(?params, "resolved loan parameters");

    let summary = PaymentSummary::compute(&params)?;
    TextReportAdapter.write(&summary, out)?;
    out.flush()?;
    Ok(summary)
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, MortgageError> {
    FileConfigAdapter::from_file(path)
}

/// Merges command-line flags over config values over built-in defaults.
pub fn build_loan_parameters(
    cli: &Cli,
    config: Option<&dyn ConfigPort>,
) -> Result<LoanParameters, MortgageError> {
    let term_years = match cli.term_years {
        Some(v) => v,
        None => match config_int(config, "term_years")? {
            Some(v) => u32::try_from(v).map_err(|_| MortgageError::ConfigInvalid {
                section: CONFIG_SECTION.into(),
                key: "term_years".into(),
                reason: format!("{v} is not a valid number of years"),
            })?,
            None => DEFAULT_TERM_YEARS,
        },
    };

    Ok(LoanParameters {
        house_price: resolve_int(cli.house_price, config, "house_price", DEFAULT_HOUSE_PRICE)?,
        down_payment_flat: resolve_int(
            cli.down_payment_flat,
            config,
            "down_payment_flat",
            DEFAULT_DOWN_PAYMENT_FLAT,
        )?,
        down_payment_pct: resolve_double(
            cli.down_payment_pct,
            config,
            "down_payment_pct",
            DEFAULT_DOWN_PAYMENT_PCT,
        )?,
        term_years,
        interest_rate: resolve_double(
            cli.interest_rate,
            config,
            "interest_rate",
            DEFAULT_INTEREST_RATE,
        )?,
        property_tax_rate: resolve_double(
            cli.property_tax,
            config,
            "property_tax",
            DEFAULT_PROPERTY_TAX_RATE,
        )?,
        insurance_payment: resolve_int(
            cli.homeowners_insurance,
            config,
            "homeowners_insurance",
            DEFAULT_INSURANCE_PAYMENT,
        )?,
    })
}

fn config_int(config: Option<&dyn ConfigPort>, key: &str) -> Result<Option<i64>, MortgageError> {
    match config {
        Some(c) => c.get_int(CONFIG_SECTION, key),
        None => Ok(None),
    }
}

fn resolve_int(
    flag: Option<i64>,
    config: Option<&dyn ConfigPort>,
    key: &str,
    default: i64,
) -> Result<i64, MortgageError> {
    if let Some(v) = flag {
        return Ok(v);
    }
    Ok(config_int(config, key)?.unwrap_or(default))
}

fn resolve_double(
    flag: Option<f64>,
    config: Option<&dyn ConfigPort>,
    key: &str,
    default: f64,
) -> Result<f64, MortgageError> {
    if let Some(v) = flag {
        return Ok(v);
    }
    let from_config = match config {
        Some(c) => c.get_double(CONFIG_SECTION, key)?,
        None => None,
    };
    Ok(from_config.unwrap_or(default))
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the level.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("mortgage_calc=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mortgage_calc=warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_flag_names() {
        let cli = Cli::try_parse_from([
            "mortgage",
            "--house-price",
            "400000",
            "--down-payment-flat",
            "10000",
            "--down-payment-pct",
            "0.1",
            "--term-years",
            "15",
            "--interest-rate",
            "0.05",
            "--property-tax",
            "0.012",
            "--homeowners-insurance",
            "1500",
        ])
        .unwrap();

        assert_eq!(cli.house_price, Some(400_000));
        assert_eq!(cli.down_payment_flat, Some(10_000));
        assert_eq!(cli.down_payment_pct, Some(0.1));
        assert_eq!(cli.term_years, Some(15));
        assert_eq!(cli.interest_rate, Some(0.05));
        assert_eq!(cli.property_tax, Some(0.012));
        assert_eq!(cli.homeowners_insurance, Some(1_500));
    }

    #[test]
    fn accepts_negative_numbers_for_later_validation() {
        let cli = Cli::try_parse_from(["mortgage", "--interest-rate", "-0.01"]).unwrap();
        assert_eq!(cli.interest_rate, Some(-0.01));
    }

    #[test]
    fn rejects_non_numeric_flag() {
        assert!(Cli::try_parse_from(["mortgage", "--house-price", "cheap"]).is_err());
    }

    #[test]
    fn no_flags_no_config_yields_defaults() {
        let params = build_loan_parameters(&Cli::default(), None).unwrap();
        assert_eq!(params, LoanParameters::default());
    }

    #[test]
    fn config_values_override_defaults() {
        let adapter = FileConfigAdapter::from_string(
            "[mortgage]\nhouse_price = 500000\nterm_years = 15\ninterest_rate = 0.06\n",
        )
        .unwrap();
        let params = build_loan_parameters(&Cli::default(), Some(&adapter)).unwrap();

        assert_eq!(params.house_price, 500_000);
        assert_eq!(params.term_years, 15);
        assert_eq!(params.interest_rate, 0.06);
        assert_eq!(params.down_payment_pct, DEFAULT_DOWN_PAYMENT_PCT);
    }

    #[test]
    fn flags_override_config() {
        let adapter =
            FileConfigAdapter::from_string("[mortgage]\nhouse_price = 500000\n").unwrap();
        let cli = Cli {
            house_price: Some(250_000),
            ..Cli::default()
        };
        let params = build_loan_parameters(&cli, Some(&adapter)).unwrap();
        assert_eq!(params.house_price, 250_000);
    }

    #[test]
    fn negative_term_in_config_is_invalid() {
        let adapter = FileConfigAdapter::from_string("[mortgage]\nterm_years = -5\n").unwrap();
        let err = build_loan_parameters(&Cli::default(), Some(&adapter)).unwrap_err();
        assert!(matches!(err, MortgageError::ConfigInvalid { key, .. } if key == "term_years"));
    }

    #[test]
    fn execute_writes_report() {
        let mut out = Vec::new();
        let summary = execute(&Cli::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(summary.mortgage_amount, 240_000);
        assert!(text.starts_with("House Price: $300000\n"));
        assert!(text.contains("Monthly Payment: $1277.28\n"));
    }

    #[test]
    fn execute_writes_nothing_on_insufficient_down_payment() {
        let cli = Cli {
            down_payment_pct: Some(0.03),
            ..Cli::default()
        };
        let mut out = Vec::new();
        let err = execute(&cli, &mut out).unwrap_err();

        assert!(matches!(err, MortgageError::InsufficientDownPayment { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn execute_reports_missing_config_file() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/mortgage.ini")),
            ..Cli::default()
        };
        let err = execute(&cli, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, MortgageError::ConfigParse { .. }));
    }

    #[test]
    fn init_logging_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
    }
}
