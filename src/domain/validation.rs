//! Loan parameter validation.
//!
//! Range checks run first so that the down-payment floor is only ever
//! evaluated against a positive house price. The upper bounds keep every
//! derived dollar amount inside `i64` and the amortization growth factor
//! finite.

use crate::domain::error::MortgageError;
use crate::domain::loan::LoanParameters;

/// Minimum down payment accepted for an FHA-style loan.
pub const FHA_MINIMUM_DOWN_FRACTION: f64 = 0.035;
/// Down payment at which a conventional loan no longer needs PMI.
pub const CONVENTIONAL_DOWN_FRACTION: f64 = 0.20;

/// Ceiling for every whole-dollar input.
pub const MAX_CURRENCY_AMOUNT: i64 = 1_000_000_000_000;
pub const MAX_DOWN_PAYMENT_PCT: f64 = 1.0;
pub const MAX_TERM_YEARS: u32 = 100;
/// Ceiling for the annual interest and property tax rates.
pub const MAX_RATE: f64 = 1.0;

pub fn validate_loan_parameters(params: &LoanParameters) -> Result<(), MortgageError> {
    validate_house_price(params)?;
    validate_down_payment_inputs(params)?;
    validate_term(params)?;
    validate_rate("interest_rate", params.interest_rate)?;
    validate_rate("property_tax", params.property_tax_rate)?;
    validate_insurance(params)?;
    Ok(())
}

pub fn check_down_payment(params: &LoanParameters) -> Result<(), MortgageError> {
    let fraction = params.down_payment_fraction();
    if fraction < FHA_MINIMUM_DOWN_FRACTION {
        return Err(MortgageError::InsufficientDownPayment {
            percent: fraction * 100.0,
        });
    }
    Ok(())
}

fn invalid(field: &str, reason: String) -> MortgageError {
    MortgageError::InvalidInput {
        field: field.to_string(),
        reason,
    }
}

fn validate_amount(field: &str, value: i64, minimum: i64) -> Result<(), MortgageError> {
    if value < minimum {
        let reason = if minimum > 0 {
            "must be positive".to_string()
        } else {
            "must be non-negative".to_string()
        };
        return Err(invalid(field, reason));
    }
    if value > MAX_CURRENCY_AMOUNT {
        return Err(invalid(
            field,
            format!("must be at most {}", MAX_CURRENCY_AMOUNT),
        ));
    }
    Ok(())
}

fn validate_house_price(params: &LoanParameters) -> Result<(), MortgageError> {
    validate_amount("house_price", params.house_price, 1)
}

fn validate_down_payment_inputs(params: &LoanParameters) -> Result<(), MortgageError> {
    validate_amount("down_payment_flat", params.down_payment_flat, 0)?;

    let pct = params.down_payment_pct;
    if !pct.is_finite() || pct < 0.0 {
        return Err(invalid(
            "down_payment_pct",
            "must be a non-negative fraction".to_string(),
        ));
    }
    if pct > MAX_DOWN_PAYMENT_PCT {
        return Err(invalid(
            "down_payment_pct",
            format!("must be at most {}", MAX_DOWN_PAYMENT_PCT),
        ));
    }
    Ok(())
}

fn validate_term(params: &LoanParameters) -> Result<(), MortgageError> {
    if params.term_years == 0 || params.term_years > MAX_TERM_YEARS {
        return Err(invalid(
            "term_years",
            format!("must be between 1 and {}", MAX_TERM_YEARS),
        ));
    }
    Ok(())
}

fn validate_rate(field: &str, value: f64) -> Result<(), MortgageError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, "must be a non-negative fraction".to_string()));
    }
    if value > MAX_RATE {
        return Err(invalid(field, format!("must be at most {}", MAX_RATE)));
    }
    Ok(())
}

fn validate_insurance(params: &LoanParameters) -> Result<(), MortgageError> {
    validate_amount("homeowners_insurance", params.insurance_payment, 0)
}
