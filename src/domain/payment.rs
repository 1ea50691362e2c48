//! Monthly payment breakdown.

use tracing::{debug, warn};

use crate::domain::amortization::{monthly_principal_and_interest, payment_count};
use crate::domain::error::MortgageError;
use crate::domain::loan::LoanParameters;
use crate::domain::validation::{
    check_down_payment, validate_loan_parameters, CONVENTIONAL_DOWN_FRACTION,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyPayment {
    pub principal_and_interest: f64,
    pub insurance: f64,
    pub property_tax: f64,
}

impl MonthlyPayment {
    /// Computes the three components without validating `params`.
    pub fn compute(params: &LoanParameters) -> Self {
        Self {
            principal_and_interest: monthly_principal_and_interest(
                params.mortgage_amount() as f64,
                params.interest_rate,
                params.term_years,
            ),
            insurance: params.monthly_insurance(),
            property_tax: params.monthly_property_tax(),
        }
    }

    pub fn total(&self) -> f64 {
        self.principal_and_interest + self.insurance + self.property_tax
    }
}

/// Echo of the loan inputs together with the computed monthly breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSummary {
    pub params: LoanParameters,
    pub total_down_payment: i64,
    pub down_payment_fraction: f64,
    pub mortgage_amount: i64,
    pub monthly: MonthlyPayment,
}

impl PaymentSummary {
    /// Validates `params` and computes the breakdown.
    ///
    /// Fails with [`MortgageError::InsufficientDownPayment`] when the total
    /// down payment is under 3.5% of the house price; no breakdown is
    /// produced in that case.
    pub fn compute(params: &LoanParameters) -> Result<Self, MortgageError> {
        validate_loan_parameters(params)?;
        check_down_payment(params)?;

        let summary = Self {
            params: *params,
            total_down_payment: params.total_down_payment(),
            down_payment_fraction: params.down_payment_fraction(),
            mortgage_amount: params.mortgage_amount(),
            monthly: MonthlyPayment::compute(params),
        };

        debug!(
            mortgage_amount = summary.mortgage_amount,
            payments = payment_count(params.term_years),
            principal_and_interest = summary.monthly.principal_and_interest,
            "computed monthly payment"
        );
        if summary.below_conventional_threshold() {
            warn!(
                down_payment_pct = summary.down_payment_fraction * 100.0,
                "down payment below 20%; a conventional loan would require PMI"
            );
        }

        Ok(summary)
    }

    pub fn below_conventional_threshold(&self) -> bool {
        self.down_payment_fraction < CONVENTIONAL_DOWN_FRACTION
    }
}
