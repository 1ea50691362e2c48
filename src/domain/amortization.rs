//! Fixed-rate level-payment amortization.

use super::loan::MONTHS_PER_YEAR;

pub fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / MONTHS_PER_YEAR as f64
}

/// Saturates at `u32::MAX`; validation caps the term well below that.
pub fn payment_count(term_years: u32) -> u32 {
    term_years.saturating_mul(MONTHS_PER_YEAR)
}

/// Monthly principal & interest payment over the life of the loan.
///
/// `M = P * (i * (1+i)^n) / ((1+i)^n - 1)` with `i` the monthly rate and
/// `n` the number of payments. A zero rate repays the principal in equal
/// parts (`P / n`) instead of dividing by zero.
pub fn monthly_principal_and_interest(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    let i = monthly_rate(annual_rate);
    let n = payment_count(term_years) as f64;

    if i == 0.0 {
        return principal / n;
    }

    // (1+i)^n - 1 via exp_m1 so tiny rates don't cancel to zero.
    let growth_minus_one = (n * i.ln_1p()).exp_m1();
    let growth = growth_minus_one + 1.0;
    principal * (i * growth) / growth_minus_one
}
