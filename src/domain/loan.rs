//! Loan input parameters and the quantities derived from them.
//!
//! Currency inputs are whole dollars. The percentage part of the down
//! payment is truncated toward zero before it is added to the flat amount,
//! so every derived dollar figure below stays integral until the monthly
//! breakdown is computed.

pub const DEFAULT_HOUSE_PRICE: i64 = 300_000;
pub const DEFAULT_DOWN_PAYMENT_FLAT: i64 = 0;
pub const DEFAULT_DOWN_PAYMENT_PCT: f64 = 0.20;
pub const DEFAULT_TERM_YEARS: u32 = 30;
pub const DEFAULT_INTEREST_RATE: f64 = 0.0275;
pub const DEFAULT_PROPERTY_TAX_RATE: f64 = 0.0079;
pub const DEFAULT_INSURANCE_PAYMENT: i64 = 1_200;

pub const MONTHS_PER_YEAR: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanParameters {
    pub house_price: i64,
    pub down_payment_flat: i64,
    /// Fraction of the house price, e.g. 0.2 for 20%.
    pub down_payment_pct: f64,
    pub term_years: u32,
    pub interest_rate: f64,
    pub property_tax_rate: f64,
    /// Annual homeowner's insurance.
    pub insurance_payment: i64,
}

impl Default for LoanParameters {
    fn default() -> Self {
        Self {
            house_price: DEFAULT_HOUSE_PRICE,
            down_payment_flat: DEFAULT_DOWN_PAYMENT_FLAT,
            down_payment_pct: DEFAULT_DOWN_PAYMENT_PCT,
            term_years: DEFAULT_TERM_YEARS,
            interest_rate: DEFAULT_INTEREST_RATE,
            property_tax_rate: DEFAULT_PROPERTY_TAX_RATE,
            insurance_payment: DEFAULT_INSURANCE_PAYMENT,
        }
    }
}

impl LoanParameters {
    /// Flat amount plus the truncated percentage of the house price.
    ///
    /// Saturates at the `i64` bounds; validated parameters never get there.
    pub fn total_down_payment(&self) -> i64 {
        let pct_part = (self.house_price as f64 * self.down_payment_pct) as i64;
        self.down_payment_flat.saturating_add(pct_part)
    }

    pub fn down_payment_fraction(&self) -> f64 {
        self.total_down_payment() as f64 / self.house_price as f64
    }

    /// Amount financed. Negative when the down payment exceeds the price.
    pub fn mortgage_amount(&self) -> i64 {
        self.house_price.saturating_sub(self.total_down_payment())
    }

    pub fn monthly_insurance(&self) -> f64 {
        self.insurance_payment as f64 / MONTHS_PER_YEAR as f64
    }

    pub fn monthly_property_tax(&self) -> f64 {
        self.house_price as f64 * self.property_tax_rate / MONTHS_PER_YEAR as f64
    }
}
