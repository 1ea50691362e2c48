//! Plain-text report adapter implementing ReportPort.
//!
//! Echoes the loan inputs, then the monthly payment and its three parts.
//! Dollar inputs print as whole units; monthly figures print to the cent.

use std::io::Write;

use crate::domain::error::MortgageError;
use crate::domain::payment::PaymentSummary;
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter;

impl ReportPort for TextReportAdapter {
    fn write(&self, summary: &PaymentSummary, out: &mut dyn Write) -> Result<(), MortgageError> {
        let params = &summary.params;

        writeln!(out, "House Price: ${}", params.house_price)?;
        writeln!(
            out,
            "Down Payment: ${} ({:.2}%)",
            summary.total_down_payment,
            summary.down_payment_fraction * 100.0
        )?;
        writeln!(out, "Mortgage Amount: ${}", summary.mortgage_amount)?;
        writeln!(out, "Mortgage Term (Years): {}", params.term_years)?;
        writeln!(out, "Interest Rate: {:.2}%", params.interest_rate * 100.0)?;
        writeln!(out, "Property Tax Rate: {:.2}%", params.property_tax_rate * 100.0)?;
        writeln!(
            out,
            "Annual Homeowner's Insurance Cost: ${}",
            params.insurance_payment
        )?;
        writeln!(out)?;

        let monthly = &summary.monthly;
        writeln!(out, "Monthly Payment: ${:.2}", monthly.total())?;
        writeln!(
            out,
            "- Principal & Interest: ${:.2}",
            monthly.principal_and_interest
        )?;
        writeln!(out, "- Homeowner's Insurance: ${:.2}", monthly.insurance)?;
        writeln!(out, "- Property Taxes: ${:.2}", monthly.property_tax)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::loan::LoanParameters;

    const DEFAULT_REPORT: &str = "\
House Price: $300000
Down Payment: $60000 (20.00%)
Mortgage Amount: $240000
Mortgage Term (Years): 30
Interest Rate: 2.75%
Property Tax Rate: 0.79%
Annual Homeowner's Insurance Cost: $1200

Monthly Payment: $1277.28
- Principal & Interest: $979.78
- Homeowner's Insurance: $100.00
- Property Taxes: $197.50
";

    #[test]
    fn renders_default_loan() {
        let summary = PaymentSummary::compute(&LoanParameters::default()).unwrap();
        let text = TextReportAdapter.render(&summary).unwrap();
        assert_eq!(text, DEFAULT_REPORT);
    }

    #[test]
    fn renders_flat_down_payment() {
        let params = LoanParameters {
            down_payment_flat: 50_000,
            down_payment_pct: 0.0,
            ..LoanParameters::default()
        };
        let summary = PaymentSummary::compute(&params).unwrap();
        let text = TextReportAdapter.render(&summary).unwrap();

        assert!(text.contains("Down Payment: $50000 (16.67%)\n"));
        assert!(text.contains("Mortgage Amount: $250000\n"));
        assert!(text.contains("- Principal & Interest: $1020.60\n"));
    }

    #[test]
    fn write_propagates_io_errors() {
        struct FailingWriter;
        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let summary = PaymentSummary::compute(&LoanParameters::default()).unwrap();
        let err = TextReportAdapter
            .write(&summary, &mut FailingWriter)
            .unwrap_err();
        assert!(matches!(err, MortgageError::Io(_)));
    }
}
