//! Report generation port trait.

use std::io::Write;

use crate::domain::error::MortgageError;
use crate::domain::payment::PaymentSummary;

/// Port for rendering a computed payment summary.
pub trait ReportPort {
    fn write(&self, summary: &PaymentSummary, out: &mut dyn Write) -> Result<(), MortgageError>;

    /// Default implementation: renders into a `String` through `write`.
    fn render(&self, summary: &PaymentSummary) -> Result<String, MortgageError> {
        let mut buf = Vec::new();
        self.write(summary, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
