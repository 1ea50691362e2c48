//! Configuration access port trait.

use crate::domain::error::MortgageError;

/// Typed lookup of `[section] key` values.
///
/// Getters return `Ok(None)` for a missing key and
/// [`MortgageError::ConfigInvalid`] for a value that is present but does
/// not parse.
pub trait ConfigPort {
    fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>, MortgageError>;
    fn get_double(&self, section: &str, key: &str) -> Result<Option<f64>, MortgageError>;
}
