//! Core domain types and logic.

pub mod loan;
pub mod amortization;
pub mod validation;
pub mod payment;
pub mod error;
