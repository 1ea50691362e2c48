//! Domain error types.

/// Top-level error type for mortgage-calc.
#[derive(Debug, thiserror::Error)]
pub enum MortgageError {
    #[error(
        "Down payment ({percent:.2}%) must be at least 3.5% for FHA loans or 20% for Conventional loans!"
    )]
    InsufficientDownPayment { percent: f64 },

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&MortgageError> for std::process::ExitCode {
    fn from(err: &MortgageError) -> Self {
        let code: u8 = match err {
            MortgageError::Io(_) => 1,
            MortgageError::ConfigParse { .. } | MortgageError::ConfigInvalid { .. } => 2,
            MortgageError::InvalidInput { .. } => 3,
            MortgageError::InsufficientDownPayment { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
