//! Error types for tutor-core.

/// Reason a numeric input was rejected.
///
/// Display strings are shown to the user verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please enter a valid number")]
    NotANumber,

    #[error("Negative values are not allowed")]
    NegativeNotAllowed,

    #[error("Please enter a whole number")]
    DecimalNotAllowed,

    #[error("Value must be at least {min}")]
    BelowMinimum { min: f64 },

    #[error("Value must be at most {max}")]
    AboveMaximum { max: f64 },
}
