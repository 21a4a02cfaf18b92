//! Numeric input validation.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Bounds and flags for `validate_numeric_input`.
///
/// The default accepts any finite number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub allow_negative: bool,
    pub allow_decimal: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            allow_negative: true,
            allow_decimal: true,
        }
    }
}

/// Validate a raw input string.
///
/// Checks run in a fixed order and the first failure wins: not a number,
/// negative disallowed, non-integer disallowed, below minimum, above maximum.
pub fn validate_numeric_input(
    input: &str,
    options: &ValidationOptions,
) -> Result<f64, ValidationError> {
    let value = input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber)?;

    if !options.allow_negative && value < 0.0 {
        return Err(ValidationError::NegativeNotAllowed);
    }
    if !options.allow_decimal && value.fract() != 0.0 {
        return Err(ValidationError::DecimalNotAllowed);
    }
    if let Some(min) = options.min {
        if value < min {
            return Err(ValidationError::BelowMinimum { min });
        }
    }
    if let Some(max) = options.max {
        if value > max {
            return Err(ValidationError::AboveMaximum { max });
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_defaults() {
        let opts = ValidationOptions::default();
        assert_eq!(validate_numeric_input("42", &opts), Ok(42.0));
        assert_eq!(validate_numeric_input("  -3.5 ", &opts), Ok(-3.5));
    }

    #[test]
    fn test_not_a_number() {
        let opts = ValidationOptions::default();
        assert_eq!(
            validate_numeric_input("abc", &opts),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            validate_numeric_input("", &opts),
            Err(ValidationError::NotANumber)
        );
        // Rust parses these, but they are not usable numbers.
        assert_eq!(
            validate_numeric_input("inf", &opts),
            Err(ValidationError::NotANumber)
        );
        assert_eq!(
            validate_numeric_input("NaN", &opts),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn test_negative_disallowed() {
        let opts = ValidationOptions {
            allow_negative: false,
            ..Default::default()
        };
        assert_eq!(
            validate_numeric_input("-5", &opts),
            Err(ValidationError::NegativeNotAllowed)
        );
    }

    #[test]
    fn test_decimal_disallowed() {
        let opts = ValidationOptions {
            allow_decimal: false,
            ..Default::default()
        };
        assert_eq!(
            validate_numeric_input("5.5", &opts),
            Err(ValidationError::DecimalNotAllowed)
        );
        assert_eq!(validate_numeric_input("5.0", &opts), Ok(5.0));
    }

    #[test]
    fn test_bounds() {
        let opts = ValidationOptions {
            min: Some(10.0),
            max: Some(20.0),
            ..Default::default()
        };
        assert_eq!(
            validate_numeric_input("5", &opts),
            Err(ValidationError::BelowMinimum { min: 10.0 })
        );
        assert_eq!(
            validate_numeric_input("25", &opts),
            Err(ValidationError::AboveMaximum { max: 20.0 })
        );
        assert_eq!(validate_numeric_input("15", &opts), Ok(15.0));
    }

    #[test]
    fn test_first_failure_wins() {
        // Negative and below minimum: the negative check runs first.
        let opts = ValidationOptions {
            min: Some(0.0),
            allow_negative: false,
            allow_decimal: false,
            ..Default::default()
        };
        assert_eq!(
            validate_numeric_input("-1.5", &opts),
            Err(ValidationError::NegativeNotAllowed)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::BelowMinimum { min: 10.0 }.to_string(),
            "Value must be at least 10"
        );
        assert_eq!(
            ValidationError::NotANumber.to_string(),
            "Please enter a valid number"
        );
    }
}
