//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while building employees,
//! loading pay scales or running payroll.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use monthly_payroll::error::PayrollError;
///
/// let error = PayrollError::UnknownCategory {
///     code: "X".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown employee category: X");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The category code matched none of the employee variants.
    #[error("Unknown employee category: {code}")]
    UnknownCategory {
        /// The code that was not recognised.
        code: String,
    },

    /// An employee construction argument was invalid.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or held invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_displays_code() {
        let error = PayrollError::UnknownCategory {
            code: "x".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown employee category: x");
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = PayrollError::InvalidEmployee {
            field: "working_hour".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'working_hour': must not be negative"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/pay_scale.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/pay_scale.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_category() -> PayrollResult<()> {
            Err(PayrollError::UnknownCategory {
                code: "Q".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_unknown_category()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
