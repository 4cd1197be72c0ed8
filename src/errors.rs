use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// loan input that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    Principal,
    AnnualRate,
    Tenure,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Parameter::Principal => "loan amount",
            Parameter::AnnualRate => "interest rate",
            Parameter::Tenure => "loan tenure",
        };
        f.write_str(label)
    }
}

/// why a parameter was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterIssue {
    Missing,
    NotNumeric { input: String },
    NotFinite,
    NotPositive,
    NotWholeNumber,
    AboveMaximum { max: Decimal },
    OutOfRange { min: Decimal, max: Decimal },
    /// rate compounds too fast over the tenure for the schedule to reach zero
    Unamortizable { tenure_months: u32 },
}

impl fmt::Display for ParameterIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterIssue::Missing => write!(f, "no value given"),
            ParameterIssue::NotNumeric { input } => write!(f, "{input:?} is not a number"),
            ParameterIssue::NotFinite => write!(f, "value is not finite"),
            ParameterIssue::NotPositive => write!(f, "must be greater than zero"),
            ParameterIssue::NotWholeNumber => write!(f, "must be a whole number"),
            ParameterIssue::AboveMaximum { max } => write!(f, "must not exceed {max}"),
            ParameterIssue::OutOfRange { min, max } => {
                write!(f, "must be between {min} and {max}")
            }
            ParameterIssue::Unamortizable { tenure_months } => {
                write!(f, "compounds too fast to pay off over {tenure_months} months")
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("please enter a valid {parameter}: {reason}")]
    InvalidParameter {
        parameter: Parameter,
        reason: ParameterIssue,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CalculatorError {
    pub(crate) fn invalid(parameter: Parameter, reason: ParameterIssue) -> Self {
        CalculatorError::InvalidParameter { parameter, reason }
    }

    /// the offending parameter, if this is a validation failure
    pub fn parameter(&self) -> Option<Parameter> {
        match self {
            CalculatorError::InvalidParameter { parameter, .. } => Some(*parameter),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_field() {
        let err = CalculatorError::invalid(Parameter::AnnualRate, ParameterIssue::NotPositive);
        assert_eq!(
            err.to_string(),
            "please enter a valid interest rate: must be greater than zero"
        );
        assert_eq!(err.parameter(), Some(Parameter::AnnualRate));
    }

    #[test]
    fn test_non_numeric_message_quotes_input() {
        let err = CalculatorError::invalid(
            Parameter::Principal,
            ParameterIssue::NotNumeric { input: "ten lakh".to_string() },
        );
        assert_eq!(
            err.to_string(),
            "please enter a valid loan amount: \"ten lakh\" is not a number"
        );
    }

    #[test]
    fn test_unamortizable_message_names_tenure() {
        let err = CalculatorError::invalid(
            Parameter::AnnualRate,
            ParameterIssue::Unamortizable { tenure_months: 360 },
        );
        assert_eq!(
            err.to_string(),
            "please enter a valid interest rate: compounds too fast to pay off over 360 months"
        );
    }
}
