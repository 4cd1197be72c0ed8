use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Parameter, ParameterIssue, Result};
use crate::types::{Tenure, TenureUnit};

/// hard ceilings that keep every intermediate value inside Decimal range
pub const MAX_PRINCIPAL: Decimal = dec!(1000000000000000);
pub const MAX_ANNUAL_RATE_PERCENT: Decimal = dec!(1000);
pub const MAX_TENURE_MONTHS: u32 = 1200;

/// validated loan parameters, tenure already in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanParameters {
    principal: Money,
    annual_rate: Rate,
    tenure_months: u32,
}

impl LoanParameters {
    /// annual rate is given in percent per year
    pub fn new(principal: Money, annual_rate_percent: Decimal, tenure_months: u32) -> Result<Self> {
        let annual_rate = Rate::from_percent(annual_rate_percent);
        validate(principal, annual_rate, tenure_months)?;

        Ok(Self {
            principal,
            annual_rate,
            tenure_months,
        })
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate.monthly_rate()
    }

    pub fn tenure_months(&self) -> u32 {
        self.tenure_months
    }
}

/// check principal, rate and tenure in that order, reporting the first failure
pub(crate) fn validate(principal: Money, annual_rate: Rate, tenure_months: u32) -> Result<()> {
    if !principal.is_positive() {
        return Err(CalculatorError::invalid(Parameter::Principal, ParameterIssue::NotPositive));
    }
    if principal.as_decimal() > MAX_PRINCIPAL {
        return Err(CalculatorError::invalid(
            Parameter::Principal,
            ParameterIssue::AboveMaximum { max: MAX_PRINCIPAL },
        ));
    }

    if !annual_rate.is_positive() {
        return Err(CalculatorError::invalid(Parameter::AnnualRate, ParameterIssue::NotPositive));
    }
    if annual_rate.as_percentage() > MAX_ANNUAL_RATE_PERCENT {
        return Err(CalculatorError::invalid(
            Parameter::AnnualRate,
            ParameterIssue::AboveMaximum { max: MAX_ANNUAL_RATE_PERCENT },
        ));
    }

    if tenure_months == 0 {
        return Err(CalculatorError::invalid(Parameter::Tenure, ParameterIssue::NotPositive));
    }
    if tenure_months > MAX_TENURE_MONTHS {
        return Err(CalculatorError::invalid(
            Parameter::Tenure,
            ParameterIssue::AboveMaximum { max: Decimal::from(MAX_TENURE_MONTHS) },
        ));
    }

    Ok(())
}

/// calculation request as it arrives from the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub principal: Money,
    /// percent per year
    pub annual_rate: Decimal,
    pub tenure: Tenure,
}

impl LoanRequest {
    /// build from numeric form fields
    pub fn new(principal: f64, annual_rate: f64, tenure: f64, unit: TenureUnit) -> Result<Self> {
        let principal = positive_from_f64(Parameter::Principal, principal)?;
        let annual_rate = positive_from_f64(Parameter::AnnualRate, annual_rate)?;
        let tenure = positive_from_f64(Parameter::Tenure, tenure)?;

        Ok(Self {
            principal: Money::from_decimal(principal),
            annual_rate,
            tenure: Tenure {
                value: whole_periods(tenure)?,
                unit,
            },
        })
    }

    /// build from raw text fields; blank or non-numeric text is rejected, never read as zero
    pub fn parse(principal: &str, annual_rate: &str, tenure: &str, unit: TenureUnit) -> Result<Self> {
        let principal = positive_from_str(Parameter::Principal, principal)?;
        let annual_rate = positive_from_str(Parameter::AnnualRate, annual_rate)?;
        let tenure = positive_from_str(Parameter::Tenure, tenure)?;

        Ok(Self {
            principal: Money::from_decimal(principal),
            annual_rate,
            tenure: Tenure {
                value: whole_periods(tenure)?,
                unit,
            },
        })
    }

    /// convert tenure to months and validate
    pub fn into_parameters(&self) -> Result<LoanParameters> {
        let months = self.tenure.to_months().ok_or_else(|| {
            CalculatorError::invalid(
                Parameter::Tenure,
                ParameterIssue::AboveMaximum { max: Decimal::from(MAX_TENURE_MONTHS) },
            )
        })?;

        LoanParameters::new(self.principal, self.annual_rate, months)
    }
}

fn positive_from_f64(parameter: Parameter, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(CalculatorError::invalid(parameter, ParameterIssue::NotFinite));
    }
    let d = Decimal::try_from(value).map_err(|_| {
        CalculatorError::invalid(parameter, ParameterIssue::AboveMaximum { max: Decimal::MAX })
    })?;
    ensure_positive(parameter, d)
}

fn positive_from_str(parameter: Parameter, text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalculatorError::invalid(parameter, ParameterIssue::Missing));
    }
    let d = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            CalculatorError::invalid(
                parameter,
                ParameterIssue::NotNumeric { input: trimmed.to_string() },
            )
        })?;
    ensure_positive(parameter, d)
}

fn ensure_positive(parameter: Parameter, d: Decimal) -> Result<Decimal> {
    if d <= Decimal::ZERO {
        return Err(CalculatorError::invalid(parameter, ParameterIssue::NotPositive));
    }
    Ok(d)
}

fn whole_periods(tenure: Decimal) -> Result<u32> {
    if !tenure.fract().is_zero() {
        return Err(CalculatorError::invalid(Parameter::Tenure, ParameterIssue::NotWholeNumber));
    }
    tenure.to_u32().ok_or_else(|| {
        CalculatorError::invalid(
            Parameter::Tenure,
            ParameterIssue::AboveMaximum { max: Decimal::from(u32::MAX) },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(err: CalculatorError) -> (Parameter, ParameterIssue) {
        match err {
            CalculatorError::InvalidParameter { parameter, reason } => (parameter, reason),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parameters_reject_non_positive() {
        let err = LoanParameters::new(Money::ZERO, dec!(8.5), 240).unwrap_err();
        assert_eq!(issue(err), (Parameter::Principal, ParameterIssue::NotPositive));

        let err = LoanParameters::new(Money::from_major(-5), dec!(8.5), 240).unwrap_err();
        assert_eq!(issue(err), (Parameter::Principal, ParameterIssue::NotPositive));

        let err = LoanParameters::new(Money::from_major(1000), dec!(0), 240).unwrap_err();
        assert_eq!(issue(err), (Parameter::AnnualRate, ParameterIssue::NotPositive));

        let err = LoanParameters::new(Money::from_major(1000), dec!(-1), 240).unwrap_err();
        assert_eq!(issue(err), (Parameter::AnnualRate, ParameterIssue::NotPositive));

        let err = LoanParameters::new(Money::from_major(1000), dec!(8.5), 0).unwrap_err();
        assert_eq!(issue(err), (Parameter::Tenure, ParameterIssue::NotPositive));
    }

    #[test]
    fn test_parameters_reject_above_ceiling() {
        let err = LoanParameters::new(Money::from_major(1000), dec!(8.5), MAX_TENURE_MONTHS + 1)
            .unwrap_err();
        assert_eq!(issue(err).0, Parameter::Tenure);

        let err = LoanParameters::new(Money::from_major(1000), dec!(1000.01), 12).unwrap_err();
        assert_eq!(issue(err).0, Parameter::AnnualRate);
    }

    #[test]
    fn test_first_failure_is_reported() {
        let err = LoanParameters::new(Money::ZERO, dec!(0), 0).unwrap_err();
        assert_eq!(issue(err).0, Parameter::Principal);
    }

    #[test]
    fn test_request_from_f64_rejects_non_finite() {
        let err = LoanRequest::new(f64::NAN, 8.5, 12.0, TenureUnit::Months).unwrap_err();
        assert_eq!(issue(err), (Parameter::Principal, ParameterIssue::NotFinite));

        let err = LoanRequest::new(1000.0, f64::INFINITY, 12.0, TenureUnit::Months).unwrap_err();
        assert_eq!(issue(err), (Parameter::AnnualRate, ParameterIssue::NotFinite));

        let err = LoanRequest::new(1000.0, 8.5, f64::NEG_INFINITY, TenureUnit::Months).unwrap_err();
        assert_eq!(issue(err), (Parameter::Tenure, ParameterIssue::NotFinite));
    }

    #[test]
    fn test_request_rejects_fractional_tenure() {
        let err = LoanRequest::new(1000.0, 8.5, 12.5, TenureUnit::Months).unwrap_err();
        assert_eq!(issue(err), (Parameter::Tenure, ParameterIssue::NotWholeNumber));
    }

    #[test]
    fn test_parse_text_fields() {
        let request = LoanRequest::parse(" 500000 ", "10", "5", TenureUnit::Years).unwrap();
        assert_eq!(request.principal, Money::from_major(500_000));
        assert_eq!(request.annual_rate, dec!(10));
        assert_eq!(request.tenure, Tenure::years(5));

        let params = request.into_parameters().unwrap();
        assert_eq!(params.tenure_months(), 60);
        assert_eq!(params.monthly_rate().as_decimal(), dec!(10) / dec!(100) / dec!(12));
    }

    #[test]
    fn test_parse_rejects_blank_and_garbage() {
        let err = LoanRequest::parse("", "8.5", "12", TenureUnit::Months).unwrap_err();
        assert_eq!(issue(err), (Parameter::Principal, ParameterIssue::Missing));

        // a non-numeric rate must not be coerced to zero
        let err = LoanRequest::parse("1000", "abc", "12", TenureUnit::Months).unwrap_err();
        assert_eq!(
            issue(err),
            (Parameter::AnnualRate, ParameterIssue::NotNumeric { input: "abc".to_string() })
        );

        let err = LoanRequest::parse("1000", "8.5", "   ", TenureUnit::Months).unwrap_err();
        assert_eq!(issue(err), (Parameter::Tenure, ParameterIssue::Missing));
    }

    #[test]
    fn test_parse_accepts_scientific_notation() {
        let request = LoanRequest::parse("1e6", "8.5", "240", TenureUnit::Months).unwrap();
        assert_eq!(request.principal, Money::from_major(1_000_000));
    }

    #[test]
    fn test_years_overflow_is_rejected() {
        let request = LoanRequest {
            principal: Money::from_major(1000),
            annual_rate: dec!(8.5),
            tenure: Tenure::years(u32::MAX),
        };
        let err = request.into_parameters().unwrap_err();
        assert_eq!(issue(err).0, Parameter::Tenure);
    }
}
