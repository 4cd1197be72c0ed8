use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{CalculatorError, Parameter, ParameterIssue, Result};
use crate::loan::{LoanRequest, MAX_ANNUAL_RATE_PERCENT, MAX_PRINCIPAL, MAX_TENURE_MONTHS};
use crate::types::{Tenure, TenureUnit};

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub limits: InputLimits,
    /// request evaluated when the calculator first loads
    pub defaults: LoanRequest,
    pub display: DisplayConfig,
}

/// accepted input ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    pub max_principal: Money,
    /// percent per year
    pub max_annual_rate: Decimal,
    pub months: TenureBounds,
    pub years: TenureBounds,
}

/// inclusive tenure range for one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureBounds {
    pub min: u32,
    pub max: u32,
}

impl TenureBounds {
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// how amounts are rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub grouping: DigitGrouping,
}

/// digit grouping convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitGrouping {
    /// 12,34,567
    Indian,
    /// 1,234,567
    Thousands,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            limits: InputLimits::default(),
            defaults: LoanRequest {
                principal: Money::from_major(1_000_000),
                annual_rate: dec!(8.5),
                tenure: Tenure::years(20),
            },
            display: DisplayConfig::default(),
        }
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_principal: Money::from_decimal(MAX_PRINCIPAL),
            max_annual_rate: MAX_ANNUAL_RATE_PERCENT,
            months: TenureBounds { min: 1, max: 360 },
            years: TenureBounds { min: 1, max: 30 },
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "\u{20b9}".to_string(),
            grouping: DigitGrouping::Indian,
        }
    }
}

impl CalculatorConfig {
    /// load configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// tenure range for the given unit
    pub fn tenure_bounds(&self, unit: TenureUnit) -> TenureBounds {
        self.limits.tenure_bounds(unit)
    }

    pub fn validate(&self) -> Result<()> {
        let limits = &self.limits;

        if !limits.max_principal.is_positive() || limits.max_principal.as_decimal() > MAX_PRINCIPAL {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!(
                    "max_principal must be in (0, {MAX_PRINCIPAL}], got {}",
                    limits.max_principal
                ),
            });
        }

        if limits.max_annual_rate <= Decimal::ZERO || limits.max_annual_rate > MAX_ANNUAL_RATE_PERCENT {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!(
                    "max_annual_rate must be in (0, {MAX_ANNUAL_RATE_PERCENT}], got {}",
                    limits.max_annual_rate
                ),
            });
        }

        for unit in [TenureUnit::Months, TenureUnit::Years] {
            let bounds = limits.tenure_bounds(unit);
            let max_months = bounds.max.checked_mul(unit.months_per_unit());
            if bounds.min == 0
                || bounds.min > bounds.max
                || max_months.map_or(true, |m| m > MAX_TENURE_MONTHS)
            {
                return Err(CalculatorError::InvalidConfiguration {
                    message: format!(
                        "{unit} bounds {}..={} must be non-empty, start at 1 or more and stay within {MAX_TENURE_MONTHS} months",
                        bounds.min, bounds.max
                    ),
                });
            }
        }

        limits
            .check(&self.defaults)
            .map_err(|e| CalculatorError::InvalidConfiguration {
                message: format!("default request out of limits: {e}"),
            })
    }
}

impl InputLimits {
    pub fn tenure_bounds(&self, unit: TenureUnit) -> TenureBounds {
        match unit {
            TenureUnit::Months => self.months,
            TenureUnit::Years => self.years,
        }
    }

    /// check a request against these limits
    pub fn check(&self, request: &LoanRequest) -> Result<()> {
        if !request.principal.is_positive() {
            return Err(CalculatorError::invalid(Parameter::Principal, ParameterIssue::NotPositive));
        }
        if request.principal > self.max_principal {
            return Err(CalculatorError::invalid(
                Parameter::Principal,
                ParameterIssue::AboveMaximum { max: self.max_principal.as_decimal() },
            ));
        }

        if request.annual_rate <= Decimal::ZERO {
            return Err(CalculatorError::invalid(Parameter::AnnualRate, ParameterIssue::NotPositive));
        }
        if request.annual_rate > self.max_annual_rate {
            return Err(CalculatorError::invalid(
                Parameter::AnnualRate,
                ParameterIssue::AboveMaximum { max: self.max_annual_rate },
            ));
        }

        let bounds = self.tenure_bounds(request.tenure.unit);
        if !bounds.contains(request.tenure.value) {
            return Err(CalculatorError::invalid(
                Parameter::Tenure,
                ParameterIssue::OutOfRange {
                    min: Decimal::from(bounds.min),
                    max: Decimal::from(bounds.max),
                },
            ));
        }

        Ok(())
    }
}
