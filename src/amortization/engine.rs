use log::{debug, log_enabled, trace, warn, Level};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::amortization::{CalculationResult, PaymentScheduleEntry};
use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Parameter, ParameterIssue, Result};
use crate::loan::{self, LoanParameters, LoanRequest};

/// largest final balance the schedule may leave behind
const BALANCE_TOLERANCE: Decimal = dec!(0.01);

/// relative rounding error of one Decimal operation, rounded up
const DECIMAL_EPSILON: Decimal = dec!(0.0000000000000000000000000002);

/// equal-installment amortization engine
///
/// Stateless apart from its configuration: every call builds a fresh result
/// and nothing is retained between calculations.
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    config: CalculatorConfig,
}

impl AmortizationEngine {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// fixed monthly installment (EMI) at full Decimal precision
    ///
    /// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1) with r the monthly rate,
    /// evaluated as P * (r + r / g) where g = (1 + r)^n - 1.
    ///
    /// Rejects rate/tenure pairs whose rounding error, amplified by the
    /// compound factor, could leave more than 0.01 on the final balance.
    pub fn compute_installment(principal: Money, annual_rate: Rate, tenure_months: u32) -> Result<Decimal> {
        loan::validate(principal, annual_rate, tenure_months)?;

        let r = annual_rate.monthly_rate().as_decimal();
        if r.is_zero() {
            warn!("monthly rate of {annual_rate} rounds to zero, using straight-line installment");
            return Ok(principal.as_decimal() / Decimal::from(tenure_months));
        }

        let unamortizable = || {
            CalculatorError::invalid(
                Parameter::AnnualRate,
                ParameterIssue::Unamortizable { tenure_months },
            )
        };

        let growth = compound_growth(r, tenure_months).ok_or_else(unamortizable)?;
        let drift = balance_drift_bound(principal, growth, tenure_months).ok_or_else(unamortizable)?;
        if drift > BALANCE_TOLERANCE {
            debug!("rate {annual_rate} over {tenure_months} months may drift {drift} on the final balance");
            return Err(unamortizable());
        }

        Ok(principal.as_decimal() * (r + r / growth))
    }

    /// build the schedule from an installment already computed for the same loan
    ///
    /// The balance runs at full precision; each entry stores amounts rounded to
    /// money scale with principal taken as installment less interest. Returns
    /// the entries and their summed interest. Inputs are assumed valid.
    pub fn generate_schedule(
        principal: Money,
        installment: Decimal,
        monthly_rate: Rate,
        tenure_months: u32,
    ) -> (Vec<PaymentScheduleEntry>, Money) {
        let r = monthly_rate.as_decimal();
        let installment_paid = Money::from_decimal(installment);

        let mut schedule = Vec::with_capacity(tenure_months as usize);
        let mut balance = principal.as_decimal();
        let mut total_interest = Money::ZERO;

        for period in 1..=tenure_months {
            let interest = balance * r;
            balance -= installment - interest;
            // rounding residue on the last period
            if balance < Decimal::ZERO {
                balance = Decimal::ZERO;
            }

            let interest_component = Money::from_decimal(interest);
            let principal_component = installment_paid - interest_component;
            let remaining_balance = Money::from_decimal(balance);
            total_interest += interest_component;

            trace!(
                "period {period}: interest {interest_component}, principal {principal_component}, balance {remaining_balance}"
            );

            schedule.push(PaymentScheduleEntry {
                period,
                installment: installment_paid,
                principal_component,
                interest_component,
                remaining_balance,
            });
        }

        (schedule, total_interest)
    }

    /// installment, totals and schedule for validated parameters
    pub fn calculate(&self, params: &LoanParameters) -> Result<CalculationResult> {
        let principal = params.principal();
        let tenure_months = params.tenure_months();

        let installment =
            Self::compute_installment(principal, params.annual_rate(), tenure_months)?;
        let (schedule, total_interest) =
            Self::generate_schedule(principal, installment, params.monthly_rate(), tenure_months);

        let installment = Money::from_decimal(installment);
        let total_payment = installment * Decimal::from(tenure_months);

        if cfg!(debug_assertions) || log_enabled!(Level::Debug) {
            let implied_interest = total_payment - principal;
            if (implied_interest - total_interest).abs().as_decimal() > BALANCE_TOLERANCE {
                warn!(
                    "schedule interest {total_interest} drifts from total payment less principal {implied_interest}"
                );
            }
        }

        debug!(
            "principal {principal} at {} over {tenure_months} months: installment {installment}, total interest {total_interest}",
            params.annual_rate()
        );

        Ok(CalculationResult {
            installment,
            total_principal: principal,
            total_interest,
            total_payment,
            schedule,
        })
    }

    /// check a form request against the configured limits, then calculate
    pub fn calculate_request(&self, request: &LoanRequest) -> Result<CalculationResult> {
        self.config.limits.check(request)?;
        let params = request.into_parameters()?;
        self.calculate(&params)
    }

    /// calculate the configured default request
    pub fn calculate_defaults(&self) -> Result<CalculationResult> {
        self.calculate_request(&self.config.defaults)
    }
}

/// (1 + r)^n - 1, accumulated directly so small rates keep full precision
///
/// None when the factor leaves Decimal range.
fn compound_growth(r: Decimal, periods: u32) -> Option<Decimal> {
    let mut growth = Decimal::ZERO;
    for _ in 0..periods {
        growth = growth.checked_mul(r)?.checked_add(r)?.checked_add(growth)?;
    }
    Some(growth)
}

/// worst-case final balance error of the schedule recurrence
///
/// Each period adds a few roundings of at most epsilon * principal, and every
/// earlier error grows by (1 + r) per period, so the total stays below
/// epsilon * (principal + 1) * 10 * (n + 1) * (1 + r)^n.
fn balance_drift_bound(principal: Money, growth: Decimal, periods: u32) -> Option<Decimal> {
    let steps = Decimal::from(periods) + Decimal::ONE;
    DECIMAL_EPSILON
        .checked_mul(principal.as_decimal() + Decimal::ONE)?
        .checked_mul(Decimal::TEN * steps)?
        .checked_mul(Decimal::ONE + growth)
}
