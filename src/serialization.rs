/// serialization support for calculation results
use serde::{Deserialize, Serialize};

use crate::amortization::{CalculationResult, PaymentScheduleEntry, PaymentSplit};
use crate::config::DisplayConfig;
use crate::decimal::Money;
use crate::display::format_currency;
use crate::errors::Result;

/// serializable view of a calculation
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculationView {
    pub summary: SummaryView,
    pub split: PaymentSplit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<PaymentScheduleEntry>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryView {
    pub tenure_months: u32,
    pub installment: Money,
    pub total_principal: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    /// display strings keyed the same way
    pub formatted: FormattedView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormattedView {
    pub installment: String,
    pub total_principal: String,
    pub total_interest: String,
    pub total_payment: String,
}

impl CalculationView {
    pub fn from_result(result: &CalculationResult, display: &DisplayConfig, with_schedule: bool) -> Self {
        CalculationView {
            summary: SummaryView {
                tenure_months: result.tenure_months(),
                installment: result.installment,
                total_principal: result.total_principal,
                total_interest: result.total_interest,
                total_payment: result.total_payment,
                formatted: FormattedView {
                    installment: format_currency(result.installment, display),
                    total_principal: format_currency(result.total_principal, display),
                    total_interest: format_currency(result.total_interest, display),
                    total_payment: format_currency(result.total_payment, display),
                },
            },
            split: result.split(),
            schedule: with_schedule.then(|| result.schedule.clone()),
        }
    }
}

impl CalculationResult {
    /// pretty JSON with summary, split and full schedule
    pub fn json(&self, display: &DisplayConfig) -> Result<String> {
        let view = CalculationView::from_result(self, display, true);
        Ok(serde_json::to_string_pretty(&view)?)
    }

    /// pretty JSON without the schedule rows
    pub fn summary_json(&self, display: &DisplayConfig) -> Result<String> {
        let view = CalculationView::from_result(self, display, false);
        Ok(serde_json::to_string_pretty(&view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::AmortizationEngine;
    use crate::loan::LoanParameters;
    use rust_decimal_macros::dec;
    use serde_json::Value;

    fn result() -> CalculationResult {
        let params = LoanParameters::new(Money::from_major(1_000_000), dec!(8.5), 240).unwrap();
        AmortizationEngine::default().calculate(&params).unwrap()
    }

    #[test]
    fn test_full_json_has_every_period() {
        let json = result().json(&DisplayConfig::default()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let rows = value["schedule"].as_array().unwrap();
        assert_eq!(rows.len(), 240);
        assert_eq!(rows[0]["period"], 1);
        assert_eq!(rows[239]["period"], 240);
        assert_eq!(value["summary"]["tenure_months"], 240);
        assert_eq!(value["summary"]["formatted"]["installment"], "\u{20b9}8,678");
        assert_eq!(value["summary"]["formatted"]["total_interest"], "\u{20b9}10,82,776");
    }

    #[test]
    fn test_summary_json_omits_schedule() {
        let json = result().summary_json(&DisplayConfig::default()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("schedule").is_none());
        assert_eq!(value["split"]["principal_share"], "48.01");
        assert_eq!(value["split"]["interest_share"], "51.99");
    }

    #[test]
    fn test_view_round_trips() {
        let json = result().json(&DisplayConfig::default()).unwrap();
        let view: CalculationView = serde_json::from_str(&json).unwrap();
        assert_eq!(view.schedule.map(|s| s.len()), Some(240));
        assert_eq!(view.summary.total_principal, Money::from_major(1_000_000));
    }
}
