pub mod engine;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

pub use engine::AmortizationEngine;

/// one row of the repayment schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentScheduleEntry {
    /// 1-based period number
    pub period: u32,
    pub installment: Money,
    pub principal_component: Money,
    pub interest_component: Money,
    /// balance after this period's installment, never negative
    pub remaining_balance: Money,
}

/// headline figures and full schedule for one loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub installment: Money,
    pub total_principal: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    pub schedule: Vec<PaymentScheduleEntry>,
}

impl CalculationResult {
    pub fn tenure_months(&self) -> u32 {
        self.schedule.len() as u32
    }

    /// get entry for specific period
    pub fn entry(&self, period: u32) -> Option<&PaymentScheduleEntry> {
        period
            .checked_sub(1)
            .and_then(|index| self.schedule.get(index as usize))
    }

    /// balance left after the last installment
    pub fn final_balance(&self) -> Money {
        self.schedule
            .last()
            .map(|e| e.remaining_balance)
            .unwrap_or(self.total_principal)
    }

    /// principal/interest proportions of the total payment
    pub fn split(&self) -> PaymentSplit {
        let principal_share = self
            .total_principal
            .percentage_of(self.total_payment)
            .round_dp(2);

        PaymentSplit {
            principal: self.total_principal,
            interest: self.total_interest,
            principal_share,
            interest_share: Decimal::ONE_HUNDRED - principal_share,
        }
    }
}

/// two-slice breakdown of what the borrower pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSplit {
    pub principal: Money,
    pub interest: Money,
    /// percent of total payment, 2 dp
    pub principal_share: Decimal,
    pub interest_share: Decimal,
}
