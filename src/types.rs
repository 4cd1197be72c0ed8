use serde::{Deserialize, Serialize};
use std::fmt;

/// unit the tenure was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TenureUnit {
    #[default]
    Months,
    Years,
}

impl TenureUnit {
    /// months represented by one unit
    pub fn months_per_unit(&self) -> u32 {
        match self {
            TenureUnit::Months => 1,
            TenureUnit::Years => 12,
        }
    }
}

impl fmt::Display for TenureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenureUnit::Months => f.write_str("months"),
            TenureUnit::Years => f.write_str("years"),
        }
    }
}

/// tenure as entered, with its unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tenure {
    pub value: u32,
    pub unit: TenureUnit,
}

impl Tenure {
    pub fn months(value: u32) -> Self {
        Self { value, unit: TenureUnit::Months }
    }

    pub fn years(value: u32) -> Self {
        Self { value, unit: TenureUnit::Years }
    }

    /// number of monthly periods, None on overflow
    pub fn to_months(&self) -> Option<u32> {
        self.value.checked_mul(self.unit.months_per_unit())
    }
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
