pub mod amortization;
pub mod config;
pub mod decimal;
pub mod display;
pub mod errors;
pub mod loan;
pub mod serialization;
pub mod types;

// re-export key types
pub use amortization::{AmortizationEngine, CalculationResult, PaymentScheduleEntry, PaymentSplit};
pub use config::{CalculatorConfig, DigitGrouping, DisplayConfig, InputLimits, TenureBounds};
pub use decimal::{Money, Rate};
pub use display::format_currency;
pub use errors::{CalculatorError, Parameter, ParameterIssue, Result};
pub use loan::{LoanParameters, LoanRequest};
pub use serialization::CalculationView;
pub use types::{Tenure, TenureUnit};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
