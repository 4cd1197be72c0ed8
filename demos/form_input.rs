/// form input - raw text fields in, JSON out, with per-field validation messages
use emi_calculator::{AmortizationEngine, CalculatorError, LoanRequest, TenureUnit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let engine = AmortizationEngine::default();

    // tenure entered in years, converted to 60 monthly periods
    let request = LoanRequest::parse("500000", "10", "5", TenureUnit::Years)?;
    let result = engine.calculate_request(&request)?;
    println!("{}", result.summary_json(&engine.config().display)?);

    // invalid fields are reported, never coerced
    let bad_inputs = [
        ("", "8.5", "240", TenureUnit::Months),
        ("1000000", "abc", "240", TenureUnit::Months),
        ("1000000", "8.5", "0", TenureUnit::Months),
        ("1000000", "8.5", "31", TenureUnit::Years),
    ];

    for (principal, rate, tenure, unit) in bad_inputs {
        let outcome = LoanRequest::parse(principal, rate, tenure, unit)
            .and_then(|request| engine.calculate_request(&request));

        match outcome {
            Ok(_) => println!("accepted: {principal:?} {rate:?} {tenure:?} {unit}"),
            Err(e @ CalculatorError::InvalidParameter { .. }) => println!("rejected: {e}"),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
