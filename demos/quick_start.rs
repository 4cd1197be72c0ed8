/// quick start - calculate the default loan the way the calculator does on load
use emi_calculator::{format_currency, AmortizationEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let engine = AmortizationEngine::default();
    let result = engine.calculate_defaults()?;
    let display = &engine.config().display;

    println!("monthly EMI:     {}", format_currency(result.installment, display));
    println!("principal:       {}", format_currency(result.total_principal, display));
    println!("total interest:  {}", format_currency(result.total_interest, display));
    println!("total payment:   {}", format_currency(result.total_payment, display));

    let split = result.split();
    println!("split:           {}% principal / {}% interest", split.principal_share, split.interest_share);

    // first year of the schedule
    println!("\n{:>5} {:>12} {:>12} {:>12} {:>14}", "month", "emi", "principal", "interest", "balance");
    for entry in result.schedule.iter().take(12) {
        println!(
            "{:>5} {:>12} {:>12} {:>12} {:>14}",
            entry.period,
            format_currency(entry.installment, display),
            format_currency(entry.principal_component, display),
            format_currency(entry.interest_component, display),
            format_currency(entry.remaining_balance, display),
        );
    }

    Ok(())
}
