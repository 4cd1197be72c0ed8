/// text rendering of amounts for the presentation layer
use crate::config::{DigitGrouping, DisplayConfig};
use crate::decimal::Money;

/// whole-unit amount with digit grouping and currency symbol, e.g. `₹10,82,776`
pub fn format_currency(amount: Money, config: &DisplayConfig) -> String {
    let rounded = amount.round_whole();
    let digits = rounded.abs().as_decimal().trunc().to_string();
    let grouped = group_digits(&digits, config.grouping);

    if rounded.is_negative() {
        format!("-{}{}", config.currency_symbol, grouped)
    } else {
        format!("{}{}", config.currency_symbol, grouped)
    }
}

fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let head_group = match grouping {
        DigitGrouping::Indian => 2,
        DigitGrouping::Thousands => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(head_group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn indian() -> DisplayConfig {
        DisplayConfig::default()
    }

    fn western() -> DisplayConfig {
        DisplayConfig {
            currency_symbol: "$".to_string(),
            grouping: DigitGrouping::Thousands,
        }
    }

    #[test]
    fn test_indian_grouping() {
        let config = indian();
        assert_eq!(format_currency(Money::from_major(1_082_776), &config), "\u{20b9}10,82,776");
        assert_eq!(format_currency(Money::from_major(100_000), &config), "\u{20b9}1,00,000");
        assert_eq!(format_currency(Money::from_major(12_345_678_901), &config), "\u{20b9}12,34,56,78,901");
        assert_eq!(format_currency(Money::from_major(999), &config), "\u{20b9}999");
        assert_eq!(format_currency(Money::ZERO, &config), "\u{20b9}0");
    }

    #[test]
    fn test_thousands_grouping() {
        let config = western();
        assert_eq!(format_currency(Money::from_major(2_082_776), &config), "$2,082,776");
        assert_eq!(format_currency(Money::from_major(1_000), &config), "$1,000");
    }

    #[test]
    fn test_rounds_to_whole_units() {
        let config = indian();
        assert_eq!(format_currency(Money::from_decimal(dec!(8678.23233366)), &config), "\u{20b9}8,678");
        assert_eq!(format_currency(Money::from_decimal(dec!(8678.5)), &config), "\u{20b9}8,679");
        assert_eq!(format_currency(Money::from_decimal(dec!(0.4)), &config), "\u{20b9}0");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(Money::from_major(-1_500), &western()), "-$1,500");
        // rounds to zero, no sign
        assert_eq!(format_currency(Money::from_decimal(dec!(-0.2)), &western()), "$0");
    }
}
