//! Money display formatting.
//!
//! Amounts are stored at full decimal precision and only rounded here, at
//! display time, so that repeated additions never compound rounding error.

use crate::engine::currency::Currency;
use crate::engine::Amount;

use rust_decimal::RoundingStrategy;

/// Formats an amount for display in the given currency: rounded
/// half-away-from-zero to the currency's decimal places, grouped by
/// thousands, and prefixed with the currency's sign (or its code, for
/// currencies without one).
///
/// With no currency, the raw numeric amount is returned untouched.
pub fn money(amount: Amount, currency: Option<Currency>) -> String {
    let currency = match currency {
        Some(currency) => currency,
        None => return amount.to_string(),
    };

    let places = currency.decimal_places();
    let rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);

    // `{:.*}` pads the fraction with zeroes up to `places`; the value itself
    // is already rounded.
    let digits = format!("{:.*}", places as usize, rounded.abs());
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut formatted = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        formatted.push('-');
    }
    match currency {
        // "ISK 100", with a space: no sign exists for this currency.
        Currency::Isk => {
            formatted.push_str(currency.symbol());
            formatted.push(' ');
        }
        _ => formatted.push_str(currency.symbol()),
    }
    formatted.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }

    formatted
}

// Inserts a comma every three digits, from the right: "1234567" -> "1,234,567".
fn group_thousands(integer: &str) -> String {
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);

    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
