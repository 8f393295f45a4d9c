//! Money calculation and formatting helpers
//!
//! All arithmetic is done in `Decimal` and converted to `f64` at the edges.
//! Amounts are plain currency units with no currency attached; formatting
//! for a specific locale is a presentation option.

use rust_decimal::prelude::*;

/// Rounding for monetary values: 2 decimal places, half-up
const DECIMAL_PLACES: u32 = 2;

/// Display currency supported by the venue frontends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Vnd,
}

/// unit_price * quantity, rounded.
pub fn line_total(unit_price: f64, quantity: u32) -> f64 {
    let price = Decimal::from_f64(unit_price).unwrap_or_default();
    (price * Decimal::from(quantity))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Sum of `unit_price * quantity` over an iterator of lines.
pub fn sum_lines(lines: impl Iterator<Item = (f64, u32)>) -> f64 {
    lines
        .map(|(price, qty)| {
            Decimal::from_f64(price).unwrap_or_default() * Decimal::from(qty)
        })
        .sum::<Decimal>()
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Round an amount to the nearest whole currency unit (QR amounts must be
/// integral).
pub fn round_to_unit(amount: f64) -> i64 {
    Decimal::from_f64(amount)
        .unwrap_or_default()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Format an amount for display: `$12.50` or `120.000 ₫`.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    match currency {
        Currency::Usd => format!("${:.2}", amount),
        Currency::Vnd => {
            let units = round_to_unit(amount);
            let (sign, units) = if units < 0 { ("-", -units) } else { ("", units) };
            let digits = units.to_string();
            let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
            for (i, c) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    grouped.push('.');
                }
                grouped.push(c);
            }
            format!("{}{} ₫", sign, grouped)
        }
    }
}
