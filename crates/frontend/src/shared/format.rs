//! Price formatting for tables, cards and the cart

/// Currency suffix shown after every price
pub const CURRENCY: &str = "₫";

/// Formats a number the way the vi-VN locale does: `.` between thousands,
/// `,` before the fraction, at most three fraction digits and no trailing zeros
///
/// ```text
/// 1234567.0 -> "1.234.567"
/// 1234.5    -> "1.234,5"
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.3}", value.abs());
    let (integer, fraction) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let is_zero = integer.chars().all(|c| c == '0') && fraction.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, fraction)
    }
}

/// Amount followed by the currency suffix
pub fn format_price(value: f64) -> String {
    format!("{} {}", format_amount(value), CURRENCY)
}
