//! Display strings for money and durations.

pub const CURRENCY: &str = "FCFA";
pub const DISTANCE_UNIT: &str = "km";
pub const TIME_UNIT: &str = "hours";

/// `167250` → `167,250 FCFA`.
pub fn format_currency(amount: i64) -> String {
    format!("{} {}", group_thousands(amount), CURRENCY)
}

/// Hours under a day as `4.0 hours`, longer spans as `1d 6.0h`.
pub fn format_time(hours: f64) -> String {
    if hours < 24.0 {
        return format!("{:.1} {}", hours, TIME_UNIT);
    }
    let days = (hours / 24.0).floor();
    let remaining = hours % 24.0;
    format!("{}d {:.1}h", days as i64, remaining)
}

/// Comma-separated thousands, e.g. `-1234567` → `-1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
