//! Text formatting for report rows.

/// Format an integer with `,` thousands separators.
#[must_use]
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage with two decimals, e.g. `43.59%`.
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}
