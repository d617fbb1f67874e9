//! Shared number formatting for the textual report blocks.

/// Width of the section banners in the textual reports.
const BANNER_WIDTH: usize = 80;

/// A full-width `====` banner line.
pub(crate) fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Formats a value with thousands separators and a fixed number of
/// decimals (`1234567.8` with 2 decimals becomes `1,234,567.80`).
pub(crate) fn thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = int_part
        .strip_prefix('-')
        .map_or(("", int_part), |digits| ("-", digits));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac_part) => format!("{sign}{grouped}.{frac_part}"),
        None => format!("{sign}{grouped}"),
    }
}
