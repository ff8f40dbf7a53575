//! Canonical currency, number, and percent formatting
//!
//! Engines return raw numbers; every report and table goes through this
//! module so amounts render the same way everywhere.

/// Format a dollar amount with cents: `1234.5` -> `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, 2)
}

/// Format a dollar amount rounded to whole dollars: `1234.5` -> `$1,235`
pub fn format_currency_whole(amount: f64) -> String {
    format_currency_with(amount, 0)
}

fn format_currency_with(amount: f64, decimals: usize) -> String {
    if amount < 0.0 {
        format!("-${}", format_number(-amount, decimals))
    } else {
        format!("${}", format_number(amount, decimals))
    }
}

/// Format a number with thousands separators and a fixed number of
/// fraction digits: `1234567.891` with 2 -> `1,234,567.89`
pub fn format_number(amount: f64, decimals: usize) -> String {
    if !amount.is_finite() {
        return format!("{}", amount);
    }

    let negative = amount < 0.0;
    let fixed = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a percentage with two decimals: `6.5` -> `6.50%`
pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// Render a break-even month count, where the infinity sentinel means the
/// buy-down cost is never recovered.
pub fn format_break_even(months: f64) -> String {
    if months.is_finite() {
        format!("{:.1} months", months)
    } else {
        "Never".to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.0), "$999.00");
    }

    #[test]
    fn test_currency_whole_rounds() {
        assert_eq!(format_currency_whole(1234.5), "$1,235");
        assert_eq!(format_currency_whole(145000.0), "$145,000");
    }

    #[test]
    fn test_negative_currency() {
        assert_eq!(format_currency(-2500.25), "-$2,500.25");
        assert_eq!(format_currency_whole(-145000.0), "-$145,000");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(6.5), "6.50%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(-1.234), "-1.23%");
    }

    #[test]
    fn test_break_even_sentinel() {
        assert_eq!(format_break_even(76.9), "76.9 months");
        assert_eq!(format_break_even(f64::INFINITY), "Never");
    }
}
