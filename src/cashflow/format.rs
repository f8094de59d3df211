//! Display formatting for cashflow figures

/// Format a dollar amount as whole US dollars, e.g. `$1,439` or `-$212`.
/// Rounds half away from zero; non-finite amounts render as `N/A`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "N/A".to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a decimal rate as a percentage with two decimals, e.g. `6.00%`
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_438.92), "$1,439");
        assert_eq!(format_currency(1_250_000.0), "$1,250,000");
        assert_eq!(format_currency(-212.5), "-$213");
        assert_eq!(format_currency(-0.4), "$0");
        assert_eq!(format_currency(f64::NAN), "N/A");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.06), "6.00%");
        assert_eq!(format_percent(0.0125), "1.25%");
    }
}
