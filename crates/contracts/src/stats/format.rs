//! Locale formatting for amounts and percentages.
//!
//! FCFA amounts use French thousands grouping with plain spaces; all
//! percentages go through one rounding function so every screen shows the
//! same precision.

/// Groups digits by thousands with a space separator: `11700000` → `"11 700 000"`.
pub fn format_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if n < 0 {
        grouped.push('-');
    }
    grouped.chars().rev().collect()
}

/// Currency display: `11700000` → `"11 700 000 FCFA"`.
pub fn format_fcfa(amount: i64) -> String {
    format!("{} FCFA", format_thousands(amount))
}

/// One-decimal percentage value: `13.675…` → `"13.7"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}", value)
}

/// Signed one-decimal percentage with suffix: `13.675…` → `"+13.7%"`.
pub fn format_signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::aggregate::{growth, rate};

    #[test]
    fn test_format_fcfa() {
        assert_eq!(format_fcfa(11_700_000), "11 700 000 FCFA");
        assert_eq!(format_fcfa(20_500_000), "20 500 000 FCFA");
        assert_eq!(format_fcfa(760), "760 FCFA");
        assert_eq!(format_fcfa(0), "0 FCFA");
    }

    #[test]
    fn test_format_thousands_negative() {
        assert_eq!(format_thousands(-1_234_567), "-1 234 567");
        assert_eq!(format_thousands(-42), "-42");
    }

    #[test]
    fn test_format_percent_rounds_to_one_decimal() {
        assert_eq!(format_percent(growth(13_300_000, 11_700_000)), "13.7");
        assert_eq!(format_percent(rate(1, 4)), "25.0");
        assert_eq!(format_percent(0.0), "0.0");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(13.675), "+13.7%");
        assert_eq!(format_signed_percent(-2.04), "-2.0%");
        assert_eq!(format_signed_percent(0.0), "+0.0%");
    }
}
