//! Display-ready stat records consumed by the stat cards.

use crate::shared::display::Severity;
use crate::stats::aggregate::growth;
use crate::stats::format::{format_fcfa, format_percent, format_thousands};
use serde::{Deserialize, Serialize};

/// One computed stat, formatted for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub label: String,
    /// Formatted primary value.
    pub value: String,
    /// Change vs the previous comparable period, as a percentage.
    pub change_percent: Option<f64>,
    pub severity: Severity,
}

/// Severity from a change percent: clearly up is good, clearly down is bad,
/// anything within half a point is flat.
fn change_severity(change: Option<f64>) -> Severity {
    match change {
        Some(pct) if pct > 0.5 => Severity::Success,
        Some(pct) if pct < -0.5 => Severity::Error,
        _ => Severity::Neutral,
    }
}

/// Monetary stat with optional growth vs a previous period.
pub fn money_stat(label: &str, amount: i64, previous: Option<i64>) -> StatValue {
    let change = previous.map(|prev| growth(amount, prev));
    StatValue {
        label: label.to_string(),
        value: format_fcfa(amount),
        change_percent: change,
        severity: change_severity(change),
    }
}

/// Plain count stat.
pub fn count_stat(label: &str, n: usize) -> StatValue {
    StatValue {
        label: label.to_string(),
        value: format_thousands(n as i64),
        change_percent: None,
        severity: Severity::Neutral,
    }
}

/// Percentage stat (already computed, e.g. a rate).
pub fn percent_stat(label: &str, value: f64) -> StatValue {
    StatValue {
        label: label.to_string(),
        value: format!("{}%", format_percent(value)),
        change_percent: None,
        severity: Severity::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_stat_with_growth() {
        let stat = money_stat("Revenu total", 13_300_000, Some(11_700_000));
        assert_eq!(stat.value, "13 300 000 FCFA");
        assert_eq!(format_percent(stat.change_percent.unwrap()), "13.7");
        assert_eq!(stat.severity, Severity::Success);
    }

    #[test]
    fn test_money_stat_zero_previous_is_flat() {
        let stat = money_stat("Revenu total", 13_300_000, Some(0));
        assert_eq!(stat.change_percent, Some(0.0));
        assert_eq!(stat.severity, Severity::Neutral);
    }

    #[test]
    fn test_money_stat_decline_is_error() {
        let stat = money_stat("Logistique", 9_000_000, Some(10_000_000));
        assert_eq!(stat.severity, Severity::Error);
    }

    #[test]
    fn test_percent_stat() {
        let stat = percent_stat("Taux premium", 25.0);
        assert_eq!(stat.value, "25.0%");
    }

    #[test]
    fn test_count_stat_groups_thousands() {
        assert_eq!(count_stat("Commandes", 1234).value, "1 234");
    }
}
