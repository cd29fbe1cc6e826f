//! Badge classification and status-to-label resolution.
//!
//! Resolvers here are total over arbitrary status codes: an unrecognized
//! code falls back to the raw value with neutral severity instead of
//! failing.

use crate::enums::{OrderStatus, PackageStatus, SubscriptionTier};
use serde::{Deserialize, Serialize};

/// Visual severity of a badge or indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Neutral => "neutral",
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Display-ready classification of one status snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDisplay {
    pub label: String,
    pub severity: Severity,
}

impl StatusDisplay {
    fn known(label: &str, severity: Severity) -> Self {
        Self {
            label: label.to_string(),
            severity,
        }
    }

    /// Fallback for codes outside the fixed enumeration: show the raw
    /// value, colour neutral.
    fn raw(code: &str) -> Self {
        Self {
            label: code.to_string(),
            severity: Severity::Neutral,
        }
    }
}

/// Resolve an order lifecycle status code for display.
pub fn order_status_display(code: &str) -> StatusDisplay {
    match OrderStatus::from_code(code) {
        Some(status) => StatusDisplay::known(status.label(), status.severity()),
        None => StatusDisplay::raw(code),
    }
}

/// Resolve a package tracking status code for display.
pub fn package_status_display(code: &str) -> StatusDisplay {
    match PackageStatus::from_code(code) {
        Some(status) => StatusDisplay::known(status.label(), status.severity()),
        None => StatusDisplay::raw(code),
    }
}

/// Resolve a subscription tier code for display.
pub fn tier_display(code: &str) -> StatusDisplay {
    match SubscriptionTier::from_code(code) {
        Some(tier) => StatusDisplay::known(tier.label(), tier.severity()),
        None => StatusDisplay::raw(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_resolves_to_expediee_info() {
        let display = order_status_display("shipped");
        assert_eq!(display.label, "Expédiée");
        assert_eq!(display.severity, Severity::Info);
    }

    #[test]
    fn test_unknown_status_falls_back_to_raw_value() {
        let display = order_status_display("archived");
        assert_eq!(display.label, "archived");
        assert_eq!(display.severity, Severity::Neutral);
    }

    #[test]
    fn test_package_status_axis_is_independent() {
        // "delivered" exists on both axes with its own label per axis
        assert_eq!(order_status_display("delivered").label, "Livrée");
        assert_eq!(package_status_display("delivered").label, "Livré");
        // order-only codes are raw values on the package axis
        assert_eq!(package_status_display("confirmed").label, "confirmed");
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(tier_display("premium").label, "Premium");
        assert_eq!(tier_display("premium").severity, Severity::Success);
        assert_eq!(tier_display("gold").severity, Severity::Neutral);
    }
}
