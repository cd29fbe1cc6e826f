use crate::shared::display::Severity;
use serde::{Deserialize, Serialize};

/// Fine-grained shipment tracking, independent from [`crate::enums::OrderStatus`].
/// `delivered` exists on both axes without implying a mapping between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageStatus {
    Received,
    Shipping,
    ReceivedAbidjan,
    Delivering,
    Delivered,
}

impl PackageStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PackageStatus::Received => "received",
            PackageStatus::Shipping => "shipping",
            PackageStatus::ReceivedAbidjan => "received_abidjan",
            PackageStatus::Delivering => "delivering",
            PackageStatus::Delivered => "delivered",
        }
    }

    /// French display label shown on badges.
    pub fn label(&self) -> &'static str {
        match self {
            PackageStatus::Received => "Réceptionné",
            PackageStatus::Shipping => "En transit",
            PackageStatus::ReceivedAbidjan => "Arrivé à Abidjan",
            PackageStatus::Delivering => "En livraison",
            PackageStatus::Delivered => "Livré",
        }
    }

    /// Badge colour classification.
    pub fn severity(&self) -> Severity {
        match self {
            PackageStatus::Received => Severity::Neutral,
            PackageStatus::Shipping => Severity::Info,
            PackageStatus::ReceivedAbidjan => Severity::Info,
            PackageStatus::Delivering => Severity::Info,
            PackageStatus::Delivered => Severity::Success,
        }
    }

    pub fn all() -> Vec<PackageStatus> {
        vec![
            PackageStatus::Received,
            PackageStatus::Shipping,
            PackageStatus::ReceivedAbidjan,
            PackageStatus::Delivering,
            PackageStatus::Delivered,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "received" => Some(PackageStatus::Received),
            "shipping" => Some(PackageStatus::Shipping),
            "received_abidjan" => Some(PackageStatus::ReceivedAbidjan),
            "delivering" => Some(PackageStatus::Delivering),
            "delivered" => Some(PackageStatus::Delivered),
            _ => None,
        }
    }
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
