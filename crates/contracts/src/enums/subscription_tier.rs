use crate::shared::display::Severity;
use serde::{Deserialize, Serialize};

/// Client membership tier, drives discount and benefit eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    Standard,
    Premium,
}

impl SubscriptionTier {
    pub fn code(&self) -> &'static str {
        match self {
            SubscriptionTier::Standard => "standard",
            SubscriptionTier::Premium => "premium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionTier::Standard => "Standard",
            SubscriptionTier::Premium => "Premium",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            SubscriptionTier::Standard => Severity::Neutral,
            SubscriptionTier::Premium => Severity::Success,
        }
    }

    pub fn all() -> Vec<SubscriptionTier> {
        vec![SubscriptionTier::Standard, SubscriptionTier::Premium]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "standard" => Some(SubscriptionTier::Standard),
            "premium" => Some(SubscriptionTier::Premium),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
