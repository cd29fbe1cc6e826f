use crate::domain::common::EntityId;
use crate::enums::{SubscriptionTier, UserRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl EntityId for UserId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UserId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Entity
// ============================================================================
/// A registered account: storefront client, supplier or back-office admin.
///
/// Provisioned once by the data source and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    pub name: String,

    pub email: String,

    pub phone: String,

    pub address: String,

    pub city: String,

    pub country: String,

    #[serde(rename = "postalCode")]
    pub postal_code: String,

    pub role: UserRole,

    /// Only meaningful for clients; suppliers and admins carry `None`.
    #[serde(default)]
    pub subscription: Option<SubscriptionTier>,
}

impl User {
    /// Role and tier jointly decide premium-only aggregations.
    pub fn is_premium_client(&self) -> bool {
        self.role == UserRole::Client && self.subscription == Some(SubscriptionTier::Premium)
    }

    pub fn is_client(&self) -> bool {
        self.role == UserRole::Client
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}
