use crate::domain::a001_user::UserId;
use crate::domain::a002_product::ProductId;
use crate::domain::common::EntityId;
use crate::enums::{OrderStatus, PackageStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
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

impl EntityId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Entity
// ============================================================================
/// One ordered line: product reference plus quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "productRef")]
    pub product_ref: ProductId,

    pub quantity: u32,
}

/// A placed order with its lifecycle and shipment-tracking snapshot.
///
/// `status` and `package_status` are two independent classification axes:
/// the coarse order lifecycle and the fine-grained package tracking. No
/// mapping between the two is assumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,

    #[serde(rename = "userRef")]
    pub user_ref: UserId,

    #[serde(rename = "trackingNumber")]
    pub tracking_number: String,

    pub lines: Vec<OrderLine>,

    /// Whole FCFA.
    pub total: i64,

    pub status: OrderStatus,

    #[serde(rename = "packageStatus")]
    pub package_status: PackageStatus,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// 50% upfront payment due at checkout. The odd franc is charged
    /// upfront so deposit + balance always equals the total.
    pub fn deposit_due(&self) -> i64 {
        (self.total + 1) / 2
    }

    /// Remainder due on delivery.
    pub fn balance_due(&self) -> i64 {
        self.total - self.deposit_due()
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order(total: i64) -> Order {
        Order {
            id: OrderId::new_v4(),
            user_ref: UserId::new_v4(),
            tracking_number: "KT-2025-0001".to_string(),
            lines: vec![],
            total,
            status: OrderStatus::Pending,
            package_status: PackageStatus::Received,
            created_at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_deposit_plus_balance_covers_total() {
        let even = order(250_000);
        assert_eq!(even.deposit_due(), 125_000);
        assert_eq!(even.deposit_due() + even.balance_due(), 250_000);

        let odd = order(99_999);
        assert_eq!(odd.deposit_due(), 50_000);
        assert_eq!(odd.deposit_due() + odd.balance_due(), 99_999);
    }
}
