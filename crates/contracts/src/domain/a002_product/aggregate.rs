use crate::domain::common::EntityId;
use crate::enums::{ProductCategory, ProductOrigin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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

impl EntityId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Entity
// ============================================================================
/// Catalog item sourced from an African or Asian supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    pub description: String,

    pub category: ProductCategory,

    pub origin: ProductOrigin,

    pub country: String,

    /// Whole FCFA, always positive.
    pub price: i64,

    pub stock: u32,

    /// 0.0 to 5.0, one display decimal.
    pub rating: f32,

    #[serde(rename = "reviewCount")]
    pub review_count: u32,

    /// Door-to-door estimate in days.
    #[serde(rename = "deliveryDays")]
    pub delivery_days: u32,

    /// Supplier entity is referenced but not modelled here.
    #[serde(rename = "supplierRef")]
    pub supplier_ref: String,
}

impl Product {
    /// Stock valuation at the listed price, in whole FCFA.
    pub fn stock_value(&self) -> i64 {
        self.price * self.stock as i64
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}
