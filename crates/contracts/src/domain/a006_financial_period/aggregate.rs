use serde::{Deserialize, Serialize};

/// Revenue figures for one labelled period (year-month), broken down by
/// revenue stream. All amounts are whole FCFA.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialPeriod {
    /// Period label, e.g. "2025-01".
    pub label: String,

    pub commissions: i64,

    pub logistics: i64,

    pub subscriptions: i64,

    pub concierge: i64,

    #[serde(rename = "totalRevenue")]
    pub total_revenue: i64,

    #[serde(rename = "orderCount")]
    pub order_count: u32,

    #[serde(rename = "averageOrderValue")]
    pub average_order_value: i64,
}

impl FinancialPeriod {
    /// Sum of the four revenue streams. `total_revenue` stays the source
    /// figure and is not overwritten by this.
    pub fn components_total(&self) -> i64 {
        self.commissions + self.logistics + self.subscriptions + self.concierge
    }
}
