//! In-process data handoff from the provisioning collaborator.
//!
//! A [`Dataset`] is loaded once at startup and read-only for the session.
//! The statistics layer only ever derives transient records from it.

use crate::domain::a001_user::{User, UserId};
use crate::domain::a002_product::{Product, ProductId};
use crate::domain::a003_order::{Order, OrderId};
use crate::domain::a004_payment::Payment;
use crate::domain::a005_review::Review;
use crate::domain::a006_financial_period::FinancialPeriod;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// All entity collections, insertion-ordered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub orders: Vec<Order>,

    #[serde(default)]
    pub payments: Vec<Payment>,

    #[serde(default)]
    pub reviews: Vec<Review>,

    #[serde(default)]
    pub periods: Vec<FinancialPeriod>,
}

impl Dataset {
    /// Parse a dataset from its JSON wire form.
    pub fn from_json(json: &str) -> anyhow::Result<Dataset> {
        serde_json::from_str(json).context("failed to parse dataset JSON")
    }

    pub fn user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn order_by_id(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Reviews for one product, in source order.
    pub fn reviews_for(&self, product: ProductId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.product_ref == product)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{ProductCategory, ProductOrigin};
    use crate::stats::{count_matching, rate, text_matches, FilterSet};

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(Dataset::from_json("{ not json").is_err());
    }

    #[test]
    fn test_from_json_defaults_missing_collections() {
        let ds = Dataset::from_json("{}").unwrap();
        assert!(ds.users.is_empty());
        assert!(ds.periods.is_empty());
    }

    fn product(name: &str, category: ProductCategory, origin: ProductOrigin) -> Product {
        Product {
            id: ProductId::new_v4(),
            name: name.to_string(),
            description: String::new(),
            category,
            origin,
            country: "Côte d'Ivoire".to_string(),
            price: 25_000,
            stock: 10,
            rating: 4.5,
            review_count: 3,
            delivery_days: 7,
            supplier_ref: "SUP-001".to_string(),
        }
    }

    #[test]
    fn test_catalog_filter_pipeline() {
        let products = vec![
            product("Tissu Wax Premium", ProductCategory::Textile, ProductOrigin::Africa),
            product("Panier tressé", ProductCategory::Artisanat, ProductOrigin::Africa),
            product("Soie brodée", ProductCategory::Textile, ProductOrigin::Asia),
        ];

        let query = "s";
        let origin = "africa";
        let set = FilterSet::new()
            .when(!query.trim().is_empty(), move |p: &Product| {
                text_matches(query, &[&p.name, &p.description])
            })
            .when(origin != "all", move |p: &Product| {
                p.origin.code() == origin
            });

        let filtered = set.filter(&products);
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Tissu Wax Premium", "Panier tressé"]);

        let textile = count_matching(&filtered, |p| p.category == ProductCategory::Textile);
        assert_eq!(rate(textile, filtered.len()), 50.0);
    }
}
