//! Static mock dataset standing in for the real provisioning service.
//!
//! Built once on first access and read-only afterwards. Cross-references
//! (order → user, line → product) point into the same dataset.

use chrono::{TimeZone, Utc};
use contracts::domain::a001_user::{User, UserId};
use contracts::domain::a002_product::{Product, ProductId};
use contracts::domain::a003_order::{Order, OrderId, OrderLine};
use contracts::domain::a004_payment::{Payment, PaymentId};
use contracts::domain::a005_review::{Review, ReviewId};
use contracts::domain::a006_financial_period::FinancialPeriod;
use contracts::enums::{
    OrderStatus, PackageStatus, ProductCategory, ProductOrigin, SubscriptionTier, UserRole,
};
use contracts::shared::dataset::Dataset;
use once_cell::sync::Lazy;

static MOCK: Lazy<Dataset> = Lazy::new(build);

pub fn dataset() -> &'static Dataset {
    &MOCK
}

#[allow(clippy::too_many_arguments)]
fn user(
    name: &str,
    email: &str,
    phone: &str,
    city: &str,
    country: &str,
    role: UserRole,
    subscription: Option<SubscriptionTier>,
) -> User {
    User {
        id: UserId::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: "Rue des Jardins".to_string(),
        city: city.to_string(),
        country: country.to_string(),
        postal_code: "01 BP 1234".to_string(),
        role,
        subscription,
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    name: &str,
    description: &str,
    category: ProductCategory,
    origin: ProductOrigin,
    country: &str,
    price: i64,
    stock: u32,
    rating: f32,
    review_count: u32,
    delivery_days: u32,
) -> Product {
    Product {
        id: ProductId::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        origin,
        country: country.to_string(),
        price,
        stock,
        rating,
        review_count,
        delivery_days,
        supplier_ref: "SUP-001".to_string(),
    }
}

fn build() -> Dataset {
    let users = vec![
        user(
            "Awa Koné",
            "awa.kone@example.ci",
            "+225 07 01 02 03",
            "Abidjan",
            "Côte d'Ivoire",
            UserRole::Client,
            Some(SubscriptionTier::Premium),
        ),
        user(
            "Moussa Diabaté",
            "moussa.diabate@example.ci",
            "+225 05 11 22 33",
            "Bouaké",
            "Côte d'Ivoire",
            UserRole::Client,
            Some(SubscriptionTier::Standard),
        ),
        user(
            "Fatou Traoré",
            "fatou.traore@example.sn",
            "+221 77 123 45 67",
            "Dakar",
            "Sénégal",
            UserRole::Client,
            Some(SubscriptionTier::Standard),
        ),
        user(
            "Yao Kouassi",
            "yao.kouassi@example.ci",
            "+225 01 44 55 66",
            "Yamoussoukro",
            "Côte d'Ivoire",
            UserRole::Client,
            None,
        ),
        user(
            "Atelier Wax & Co",
            "contact@waxandco.ci",
            "+225 27 20 30 40",
            "Abidjan",
            "Côte d'Ivoire",
            UserRole::Supplier,
            None,
        ),
        user(
            "Aminata Bamba",
            "admin@koto.africa",
            "+225 07 99 88 77",
            "Abidjan",
            "Côte d'Ivoire",
            UserRole::Admin,
            None,
        ),
    ];

    let products = vec![
        product(
            "Tissu Wax Premium",
            "Pagne wax 6 yards, teinture artisanale",
            ProductCategory::Textile,
            ProductOrigin::Africa,
            "Côte d'Ivoire",
            45_000,
            120,
            4.8,
            34,
            5,
        ),
        product(
            "Panier tressé Bolga",
            "Panier en paille tressée main",
            ProductCategory::Artisanat,
            ProductOrigin::Africa,
            "Ghana",
            18_500,
            64,
            4.6,
            21,
            9,
        ),
        product(
            "Beurre de karité pur",
            "Karité brut non raffiné, pot 500g",
            ProductCategory::Cosmetique,
            ProductOrigin::Africa,
            "Burkina Faso",
            9_000,
            210,
            4.9,
            58,
            7,
        ),
        product(
            "Café Sidamo moulu",
            "Arabica d'altitude, paquet 1kg",
            ProductCategory::Alimentaire,
            ProductOrigin::Africa,
            "Éthiopie",
            14_000,
            95,
            4.7,
            42,
            12,
        ),
        product(
            "Soie brodée de Suzhou",
            "Étole en soie, broderie traditionnelle",
            ProductCategory::Textile,
            ProductOrigin::Asia,
            "Chine",
            62_000,
            28,
            4.5,
            12,
            18,
        ),
        product(
            "Théière en fonte",
            "Théière japonaise 0,8L",
            ProductCategory::Decoration,
            ProductOrigin::Asia,
            "Japon",
            38_000,
            40,
            4.4,
            9,
            21,
        ),
        product(
            "Casque audio sans fil",
            "Réduction de bruit active, 30h d'autonomie",
            ProductCategory::Electronique,
            ProductOrigin::Asia,
            "Chine",
            85_000,
            55,
            4.2,
            67,
            15,
        ),
        product(
            "Masque Gouro sculpté",
            "Bois de fromager, pièce unique",
            ProductCategory::Artisanat,
            ProductOrigin::Africa,
            "Côte d'Ivoire",
            120_000,
            6,
            5.0,
            4,
            6,
        ),
    ];

    let orders = vec![
        Order {
            id: OrderId::new_v4(),
            user_ref: users[0].id,
            tracking_number: "KT-2025-0001".to_string(),
            lines: vec![
                OrderLine {
                    product_ref: products[0].id,
                    quantity: 2,
                },
                OrderLine {
                    product_ref: products[2].id,
                    quantity: 3,
                },
            ],
            total: 117_000,
            status: OrderStatus::Delivered,
            package_status: PackageStatus::Delivered,
            created_at: Utc.with_ymd_and_hms(2025, 1, 6, 9, 30, 0).unwrap(),
        },
        Order {
            id: OrderId::new_v4(),
            user_ref: users[1].id,
            tracking_number: "KT-2025-0002".to_string(),
            lines: vec![OrderLine {
                product_ref: products[6].id,
                quantity: 1,
            }],
            total: 85_000,
            status: OrderStatus::Shipped,
            package_status: PackageStatus::ReceivedAbidjan,
            created_at: Utc.with_ymd_and_hms(2025, 1, 12, 14, 5, 0).unwrap(),
        },
        Order {
            id: OrderId::new_v4(),
            user_ref: users[2].id,
            tracking_number: "KT-2025-0003".to_string(),
            lines: vec![OrderLine {
                product_ref: products[4].id,
                quantity: 1,
            }],
            total: 62_000,
            status: OrderStatus::Shipped,
            package_status: PackageStatus::Shipping,
            created_at: Utc.with_ymd_and_hms(2025, 1, 15, 11, 45, 0).unwrap(),
        },
        Order {
            id: OrderId::new_v4(),
            user_ref: users[0].id,
            tracking_number: "KT-2025-0004".to_string(),
            lines: vec![OrderLine {
                product_ref: products[7].id,
                quantity: 1,
            }],
            total: 120_000,
            status: OrderStatus::Confirmed,
            package_status: PackageStatus::Received,
            created_at: Utc.with_ymd_and_hms(2025, 1, 21, 16, 20, 0).unwrap(),
        },
        Order {
            id: OrderId::new_v4(),
            user_ref: users[3].id,
            tracking_number: "KT-2025-0005".to_string(),
            lines: vec![
                OrderLine {
                    product_ref: products[1].id,
                    quantity: 2,
                },
                OrderLine {
                    product_ref: products[3].id,
                    quantity: 1,
                },
            ],
            total: 51_000,
            status: OrderStatus::Pending,
            package_status: PackageStatus::Received,
            created_at: Utc.with_ymd_and_hms(2025, 1, 24, 10, 10, 0).unwrap(),
        },
        Order {
            id: OrderId::new_v4(),
            user_ref: users[2].id,
            tracking_number: "KT-2025-0006".to_string(),
            lines: vec![OrderLine {
                product_ref: products[5].id,
                quantity: 1,
            }],
            total: 38_000,
            status: OrderStatus::Pending,
            package_status: PackageStatus::Received,
            created_at: Utc.with_ymd_and_hms(2025, 1, 25, 18, 0, 0).unwrap(),
        },
    ];

    // One deposit payment per order (50% upfront convention).
    let payments = orders
        .iter()
        .map(|order| Payment {
            id: PaymentId::new_v4(),
            order_ref: order.id,
            amount: order.deposit_due(),
        })
        .collect();

    let reviews = vec![
        Review {
            id: ReviewId::new_v4(),
            product_ref: products[0].id,
            author: "Awa K.".to_string(),
            rating: 5,
            comment: "Couleurs magnifiques, qualité au rendez-vous.".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 10, 8, 15, 0).unwrap(),
        },
        Review {
            id: ReviewId::new_v4(),
            product_ref: products[2].id,
            author: "Moussa D.".to_string(),
            rating: 5,
            comment: "Karité authentique, livraison rapide.".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 14, 19, 40, 0).unwrap(),
        },
        Review {
            id: ReviewId::new_v4(),
            product_ref: products[6].id,
            author: "Fatou T.".to_string(),
            rating: 4,
            comment: "Bon son, autonomie un peu en dessous de l'annonce.".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 18, 21, 5, 0).unwrap(),
        },
    ];

    let periods = vec![
        FinancialPeriod {
            label: "2024-11".to_string(),
            commissions: 5_100_000,
            logistics: 2_800_000,
            subscriptions: 1_700_000,
            concierge: 1_100_000,
            total_revenue: 10_700_000,
            order_count: 32,
            average_order_value: 334_375,
        },
        FinancialPeriod {
            label: "2024-12".to_string(),
            commissions: 5_500_000,
            logistics: 3_000_000,
            subscriptions: 1_900_000,
            concierge: 1_300_000,
            total_revenue: 11_700_000,
            order_count: 36,
            average_order_value: 325_000,
        },
        FinancialPeriod {
            label: "2025-01".to_string(),
            commissions: 6_200_000,
            logistics: 3_400_000,
            subscriptions: 2_100_000,
            concierge: 1_600_000,
            total_revenue: 13_300_000,
            order_count: 38,
            average_order_value: 350_000,
        },
    ];

    Dataset {
        users,
        products,
        orders,
        payments,
        reviews,
        periods,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_references_are_consistent() {
        let ds = build();
        for order in &ds.orders {
            assert!(ds.user_by_id(order.user_ref).is_some());
            for line in &order.lines {
                assert!(ds.product_by_id(line.product_ref).is_some());
            }
        }
        for payment in &ds.payments {
            assert!(ds.order_by_id(payment.order_ref).is_some());
        }
    }

    #[test]
    fn test_period_components_match_totals() {
        let ds = build();
        for period in &ds.periods {
            assert_eq!(period.components_total(), period.total_revenue);
        }
    }
}
