pub mod order_status;
pub mod package_status;
pub mod product_category;
pub mod product_origin;
pub mod subscription_tier;
pub mod user_role;

pub use order_status::OrderStatus;
pub use package_status::PackageStatus;
pub use product_category::ProductCategory;
pub use product_origin::ProductOrigin;
pub use subscription_tier::SubscriptionTier;
pub use user_role::UserRole;
