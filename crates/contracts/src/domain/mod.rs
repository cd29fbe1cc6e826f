pub mod common;

pub mod a001_user;
pub mod a002_product;
pub mod a003_order;
pub mod a004_payment;
pub mod a005_review;
pub mod a006_financial_period;
