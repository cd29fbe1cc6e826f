pub mod aggregate;

pub use aggregate::FinancialPeriod;
