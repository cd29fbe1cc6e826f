pub mod dashboard;

pub use dashboard::FinanceDashboard;
