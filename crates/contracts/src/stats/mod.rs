//! Derived statistics pipeline: filter → aggregate → format.
//!
//! Every screen wires its own instance of this pipeline over the resident
//! [`crate::shared::dataset::Dataset`]. All functions here are pure and
//! total; recomputation on every view-state change is the intended usage.

pub mod aggregate;
pub mod filter;
pub mod format;
pub mod presenter;

pub use aggregate::{count_by, count_matching, growth, rate, sum};
pub use filter::{text_matches, FilterSet};
pub use format::{format_fcfa, format_percent, format_signed_percent, format_thousands};
pub use presenter::{count_stat, money_stat, percent_stat, StatValue};
