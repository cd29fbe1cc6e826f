pub mod aggregate;

pub use aggregate::{Review, ReviewId};
