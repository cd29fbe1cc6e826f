//! Common types and traits shared by all domain entities

pub mod entity_id;

pub use entity_id::EntityId;
