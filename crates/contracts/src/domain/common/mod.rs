//! Common types and traits shared by all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod entity_metadata;
pub mod form_errors;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use entity_metadata::EntityMetadata;
pub use form_errors::{FormErrors, MAX_TEXT_LENGTH, REQUIRED_MESSAGE};
