//! Core types shared across the Faultline error facilities
//!
//! This crate provides the foundational types used by both the error
//! taxonomy and the HTTP boundary:
//!
//! - **Occurrence identifiers**: `OccurrenceId`, the validated token that
//!   follows one failure through however many layers rewrap it
//! - **Metadata**: open, ordered key/value bag for diagnostic data
//! - **Validation contract**: the shape of the external schema-validation
//!   engine's error, consumed by the adapters downstream

pub mod identifier;
pub mod metadata;
pub mod validation;

pub use identifier::{InvalidIdentifier, OccurrenceId};
pub use metadata::Metadata;
pub use validation::{
    PathSegment, ValidationDetail, ValidationFailure, VALIDATION_ERROR_NAME,
};
