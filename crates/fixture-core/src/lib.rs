//! Core types for the fixture-fill framework.
//!
//! This crate provides the foundational types shared by the randomizer
//! and its consumers:
//!
//! - [`FieldKind`] - The closed catalogue of data kinds
//! - [`FieldValue`] - Produced values, tagged with their kind
//! - [`AtomicCounter32`] / [`AtomicCounter64`] - Atomic counter boxes
//! - [`KindMismatch`] - Conversion error for typed extraction
//!
//! # Architecture
//!
//! The fixture-core crate sits at the foundation of the framework:
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    ├─── fixture-randomizer   (maps FieldKind → FieldValue)
//!    │
//!    └─── object-graph populators (consume FieldValue per field)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{FieldKind, FieldValue};
//!
//! let kind = FieldKind::enumeration(vec!["red".to_string(), "blue".to_string()]);
//! let value = FieldValue::Enum("red".to_string());
//!
//! assert!(value.matches_kind(&kind));
//! assert_eq!(String::try_from(value).unwrap(), "red");
//! ```

pub mod convert;
pub mod kinds;
pub mod values;

// Re-exports for convenience
pub use convert::KindMismatch;
pub use kinds::FieldKind;
pub use values::{AtomicCounter32, AtomicCounter64, FieldValue};
