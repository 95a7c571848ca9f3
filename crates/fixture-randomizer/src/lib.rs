//! Type-to-generator dispatch engine for the fixture-fill framework.
//!
//! This crate provides the [`FieldRandomizer`], which maps a
//! [`FieldKind`](fixture_core::FieldKind) to a freshly generated
//! [`FieldValue`](fixture_core::FieldValue). Object-graph populators call
//! it once per field and skip any field that comes back unsupported.
//!
//! # Architecture
//!
//! ```text
//! FieldKind (descriptor)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   FieldRandomizer    │
//! │                      │
//! │  - rng (StdRng)      │
//! │  - date window       │──── DateRangeRandomizer
//! │  - text capability   │──── dyn TextSource
//! └──────────┬───────────┘
//!            │
//!            ▼
//!     FieldValue | Unsupported
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{FieldKind, FieldValue};
//! use fixture_randomizer::FieldRandomizer;
//!
//! let mut randomizer = FieldRandomizer::new();
//!
//! let value = randomizer.generate(&FieldKind::Text);
//! assert!(value.matches_kind(&FieldKind::Text));
//!
//! // Kinds without a rule come back as a sentinel, not an error.
//! let value = randomizer.generate(&FieldKind::Json);
//! assert!(value.is_unsupported());
//! ```
//!
//! # Generation rules
//!
//! - Textual kinds draw from the injected [`TextSource`] (ten characters
//!   for text, one for a character).
//! - Fixed-width integers narrow a full-width draw with wraparound; no
//!   clamping is applied.
//! - Date-like kinds draw from a [`DateRangeRandomizer`] spanning ten
//!   calendar years on either side of construction time. Two deliberate
//!   exceptions survive from the behavior this engine reproduces: the
//!   time-of-day kind is a raw unwindowed draw, and the calendar kind
//!   always returns the current moment.
//! - Enumerations pick uniformly among their declared variants.

pub mod date_range;
pub mod generators;
pub mod randomizer;
pub mod text;

// Re-exports for convenience
pub use date_range::DateRangeRandomizer;
pub use randomizer::FieldRandomizer;
pub use text::{AlphabeticTextSource, TextSource};
