//! Range-bounded date generation.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Produces instants uniformly distributed within a fixed window.
///
/// The bounds are fixed at construction and never mutated, so a shared
/// randomizer can be read concurrently. All state lives in the caller's
/// random source.
#[derive(Debug, Clone)]
pub struct DateRangeRandomizer {
    lower: DateTime<Utc>,
    upper: DateTime<Utc>,
}

impl DateRangeRandomizer {
    /// Create a randomizer over `[lower, upper]`.
    ///
    /// Bounds are stored as given. An inverted or empty window
    /// (`lower >= upper`) is not an error; every draw from such a window
    /// collapses to the lower bound.
    pub fn new(lower: DateTime<Utc>, upper: DateTime<Utc>) -> Self {
        Self { lower, upper }
    }

    /// The inclusive lower bound.
    pub fn lower(&self) -> DateTime<Utc> {
        self.lower
    }

    /// The inclusive upper bound.
    pub fn upper(&self) -> DateTime<Utc> {
        self.upper
    }

    /// Draw an instant in `[lower, upper]`, at millisecond granularity.
    pub fn next_instant<R: Rng + ?Sized>(&self, rng: &mut R) -> DateTime<Utc> {
        let lower_ms = self.lower.timestamp_millis();
        let upper_ms = self.upper.timestamp_millis();

        if lower_ms >= upper_ms {
            return self.lower;
        }

        let ms = rng.gen_range(lower_ms..=upper_ms);
        DateTime::from_timestamp_millis(ms).unwrap_or(self.lower)
    }
}
