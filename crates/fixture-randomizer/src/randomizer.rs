//! The field randomizer: one shared random source, one date window,
//! one dispatch table.

use crate::date_range::DateRangeRandomizer;
use crate::generators::{numeric, temporal};
use crate::text::{AlphabeticTextSource, TextSource};
use chrono::{Local, Months, Utc};
use fixture_core::{AtomicCounter32, AtomicCounter64, FieldKind, FieldValue};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Calendar months on either side of "now" covered by the date window.
const DATE_WINDOW_MONTHS: u32 = 120;

/// Length of generated text values.
const TEXT_LENGTH: usize = 10;

/// The dispatch engine mapping a [`FieldKind`] to a fresh [`FieldValue`].
///
/// A randomizer owns the shared pseudo-random source every rule draws
/// from, a [`DateRangeRandomizer`] spanning ten calendar years on either
/// side of the instant it was constructed, and the text capability used
/// for textual kinds. The window is snapshotted once at construction and
/// reused for every subsequent draw.
///
/// `generate` takes `&mut self`; for concurrent population, give each
/// worker its own randomizer rather than locking a shared one.
pub struct FieldRandomizer {
    rng: StdRng,
    dates: DateRangeRandomizer,
    text: Box<dyn TextSource + Send>,
}

impl FieldRandomizer {
    /// Create a randomizer with an entropy-seeded source.
    pub fn new() -> Self {
        let now = Utc::now();
        let lower = now
            .checked_sub_months(Months::new(DATE_WINDOW_MONTHS))
            .unwrap_or(now);
        let upper = now
            .checked_add_months(Months::new(DATE_WINDOW_MONTHS))
            .unwrap_or(now);
        debug!(%lower, %upper, "initialized field randomizer date window");

        Self {
            rng: StdRng::from_entropy(),
            dates: DateRangeRandomizer::new(lower, upper),
            text: Box::new(AlphabeticTextSource),
        }
    }

    /// Replace the text capability used for textual kinds.
    pub fn with_text_source(mut self, text: Box<dyn TextSource + Send>) -> Self {
        self.text = text;
        self
    }

    /// The date window all windowed temporal kinds draw from.
    pub fn date_range(&self) -> &DateRangeRandomizer {
        &self.dates
    }

    /// Produce a random value of the requested kind.
    ///
    /// Kinds without a generation rule, and enumerations with no
    /// variants, yield [`FieldValue::Unsupported`]; callers skip those
    /// fields rather than treat them as failures. For every other kind
    /// the returned variant corresponds to the requested kind.
    pub fn generate(&mut self, kind: &FieldKind) -> FieldValue {
        let Self { rng, dates, text } = self;

        match kind {
            FieldKind::Text => FieldValue::Text(text.alphabetic(rng, TEXT_LENGTH)),
            FieldKind::Char => match text.alphabetic(rng, 1).chars().next() {
                Some(c) => FieldValue::Char(c),
                None => FieldValue::Unsupported,
            },

            FieldKind::Bool => FieldValue::Bool(rng.gen()),

            // Narrow kinds truncate a full 32-bit draw; wraparound is the
            // intended source of variety, with no range clamping.
            FieldKind::Int8 => FieldValue::Int8(rng.gen::<i32>() as i8),
            FieldKind::Int16 => FieldValue::Int16(rng.gen::<i32>() as i16),
            FieldKind::Int32 => FieldValue::Int32(rng.gen()),
            FieldKind::Int64 => FieldValue::Int64(rng.gen()),

            // Unscaled unit-range samples.
            FieldKind::Float32 => FieldValue::Float32(rng.gen()),
            FieldKind::Float64 => FieldValue::Float64(rng.gen()),

            FieldKind::BigInteger => FieldValue::BigInteger(numeric::random_big_integer(rng)),
            FieldKind::Decimal => FieldValue::Decimal(numeric::random_decimal(rng)),

            FieldKind::AtomicInt32 => FieldValue::AtomicInt32(AtomicCounter32::new(rng.gen())),
            FieldKind::AtomicInt64 => FieldValue::AtomicInt64(AtomicCounter64::new(rng.gen())),

            FieldKind::DateTime => FieldValue::DateTime(dates.next_instant(rng)),
            FieldKind::Date => FieldValue::Date(dates.next_instant(rng).date_naive()),
            // Raw draw, deliberately not windowed; values may fall far
            // outside any clock range.
            FieldKind::Time => FieldValue::Time(rng.gen()),
            FieldKind::Timestamp => FieldValue::Timestamp(dates.next_instant(rng).naive_utc()),
            // Always the current moment, never a draw from the window.
            FieldKind::Calendar => FieldValue::Calendar(Local::now()),

            FieldKind::ZonedDateTime => {
                FieldValue::ZonedDateTime(dates.next_instant(rng).fixed_offset())
            }
            FieldKind::LocalDate => FieldValue::LocalDate(dates.next_instant(rng).date_naive()),
            FieldKind::LocalTime => FieldValue::LocalTime(dates.next_instant(rng).time()),
            FieldKind::LocalDateTime => {
                FieldValue::LocalDateTime(dates.next_instant(rng).naive_utc())
            }

            FieldKind::Duration => FieldValue::Duration(temporal::random_duration(rng)),
            FieldKind::Period => FieldValue::Period(temporal::random_period(rng)),
            FieldKind::Interval => {
                let (start, end) = temporal::random_interval(rng);
                FieldValue::Interval { start, end }
            }

            FieldKind::Enum { variants } => match variants.choose(rng) {
                Some(variant) => FieldValue::Enum(variant.clone()),
                None => {
                    trace!("enumeration with no variants has no rule");
                    FieldValue::Unsupported
                }
            },

            FieldKind::Bytes | FieldKind::Json | FieldKind::Array { .. } => {
                trace!(kind = ?kind, "no generation rule for kind");
                FieldValue::Unsupported
            }
        }
    }
}

impl Default for FieldRandomizer {
    fn default() -> Self {
        Self::new()
    }
}
