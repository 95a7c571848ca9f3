//! Value representations for the fixture-fill randomizer.
//!
//! This module defines [`FieldValue`], the dynamically-tagged result of a
//! generation call, and the atomic counter boxes used for atomic kinds.
//! Every supported [`FieldKind`] has exactly one value variant; the
//! [`FieldValue::Unsupported`] sentinel marks kinds with no generation
//! rule and matches no kind.

use crate::kinds::FieldKind;
use chrono::{DateTime, Duration, FixedOffset, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicI32, AtomicI64, Ordering};

/// Atomically-updatable 32-bit counter.
///
/// Wraps [`AtomicI32`] with value semantics: cloning copies the current
/// count into a fresh box, and equality compares the current counts.
#[derive(Debug, Default)]
pub struct AtomicCounter32(AtomicI32);

impl AtomicCounter32 {
    /// Create a counter holding the given value.
    pub fn new(value: i32) -> Self {
        Self(AtomicI32::new(value))
    }

    /// Read the current count.
    pub fn get(&self) -> i32 {
        self.0.load(Ordering::Relaxed)
    }

    /// Replace the current count.
    pub fn set(&self, value: i32) {
        self.0.store(value, Ordering::Relaxed);
    }

    /// Add to the count, returning the previous value.
    pub fn fetch_add(&self, delta: i32) -> i32 {
        self.0.fetch_add(delta, Ordering::Relaxed)
    }
}

impl Clone for AtomicCounter32 {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl PartialEq for AtomicCounter32 {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

/// Atomically-updatable 64-bit counter.
///
/// The 64-bit sibling of [`AtomicCounter32`].
#[derive(Debug, Default)]
pub struct AtomicCounter64(AtomicI64);

impl AtomicCounter64 {
    /// Create a counter holding the given value.
    pub fn new(value: i64) -> Self {
        Self(AtomicI64::new(value))
    }

    /// Read the current count.
    pub fn get(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }

    /// Replace the current count.
    pub fn set(&self, value: i64) {
        self.0.store(value, Ordering::Relaxed);
    }

    /// Add to the count, returning the previous value.
    pub fn fetch_add(&self, delta: i64) -> i64 {
        self.0.fetch_add(delta, Ordering::Relaxed)
    }
}

impl Clone for AtomicCounter64 {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl PartialEq for AtomicCounter64 {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

/// A produced value, tagged with the kind it was generated for.
///
/// Ownership transfers fully to the caller; nothing here aliases back
/// into randomizer state.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// UTF-8 text
    Text(String),

    /// Single character
    Char(char),

    /// Boolean value
    Bool(bool),

    /// 8-bit signed integer
    Int8(i8),

    /// 16-bit signed integer
    Int16(i16),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 32-bit float
    Float32(f32),

    /// 64-bit float
    Float64(f64),

    /// Arbitrary-precision integer as big-endian magnitude bytes.
    /// An empty buffer is a zero value.
    BigInteger(Vec<u8>),

    /// Exact decimal
    Decimal(Decimal),

    /// Atomic 32-bit counter
    AtomicInt32(AtomicCounter32),

    /// Atomic 64-bit counter
    AtomicInt64(AtomicCounter64),

    /// Generic instant (UTC)
    DateTime(DateTime<Utc>),

    /// Calendar date only
    Date(NaiveDate),

    /// Time-of-day as raw milliseconds. Not confined to a single day;
    /// values may lie far outside any clock range.
    Time(i64),

    /// Timestamp without zone
    Timestamp(NaiveDateTime),

    /// Locale-aware instant
    Calendar(DateTime<Local>),

    /// Instant with timezone offset
    ZonedDateTime(DateTime<FixedOffset>),

    /// Date without zone
    LocalDate(NaiveDate),

    /// Time without zone
    LocalTime(NaiveTime),

    /// Date and time without zone
    LocalDateTime(NaiveDateTime),

    /// Time duration
    Duration(Duration),

    /// Calendar period in months
    Period(Months),

    /// Interval between two instants, `end >= start`
    Interval {
        /// Inclusive start instant
        start: DateTime<Utc>,
        /// Inclusive end instant
        end: DateTime<Utc>,
    },

    /// One member of an enumeration's variant list
    Enum(String),

    /// Sentinel for kinds with no generation rule. Callers skip the
    /// field; this is not an error.
    Unsupported,
}

impl FieldValue {
    /// Check whether this value is of the given kind.
    ///
    /// For enumerations the value must be a member of the requested
    /// variant list. [`FieldValue::Unsupported`] matches no kind.
    pub fn matches_kind(&self, kind: &FieldKind) -> bool {
        match (self, kind) {
            (Self::Text(_), FieldKind::Text)
            | (Self::Char(_), FieldKind::Char)
            | (Self::Bool(_), FieldKind::Bool)
            | (Self::Int8(_), FieldKind::Int8)
            | (Self::Int16(_), FieldKind::Int16)
            | (Self::Int32(_), FieldKind::Int32)
            | (Self::Int64(_), FieldKind::Int64)
            | (Self::Float32(_), FieldKind::Float32)
            | (Self::Float64(_), FieldKind::Float64)
            | (Self::BigInteger(_), FieldKind::BigInteger)
            | (Self::Decimal(_), FieldKind::Decimal)
            | (Self::AtomicInt32(_), FieldKind::AtomicInt32)
            | (Self::AtomicInt64(_), FieldKind::AtomicInt64)
            | (Self::DateTime(_), FieldKind::DateTime)
            | (Self::Date(_), FieldKind::Date)
            | (Self::Time(_), FieldKind::Time)
            | (Self::Timestamp(_), FieldKind::Timestamp)
            | (Self::Calendar(_), FieldKind::Calendar)
            | (Self::ZonedDateTime(_), FieldKind::ZonedDateTime)
            | (Self::LocalDate(_), FieldKind::LocalDate)
            | (Self::LocalTime(_), FieldKind::LocalTime)
            | (Self::LocalDateTime(_), FieldKind::LocalDateTime)
            | (Self::Duration(_), FieldKind::Duration)
            | (Self::Period(_), FieldKind::Period)
            | (Self::Interval { .. }, FieldKind::Interval) => true,
            (Self::Enum(variant), FieldKind::Enum { variants }) => variants.contains(variant),
            _ => false,
        }
    }

    /// Check if this value is the unsupported sentinel.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }

    /// Name of this value's variant, for diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Char(_) => "Char",
            Self::Bool(_) => "Bool",
            Self::Int8(_) => "Int8",
            Self::Int16(_) => "Int16",
            Self::Int32(_) => "Int32",
            Self::Int64(_) => "Int64",
            Self::Float32(_) => "Float32",
            Self::Float64(_) => "Float64",
            Self::BigInteger(_) => "BigInteger",
            Self::Decimal(_) => "Decimal",
            Self::AtomicInt32(_) => "AtomicInt32",
            Self::AtomicInt64(_) => "AtomicInt64",
            Self::DateTime(_) => "DateTime",
            Self::Date(_) => "Date",
            Self::Time(_) => "Time",
            Self::Timestamp(_) => "Timestamp",
            Self::Calendar(_) => "Calendar",
            Self::ZonedDateTime(_) => "ZonedDateTime",
            Self::LocalDate(_) => "LocalDate",
            Self::LocalTime(_) => "LocalTime",
            Self::LocalDateTime(_) => "LocalDateTime",
            Self::Duration(_) => "Duration",
            Self::Period(_) => "Period",
            Self::Interval { .. } => "Interval",
            Self::Enum(_) => "Enum",
            Self::Unsupported => "Unsupported",
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            Self::Int32(i) => Some(i64::from(*i)),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a decimal.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get this value as big-endian magnitude bytes.
    pub fn as_big_integer(&self) -> Option<&[u8]> {
        match self {
            Self::BigInteger(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get this value as a UTC instant.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as an atomic 32-bit counter.
    pub fn as_atomic_i32(&self) -> Option<&AtomicCounter32> {
        match self {
            Self::AtomicInt32(c) => Some(c),
            _ => None,
        }
    }

    /// Try to get this value as an atomic 64-bit counter.
    pub fn as_atomic_i64(&self) -> Option<&AtomicCounter64> {
        match self {
            Self::AtomicInt64(c) => Some(c),
            _ => None,
        }
    }

    /// Try to get this value as an enumeration member.
    pub fn as_enum_variant(&self) -> Option<&str> {
        match self {
            Self::Enum(v) => Some(v),
            _ => None,
        }
    }
}
