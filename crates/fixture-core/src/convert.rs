//! Conversions from [`FieldValue`] to native Rust types.
//!
//! Consumers that know which kind they asked for extract the payload via
//! `TryFrom`; a mismatched variant reports which variant was found.

use crate::values::FieldValue;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Error returned when a [`FieldValue`] holds a different variant than
/// the conversion expects.
#[derive(Debug, thiserror::Error)]
#[error("expected a {expected} value, got {actual}")]
pub struct KindMismatch {
    expected: &'static str,
    actual: &'static str,
}

impl KindMismatch {
    fn new(expected: &'static str, value: &FieldValue) -> Self {
        Self {
            expected,
            actual: value.variant_name(),
        }
    }
}

impl TryFrom<FieldValue> for bool {
    type Error = KindMismatch;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Bool(b) => Ok(b),
            other => Err(KindMismatch::new("Bool", &other)),
        }
    }
}

impl TryFrom<FieldValue> for i32 {
    type Error = KindMismatch;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Int32(i) => Ok(i),
            other => Err(KindMismatch::new("Int32", &other)),
        }
    }
}

impl TryFrom<FieldValue> for i64 {
    type Error = KindMismatch;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Int64(i) => Ok(i),
            FieldValue::Int32(i) => Ok(i64::from(i)),
            other => Err(KindMismatch::new("Int64", &other)),
        }
    }
}

impl TryFrom<FieldValue> for f64 {
    type Error = KindMismatch;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Float64(f) => Ok(f),
            other => Err(KindMismatch::new("Float64", &other)),
        }
    }
}

impl TryFrom<FieldValue> for char {
    type Error = KindMismatch;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Char(c) => Ok(c),
            other => Err(KindMismatch::new("Char", &other)),
        }
    }
}

impl TryFrom<FieldValue> for String {
    type Error = KindMismatch;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Text(s) => Ok(s),
            FieldValue::Enum(v) => Ok(v),
            other => Err(KindMismatch::new("Text", &other)),
        }
    }
}

impl TryFrom<FieldValue> for Decimal {
    type Error = KindMismatch;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Decimal(d) => Ok(d),
            other => Err(KindMismatch::new("Decimal", &other)),
        }
    }
}

impl TryFrom<FieldValue> for DateTime<Utc> {
    type Error = KindMismatch;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::DateTime(dt) => Ok(dt),
            other => Err(KindMismatch::new("DateTime", &other)),
        }
    }
}
