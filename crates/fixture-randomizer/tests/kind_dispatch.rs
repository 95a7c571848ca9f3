//! Dispatch-level properties of the field randomizer.

use std::collections::HashSet;

use chrono::Utc;
use fixture_core::{FieldKind, FieldValue};
use fixture_randomizer::FieldRandomizer;

fn supported_kinds() -> Vec<FieldKind> {
    vec![
        FieldKind::Text,
        FieldKind::Char,
        FieldKind::Bool,
        FieldKind::Int8,
        FieldKind::Int16,
        FieldKind::Int32,
        FieldKind::Int64,
        FieldKind::Float32,
        FieldKind::Float64,
        FieldKind::BigInteger,
        FieldKind::Decimal,
        FieldKind::AtomicInt32,
        FieldKind::AtomicInt64,
        FieldKind::DateTime,
        FieldKind::Date,
        FieldKind::Time,
        FieldKind::Timestamp,
        FieldKind::Calendar,
        FieldKind::ZonedDateTime,
        FieldKind::LocalDate,
        FieldKind::LocalTime,
        FieldKind::LocalDateTime,
        FieldKind::Duration,
        FieldKind::Period,
        FieldKind::Interval,
        FieldKind::enumeration(vec![
            "red".to_string(),
            "green".to_string(),
            "blue".to_string(),
        ]),
    ]
}

#[test]
fn every_supported_kind_preserves_its_kind() {
    let mut randomizer = FieldRandomizer::new();

    for kind in supported_kinds() {
        for _ in 0..1000 {
            let value = randomizer.generate(&kind);
            assert!(
                value.matches_kind(&kind),
                "kind {kind:?} produced {value:?}"
            );
        }
    }
}

#[test]
fn windowed_temporal_values_stay_inside_the_snapshot_window() {
    let mut randomizer = FieldRandomizer::new();
    let lower = randomizer.date_range().lower();
    let upper = randomizer.date_range().upper();

    for _ in 0..200 {
        match randomizer.generate(&FieldKind::DateTime) {
            FieldValue::DateTime(dt) => assert!(dt >= lower && dt <= upper),
            other => panic!("expected DateTime, got {other:?}"),
        }
        match randomizer.generate(&FieldKind::Date) {
            FieldValue::Date(d) => {
                assert!(d >= lower.date_naive() && d <= upper.date_naive())
            }
            other => panic!("expected Date, got {other:?}"),
        }
        match randomizer.generate(&FieldKind::Timestamp) {
            FieldValue::Timestamp(ts) => {
                assert!(ts >= lower.naive_utc() && ts <= upper.naive_utc())
            }
            other => panic!("expected Timestamp, got {other:?}"),
        }
        match randomizer.generate(&FieldKind::ZonedDateTime) {
            FieldValue::ZonedDateTime(dt) => {
                let utc = dt.with_timezone(&Utc);
                assert!(utc >= lower && utc <= upper)
            }
            other => panic!("expected ZonedDateTime, got {other:?}"),
        }
        match randomizer.generate(&FieldKind::LocalDate) {
            FieldValue::LocalDate(d) => {
                assert!(d >= lower.date_naive() && d <= upper.date_naive())
            }
            other => panic!("expected LocalDate, got {other:?}"),
        }
        match randomizer.generate(&FieldKind::LocalDateTime) {
            FieldValue::LocalDateTime(ts) => {
                assert!(ts >= lower.naive_utc() && ts <= upper.naive_utc())
            }
            other => panic!("expected LocalDateTime, got {other:?}"),
        }
    }
}

#[test]
fn window_spans_ten_years_either_side_of_construction() {
    let before = Utc::now();
    let randomizer = FieldRandomizer::new();
    let after = Utc::now();

    let lower = randomizer.date_range().lower();
    let upper = randomizer.date_range().upper();

    // Ten calendar years land within [3650, 3653] days of "now".
    assert!(lower >= before - chrono::Duration::days(3653));
    assert!(lower <= after - chrono::Duration::days(3650));
    assert!(upper >= before + chrono::Duration::days(3650));
    assert!(upper <= after + chrono::Duration::days(3653));
}

#[test]
fn enumeration_draws_cover_every_variant() {
    let mut randomizer = FieldRandomizer::new();
    let variants = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
    let kind = FieldKind::enumeration(variants.clone());

    let mut seen = HashSet::new();
    for _ in 0..300 {
        match randomizer.generate(&kind) {
            FieldValue::Enum(variant) => {
                assert!(variants.contains(&variant));
                seen.insert(variant);
            }
            other => panic!("expected Enum, got {other:?}"),
        }
    }

    assert_eq!(seen.len(), variants.len(), "some variant was never drawn");
}

#[test]
fn unrecognized_and_degenerate_kinds_yield_the_sentinel() {
    let mut randomizer = FieldRandomizer::new();

    for kind in [
        FieldKind::Bytes,
        FieldKind::Json,
        FieldKind::array(FieldKind::Text),
        FieldKind::array(FieldKind::array(FieldKind::Int64)),
        FieldKind::enumeration(vec![]),
    ] {
        let value = randomizer.generate(&kind);
        assert!(value.is_unsupported(), "kind {kind:?} produced {value:?}");
        assert!(!value.matches_kind(&kind));
    }
}

#[test]
fn successive_text_draws_are_independent_ten_char_strings() {
    let mut randomizer = FieldRandomizer::new();

    let first = randomizer.generate(&FieldKind::Text);
    let second = randomizer.generate(&FieldKind::Text);

    for value in [&first, &second] {
        match value {
            FieldValue::Text(s) => {
                assert_eq!(s.chars().count(), 10);
                assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
            }
            other => panic!("expected Text, got {other:?}"),
        }
    }
    // The two draws collide only by coincidence, so equality is not
    // asserted either way.
}

#[test]
fn big_integer_draws_never_fail_and_stay_below_one_hundred_bits() {
    let mut randomizer = FieldRandomizer::new();

    for _ in 0..2000 {
        match randomizer.generate(&FieldKind::BigInteger) {
            // 99 bits at most, 13 bytes; an empty buffer is a zero value.
            FieldValue::BigInteger(bytes) => assert!(bytes.len() <= 13),
            other => panic!("expected BigInteger, got {other:?}"),
        }
    }
}

#[test]
fn interval_end_never_precedes_start() {
    let mut randomizer = FieldRandomizer::new();

    for _ in 0..1000 {
        match randomizer.generate(&FieldKind::Interval) {
            FieldValue::Interval { start, end } => assert!(end >= start),
            other => panic!("expected Interval, got {other:?}"),
        }
    }
}
