//! Temporal draws that do not go through the date window.

use chrono::{DateTime, Duration, Months, Utc};
use rand::Rng;

/// Draw a duration of `abs(random i64)` milliseconds.
pub fn random_duration<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::milliseconds(rng.gen::<i64>().checked_abs().unwrap_or(i64::MAX))
}

/// Draw a calendar period of `abs(random i32)` months.
pub fn random_period<R: Rng + ?Sized>(rng: &mut R) -> Months {
    Months::new(rng.gen::<i32>().unsigned_abs())
}

/// Draw an interval whose end never precedes its start.
///
/// Start and width are drawn as nonnegative millisecond offsets from
/// the epoch, so the end is start plus a nonnegative width.
pub fn random_interval<R: Rng + ?Sized>(rng: &mut R) -> (DateTime<Utc>, DateTime<Utc>) {
    let start_ms = i64::from(rng.gen::<i32>().unsigned_abs());
    let width_ms = i64::from(rng.gen::<i32>().unsigned_abs());

    let start = DateTime::from_timestamp_millis(start_ms).unwrap_or(DateTime::UNIX_EPOCH);
    let end = DateTime::from_timestamp_millis(start_ms + width_ms).unwrap_or(start);
    (start, end)
}
