// src/encoders/util.rs
// Utility functions for encoders.

use chrono::{DateTime, Utc};

/// The timestamp pattern used for the `@timestamp` field.
///
/// Note `%Y` is the calendar year. The week-based year (`%G`) prints a
/// different value around ISO week boundaries, e.g. 2019-12-30 falls in
/// ISO week 2020-W01, and must never be used here.
const TIMESTAMP_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Formats a timestamp into a string buffer.
/// Example output: "2017-05-03T05:45:28.241+0000" (millisecond precision,
/// UTC, numeric zone offset). Lexicographic order of two formatted values
/// matches the chronological order of their instants.
pub fn write_timestamp(buf: &mut String, timestamp: &DateTime<Utc>) {
  use std::fmt::Write;
  let _ = write!(buf, "{}", timestamp.format(TIMESTAMP_PATTERN));
}
