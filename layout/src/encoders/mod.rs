// Defines strategies for formatting LogEvents into byte streams.

use crate::error::Result;
use crate::model::LogEvent;

pub mod logstash;
pub mod util;

/// Trait for types that can format a `LogEvent` into a byte vector.
///
/// Implementations produce exactly one line per event: the rendered text is
/// newline-terminated and the whole line, terminator included, is encoded in
/// the formatter's configured charset. Formatters hold no mutable state, so a
/// single instance can be shared across threads.
pub trait EventFormatter: Send + Sync + 'static {
  /// Formats the given `LogEvent` into a `Vec<u8>`.
  fn format_event(&self, event: &LogEvent) -> Result<Vec<u8>>;
}
