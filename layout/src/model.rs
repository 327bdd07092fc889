use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::Level;

/// The structured representation of one log occurrence handed to a layout.
///
/// The host runtime owns event construction; a layout only ever reads it.
/// Every field a formatter consumes is public so hosts can fill events from
/// whatever source they bridge (a tracing layer, a log-record adapter, a
/// replayed journal).
#[derive(Debug, Clone)]
pub struct LogEvent {
  /// Instant the event was emitted.
  pub timestamp: DateTime<Utc>,
  /// The severity level of the event.
  pub level: Level,
  /// Dotted name of the originating logger (e.g. "app.db.pool").
  pub logger_name: String,
  /// Name of the thread that produced the log call. Empty for unnamed
  /// threads.
  pub thread_name: String,
  /// The fully rendered message text. May be empty, multi-line, or contain
  /// non-ASCII characters; no interpolation happens past this point.
  pub message: String,
  /// Ambient key/value context attached to the logging call (e.g. a request
  /// ID). Keys are unique; insertion order carries no meaning.
  pub context: HashMap<String, String>,
}

impl LogEvent {
  /// Creates a new `LogEvent` stamped with the current instant and the
  /// current thread's name.
  pub fn new<S1, S2>(level: Level, logger_name: S1, message: S2) -> Self
  where
    S1: Into<String>,
    S2: Into<String>,
  {
    let thread_name = std::thread::current()
      .name()
      .map(str::to_owned)
      .unwrap_or_default();

    LogEvent {
      timestamp: Utc::now(),
      level,
      logger_name: logger_name.into(),
      thread_name,
      message: message.into(),
      context: HashMap::new(),
    }
  }

  /// Replaces the timestamp with an epoch-millisecond instant, the form the
  /// host runtime carries. Instants outside chrono's representable range
  /// clamp to the epoch.
  pub fn with_timestamp_millis(mut self, millis: i64) -> Self {
    self.timestamp = DateTime::from_timestamp_millis(millis).unwrap_or_default();
    self
  }

  /// The event instant as milliseconds since the epoch.
  pub fn timestamp_millis(&self) -> i64 {
    self.timestamp.timestamp_millis()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trips_epoch_milliseconds() {
    let event =
      LogEvent::new(Level::INFO, "app.foo", "hello").with_timestamp_millis(1_493_790_328_241);
    assert_eq!(event.timestamp_millis(), 1_493_790_328_241);
  }

  #[test]
  fn out_of_range_instants_clamp_to_the_epoch() {
    let event = LogEvent::new(Level::INFO, "app.foo", "hello").with_timestamp_millis(i64::MAX);
    assert_eq!(event.timestamp_millis(), 0);
  }

  #[test]
  fn captures_the_current_thread_name() {
    let handle = std::thread::Builder::new()
      .name("event-origin".to_string())
      .spawn(|| LogEvent::new(Level::DEBUG, "app.bar", "from a named thread"))
      .unwrap();
    let event = handle.join().unwrap();
    assert_eq!(event.thread_name, "event-origin");
  }
}
