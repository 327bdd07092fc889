// src/encoders/logstash.rs
use super::{util, EventFormatter};
use crate::config::LogstashConfig;
use crate::error::{Error, Result};
use crate::model::LogEvent;
use serde_json::Value;
use std::collections::BTreeMap; // For consistent field order in JSON output
use tracing::Level;

/// Numeric companion to the level name, on the Logstash scale.
fn level_value(level: Level) -> i64 {
  if level == Level::ERROR {
    40_000
  } else if level == Level::WARN {
    30_000
  } else if level == Level::INFO {
    20_000
  } else if level == Level::DEBUG {
    10_000
  } else {
    5_000
  }
}

/// Formats a `LogEvent` as one Logstash-compatible JSON line.
///
/// Every line carries the fixed fields `level`, `level_value`, `logger_name`,
/// `type` (always "log4j2"), `appname`, `@timestamp`, `@version` (always the
/// string "1"), `thread_name` and `message`. When context inclusion is
/// enabled, context pairs are merged in after the fixed fields, so a context
/// key that collides with a fixed field name silently replaces it.
pub struct LogstashFormatter {
  config: LogstashConfig,
}

impl LogstashFormatter {
  /// The name this formatter registers under.
  pub const NAME: &'static str = "logstash";

  pub fn new(config: LogstashConfig) -> Self {
    Self { config }
  }
}

impl EventFormatter for LogstashFormatter {
  fn format_event(&self, event: &LogEvent) -> Result<Vec<u8>> {
    let mut json_map = BTreeMap::new(); // Use BTreeMap for consistent top-level key order

    json_map.insert("level".to_string(), Value::String(event.level.to_string()));
    json_map.insert(
      "level_value".to_string(),
      Value::Number(level_value(event.level).into()),
    );
    json_map.insert(
      "logger_name".to_string(),
      Value::String(event.logger_name.clone()),
    );
    json_map.insert("type".to_string(), Value::String("log4j2".to_string()));
    json_map.insert(
      "appname".to_string(),
      Value::String(self.config.app_name.clone()),
    );

    let mut ts_buf = String::new();
    util::write_timestamp(&mut ts_buf, &event.timestamp);
    json_map.insert("@timestamp".to_string(), Value::String(ts_buf));

    // "@version" is the string "1", not the number 1.
    json_map.insert("@version".to_string(), Value::String("1".to_string()));
    json_map.insert(
      "thread_name".to_string(),
      Value::String(event.thread_name.clone()),
    );
    json_map.insert("message".to_string(), Value::String(event.message.clone()));

    if self.config.include_context {
      // Inserted after the fixed fields: a colliding context key wins.
      for (key, value) in &event.context {
        json_map.insert(key.clone(), Value::String(value.clone()));
      }
    }

    let json_string =
      serde_json::to_string(&json_map).map_err(|e| Error::Serialization(e.to_string()))?;

    self.config.charset.encode(&format!("{}\n", json_string))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::charset::Charset;
  use pretty_assertions::assert_eq;

  fn test_config() -> LogstashConfig {
    LogstashConfig {
      app_name: "test_app".to_string(),
      include_context: true,
      charset: Charset::Utf8,
    }
  }

  fn fixture_event() -> LogEvent {
    let mut event =
      LogEvent::new(Level::INFO, "app.foo", "Test message").with_timestamp_millis(1_493_790_328_241);
    // The harness names threads after the running test function, so pin the
    // thread name the assertions expect.
    event.thread_name = "testThread-63318".to_string();
    event
  }

  fn parse_line(bytes: Vec<u8>) -> serde_json::Value {
    let line = String::from_utf8(bytes).unwrap();
    assert!(line.ends_with('\n'), "missing newline: {:?}", line);
    serde_json::from_str(line.trim_end()).unwrap()
  }

  #[test]
  fn emits_all_required_fields() {
    let formatter = LogstashFormatter::new(test_config());
    let value = parse_line(formatter.format_event(&fixture_event()).unwrap());

    assert_eq!(value.get("level").unwrap().as_str().unwrap(), "INFO");
    assert_eq!(value.get("level_value").unwrap().as_i64().unwrap(), 20_000);
    assert_eq!(value.get("logger_name").unwrap().as_str().unwrap(), "app.foo");
    assert_eq!(value.get("type").unwrap().as_str().unwrap(), "log4j2");
    assert_eq!(value.get("appname").unwrap().as_str().unwrap(), "test_app");
    assert_eq!(
      value.get("@timestamp").unwrap().as_str().unwrap(),
      "2017-05-03T05:45:28.241+0000"
    );
    assert_eq!(value.get("@version").unwrap().as_str().unwrap(), "1");
    assert_eq!(
      value.get("thread_name").unwrap().as_str().unwrap(),
      "testThread-63318"
    );
    assert_eq!(value.get("message").unwrap().as_str().unwrap(), "Test message");
  }

  #[test]
  fn output_is_one_newline_terminated_json_line() {
    let formatter = LogstashFormatter::new(test_config());
    let bytes = formatter.format_event(&fixture_event()).unwrap();
    let line = String::from_utf8(bytes).unwrap();

    assert!(line.ends_with('\n'));
    assert_eq!(line.matches('\n').count(), 1);
    let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
    assert!(value.is_object());
  }

  #[test]
  fn timestamps_sort_like_their_instants() {
    let formatter = LogstashFormatter::new(test_config());
    // A second rollover and a year rollover, both one millisecond apart.
    let pairs = [
      (1_493_790_359_999_i64, 1_493_790_360_000_i64),
      (1_577_836_799_999_i64, 1_577_836_800_000_i64),
    ];

    for (earlier_millis, later_millis) in pairs {
      let earlier = parse_line(
        formatter
          .format_event(&fixture_event().with_timestamp_millis(earlier_millis))
          .unwrap(),
      );
      let later = parse_line(
        formatter
          .format_event(&fixture_event().with_timestamp_millis(later_millis))
          .unwrap(),
      );
      let earlier_ts = earlier.get("@timestamp").unwrap().as_str().unwrap();
      let later_ts = later.get("@timestamp").unwrap().as_str().unwrap();
      assert!(
        earlier_ts < later_ts,
        "{} should sort before {}",
        earlier_ts,
        later_ts
      );
    }
  }

  #[test]
  fn includes_context_data_when_enabled() {
    let formatter = LogstashFormatter::new(test_config());
    let mut event = fixture_event();
    event
      .context
      .insert("requestId".to_string(), "abc123".to_string());

    let value = parse_line(formatter.format_event(&event).unwrap());
    assert_eq!(value.get("requestId").unwrap().as_str().unwrap(), "abc123");
  }

  #[test]
  fn omits_context_data_when_disabled() {
    let mut config = test_config();
    config.include_context = false;
    let formatter = LogstashFormatter::new(config);
    let mut event = fixture_event();
    event
      .context
      .insert("requestId".to_string(), "abc123".to_string());

    let value = parse_line(formatter.format_event(&event).unwrap());
    assert!(value.get("requestId").is_none());
    // The fixed fields are unaffected by the flag.
    assert_eq!(value.get("message").unwrap().as_str().unwrap(), "Test message");
  }

  #[test]
  fn colliding_context_key_shadows_the_fixed_field() {
    let formatter = LogstashFormatter::new(test_config());
    let mut event = fixture_event();
    event
      .context
      .insert("message".to_string(), "override".to_string());

    let value = parse_line(formatter.format_event(&event).unwrap());
    assert_eq!(value.get("message").unwrap().as_str().unwrap(), "override");
  }

  #[test]
  fn escapes_and_round_trips_awkward_messages() {
    let formatter = LogstashFormatter::new(test_config());
    let mut event = fixture_event();
    event.message = "say \"hi\",\nthen stop at the café".to_string();

    let bytes = formatter.format_event(&event).unwrap();
    let line = String::from_utf8(bytes).unwrap();
    // The embedded newline must be escaped, leaving a single physical line.
    assert_eq!(line.matches('\n').count(), 1);

    let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(
      value.get("message").unwrap().as_str().unwrap(),
      "say \"hi\",\nthen stop at the café"
    );
  }

  #[test]
  fn level_value_matches_the_logstash_scale() {
    assert_eq!(level_value(Level::TRACE), 5_000);
    assert_eq!(level_value(Level::DEBUG), 10_000);
    assert_eq!(level_value(Level::INFO), 20_000);
    assert_eq!(level_value(Level::WARN), 30_000);
    assert_eq!(level_value(Level::ERROR), 40_000);
  }

  #[test]
  fn empty_app_name_is_emitted_verbatim() {
    let mut config = test_config();
    config.app_name = String::new();
    let formatter = LogstashFormatter::new(config);

    let value = parse_line(formatter.format_event(&fixture_event()).unwrap());
    assert_eq!(value.get("appname").unwrap().as_str().unwrap(), "");
  }

  #[test]
  fn utf16le_bytes_decode_to_the_same_line() {
    let utf8 = LogstashFormatter::new(test_config());
    let mut le_config = test_config();
    le_config.charset = Charset::Utf16Le;
    let utf16le = LogstashFormatter::new(le_config);

    let event = fixture_event();
    let expected = String::from_utf8(utf8.format_event(&event).unwrap()).unwrap();

    let bytes = utf16le.format_event(&event).unwrap();
    let units: Vec<u16> = bytes
      .chunks(2)
      .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
      .collect();
    assert_eq!(String::from_utf16(&units).unwrap(), expected);
  }

  #[test]
  fn strict_ascii_charset_rejects_non_ascii_output() {
    let mut config = test_config();
    config.charset = Charset::Ascii;
    let formatter = LogstashFormatter::new(config);
    let mut event = fixture_event();
    event.message = "café unavailable".to_string();

    let err = formatter.format_event(&event).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
  }
}
