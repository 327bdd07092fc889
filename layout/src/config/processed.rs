// src/config/processed.rs
use crate::charset::Charset;
use crate::config::raw::{LogstashConfigRaw, ATTR_CHARSET};
use crate::error::{Error, Result};

/// Validated layout configuration, ready to hand to a formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct LogstashConfig {
  /// Application name stamped into every line, verbatim.
  pub app_name: String,
  /// Whether context data is merged into the output.
  pub include_context: bool,
  /// Output charset, resolved from its configured name.
  pub charset: Charset,
}

impl Default for LogstashConfig {
  fn default() -> Self {
    LogstashConfig {
      app_name: String::new(),
      include_context: true,
      charset: Charset::default(),
    }
  }
}

// --- Conversion and Validation Logic ---

/// Processes the raw, deserialized configuration into a validated internal
/// representation. The charset name is resolved here, so a bad name fails at
/// configuration time rather than on the first formatted event.
pub fn process_logstash_config(raw: LogstashConfigRaw) -> Result<LogstashConfig> {
  let charset = match raw.charset.as_deref() {
    None | Some("") => Charset::default(),
    Some(name) => Charset::from_name(name).ok_or_else(|| Error::InvalidConfigValue {
      field: ATTR_CHARSET.to_string(),
      message: format!(
        "Unknown charset '{}'. Expected UTF-8, US-ASCII, ISO-8859-1, UTF-16, UTF-16BE, or UTF-16LE.",
        name
      ),
    })?,
  };

  Ok(LogstashConfig {
    app_name: raw.appname,
    include_context: raw.include_mdc,
    charset,
  })
}
