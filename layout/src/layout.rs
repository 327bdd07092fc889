//! The appender-facing formatting boundary.
//!
//! Appenders call [`Layout::format`] once per event and always get bytes
//! back. A formatter or charset failure must never take the host down with
//! it, so `format` is total: on failure it hands the error to the internal
//! error reporter and returns an empty buffer, which appenders treat as
//! "nothing to write".

use crate::encoders::EventFormatter;
use crate::error_handling::{ErrorReporter, InternalErrorSource};
use crate::model::LogEvent;
use std::fmt;

/// A named formatter bound to an internal error reporter.
pub struct Layout {
  name: String,
  formatter: Box<dyn EventFormatter>,
  reporter: ErrorReporter,
}

impl fmt::Debug for Layout {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Layout")
      .field("name", &self.name)
      .finish_non_exhaustive()
  }
}

impl Layout {
  /// Wraps a formatter. Hosts usually go through
  /// [`LayoutRegistry::build`](crate::registry::LayoutRegistry::build)
  /// instead, which validates configuration first.
  pub fn new(name: impl Into<String>, formatter: Box<dyn EventFormatter>, reporter: ErrorReporter) -> Self {
    Layout {
      name: name.into(),
      formatter,
      reporter,
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Formats one event into an encoded, newline-terminated line.
  ///
  /// Never fails and never panics: a formatting or encoding error produces
  /// an empty buffer, and the error itself travels through the reporter.
  pub fn format(&self, event: &LogEvent) -> Vec<u8> {
    match self.formatter.format_event(event) {
      Ok(bytes) => bytes,
      Err(error) => {
        self.reporter.report(
          InternalErrorSource::EventFormatting {
            layout_name: self.name.clone(),
          },
          &error,
          Some(format!("Event logger: {}", event.logger_name)),
        );
        Vec::new()
      }
    }
  }
}
