//! Internal error reporting for failures that must not reach the caller.
//!
//! Formatting a log event is deliberately total at the [`Layout`] boundary:
//! a failure yields an empty buffer, never a panic or an `Err`. The failure
//! itself still has to go somewhere a host can see it, so it is wrapped in an
//! [`InternalErrorReport`] and pushed onto a bounded channel. A host that
//! wants visibility drains the receiving end; one that does not simply uses
//! [`ErrorReporter::disabled`] and reports fall back to stderr.
//!
//! [`Layout`]: crate::layout::Layout

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Identifies where an internal error originated.
///
/// Formatting is the only stage that swallows errors; configuration errors
/// fail fast through `Result` and never travel this channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalErrorSource {
  /// A formatter failed while rendering or encoding an event.
  EventFormatting { layout_name: String },
}

impl std::fmt::Display for InternalErrorSource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      InternalErrorSource::EventFormatting { layout_name } => {
        write!(f, "EventFormatting {{ layout_name: \"{}\" }}", layout_name)
      }
    }
  }
}

/// A self-contained description of an internal failure.
#[derive(Debug, Clone)]
pub struct InternalErrorReport {
  /// Where in the pipeline the failure occurred.
  pub source: InternalErrorSource,
  /// The rendered error message.
  pub error_message: String,
  /// Optional free-form context, such as the logger that produced the event.
  pub context: Option<String>,
  /// When the report was created.
  pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl InternalErrorReport {
  pub(crate) fn new<E: std::error::Error + 'static>(
    source: InternalErrorSource,
    error: &E,
    context: Option<String>,
  ) -> Self {
    InternalErrorReport {
      source,
      error_message: error.to_string(),
      context,
      timestamp: chrono::Utc::now(),
    }
  }
}

/// Creates a bounded reporting channel of the given capacity, returning the
/// reporter half for layouts and the receiver half for the host.
pub fn channel(capacity: usize) -> (ErrorReporter, Receiver<InternalErrorReport>) {
  let (tx, rx) = bounded(capacity);
  (ErrorReporter { tx: Some(tx) }, rx)
}

/// The sending half of the internal error channel.
///
/// Cheap to clone; every layout holds one. Reporting never blocks: if the
/// channel is full the report is dropped with a note on stderr, so a host
/// that stops draining cannot stall logging.
#[derive(Clone)]
pub struct ErrorReporter {
  tx: Option<Sender<InternalErrorReport>>,
}

impl ErrorReporter {
  /// A reporter with no channel attached. Reports are written to stderr.
  pub fn disabled() -> Self {
    ErrorReporter { tx: None }
  }

  pub(crate) fn report<E: std::error::Error + 'static>(
    &self,
    source: InternalErrorSource,
    error: &E,
    context: Option<String>,
  ) {
    match &self.tx {
      Some(tx) => {
        let report = InternalErrorReport::new(source, error, context);
        match tx.try_send(report) {
          Ok(()) => {}
          Err(TrySendError::Full(_)) => {
            eprintln!("[logstash_layout:ERROR] Internal error channel full. Dropping error report.");
          }
          Err(TrySendError::Disconnected(report)) => {
            eprintln!(
              "[logstash_layout:ERROR] {}: {}",
              report.source, report.error_message
            );
          }
        }
      }
      None => {
        eprintln!("[logstash_layout:ERROR] {}: {}", source, error);
      }
    }
  }
}
