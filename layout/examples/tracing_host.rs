// examples/tracing_host.rs
//
// Bridges `tracing` events into a layout: a minimal subscriber layer turns
// each event into a LogEvent, formats it, and writes the line to stdout.

use logstash_layout::{Attributes, ErrorReporter, Layout, LayoutRegistry, LogEvent};
use std::collections::HashMap;
use std::io::Write;
use tracing::field::{Field, Visit};
use tracing::{info, warn, Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::{LookupSpan, Registry};

/// Collects the message and the remaining fields of one tracing event.
struct FieldVisitor<'a> {
  message: &'a mut String,
  context: &'a mut HashMap<String, String>,
}

impl Visit for FieldVisitor<'_> {
  fn record_str(&mut self, field: &Field, value: &str) {
    if field.name() == "message" {
      *self.message = value.to_string();
    } else {
      self
        .context
        .insert(field.name().to_string(), value.to_string());
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
    if field.name() == "message" {
      *self.message = format!("{:?}", value);
    } else {
      self
        .context
        .insert(field.name().to_string(), format!("{:?}", value));
    }
  }
}

struct LogstashLayer {
  layout: Layout,
}

impl<S> Layer<S> for LogstashLayer
where
  S: Subscriber + for<'span> LookupSpan<'span>,
{
  fn on_event(&self, event: &Event, _ctx: Context<'_, S>) {
    let mut message = String::new();
    let mut context = HashMap::new();
    event.record(&mut FieldVisitor {
      message: &mut message,
      context: &mut context,
    });

    let meta = event.metadata();
    let mut log_event = LogEvent::new(*meta.level(), meta.target(), message);
    log_event.context = context;

    let _ = std::io::stdout().lock().write_all(&self.layout.format(&log_event));
  }
}

fn main() {
  let registry = LayoutRegistry::with_builtin();
  let mut attrs = Attributes::new();
  attrs.set("appname", "tracing_demo");
  let layout = registry
    .build("logstash", &attrs, ErrorReporter::disabled())
    .expect("Failed to build the logstash layout");

  let subscriber = Registry::default().with(LogstashLayer { layout });
  tracing::subscriber::with_default(subscriber, || {
    info!(requestId = "abc123", "user logged in");
    warn!(attempts = 3, "password retry limit approaching");
  });
}
