// examples/stdout_host.rs

use logstash_layout::error_handling;
use logstash_layout::{Attributes, InternalErrorSource, LayoutRegistry, LogEvent};
use std::io::Write;
use std::thread;
use tracing::Level;

fn main() {
  // --- Setup Phase ---
  println!("--- Building layouts ---");
  let registry = LayoutRegistry::with_builtin();
  let (reporter, error_rx) = error_handling::channel(64);

  let mut attrs = Attributes::new();
  attrs
    .set("appname", "checkout_service")
    .set("includeMDC", "true")
    .set("charset", "UTF-8");
  let layout = registry
    .build("logstash", &attrs, reporter.clone())
    .expect("Failed to build the logstash layout");

  // A second layout with a strict charset, to demonstrate the failure path.
  let mut ascii_attrs = Attributes::new();
  ascii_attrs
    .set("appname", "checkout_service")
    .set("charset", "US-ASCII");
  let ascii_layout = registry
    .build("logstash", &ascii_attrs, reporter.clone())
    .expect("Failed to build the US-ASCII layout");

  // --- Error Consumer Phase ---
  println!("Internal error channel is active. Spawning error consumer thread.");
  let consumer = thread::spawn(move || {
    let mut received = 0;
    while let Ok(report) = error_rx.recv() {
      println!("\n!!! [Error Consumer] Received Internal Error Report !!!");
      println!("  Source:    {}", report.source);
      println!("  Message:   {}", report.error_message);
      println!("  Timestamp: {}", report.timestamp);
      let InternalErrorSource::EventFormatting { layout_name } = &report.source;
      assert_eq!(layout_name, "logstash");
      received += 1;
    }
    received
  });

  // --- Formatting Phase ---
  println!("\n--- Formatting events ---");
  let stdout = std::io::stdout();

  let mut event = LogEvent::new(
    Level::INFO,
    "com.example.checkout.CartController",
    "order submitted",
  );
  event
    .context
    .insert("requestId".to_string(), "abc123".to_string());
  stdout
    .lock()
    .write_all(&layout.format(&event))
    .expect("stdout write failed");

  let warn_event = LogEvent::new(
    Level::WARN,
    "com.example.checkout.PaymentGateway",
    "retrying capture",
  );
  stdout
    .lock()
    .write_all(&layout.format(&warn_event))
    .expect("stdout write failed");

  // A message US-ASCII cannot carry: the layout returns an empty buffer and
  // files a report instead of failing the write path.
  let bad_event = LogEvent::new(
    Level::ERROR,
    "com.example.checkout.MenuService",
    "café unavailable",
  );
  let bytes = ascii_layout.format(&bad_event);
  assert!(bytes.is_empty());
  println!(
    "US-ASCII layout produced {} bytes for the non-ASCII event.",
    bytes.len()
  );

  // --- Shutdown Phase ---
  // Dropping every reporter clone disconnects the channel and ends the consumer.
  drop(layout);
  drop(ascii_layout);
  drop(reporter);
  let received = consumer.join().expect("error consumer panicked");
  assert_eq!(received, 1);
  println!("\nExample complete.");
}
