//! `logstash_layout` - a Logstash-compatible JSON line layout for log events.
//!
//! This crate is the formatting half of a logging pipeline: the host runtime
//! hands it one [`LogEvent`] at a time and writes the returned bytes wherever
//! it likes. Formatters are registered under a name in a [`LayoutRegistry`]
//! and built once at startup from scalar configuration attributes, in the
//! spirit of log4j/logback layout plugins, but without any reflective
//! discovery: the host wires everything up explicitly.

// Declare modules following the file structure
pub mod charset;
pub mod config;
pub mod encoders;
pub mod error;
pub mod error_handling;
pub mod layout;
pub mod model;
pub mod registry;

// Re-export key public types for easier use by library consumers.
pub use charset::Charset;
pub use config::{Attributes, LogstashConfig, LogstashConfigRaw};
pub use encoders::logstash::LogstashFormatter;
pub use encoders::EventFormatter;
pub use error::{Error, Result};
pub use error_handling::{ErrorReporter, InternalErrorReport, InternalErrorSource};
pub use layout::Layout;
pub use model::LogEvent;
pub use registry::LayoutRegistry;
