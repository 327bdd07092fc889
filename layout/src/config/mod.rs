// src/config/mod.rs
// This module handles configuration parsing and validation.

pub mod attributes; // String key/value input, as a host's config tree supplies it
pub mod raw; // Structs directly mapping to YAML/attribute structure
pub mod processed; // Structs representing validated and processed configuration

pub use attributes::Attributes;
pub use processed::{process_logstash_config, LogstashConfig};
pub use raw::LogstashConfigRaw;
