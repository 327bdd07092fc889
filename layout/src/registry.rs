//! Explicit, name-based construction of layouts.
//!
//! A [`LayoutRegistry`] maps formatter names to factory closures. Hosts
//! register every formatter they intend to use, then build layouts from
//! attribute bags; nothing is discovered implicitly, so the set of available
//! formatters is exactly the set that was registered.

use crate::config::{process_logstash_config, Attributes, LogstashConfigRaw};
use crate::encoders::logstash::LogstashFormatter;
use crate::encoders::EventFormatter;
use crate::error::{Error, Result};
use crate::error_handling::ErrorReporter;
use crate::layout::Layout;
use std::collections::HashMap;

/// A factory producing a formatter from host-supplied attributes.
/// Configuration errors surface here, at build time.
pub type FormatterFactory =
  Box<dyn Fn(&Attributes) -> Result<Box<dyn EventFormatter>> + Send + Sync>;

pub struct LayoutRegistry {
  factories: HashMap<String, FormatterFactory>,
}

impl LayoutRegistry {
  /// An empty registry. Most hosts want [`with_builtin`](Self::with_builtin).
  pub fn new() -> Self {
    LayoutRegistry {
      factories: HashMap::new(),
    }
  }

  /// A registry with the built-in `logstash` formatter already registered.
  pub fn with_builtin() -> Self {
    let mut registry = Self::new();
    registry.factories.insert(
      LogstashFormatter::NAME.to_string(),
      Box::new(|attrs: &Attributes| {
        let raw = LogstashConfigRaw::from_attributes(attrs)?;
        let config = process_logstash_config(raw)?;
        Ok(Box::new(LogstashFormatter::new(config)) as Box<dyn EventFormatter>)
      }),
    );
    registry
  }

  /// Registers a formatter factory under `name`. Names are unique: a second
  /// registration under the same name is rejected rather than silently
  /// replacing the first.
  pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<()>
  where
    F: Fn(&Attributes) -> Result<Box<dyn EventFormatter>> + Send + Sync + 'static,
  {
    let name = name.into();
    if self.factories.contains_key(&name) {
      return Err(Error::DuplicateFormatter(name));
    }
    self.factories.insert(name, Box::new(factory));
    Ok(())
  }

  pub fn contains(&self, name: &str) -> bool {
    self.factories.contains_key(name)
  }

  /// Registered names, sorted for stable diagnostics.
  pub fn names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
  }

  /// Builds a ready-to-use [`Layout`] from the factory registered under
  /// `name`. The factory validates `attrs`; once this returns `Ok`, the
  /// layout's formatting path is total and reports failures through
  /// `reporter` instead of returning errors.
  pub fn build(&self, name: &str, attrs: &Attributes, reporter: ErrorReporter) -> Result<Layout> {
    let factory = self
      .factories
      .get(name)
      .ok_or_else(|| Error::UnknownFormatter(name.to_string()))?;
    let formatter = factory(attrs)?;
    Ok(Layout::new(name, formatter, reporter))
  }
}

impl Default for LayoutRegistry {
  /// The default registry already carries the builtin formatter: this is
  /// [`with_builtin`](Self::with_builtin), not [`new`](Self::new).
  fn default() -> Self {
    Self::with_builtin()
  }
}
