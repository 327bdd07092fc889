use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// An ordered bag of string attributes, the shape configuration arrives in
/// when a host assembles layouts from a config tree rather than from YAML.
///
/// Keys are case-sensitive. Values are uninterpreted strings; typed reads
/// like [`get_bool_or`](Attributes::get_bool_or) validate on access.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Attributes {
  values: BTreeMap<String, String>,
}

impl Attributes {
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets an attribute, replacing any previous value under the same key.
  pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
    self.values.insert(key.into(), value.into());
    self
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.values.get(key).map(String::as_str)
  }

  /// Reads a boolean attribute, falling back to `default` when absent.
  /// Only "true" and "false" (any case, surrounding whitespace ignored) are
  /// accepted; anything else is a configuration error.
  pub fn get_bool_or(&self, key: &str, default: bool) -> Result<bool> {
    match self.get(key) {
      None => Ok(default),
      Some(value) => match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::InvalidConfigValue {
          field: key.to_string(),
          message: format!("Expected 'true' or 'false', got '{}'.", other),
        }),
      },
    }
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.values.keys().map(String::as_str)
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Attributes {
      values: iter
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn set_replaces_previous_values() {
    let mut attrs = Attributes::new();
    attrs.set("appname", "first").set("appname", "second");
    assert_eq!(attrs.get("appname"), Some("second"));
  }

  #[test]
  fn a_fresh_bag_is_empty_until_set() {
    let mut attrs = Attributes::new();
    assert!(attrs.is_empty());
    attrs.set("appname", "shop");
    assert!(!attrs.is_empty());
  }

  #[test]
  fn bool_reads_accept_case_and_whitespace() {
    let attrs: Attributes = [("flag", " TRUE ")].into_iter().collect();
    assert!(attrs.get_bool_or("flag", false).unwrap());
    assert!(!attrs.get_bool_or("missing", false).unwrap());
  }

  #[test]
  fn bool_reads_reject_anything_else() {
    let attrs: Attributes = [("flag", "yes")].into_iter().collect();
    let err = attrs.get_bool_or("flag", true).unwrap_err();
    match err {
      Error::InvalidConfigValue { field, message } => {
        assert_eq!(field, "flag");
        assert!(message.contains("'yes'"));
      }
      other => panic!("Expected InvalidConfigValue, got {:?}", other),
    }
  }

  #[test]
  fn keys_iterate_in_sorted_order() {
    let attrs: Attributes = [("charset", "UTF-8"), ("appname", "shop")]
      .into_iter()
      .collect();
    let keys: Vec<&str> = attrs.keys().collect();
    assert_eq!(keys, vec!["appname", "charset"]);
  }
}
