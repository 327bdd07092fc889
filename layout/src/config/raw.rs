use crate::config::Attributes;
use crate::error::{Error, Result};
use serde::Deserialize;

// Attribute names as they appear in host configuration. "includeMDC" keeps
// its historical camel-case spelling for compatibility with existing configs.
pub(crate) const ATTR_APPNAME: &str = "appname";
pub(crate) const ATTR_INCLUDE_MDC: &str = "includeMDC";
pub(crate) const ATTR_CHARSET: &str = "charset";

/// Layout configuration as written, before validation.
///
/// Can be deserialized from YAML or assembled from an [`Attributes`] bag;
/// both paths reject unknown keys so that a typo fails loudly instead of
/// silently falling back to a default.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct LogstashConfigRaw {
  /// Application name stamped into every line. Defaults to empty.
  #[serde(default)]
  pub appname: String,
  /// Whether context data is merged into the output. Defaults to true.
  #[serde(rename = "includeMDC", default = "default_include_mdc")]
  pub include_mdc: bool,
  /// Output charset name. `None` means the default, UTF-8.
  #[serde(default)]
  pub charset: Option<String>,
}

fn default_include_mdc() -> bool {
  true
}

impl Default for LogstashConfigRaw {
  fn default() -> Self {
    LogstashConfigRaw {
      appname: String::new(),
      include_mdc: default_include_mdc(),
      charset: None,
    }
  }
}

impl LogstashConfigRaw {
  /// Parses a raw configuration from a YAML document.
  pub fn from_yaml_str(yaml: &str) -> Result<Self> {
    serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse(e.to_string()))
  }

  /// Assembles a raw configuration from an attribute bag, mirroring the
  /// strictness of the YAML path: unknown attribute names are rejected.
  pub fn from_attributes(attrs: &Attributes) -> Result<Self> {
    for key in attrs.keys() {
      if key != ATTR_APPNAME && key != ATTR_INCLUDE_MDC && key != ATTR_CHARSET {
        return Err(Error::InvalidConfigValue {
          field: key.to_string(),
          message: format!(
            "Unknown attribute. Expected one of '{}', '{}' or '{}'.",
            ATTR_APPNAME, ATTR_INCLUDE_MDC, ATTR_CHARSET
          ),
        });
      }
    }

    Ok(LogstashConfigRaw {
      appname: attrs.get(ATTR_APPNAME).unwrap_or_default().to_string(),
      include_mdc: attrs.get_bool_or(ATTR_INCLUDE_MDC, default_include_mdc())?,
      charset: attrs.get(ATTR_CHARSET).map(str::to_owned),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn parses_a_full_yaml_document() {
    let yaml = r#"
appname: "checkout_service"
includeMDC: false
charset: "US-ASCII"
"#;
    let raw = LogstashConfigRaw::from_yaml_str(yaml).unwrap();
    assert_eq!(
      raw,
      LogstashConfigRaw {
        appname: "checkout_service".to_string(),
        include_mdc: false,
        charset: Some("US-ASCII".to_string()),
      }
    );
  }

  #[test]
  fn yaml_defaults_match_the_documented_defaults() {
    let raw = LogstashConfigRaw::from_yaml_str("appname: shop").unwrap();
    assert_eq!(raw.appname, "shop");
    assert!(raw.include_mdc);
    assert_eq!(raw.charset, None);
  }

  #[test]
  fn yaml_rejects_unknown_keys() {
    let err = LogstashConfigRaw::from_yaml_str("appnme: typo").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
  }

  #[test]
  fn assembles_from_attributes() {
    let attrs: Attributes = [
      (ATTR_APPNAME, "shop"),
      (ATTR_INCLUDE_MDC, "false"),
      (ATTR_CHARSET, "UTF-16LE"),
    ]
    .into_iter()
    .collect();

    let raw = LogstashConfigRaw::from_attributes(&attrs).unwrap();
    assert_eq!(
      raw,
      LogstashConfigRaw {
        appname: "shop".to_string(),
        include_mdc: false,
        charset: Some("UTF-16LE".to_string()),
      }
    );
  }

  #[test]
  fn missing_attributes_fall_back_to_defaults() {
    let raw = LogstashConfigRaw::from_attributes(&Attributes::new()).unwrap();
    assert_eq!(raw, LogstashConfigRaw::default());
  }

  #[test]
  fn attributes_reject_unknown_names() {
    let attrs: Attributes = [("color", "red")].into_iter().collect();
    let err = LogstashConfigRaw::from_attributes(&attrs).unwrap_err();
    match err {
      Error::InvalidConfigValue { field, .. } => assert_eq!(field, "color"),
      other => panic!("Expected InvalidConfigValue, got {:?}", other),
    }
  }

  #[test]
  fn attributes_reject_non_boolean_mdc_flags() {
    let attrs: Attributes = [(ATTR_INCLUDE_MDC, "maybe")].into_iter().collect();
    let err = LogstashConfigRaw::from_attributes(&attrs).unwrap_err();
    match err {
      Error::InvalidConfigValue { field, .. } => assert_eq!(field, ATTR_INCLUDE_MDC),
      other => panic!("Expected InvalidConfigValue, got {:?}", other),
    }
  }
}
