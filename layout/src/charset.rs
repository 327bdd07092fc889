use crate::error::{Error, Result};
use std::fmt;

/// A validated output character encoding.
///
/// The charset only affects the byte representation of a formatted line;
/// the JSON text itself is identical across encodings. Names are looked up
/// once, at configuration time, so that a bad name fails fast instead of on
/// the first formatted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
  /// UTF-8, the default. Any formatted line can be encoded.
  Utf8,
  /// US-ASCII. Strict: a non-ASCII character in the output is an encoding
  /// failure, surfaced as a serialization error.
  Ascii,
  /// ISO-8859-1. Strict: characters above U+00FF are an encoding failure.
  Latin1,
  /// UTF-16, written big-endian with a leading byte-order mark.
  Utf16,
  /// UTF-16 big-endian, no byte-order mark.
  Utf16Be,
  /// UTF-16 little-endian, no byte-order mark.
  Utf16Le,
}

impl Default for Charset {
  fn default() -> Self {
    Charset::Utf8
  }
}

impl Charset {
  /// Looks up a charset by name. Matching ignores case and `-`/`_`
  /// separators, so "UTF-8", "utf8" and "Utf_8" are all equivalent.
  /// Returns `None` for unknown names; configuration processing turns that
  /// into an `InvalidConfigValue` error.
  pub fn from_name(name: &str) -> Option<Self> {
    let mut key = String::with_capacity(name.len());
    for ch in name.trim().chars() {
      if ch != '-' && ch != '_' {
        key.extend(ch.to_lowercase());
      }
    }

    match key.as_str() {
      "utf8" => Some(Charset::Utf8),
      "ascii" | "usascii" => Some(Charset::Ascii),
      "iso88591" | "latin1" => Some(Charset::Latin1),
      "utf16" => Some(Charset::Utf16),
      "utf16be" => Some(Charset::Utf16Be),
      "utf16le" => Some(Charset::Utf16Le),
      _ => None,
    }
  }

  /// Canonical name, as reported in errors and diagnostics.
  pub fn name(&self) -> &'static str {
    match self {
      Charset::Utf8 => "UTF-8",
      Charset::Ascii => "US-ASCII",
      Charset::Latin1 => "ISO-8859-1",
      Charset::Utf16 => "UTF-16",
      Charset::Utf16Be => "UTF-16BE",
      Charset::Utf16Le => "UTF-16LE",
    }
  }

  /// Encodes `text` into this charset.
  ///
  /// UTF-8 and the UTF-16 variants are total. US-ASCII and ISO-8859-1 are
  /// strict: the first unencodable character aborts the whole line with a
  /// serialization error rather than writing replacement bytes.
  pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
    match self {
      Charset::Utf8 => Ok(text.as_bytes().to_vec()),
      Charset::Ascii => {
        if let Some(ch) = text.chars().find(|c| !c.is_ascii()) {
          return Err(self.unencodable(ch));
        }
        Ok(text.as_bytes().to_vec())
      }
      Charset::Latin1 => {
        let mut out = Vec::with_capacity(text.len());
        for ch in text.chars() {
          let code_point = ch as u32;
          if code_point > 0xFF {
            return Err(self.unencodable(ch));
          }
          out.push(code_point as u8);
        }
        Ok(out)
      }
      Charset::Utf16 => {
        let mut out = Vec::with_capacity(2 + text.len() * 2);
        out.extend_from_slice(&[0xFE, 0xFF]);
        for unit in text.encode_utf16() {
          out.extend_from_slice(&unit.to_be_bytes());
        }
        Ok(out)
      }
      Charset::Utf16Be => {
        let mut out = Vec::with_capacity(text.len() * 2);
        for unit in text.encode_utf16() {
          out.extend_from_slice(&unit.to_be_bytes());
        }
        Ok(out)
      }
      Charset::Utf16Le => {
        let mut out = Vec::with_capacity(text.len() * 2);
        for unit in text.encode_utf16() {
          out.extend_from_slice(&unit.to_le_bytes());
        }
        Ok(out)
      }
    }
  }

  fn unencodable(&self, ch: char) -> Error {
    Error::Serialization(format!(
      "character {:?} (U+{:04X}) is not representable in {}",
      ch, ch as u32, self.name()
    ))
  }
}

impl fmt::Display for Charset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
