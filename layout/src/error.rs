use thiserror::Error;

/// Errors that can occur within the layout library.
#[derive(Error, Debug)]
pub enum Error {
  /// An error occurred while parsing raw configuration input.
  #[error("Failed to parse configuration: {0}")]
  ConfigParse(String),

  /// A configuration value was syntactically valid but semantically wrong,
  /// such as an unknown charset name or a non-boolean flag.
  #[error("Invalid configuration value for '{field}': {message}")]
  InvalidConfigValue { field: String, message: String },

  /// A layout was requested under a name no factory was registered for.
  #[error("No formatter registered under the name '{0}'")]
  UnknownFormatter(String),

  /// A factory registration collided with an existing name.
  #[error("A formatter is already registered under the name '{0}'")]
  DuplicateFormatter(String),

  /// A log event could not be rendered or encoded.
  #[error("Failed to serialize log event: {0}")]
  Serialization(String),
}

/// A specialized `Result` type for this crate's operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
