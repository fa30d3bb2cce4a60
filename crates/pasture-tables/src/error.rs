//! Error types for table construction and interaction

use thiserror::Error;

/// Table error type
#[derive(Debug, Error)]
pub enum TableError {
	/// Column specification is missing a header or accessor key
	#[error("Invalid column: {0}")]
	InvalidColumn(String),

	/// Two columns share the same accessor key
	#[error("Duplicate column key '{0}'")]
	DuplicateColumn(String),

	/// No column with the given key exists
	#[error("Unknown column '{0}'")]
	UnknownColumn(String),

	/// Button style name is not one of the known variants
	#[error("Unknown button variant '{0}'")]
	UnknownVariant(String),

	/// Page size of zero
	#[error("Page size must be positive, got {0}")]
	InvalidPageSize(usize),

	/// Date format string contains unsupported specifiers
	#[error("Invalid date format '{0}'")]
	InvalidDateFormat(String),

	/// Click on a test id that is not part of the rendered table
	#[error("No rendered target with test id '{0}'")]
	UnknownTarget(String),

	/// Error returned by a host-supplied button callback
	#[error(transparent)]
	Callback(anyhow::Error),

	/// Settings parsed but hold an unusable value
	#[error("Invalid settings: {0}")]
	InvalidSettings(String),

	/// Settings could not be parsed
	#[error("Settings error: {0}")]
	Settings(#[from] toml::de::Error),

	/// Settings file could not be read
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_callback_error_is_transparent() {
		let err = TableError::Callback(anyhow::anyhow!("delete failed"));
		assert_eq!(err.to_string(), "delete failed");
	}

	#[test]
	fn test_duplicate_column_message() {
		let err = TableError::DuplicateColumn("id".to_string());
		assert_eq!(err.to_string(), "Duplicate column key 'id'");
	}
}
