//! Table settings
//!
//! Settings are plain serde data, usually read from a flat TOML
//! document:
//!
//! ```toml
//! page_size = 25
//! table_id = "CoursesTable"
//! date_format = "%Y-%m-%d %H:%M"
//! ```
//!
//! Missing keys fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::column::datetime::{self, DEFAULT_DATE_FORMAT};
use crate::error::{Result, TableError};
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Default id namespace for generated test ids
pub const DEFAULT_TABLE_ID: &str = "testid";

/// Display settings for a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Rows per page
	pub page_size: usize,
	/// Namespace for generated test ids
	pub table_id: String,
	/// Format for date columns without their own format
	pub date_format: String,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			table_id: DEFAULT_TABLE_ID.to_string(),
			date_format: DEFAULT_DATE_FORMAT.to_string(),
		}
	}
}

impl TableSettings {
	/// Parses and validates settings from a TOML string
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads settings from a TOML file
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "Loading table settings");
		Self::from_toml_str(&content)
	}

	/// Checks that the settings can drive a table
	pub fn validate(&self) -> Result<()> {
		if self.page_size == 0 {
			return Err(TableError::InvalidPageSize(self.page_size));
		}
		if self.table_id.trim().is_empty() {
			return Err(TableError::InvalidSettings(
				"table id must not be empty".to_string(),
			));
		}
		datetime::validate_date_format(&self.date_format)
	}
}
