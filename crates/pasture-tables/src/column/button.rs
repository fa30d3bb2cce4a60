//! Action button cells
//!
//! A button column renders one styled `<button>` per row. Clicking it calls
//! the host callback with a [`CellContext`] describing the row; the table does
//! nothing else on its own.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::TableError;
use crate::value::CellValue;

/// Host callback invoked when a button cell is clicked
pub type ButtonCallback<R> = Arc<dyn Fn(&CellContext<'_, R>) -> anyhow::Result<()> + Send + Sync>;

/// Button variant styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
	/// Primary action button (blue)
	Primary,
	/// Secondary action button (gray)
	Secondary,
	/// Success action button (green)
	Success,
	/// Danger action button (red)
	Danger,
	/// Warning action button (yellow)
	Warning,
	/// Informational button (cyan)
	Info,
	/// Light button
	Light,
	/// Dark button
	Dark,
}

impl ButtonVariant {
	/// Lowercase style name, e.g. `"danger"`
	pub fn name(&self) -> &'static str {
		match self {
			ButtonVariant::Primary => "primary",
			ButtonVariant::Secondary => "secondary",
			ButtonVariant::Success => "success",
			ButtonVariant::Danger => "danger",
			ButtonVariant::Warning => "warning",
			ButtonVariant::Info => "info",
			ButtonVariant::Light => "light",
			ButtonVariant::Dark => "dark",
		}
	}

	/// Get CSS class for this variant
	pub fn class(&self) -> String {
		format!("btn btn-{}", self.name())
	}
}

impl fmt::Display for ButtonVariant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for ButtonVariant {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"primary" => Ok(ButtonVariant::Primary),
			"secondary" => Ok(ButtonVariant::Secondary),
			"success" => Ok(ButtonVariant::Success),
			"danger" => Ok(ButtonVariant::Danger),
			"warning" => Ok(ButtonVariant::Warning),
			"info" => Ok(ButtonVariant::Info),
			"light" => Ok(ButtonVariant::Light),
			"dark" => Ok(ButtonVariant::Dark),
			other => Err(TableError::UnknownVariant(other.to_string())),
		}
	}
}

/// What a button callback sees about the clicked cell
pub struct CellContext<'a, R> {
	row: &'a R,
	row_index: usize,
	column: &'a str,
	values: Vec<(&'a str, CellValue)>,
}

impl<'a, R> CellContext<'a, R> {
	pub(crate) fn new(
		row: &'a R,
		row_index: usize,
		column: &'a str,
		values: Vec<(&'a str, CellValue)>,
	) -> Self {
		Self {
			row,
			row_index,
			column,
			values,
		}
	}

	/// The clicked row
	pub fn row(&self) -> &'a R {
		self.row
	}

	/// Index of the row in the data as supplied by the host
	pub fn row_index(&self) -> usize {
		self.row_index
	}

	/// Key of the button column that was clicked
	pub fn column(&self) -> &str {
		self.column
	}

	/// Value of the row's field under `key`
	pub fn value(&self, key: &str) -> Option<&CellValue> {
		self.values.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
	}

	/// All field values of the row, in column order
	pub fn values(&self) -> impl Iterator<Item = (&str, &CellValue)> {
		self.values.iter().map(|(k, v)| (*k, v))
	}
}

impl<R> fmt::Debug for CellContext<'_, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CellContext")
			.field("row_index", &self.row_index)
			.field("column", &self.column)
			.field("values", &self.values)
			.finish_non_exhaustive()
	}
}
