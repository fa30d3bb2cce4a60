//! Sorting functionality for tables

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	#[default]
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Header indicator shown next to the sorted column
	pub fn indicator(&self) -> &'static str {
		match self {
			Self::Ascending => "🔼",
			Self::Descending => "🔽",
		}
	}
}

/// Which column the rows are ordered by
///
/// With no active column rows keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
	active: Option<String>,
	direction: SortDirection,
}

impl SortState {
	/// Unsorted state
	pub fn new() -> Self {
		Self::default()
	}

	/// Key of the active column
	pub fn active(&self) -> Option<&str> {
		self.active.as_deref()
	}

	/// Current direction, meaningful only while a column is active
	pub fn direction(&self) -> SortDirection {
		self.direction
	}

	/// Returns whether `key` is the active column
	pub fn is_active(&self, key: &str) -> bool {
		self.active.as_deref() == Some(key)
	}

	/// Indicator for the header of `key`, `None` when it is not active
	pub fn indicator_for(&self, key: &str) -> Option<&'static str> {
		self.is_active(key).then(|| self.direction.indicator())
	}

	/// Activates `key`
	///
	/// Toggles the direction if `key` is already active, otherwise makes it
	/// the active column in ascending order.
	pub fn activate(self, key: &str) -> Self {
		if self.is_active(key) {
			Self {
				direction: self.direction.toggle(),
				..self
			}
		} else {
			Self {
				active: Some(key.to_string()),
				direction: SortDirection::Ascending,
			}
		}
	}
}

/// Orders row indices by the values `key` extracts
///
/// The sort is stable in both directions: rows with equal values keep their
/// relative insertion order whether ascending or descending.
pub fn sort_indices<R, F>(rows: &[R], key: F, direction: SortDirection) -> Vec<usize>
where
	F: Fn(&R) -> CellValue,
{
	let keys: Vec<CellValue> = rows.iter().map(key).collect();
	let mut indices: Vec<usize> = (0..rows.len()).collect();
	indices.sort_by(|&a, &b| {
		let ord = keys[a].natural_cmp(&keys[b]);
		match direction {
			SortDirection::Ascending => ord,
			SortDirection::Descending => ord.reverse(),
		}
	});
	indices
}
