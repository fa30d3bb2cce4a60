//! Cell values produced by column accessors
//!
//! Accessors map an opaque row to a [`CellValue`]. The value carries both the
//! text shown in a plain cell and the ordering used when the column is sorted.

use std::cmp::Ordering;
use std::fmt;

/// A single value extracted from a row
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
	/// Missing value, rendered as an empty cell
	#[default]
	Empty,
	/// Boolean value
	Bool(bool),
	/// Integer value
	Integer(i64),
	/// Floating point value
	Float(f64),
	/// Text value
	Text(String),
}

impl CellValue {
	/// Returns true for [`CellValue::Empty`]
	pub fn is_empty(&self) -> bool {
		matches!(self, CellValue::Empty)
	}

	/// Returns the text payload, if this is a text value
	pub fn as_str(&self) -> Option<&str> {
		match self {
			CellValue::Text(s) => Some(s),
			_ => None,
		}
	}

	// Empty < Bool < numbers < Text
	fn rank(&self) -> u8 {
		match self {
			CellValue::Empty => 0,
			CellValue::Bool(_) => 1,
			CellValue::Integer(_) | CellValue::Float(_) => 2,
			CellValue::Text(_) => 3,
		}
	}

	/// Compares two values by their natural order
	///
	/// Text compares lexicographically, integers and floats compare
	/// numerically with each other. Values of different kinds order by kind.
	pub fn natural_cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
			(CellValue::Integer(a), CellValue::Integer(b)) => a.cmp(b),
			(CellValue::Integer(a), CellValue::Float(b)) => (*a as f64).total_cmp(b),
			(CellValue::Float(a), CellValue::Integer(b)) => a.total_cmp(&(*b as f64)),
			(CellValue::Float(a), CellValue::Float(b)) => a.total_cmp(b),
			(CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
			_ => self.rank().cmp(&other.rank()),
		}
	}
}

impl fmt::Display for CellValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CellValue::Empty => Ok(()),
			CellValue::Bool(b) => write!(f, "{}", b),
			CellValue::Integer(n) => write!(f, "{}", n),
			CellValue::Float(n) => write!(f, "{}", n),
			CellValue::Text(s) => f.write_str(s),
		}
	}
}

impl From<String> for CellValue {
	fn from(value: String) -> Self {
		CellValue::Text(value)
	}
}

impl From<&str> for CellValue {
	fn from(value: &str) -> Self {
		CellValue::Text(value.to_string())
	}
}

impl From<&String> for CellValue {
	fn from(value: &String) -> Self {
		CellValue::Text(value.clone())
	}
}

impl From<bool> for CellValue {
	fn from(value: bool) -> Self {
		CellValue::Bool(value)
	}
}

macro_rules! impl_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for CellValue {
				fn from(value: $ty) -> Self {
					CellValue::Integer(i64::from(value))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for CellValue {
	fn from(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(n) => CellValue::Integer(n),
			Err(_) => CellValue::Float(value as f64),
		}
	}
}

impl From<usize> for CellValue {
	fn from(value: usize) -> Self {
		CellValue::from(value as u64)
	}
}

impl From<f32> for CellValue {
	fn from(value: f32) -> Self {
		CellValue::Float(f64::from(value))
	}
}

impl From<f64> for CellValue {
	fn from(value: f64) -> Self {
		CellValue::Float(value)
	}
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(CellValue::Empty, Into::into)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_is_verbatim() {
		assert_eq!(CellValue::from("Hello 0").to_string(), "Hello 0");
		assert_eq!(CellValue::from(42_i64).to_string(), "42");
		assert_eq!(CellValue::from(None::<String>).to_string(), "");
	}

	#[test]
	fn test_numbers_compare_numerically() {
		let nine = CellValue::from(9_i64);
		let ten = CellValue::from(10_i64);
		assert_eq!(nine.natural_cmp(&ten), Ordering::Less);
		assert_eq!(
			CellValue::from(2.5_f64).natural_cmp(&CellValue::from(2_i64)),
			Ordering::Greater
		);
	}

	#[test]
	fn test_text_compares_lexicographically() {
		let a = CellValue::from("Hello 10");
		let b = CellValue::from("Hello 9");
		assert_eq!(a.natural_cmp(&b), Ordering::Less);
	}

	#[test]
	fn test_mixed_kinds_order_by_kind() {
		assert_eq!(
			CellValue::Empty.natural_cmp(&CellValue::from(false)),
			Ordering::Less
		);
		assert_eq!(
			CellValue::from(1_000_i64).natural_cmp(&CellValue::from("1")),
			Ordering::Less
		);
	}

	#[test]
	fn test_large_unsigned_becomes_float() {
		assert_eq!(CellValue::from(u64::MAX), CellValue::Float(u64::MAX as f64));
	}
}
