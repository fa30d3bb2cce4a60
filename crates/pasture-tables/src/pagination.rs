//! Pagination state machine
//!
//! [`Pagination`] is a small `Copy` value. Every navigation operation is a
//! pure transition that returns the next state, clamped into
//! `[1, total_pages]`, so an out-of-range request is either a boundary move or
//! a no-op and never an error.

use std::ops::Range;

use crate::error::{Result, TableError};

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	page_size: usize,
	total_rows: usize,
	current_page: usize,
}

impl Pagination {
	/// Creates pagination on page 1
	///
	/// # Errors
	///
	/// Returns [`TableError::InvalidPageSize`] when `page_size` is zero.
	pub fn new(page_size: usize, total_rows: usize) -> Result<Self> {
		if page_size == 0 {
			return Err(TableError::InvalidPageSize(page_size));
		}
		Ok(Self {
			page_size,
			total_rows,
			current_page: 1,
		})
	}

	/// Number of rows per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Total number of rows
	pub fn total_rows(&self) -> usize {
		self.total_rows
	}

	/// Current page number (1-indexed)
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Returns the total number of pages, at least 1
	pub fn total_pages(&self) -> usize {
		self.total_rows.div_ceil(self.page_size).max(1)
	}

	/// Returns whether page controls are shown at all
	pub fn is_visible(&self) -> bool {
		self.total_rows > self.page_size
	}

	/// Returns whether a previous page exists
	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}

	/// Returns whether a next page exists
	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages()
	}

	/// Index range of the rows on the current page
	pub fn row_range(&self) -> Range<usize> {
		let start = ((self.current_page - 1) * self.page_size).min(self.total_rows);
		let end = (start + self.page_size).min(self.total_rows);
		start..end
	}

	/// Moves to `page`, clamped into `[1, total_pages]`
	pub fn go_to(self, page: usize) -> Self {
		Self {
			current_page: page.clamp(1, self.total_pages()),
			..self
		}
	}

	/// Moves to page 1
	pub fn first(self) -> Self {
		self.go_to(1)
	}

	/// Moves to the last page
	pub fn last(self) -> Self {
		self.go_to(self.total_pages())
	}

	/// Moves one page back
	pub fn previous(self) -> Self {
		self.jump_backward(1)
	}

	/// Moves one page forward
	pub fn next(self) -> Self {
		self.jump_forward(1)
	}

	/// Moves `n` pages forward
	pub fn jump_forward(self, n: usize) -> Self {
		self.go_to(self.current_page.saturating_add(n))
	}

	/// Moves `n` pages back
	pub fn jump_backward(self, n: usize) -> Self {
		self.go_to(self.current_page.saturating_sub(n))
	}

	/// Updates the row count, keeping the current page in range
	pub fn with_total_rows(self, total_rows: usize) -> Self {
		let updated = Self { total_rows, ..self };
		updated.go_to(self.current_page)
	}

	/// Replaces the row count and returns to page 1
	pub fn reset(self, total_rows: usize) -> Self {
		Self {
			total_rows,
			current_page: 1,
			..self
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn hundred_rows() -> Pagination {
		Pagination::new(DEFAULT_PAGE_SIZE, 100).unwrap()
	}

	#[test]
	fn test_total_pages() {
		assert_eq!(hundred_rows().total_pages(), 10);
		assert_eq!(Pagination::new(10, 101).unwrap().total_pages(), 11);
		assert_eq!(Pagination::new(10, 0).unwrap().total_pages(), 1);
	}

	#[test]
	fn test_zero_page_size_rejected() {
		assert!(matches!(
			Pagination::new(0, 10),
			Err(TableError::InvalidPageSize(0))
		));
	}

	#[test]
	fn test_visibility() {
		assert!(!Pagination::new(10, 0).unwrap().is_visible());
		assert!(!Pagination::new(10, 10).unwrap().is_visible());
		assert!(Pagination::new(10, 11).unwrap().is_visible());
	}

	#[test]
	fn test_previous_at_first_is_noop() {
		let p = hundred_rows();
		assert_eq!(p.previous(), p);
	}

	#[test]
	fn test_next_at_last_is_noop() {
		let p = hundred_rows().last();
		assert_eq!(p.current_page(), 10);
		assert_eq!(p.next(), p);
	}

	#[test]
	fn test_jumps() {
		assert_eq!(hundred_rows().jump_forward(2).current_page(), 3);
		assert_eq!(hundred_rows().go_to(5).jump_backward(3).current_page(), 2);
		assert_eq!(hundred_rows().go_to(9).jump_forward(3).current_page(), 10);
		assert_eq!(hundred_rows().go_to(2).jump_backward(3).current_page(), 1);
	}

	#[test]
	fn test_go_to_clamps() {
		assert_eq!(hundred_rows().go_to(0).current_page(), 1);
		assert_eq!(hundred_rows().go_to(42).current_page(), 10);
	}

	#[test]
	fn test_row_range() {
		let p = Pagination::new(10, 25).unwrap();
		assert_eq!(p.row_range(), 0..10);
		assert_eq!(p.last().row_range(), 20..25);
		assert_eq!(Pagination::new(10, 0).unwrap().row_range(), 0..0);
	}

	#[test]
	fn test_with_total_rows_clamps_current_page() {
		let p = hundred_rows().last().with_total_rows(35);
		assert_eq!(p.current_page(), 4);
		let p = p.with_total_rows(0);
		assert_eq!(p.current_page(), 1);
	}

	#[test]
	fn test_reset() {
		let p = hundred_rows().go_to(7).reset(100);
		assert_eq!(p.current_page(), 1);
	}
}
