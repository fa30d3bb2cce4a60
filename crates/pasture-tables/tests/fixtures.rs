//! Shared test fixtures for pasture-tables tests
//!
//! Rows mirror a typical admin listing: two text columns, a click-me button,
//! a creation date and a multi-line log.

// Not every test file uses every fixture.
#![allow(dead_code)]
#![allow(unreachable_pub)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pasture_tables::{ButtonVariant, CellContext, Column, Table};
use rstest::fixture;

/// Test id of the button column's namespace
pub const BUTTON_TABLE_ID: &str = "testId";

#[derive(Debug, Clone)]
pub struct TestRow {
	pub col1: String,
	pub col2: String,
	pub created_at: String,
	pub log: String,
}

/// Generates `n` rows numbered from 0
pub fn generate_rows(n: usize) -> Vec<TestRow> {
	(0..n)
		.map(|i| TestRow {
			col1: format!("Hello {}", i),
			col2: format!("World {}", i),
			created_at: "2021-04-01T04:00:00.000".to_string(),
			log: format!("foo\nbar\n  baz {}", i),
		})
		.collect()
}

/// Standard column set; clicks on the button column bump `clicks`
pub fn test_columns(clicks: Arc<AtomicUsize>) -> Vec<Column<TestRow>> {
	vec![
		Column::plain("Column 1", "col1", |r: &TestRow| r.col1.clone()).unwrap(),
		Column::plain("Column 2", "col2", |r: &TestRow| r.col2.clone()).unwrap(),
		Column::button(
			"Click",
			ButtonVariant::Primary,
			move |_: &CellContext<'_, TestRow>| {
				clicks.fetch_add(1, Ordering::SeqCst);
				Ok(())
			},
			BUTTON_TABLE_ID,
		)
		.unwrap(),
		Column::date("Date", |r: &TestRow| r.created_at.clone()).unwrap(),
		Column::plaintext("Log", |r: &TestRow| r.log.clone()).unwrap(),
	]
}

/// A table over generated rows plus its click counter
pub struct TableHarness {
	pub table: Table<TestRow>,
	pub clicks: Arc<AtomicUsize>,
}

impl TableHarness {
	pub fn with_rows(n: usize) -> Self {
		let clicks = Arc::new(AtomicUsize::new(0));
		let table = Table::new(test_columns(Arc::clone(&clicks)), generate_rows(n)).unwrap();
		Self { table, clicks }
	}

	/// Number of button callback invocations so far
	pub fn clicks(&self) -> usize {
		self.clicks.load(Ordering::SeqCst)
	}

	/// Whether an element with `test_id` is currently rendered
	pub fn is_rendered(&self, test_id: &str) -> bool {
		self.table.render().find_by_test_id(test_id).is_some()
	}

	/// Text content of the rendered element with `test_id`
	pub fn text_of(&self, test_id: &str) -> Option<String> {
		self.table
			.render()
			.find_by_test_id(test_id)
			.map(|el| el.text_content())
	}

	/// Label of the current page control
	pub fn current_page_label(&self) -> Option<String> {
		self.text_of("testid-current-page-button")
	}

	/// Clicks `test_id`, panicking if it is not rendered
	pub fn click(&mut self, test_id: &str) {
		self.table
			.click(test_id)
			.unwrap_or_else(|e| panic!("click on {} failed: {}", test_id, e));
	}
}

#[fixture]
pub fn three_rows() -> TableHarness {
	TableHarness::with_rows(3)
}

#[fixture]
pub fn thirty_rows() -> TableHarness {
	TableHarness::with_rows(30)
}

#[fixture]
pub fn hundred_rows() -> TableHarness {
	TableHarness::with_rows(100)
}
