//! # Pasture
//!
//! Admin and listing page components for Rust web applications.
//!
//! ## Feature Flags
//!
//! - `tables` (default) - Sortable, paginated data tables
//!
//! ## Quick Example
//!
//! ```rust
//! use pasture::prelude::*;
//!
//! let table = Table::new(
//!     vec![Column::plain("Value", "value", |n: &u32| *n).unwrap()],
//!     (0..30).collect(),
//! )
//! .unwrap();
//!
//! assert_eq!(table.page_controls().len(), 5);
//! assert!(table.render_to_string().contains(r#"class="pagination""#));
//! ```

#[cfg(feature = "tables")]
pub mod tables;

#[cfg(feature = "tables")]
pub use pasture_tables::{Column, Table, TableError, TableSettings};

/// Prelude module for convenient imports
///
/// ```rust
/// use pasture::prelude::*;
/// ```
pub mod prelude {
	#[cfg(feature = "tables")]
	pub use crate::tables::{
		ButtonVariant, CellContext, CellValue, Column, Outcome, PageControl, SortDirection, Table,
		TableError, TableEvent, TableSettings, View,
	};
}
