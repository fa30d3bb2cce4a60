//! # Pasture Tables
//!
//! Sortable, paginated data tables for admin and listing pages.
//!
//! A [`Table`] is built from [`Column`] specifications and a list of host rows.
//! It keeps its own sort and pagination state, renders into a [`View`] tree
//! with deterministic `data-testid` attributes, and reacts to clicks on
//! headers, page controls and button cells.
//!
//! ## Example
//!
//! ```rust
//! use pasture_tables::{ButtonVariant, CellContext, Column, Outcome, Table};
//!
//! struct Course {
//!     id: i64,
//!     name: String,
//! }
//!
//! let columns = vec![
//!     Column::plain("id", "id", |c: &Course| c.id).unwrap(),
//!     Column::plaintext("Name", |c: &Course| c.name.clone()).unwrap(),
//!     Column::button(
//!         "Delete",
//!         ButtonVariant::Danger,
//!         |cell: &CellContext<'_, Course>| {
//!             println!("delete {}", cell.row().id);
//!             Ok(())
//!         },
//!         "CoursesTable",
//!     )
//!     .unwrap(),
//! ];
//! let data = vec![
//!     Course { id: 2, name: "CS156".to_string() },
//!     Course { id: 1, name: "CS148".to_string() },
//! ];
//!
//! let mut table = Table::new(columns, data).unwrap();
//! table.click("testid-header-id").unwrap();
//! assert_eq!(table.cell_text(1, "Name").as_deref(), Some("CS148"));
//!
//! let outcome = table.click("CoursesTable-cell-row-0-col-Delete-button").unwrap();
//! assert_eq!(outcome, Outcome::Invoked);
//! ```

pub mod column;
pub mod error;
pub mod pagination;
pub mod settings;
pub mod sorting;
pub mod table;
pub mod value;
pub mod view;
pub mod window;

pub use column::{ButtonVariant, CellContext, Column, ColumnKind};
pub use error::{Result, TableError};
pub use pagination::Pagination;
pub use settings::TableSettings;
pub use sorting::{SortDirection, SortState};
pub use table::{Outcome, Table, TableBuilder, TableEvent};
pub use value::CellValue;
pub use view::{ElementView, View};
pub use window::{PageControl, Step, WindowItem, page_window};
