//! Tables module.
//!
//! This module provides sortable, paginated data tables.
//!
//! # Examples
//!
//! ```rust
//! use pasture::tables::{ButtonVariant, CellContext, Column};
//!
//! struct User {
//!     id: i64,
//! }
//!
//! let id = Column::plain("id", "id", |u: &User| u.id).unwrap();
//! let delete = Column::button(
//!     "Delete",
//!     ButtonVariant::Danger,
//!     |_: &CellContext<'_, User>| Ok(()),
//!     "UsersTable",
//! )
//! .unwrap();
//! # let _ = (id, delete);
//! ```

pub use pasture_tables::*;
