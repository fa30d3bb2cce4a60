//! Column definitions
//!
//! A table's columns form a closed set of kinds, see [`ColumnKind`]:
//! - plain columns render their accessor value verbatim
//! - date columns format their accessor value as a date/time
//! - button columns render an action button wired to a host callback

pub mod base;
pub mod button;
pub mod datetime;

pub use base::{Accessor, Column, ColumnKind};
pub use button::{ButtonCallback, ButtonVariant, CellContext};
pub use datetime::DEFAULT_DATE_FORMAT;
