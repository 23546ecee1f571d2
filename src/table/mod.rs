//! # Parameter Table
//!
//! This module provides the parameter table used while fitting spectra: for a
//! fixed, ordered set of named parameters it tracks a status, a value, bounds
//! and an error interval, and lets any combination of them be read or written
//! through one addressing scheme.
//!
//! ## Key Features
//!
//! - **Flexible addressing**: by column (`"Value"`), by parameter (`"p1"`), or by
//!   cell (`("p1", "Value")` or `("Value", "p1")`)
//! - **Status synonyms**: "fixed", "glue", "thaw", "bind_p2", ... resolve to
//!   free, frozen or tied
//! - **Ties by assignment**: assigning one parameter's row to another ties them
//! - **Per-cell rollback**: cells left invalid by a write are restored
//!   individually; the rest of the write stands
//!
//! ## Core Components
//!
//! - [`ParameterTable`]: the table and its read/write protocol
//! - [`Status`] and [`resolve_status`]: canonical statuses and synonym resolution
//! - [`Index`], [`Address`], [`WriteValue`]: what a call refers to and carries
//! - [`WriteReport`] and [`Diagnostic`]: everything a write could not apply
//! - [`TabularExport`]: column-oriented export with a leading `Param` column
//!
//! ## Example Usage
//!
//! ```rust
//! use paramtable_rs::table::{Attribute, Cell, ParameterTable, Status, WriteValue};
//!
//! let mut table = ParameterTable::create(["p1_spectrum1", "p2_spectrum1"], false).unwrap();
//!
//! // Several attributes of one parameter at once
//! table
//!     .set(
//!         "p1_spectrum1",
//!         WriteValue::mapping([
//!             ("Status", Cell::from("fixed")),
//!             ("Value", Cell::from(4)),
//!             ("Bounds", Cell::from((1, 50))),
//!         ]),
//!     )
//!     .unwrap();
//!
//! assert_eq!(table.status("p1_spectrum1"), Some(&Status::Frozen));
//! assert_eq!(table.value("p1_spectrum1"), Some(4.0));
//!
//! // Invalid input is reported, not applied
//! let report = table.set(("p2_spectrum1", "Value"), "lots").unwrap();
//! assert!(!report.is_clean());
//! assert_eq!(table.cell("p2_spectrum1", Attribute::Value), Some(&Cell::Number(1.0)));
//! ```

pub mod address;
pub mod attribute;
pub mod bounds;
pub mod cell;
pub mod diagnostics;
pub mod export;
pub mod parameter_table;
pub mod status;
pub mod store;
pub mod validate;
pub mod views;


// Re-export key types
pub use address::{Address, AddressError, Index, SeriesRef, WriteValue};
pub use attribute::Attribute;
pub use bounds::{Bounds, ErrorInterval};
pub use cell::Cell;
pub use diagnostics::{Diagnostic, TieRejection, WriteReport};
pub use export::{ExportColumn, TabularExport};
pub use parameter_table::ParameterTable;
pub use status::{resolve_status, Status};
pub use store::{CellStore, Row};
pub use views::{Column, ParameterRow, Selection};
