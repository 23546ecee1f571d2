//! # paramtable-rs
//!
//! `paramtable-rs` keeps the parameter table of a spectral fit: for every
//! named parameter its fitting status (free, frozen, or tied to another
//! parameter), its value, its bounds and its error interval.
//!
//! The library provides:
//! - A table with ordinary or response (gain/offset) defaults
//! - One addressing scheme for reading and writing columns, rows and cells
//! - Free-text status synonyms ("fixed", "thaw", "tie_p1", ...)
//! - Validation after every write, with per-cell rollback of invalid input
//! - Export to a generic column-oriented table
//!
//! ## Basic Usage
//!
//! ```
//! use paramtable_rs::ParameterTable;
//!
//! let mut table = ParameterTable::create(["p1", "p2"], false).unwrap();
//! table.set("p1", "frozen").unwrap();
//! table.set("Value", vec![5.0, 8.0]).unwrap();
//! assert_eq!(table.free_parameters(), vec!["p2"]);
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod table;

// Re-exports for convenience
pub use config::{TableConfig, TableKind};
pub use error::{Result, TableError};
pub use table::ParameterTable;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
