//! Row-major cell storage with copy-on-write snapshots.

use crate::table::attribute::Attribute;
use crate::table::cell::Cell;
use std::collections::HashMap;
use std::sync::Arc;

/// One parameter's cells, indexed by [`Attribute::index`].
pub type Row = [Cell; 4];

/// Parameter × attribute cells.
///
/// Row keys are fixed at construction. Cell contents are shared with any live
/// snapshot until the first write after it is taken.
#[derive(Debug, Clone)]
pub struct CellStore {
    names: Vec<String>,
    lookup: HashMap<String, usize>,
    rows: Arc<Vec<Row>>,
}

/// Immutable view of every cell at the moment it was taken.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    rows: Arc<Vec<Row>>,
}

impl Snapshot {
    pub(crate) fn cell(&self, row: usize, attr: Attribute) -> &Cell {
        &self.rows[row][attr.index()]
    }
}

impl CellStore {
    /// Build a store from names and their rows. Callers guarantee the names
    /// are unique and that there is one row per name.
    pub(crate) fn new(names: Vec<String>, rows: Vec<Row>) -> Self {
        debug_assert_eq!(names.len(), rows.len());
        let lookup = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            names,
            lookup,
            rows: Arc::new(rows),
        }
    }

    /// Parameter names in construction order.
    pub fn row_names(&self) -> &[String] {
        &self.names
    }

    /// The four column names in display order.
    pub fn column_names() -> [&'static str; 4] {
        Attribute::ALL.map(Attribute::name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Row index of a parameter name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Cell of a parameter by name; `None` for an unknown name.
    pub fn cell(&self, name: &str, attr: Attribute) -> Option<&Cell> {
        self.position(name).map(|row| self.get_cell(row, attr))
    }

    // Positional accessors below expect `row < len()`.

    pub(crate) fn name(&self, row: usize) -> &str {
        &self.names[row]
    }

    pub(crate) fn get_cell(&self, row: usize, attr: Attribute) -> &Cell {
        &self.rows[row][attr.index()]
    }

    pub(crate) fn row(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    /// Overwrite a cell without any checks. Every caller must run the
    /// validator before handing control back to the user.
    pub(crate) fn set_cell_raw(&mut self, row: usize, attr: Attribute, value: Cell) {
        Arc::make_mut(&mut self.rows)[row][attr.index()] = value;
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: Arc::clone(&self.rows),
        }
    }

    /// Put back the snapshot's content for a single cell.
    pub(crate) fn restore_cell(&mut self, row: usize, attr: Attribute, snapshot: &Snapshot) {
        let previous = snapshot.cell(row, attr).clone();
        self.set_cell_raw(row, attr, previous);
    }
}
