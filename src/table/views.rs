//! Owned views returned by table reads.

use crate::table::address::{SeriesRef, WriteValue};
use crate::table::attribute::Attribute;
use crate::table::bounds::{Bounds, ErrorInterval};
use crate::table::cell::Cell;
use crate::table::status::Status;
use crate::table::store::Row;
use serde::Serialize;

/// All four cells of one parameter, tagged with the parameter's name.
///
/// Assigning a row to another parameter ties that parameter to this one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRow {
    name: String,
    cells: Row,
}

impl ParameterRow {
    pub(crate) fn new(name: String, cells: Row) -> Self {
        Self { name, cells }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, attr: Attribute) -> &Cell {
        &self.cells[attr.index()]
    }

    pub fn status(&self) -> Option<&Status> {
        self.get(Attribute::Status).as_status()
    }

    pub fn value(&self) -> Option<f64> {
        self.get(Attribute::Value).as_number()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.get(Attribute::Bounds).as_bounds()
    }

    pub fn error(&self) -> Option<ErrorInterval> {
        self.get(Attribute::Error).as_error()
    }

    /// Identity of this row when used as the right-hand side of a write.
    pub fn series(&self) -> SeriesRef {
        SeriesRef {
            name: self.name.clone(),
        }
    }
}

/// One attribute for every parameter, in construction order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    attribute: Attribute,
    entries: Vec<(String, Cell)>,
}

impl Column {
    pub(crate) fn new(attribute: Attribute, entries: Vec<(String, Cell)>) -> Self {
        Self { attribute, entries }
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, cell)| cell)
    }

    pub fn entries(&self) -> &[(String, Cell)] {
        &self.entries
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.entries.iter().map(|(_, cell)| cell)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A column's identity is its attribute name, which never names a
    /// parameter; assigning it to a parameter is reported as an unknown tie.
    pub fn series(&self) -> SeriesRef {
        SeriesRef {
            name: self.attribute.name().to_string(),
        }
    }
}

/// Result of a read.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Column(Column),
    Row(ParameterRow),
    Cell(Cell),
}

impl Selection {
    pub fn into_row(self) -> Option<ParameterRow> {
        match self {
            Selection::Row(row) => Some(row),
            _ => None,
        }
    }

    pub fn into_column(self) -> Option<Column> {
        match self {
            Selection::Column(column) => Some(column),
            _ => None,
        }
    }

    pub fn into_cell(self) -> Option<Cell> {
        match self {
            Selection::Cell(cell) => Some(cell),
            _ => None,
        }
    }
}

impl From<&ParameterRow> for WriteValue {
    fn from(row: &ParameterRow) -> Self {
        WriteValue::Series(row.series())
    }
}

impl From<ParameterRow> for WriteValue {
    fn from(row: ParameterRow) -> Self {
        WriteValue::Series(row.series())
    }
}

impl From<&Column> for WriteValue {
    fn from(column: &Column) -> Self {
        WriteValue::Series(column.series())
    }
}

impl From<Column> for WriteValue {
    fn from(column: Column) -> Self {
        WriteValue::Series(column.series())
    }
}
