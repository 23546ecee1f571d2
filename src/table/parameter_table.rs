//! The parameter table and its addressing protocol
//!
//! A [`ParameterTable`] holds status, value, bounds and error for a fixed,
//! ordered set of parameters. Reads and writes address it by column name,
//! parameter name, or a (parameter, column) pair in either order. Every write
//! is followed by a validation pass that restores, cell by cell, anything the
//! write made invalid.

use crate::config::{TableConfig, TableKind};
use crate::error::{Result, TableError};
use crate::table::address::{Address, AddressError, Index, WriteValue};
use crate::table::attribute::Attribute;
use crate::table::bounds::{Bounds, ErrorInterval};
use crate::table::cell::Cell;
use crate::table::diagnostics::{Diagnostic, TieRejection, WriteReport};
use crate::table::export::{ExportColumn, TabularExport, PARAM_COLUMN};
use crate::table::status::{resolve_status, Status};
use crate::table::store::CellStore;
use crate::table::validate::{check_cell, rollback_invalid};
use crate::table::views::{Column, ParameterRow, Selection};
use log::{debug, warn};
use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "optimizer")]
use ndarray::Array1;

/// Parameter table for a fit.
///
/// # Examples
///
/// ```
/// use paramtable_rs::table::{Bounds, ParameterTable, Status};
///
/// let mut table = ParameterTable::create(["p1", "p2"], false).unwrap();
///
/// // Freeze p1 with any accepted synonym
/// table.set("p1", "fixed").unwrap();
/// assert_eq!(table.status("p1"), Some(&Status::Frozen));
///
/// // Set a whole column at once
/// table.set("Value", vec![5.0, 8.0]).unwrap();
/// assert_eq!(table.value("p2"), Some(8.0));
///
/// // Tie p2 to p1 by assigning p1's row to it
/// let p1 = table.row("p1").unwrap();
/// table.set("p2", &p1).unwrap();
/// assert_eq!(table.status("p2"), Some(&Status::Tied("p1".to_string())));
///
/// // Single cells can be addressed in either order
/// table.set(("Bounds", "p1"), (1.0, 50.0)).unwrap();
/// assert_eq!(table.bounds_of("p1"), Some(Bounds::new(1.0, 50.0)));
/// ```
#[derive(Debug, Clone)]
pub struct ParameterTable {
    store: CellStore,
    kind: TableKind,
    config: TableConfig,
}

impl ParameterTable {
    /// Create a table from parameter names; `is_response` selects response
    /// (gain, offset) defaults instead of ordinary ones.
    pub fn create<I, S>(names: I, is_response: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names, TableKind::from_flag(is_response))
    }

    /// Create a table of the given kind with the default configuration.
    pub fn new<I, S>(names: I, kind: TableKind) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(names, kind, TableConfig::default())
    }

    /// Create a table with custom defaults.
    ///
    /// Fails with [`TableError::Configuration`] if `names` is empty, contains
    /// an empty or duplicate name, reuses a column name, has odd length for a
    /// response table, or if the configured defaults are not valid cells.
    pub fn with_config<I, S>(names: I, kind: TableKind, config: TableConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        check_names(&names, kind)?;

        let rows = config.default_rows(kind, names.len());
        let store = CellStore::new(names, rows);

        for row in 0..store.len() {
            for attr in Attribute::ALL {
                let name = store.name(row);
                check_cell(attr, store.get_cell(row, attr), name, |n| store.contains(n)).map_err(
                    |reason| {
                        TableError::Configuration(format!(
                            "default {} for parameter '{}' is invalid: {}",
                            attr, name, reason
                        ))
                    },
                )?;
            }
        }

        debug!("created {:?} parameter table with {} parameters", kind, store.len());

        Ok(Self {
            store,
            kind,
            config,
        })
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Underlying cell storage.
    pub fn store(&self) -> &CellStore {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    /// Parameter names in construction order.
    pub fn row_names(&self) -> &[String] {
        self.store.row_names()
    }

    /// Alias of [`row_names`](Self::row_names).
    pub fn param_names(&self) -> &[String] {
        self.store.row_names()
    }

    /// `["Status", "Value", "Bounds", "Error"]`
    pub fn column_names(&self) -> [&'static str; 4] {
        CellStore::column_names()
    }

    /// Expression that rebuilds this table with its construction defaults.
    pub fn construction_string(&self) -> String {
        format!(
            "ParameterTable::create({:?}, {})",
            self.store.row_names(),
            self.kind.is_response()
        )
    }

    // ---- classification -------------------------------------------------

    /// Classify an index, and for writes the value, into an [`Address`].
    fn classify(&self, index: &Index, value: Option<&WriteValue>) -> std::result::Result<Address, AddressError> {
        if let Some(WriteValue::Series(series)) = value {
            return match index {
                Index::Name(name) => match self.store.position(name) {
                    Some(row) => Ok(Address::BySeriesTie {
                        row,
                        source: series.name.clone(),
                    }),
                    None => Err(AddressError::SeriesTarget(index.clone())),
                },
                Index::Pair(..) => Err(AddressError::SeriesTarget(index.clone())),
            };
        }

        match index {
            Index::Name(name) => {
                if let Some(attr) = Attribute::from_name(name) {
                    Ok(Address::ByAttribute(attr))
                } else if let Some(row) = self.store.position(name) {
                    Ok(Address::ByParameter(row))
                } else {
                    Err(self.unknown(index))
                }
            }
            Index::Pair(a, b) => {
                let known = |s: &str| self.store.contains(s) || Attribute::from_name(s).is_some();
                if !known(a) || !known(b) {
                    return Err(self.unknown(index));
                }
                match (
                    self.store.position(a),
                    Attribute::from_name(b),
                    self.store.position(b),
                    Attribute::from_name(a),
                ) {
                    (Some(row), Some(attribute), _, _) | (_, _, Some(row), Some(attribute)) => {
                        Ok(Address::ByCell { row, attribute })
                    }
                    _ => Err(AddressError::Ambiguous(index.clone())),
                }
            }
        }
    }

    fn unknown(&self, index: &Index) -> AddressError {
        AddressError::Unknown {
            index: index.clone(),
            rows: self.store.row_names().to_vec(),
            columns: self.column_names().iter().map(|c| c.to_string()).collect(),
        }
    }

    // ---- reads ----------------------------------------------------------

    /// Read a column (column name), a row (parameter name) or a single cell
    /// (parameter and column name in either order).
    pub fn get<I: Into<Index>>(&self, index: I) -> std::result::Result<Selection, AddressError> {
        let index = index.into();
        let selection = match self.classify(&index, None) {
            Ok(Address::ByAttribute(attr)) => Ok(Selection::Column(self.column(attr))),
            Ok(Address::ByParameter(row)) => Ok(Selection::Row(self.row_at(row))),
            Ok(Address::ByCell { row, attribute }) => {
                Ok(Selection::Cell(self.store.get_cell(row, attribute).clone()))
            }
            Ok(Address::BySeriesTie { .. }) => Err(AddressError::SeriesTarget(index)),
            Err(err) => Err(err),
        };
        if let Err(err) = &selection {
            if self.config.log_diagnostics {
                warn!("{}", err);
            }
        }
        selection
    }

    pub fn column(&self, attr: Attribute) -> Column {
        let entries = (0..self.store.len())
            .map(|row| {
                (
                    self.store.name(row).to_string(),
                    self.store.get_cell(row, attr).clone(),
                )
            })
            .collect();
        Column::new(attr, entries)
    }

    pub fn row(&self, name: &str) -> Option<ParameterRow> {
        self.store.position(name).map(|row| self.row_at(row))
    }

    fn row_at(&self, row: usize) -> ParameterRow {
        ParameterRow::new(self.store.name(row).to_string(), self.store.row(row).clone())
    }

    pub fn cell(&self, name: &str, attr: Attribute) -> Option<&Cell> {
        self.store.cell(name, attr)
    }

    pub fn status(&self, name: &str) -> Option<&Status> {
        self.cell(name, Attribute::Status).and_then(Cell::as_status)
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.cell(name, Attribute::Value).and_then(Cell::as_number)
    }

    pub fn bounds_of(&self, name: &str) -> Option<Bounds> {
        self.cell(name, Attribute::Bounds).and_then(Cell::as_bounds)
    }

    pub fn error_of(&self, name: &str) -> Option<ErrorInterval> {
        self.cell(name, Attribute::Error).and_then(Cell::as_error)
    }

    /// Status of every parameter, in construction order.
    pub fn statuses(&self) -> Vec<Status> {
        self.typed_column(Attribute::Status, |c| c.as_status().cloned())
    }

    /// Value of every parameter, in construction order.
    pub fn values(&self) -> Vec<f64> {
        self.typed_column(Attribute::Value, Cell::as_number)
    }

    /// Bounds of every parameter, in construction order.
    pub fn bounds(&self) -> Vec<Bounds> {
        self.typed_column(Attribute::Bounds, Cell::as_bounds)
    }

    /// Error of every parameter, in construction order.
    pub fn errors(&self) -> Vec<ErrorInterval> {
        self.typed_column(Attribute::Error, Cell::as_error)
    }

    fn typed_column<T, F>(&self, attr: Attribute, f: F) -> Vec<T>
    where
        F: Fn(&Cell) -> Option<T>,
    {
        (0..self.store.len())
            .filter_map(|row| f(self.store.get_cell(row, attr)))
            .collect()
    }

    // ---- writes ---------------------------------------------------------

    /// Write through any supported address.
    ///
    /// | index | value | effect |
    /// |---|---|---|
    /// | parameter | row of this table | tie the parameter to that row |
    /// | column | mapping of parameter → value | set those cells of the column |
    /// | column | sequence, one per parameter | set the whole column |
    /// | parameter | mapping of column → value | set those cells of the row |
    /// | parameter | value or sequence | route text to Status, numbers to Value, pairs to Bounds |
    /// | (parameter, column) | value | set one cell |
    ///
    /// Text written to a Status cell is resolved through the synonym tables.
    /// Whatever cannot be applied is listed in the returned report and leaves
    /// the affected cells as they were. Only a sequence of the wrong length
    /// for a whole column is an error.
    pub fn set<I, V>(&mut self, index: I, value: V) -> Result<WriteReport>
    where
        I: Into<Index>,
        V: Into<WriteValue>,
    {
        let index = index.into();
        let value = value.into();
        let mut report = WriteReport::default();

        let address = match self.classify(&index, Some(&value)) {
            Ok(address) => address,
            Err(err) => {
                self.emit(&mut report, Diagnostic::InvalidAddress(err));
                return Ok(report);
            }
        };
        debug!("write to {} with a {} classified as {:?}", index, value.shape(), address);

        let snapshot = self.store.snapshot();

        match address {
            Address::BySeriesTie { row, source } => self.tie_by_series(row, source, &mut report),
            Address::ByAttribute(attr) => self.change_attribute(attr, &index, value, &mut report)?,
            Address::ByParameter(row) => self.change_parameter(row, &index, value, &mut report),
            Address::ByCell { row, attribute } => {
                self.change_cell(row, attribute, &index, value, &mut report)
            }
        }

        for diagnostic in rollback_invalid(&mut self.store, &snapshot) {
            self.emit(&mut report, diagnostic);
        }

        Ok(report)
    }

    fn emit(&self, report: &mut WriteReport, diagnostic: Diagnostic) {
        if self.config.log_diagnostics {
            warn!("{}", diagnostic);
        }
        report.push(diagnostic);
    }

    /// Resolve status text; everything else is written as given.
    fn resolve_for(&self, attr: Attribute, cell: Cell) -> Cell {
        match (attr, cell) {
            (Attribute::Status, Cell::Text(raw)) => {
                match resolve_status(&raw, |name| self.store.contains(name)) {
                    Some(status) => Cell::Status(status),
                    None => Cell::Text(raw),
                }
            }
            (_, cell) => cell,
        }
    }

    fn write_cell(&mut self, row: usize, attr: Attribute, cell: Cell) {
        let cell = self.resolve_for(attr, cell);
        self.store.set_cell_raw(row, attr, cell);
    }

    fn tie_by_series(&mut self, row: usize, source: String, report: &mut WriteReport) {
        let reason = match self.store.position(&source) {
            Some(src) if src != row => {
                self.store
                    .set_cell_raw(row, Attribute::Status, Cell::Status(Status::Tied(source)));
                return;
            }
            Some(_) => TieRejection::SelfTie,
            None => TieRejection::UnknownSource,
        };
        let diagnostic = Diagnostic::TieRejected {
            parameter: self.store.name(row).to_string(),
            series: source,
            reason,
        };
        self.emit(report, diagnostic);
    }

    fn change_attribute(
        &mut self,
        attr: Attribute,
        index: &Index,
        value: WriteValue,
        report: &mut WriteReport,
    ) -> Result<()> {
        match value {
            WriteValue::Mapping(entries) => {
                for (key, cell) in entries {
                    match self.store.position(&key) {
                        Some(row) => self.write_cell(row, attr, cell),
                        None => self.emit(
                            report,
                            Diagnostic::UnknownKey {
                                address: index.clone(),
                                key,
                                expected: "parameter name",
                            },
                        ),
                    }
                }
            }
            WriteValue::Sequence(items) | WriteValue::Scalar(Cell::List(items)) => {
                if items.len() != self.store.len() {
                    return Err(TableError::Shape {
                        attribute: attr,
                        expected: self.store.len(),
                        got: items.len(),
                    });
                }
                for (row, cell) in items.into_iter().enumerate() {
                    self.write_cell(row, attr, cell);
                }
            }
            other => self.emit(
                report,
                Diagnostic::UnsupportedValue {
                    address: index.clone(),
                    shape: other.shape(),
                },
            ),
        }
        Ok(())
    }

    fn change_parameter(
        &mut self,
        row: usize,
        index: &Index,
        value: WriteValue,
        report: &mut WriteReport,
    ) {
        let items = match value {
            WriteValue::Mapping(entries) => {
                for (key, cell) in entries {
                    match Attribute::from_name(&key) {
                        Some(attr) => self.write_cell(row, attr, cell),
                        None => self.emit(
                            report,
                            Diagnostic::UnknownKey {
                                address: index.clone(),
                                key,
                                expected: "column name",
                            },
                        ),
                    }
                }
                return;
            }
            WriteValue::Sequence(items) | WriteValue::Scalar(Cell::List(items)) => items,
            WriteValue::Scalar(cell) => vec![cell],
            series @ WriteValue::Series(_) => {
                self.emit(
                    report,
                    Diagnostic::UnsupportedValue {
                        address: index.clone(),
                        shape: series.shape(),
                    },
                );
                return;
            }
        };

        // The element type picks the column. Pairs always go to Bounds; an
        // Error can only be set by naming the column.
        for cell in items {
            match route_element(&cell) {
                Some(attr) => self.write_cell(row, attr, cell),
                None => {
                    let diagnostic = Diagnostic::UnroutableElement {
                        parameter: self.store.name(row).to_string(),
                        value: cell,
                    };
                    self.emit(report, diagnostic);
                }
            }
        }
    }

    fn change_cell(
        &mut self,
        row: usize,
        attr: Attribute,
        index: &Index,
        value: WriteValue,
        report: &mut WriteReport,
    ) {
        let cell = match value {
            WriteValue::Scalar(cell) => cell,
            WriteValue::Sequence(items) => Cell::List(items),
            other => {
                self.emit(
                    report,
                    Diagnostic::UnsupportedValue {
                        address: index.clone(),
                        shape: other.shape(),
                    },
                );
                return;
            }
        };
        self.write_cell(row, attr, cell);
    }

    /// Restore every cell to the defaults the table was built with.
    pub fn reset(&mut self) {
        let rows = self.config.default_rows(self.kind, self.store.len());
        for (row, cells) in rows.into_iter().enumerate() {
            for (attr, cell) in Attribute::ALL.into_iter().zip(cells) {
                self.store.set_cell_raw(row, attr, cell);
            }
        }
    }

    // ---- optimizer views ------------------------------------------------

    fn names_with_status<F>(&self, pred: F) -> Vec<&str>
    where
        F: Fn(&Status) -> bool,
    {
        (0..self.store.len())
            .filter(|&row| {
                self.store
                    .get_cell(row, Attribute::Status)
                    .as_status()
                    .map_or(false, &pred)
            })
            .map(|row| self.store.name(row))
            .collect()
    }

    /// Names of the free parameters, in construction order.
    pub fn free_parameters(&self) -> Vec<&str> {
        self.names_with_status(Status::is_free)
    }

    /// Names of the frozen parameters, in construction order.
    pub fn frozen_parameters(&self) -> Vec<&str> {
        self.names_with_status(Status::is_frozen)
    }

    /// `(parameter, target)` for every tie. Chains are not followed.
    pub fn tied_parameters(&self) -> Vec<(&str, &str)> {
        (0..self.store.len())
            .filter_map(|row| {
                let target = self
                    .store
                    .get_cell(row, Attribute::Status)
                    .as_status()?
                    .tie_target()?;
                Some((self.store.name(row), target))
            })
            .collect()
    }

    /// Starting values of the free parameters.
    #[cfg(feature = "optimizer")]
    pub fn free_values(&self) -> Array1<f64> {
        self.free_parameters()
            .into_iter()
            .filter_map(|name| self.value(name))
            .collect()
    }

    /// Bounds of the free parameters, aligned with [`free_values`](Self::free_values).
    pub fn free_bounds(&self) -> Vec<Bounds> {
        self.free_parameters()
            .into_iter()
            .filter_map(|name| self.bounds_of(name))
            .collect()
    }

    /// Write fitted values and errors back for the free parameters.
    ///
    /// `values` and `errors` are aligned with [`free_parameters`](Self::free_parameters).
    /// The writes go through the column mapping path, so invalid entries are
    /// rejected per cell like any other write.
    pub fn set_fit_results(&mut self, values: &[f64], errors: &[ErrorInterval]) -> Result<WriteReport> {
        let free: Vec<String> = self
            .free_parameters()
            .into_iter()
            .map(str::to_string)
            .collect();

        for (attribute, got) in [(Attribute::Value, values.len()), (Attribute::Error, errors.len())] {
            if got != free.len() {
                return Err(TableError::Shape {
                    attribute,
                    expected: free.len(),
                    got,
                });
            }
        }

        let mut report = self.set(
            Attribute::Value,
            WriteValue::mapping(free.iter().cloned().zip(values.iter().copied())),
        )?;
        report.extend(self.set(
            Attribute::Error,
            WriteValue::mapping(free.into_iter().zip(errors.iter().copied())),
        )?);
        Ok(report)
    }

    // ---- export ---------------------------------------------------------

    /// Column-oriented copy with a leading `Param` column and unit labels on
    /// Bounds and Error.
    pub fn export(&self) -> TabularExport {
        let mut columns = Vec::with_capacity(Attribute::ALL.len() + 1);
        columns.push(ExportColumn {
            name: PARAM_COLUMN.to_string(),
            unit: None,
            data: self
                .store
                .row_names()
                .iter()
                .map(|name| Cell::Text(name.clone()))
                .collect(),
        });
        for attr in Attribute::ALL {
            columns.push(ExportColumn {
                name: attr.name().to_string(),
                unit: attr.unit().map(str::to_string),
                data: self.column(attr).cells().cloned().collect(),
            });
        }
        TabularExport { columns }
    }
}

fn route_element(cell: &Cell) -> Option<Attribute> {
    match cell {
        Cell::Text(_) | Cell::Status(_) => Some(Attribute::Status),
        Cell::Number(_) => Some(Attribute::Value),
        Cell::Pair(..) => Some(Attribute::Bounds),
        Cell::List(_) | Cell::Empty => None,
    }
}

fn check_names(names: &[String], kind: TableKind) -> Result<()> {
    if names.is_empty() {
        return Err(TableError::Configuration(
            "a parameter table needs at least one parameter name".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if name.is_empty() {
            return Err(TableError::Configuration(
                "parameter names cannot be empty".to_string(),
            ));
        }
        if Attribute::from_name(name).is_some() {
            return Err(TableError::Configuration(format!(
                "parameter name '{}' is also a column name",
                name
            )));
        }
        if !seen.insert(name.as_str()) {
            return Err(TableError::Configuration(format!(
                "duplicate parameter name '{}'",
                name
            )));
        }
    }

    if kind.is_response() && names.len() % 2 != 0 {
        return Err(TableError::Configuration(format!(
            "response parameters come in (gain, offset) pairs, got {} names",
            names.len()
        )));
    }

    Ok(())
}

impl fmt::Display for ParameterTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self.column_names();
        let texts: Vec<[String; 4]> = (0..self.store.len())
            .map(|row| Attribute::ALL.map(|attr| self.store.get_cell(row, attr).to_string()))
            .collect();

        // Padding counts chars, so widths must too
        let name_width = self
            .store
            .row_names()
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0);
        let mut widths = headers.map(|header| header.chars().count());
        for row in &texts {
            for (width, text) in widths.iter_mut().zip(row) {
                *width = (*width).max(text.chars().count());
            }
        }

        write!(f, "{:name_width$}", "")?;
        for (header, width) in headers.iter().zip(widths) {
            write!(f, "  {:>width$}", header)?;
        }
        for (name, row) in self.store.row_names().iter().zip(&texts) {
            write!(f, "\n{:<name_width$}", name)?;
            for (text, width) in row.iter().zip(widths) {
                write!(f, "  {:>width$}", text)?;
            }
        }
        Ok(())
    }
}
