//! Generic tabular export of a parameter table.

use crate::error::Result;
use crate::table::cell::Cell;
use serde::Serialize;

/// Name of the leading column holding the parameter names.
pub const PARAM_COLUMN: &str = "Param";

/// One column of an exported table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportColumn {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub data: Vec<Cell>,
}

/// Column-oriented copy of a table: `Param`, `Status`, `Value`, `Bounds`, `Error`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabularExport {
    pub columns: Vec<ExportColumn>,
}

impl TabularExport {
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&ExportColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.data.len())
    }

    /// Serialize the export as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
