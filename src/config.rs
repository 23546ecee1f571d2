//! Configuration options for parameter tables.
//!
//! This module defines the kind of table to build and the per-parameter
//! defaults written into every cell at construction.

use crate::error::Result;
use crate::table::{Bounds, Cell, ErrorInterval, Row, Status};
use serde::{Deserialize, Serialize};

/// Which defaults a table is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TableKind {
    /// Model parameters: free, value 1, bounded below by 0
    #[default]
    Ordinary,

    /// Response parameters in (gain, offset) pairs, frozen by default
    Response,
}

impl TableKind {
    pub fn from_flag(is_response: bool) -> Self {
        if is_response {
            TableKind::Response
        } else {
            TableKind::Ordinary
        }
    }

    pub fn is_response(self) -> bool {
        self == TableKind::Response
    }
}

/// Initial cell contents for one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefaults {
    pub status: Status,
    pub value: f64,
    pub bounds: Bounds,
    pub error: ErrorInterval,
}

impl ParameterDefaults {
    /// The row of cells these defaults describe.
    pub fn row(&self) -> Row {
        [
            Cell::Status(self.status.clone()),
            Cell::Number(self.value),
            Cell::from(self.bounds),
            Cell::from(self.error),
        ]
    }
}

/// Configuration options for a parameter table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Defaults for every parameter of an ordinary table. Default: free, 1.0, (0, None), (0, 0)
    pub ordinary: ParameterDefaults,

    /// Defaults for the first of each response pair. Default: frozen, 1.0, (0.8, 1.2), (0, 0)
    pub gain: ParameterDefaults,

    /// Defaults for the second of each response pair. Default: frozen, 0.0, (-0.1, 0.1), (0, 0)
    pub offset: ParameterDefaults,

    /// Emit each diagnostic through `log::warn!` as it is produced. Default: true
    pub log_diagnostics: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            ordinary: ParameterDefaults {
                status: Status::Free,
                value: 1.0,
                bounds: Bounds::min_only(0.0),
                error: ErrorInterval::default(),
            },
            gain: ParameterDefaults {
                status: Status::Frozen,
                value: 1.0,
                bounds: Bounds::new(0.8, 1.2),
                error: ErrorInterval::default(),
            },
            offset: ParameterDefaults {
                status: Status::Frozen,
                value: 0.0,
                bounds: Bounds::new(-0.1, 0.1),
                error: ErrorInterval::default(),
            },
            log_diagnostics: true,
        }
    }
}

impl TableConfig {
    /// Load a configuration from JSON; missing fields keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramtable_rs::config::TableConfig;
    ///
    /// let config = TableConfig::from_json(r#"{ "log_diagnostics": false }"#).unwrap();
    /// assert!(!config.log_diagnostics);
    /// assert_eq!(config.ordinary.value, 1.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Default rows for `count` parameters of the given kind, in order.
    pub fn default_rows(&self, kind: TableKind, count: usize) -> Vec<Row> {
        match kind {
            TableKind::Ordinary => (0..count).map(|_| self.ordinary.row()).collect(),
            TableKind::Response => (0..count)
                .map(|i| {
                    if i % 2 == 0 {
                        self.gain.row()
                    } else {
                        self.offset.row()
                    }
                })
                .collect(),
        }
    }
}
