//! Dynamic cell contents
//!
//! A write may carry anything a user can type: text, numbers, pairs, lists.
//! Cells hold that input as-is until validation decides whether it stays.

use crate::table::bounds::{Bounds, ErrorInterval};
use crate::table::status::Status;
use serde::Serialize;
use std::fmt;

/// The content of one table cell, or one element of a write.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// A resolved status
    Status(Status),
    /// A number; integers are stored as floats
    Number(f64),
    /// An ordered pair, used for bounds and errors
    Pair(f64, f64),
    /// Text that has not (or could not) be resolved to a status
    Text(String),
    /// A list of elements
    List(Vec<Cell>),
    /// No value
    Empty,
}

impl Cell {
    /// Short description of the kind of value held, for messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Cell::Status(_) => "status",
            Cell::Number(_) => "number",
            Cell::Pair(..) => "pair",
            Cell::Text(_) => "text",
            Cell::List(_) => "list",
            Cell::Empty => "empty",
        }
    }

    pub fn as_status(&self) -> Option<&Status> {
        match self {
            Cell::Status(status) => Some(status),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            Cell::Pair(a, b) => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn as_bounds(&self) -> Option<Bounds> {
        self.as_pair().map(Bounds::from)
    }

    pub fn as_error(&self) -> Option<ErrorInterval> {
        self.as_pair().map(ErrorInterval::from)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Status(status) => write!(f, "{}", status),
            Cell::Number(n) => write!(f, "{:?}", n),
            Cell::Pair(a, b) => write!(f, "{}", Bounds::new(*a, *b)),
            Cell::Text(text) => f.write_str(text),
            Cell::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Cell::Empty => f.write_str("None"),
        }
    }
}

impl From<Status> for Cell {
    fn from(status: Status) -> Self {
        Cell::Status(status)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<f32> for Cell {
    fn from(n: f32) -> Self {
        Cell::Number(n as f64)
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::Number(n as f64)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n as f64)
    }
}

impl From<(f64, f64)> for Cell {
    fn from((a, b): (f64, f64)) -> Self {
        Cell::Pair(a, b)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((a, b): (i32, i32)) -> Self {
        Cell::Pair(a as f64, b as f64)
    }
}

impl From<Bounds> for Cell {
    fn from(bounds: Bounds) -> Self {
        Cell::Pair(bounds.min, bounds.max)
    }
}

impl From<(Option<f64>, Option<f64>)> for Cell {
    fn from(limits: (Option<f64>, Option<f64>)) -> Self {
        Bounds::from(limits).into()
    }
}

impl From<ErrorInterval> for Cell {
    fn from(err: ErrorInterval) -> Self {
        Cell::Pair(err.minus, err.plus)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl<T: Into<Cell>> From<Vec<T>> for Cell {
    fn from(items: Vec<T>) -> Self {
        Cell::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Empty, Into::into)
    }
}
