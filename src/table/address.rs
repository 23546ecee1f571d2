//! Addressing: what a read or write refers to, and what a write carries
//!
//! Callers address the table with an [`Index`] (one name or a pair of names)
//! and supply a [`WriteValue`]. The table classifies the pair into an
//! [`Address`] before touching any cell.

use crate::table::attribute::Attribute;
use crate::table::cell::Cell;
use crate::table::bounds::{Bounds, ErrorInterval};
use crate::table::status::Status;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use thiserror::Error;

/// Raw index as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Index {
    /// A parameter name or an attribute name
    Name(String),
    /// A parameter and an attribute, in either order
    Pair(String, String),
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Name(name) => write!(f, "{:?}", name),
            Index::Pair(a, b) => write!(f, "({:?}, {:?})", a, b),
        }
    }
}

impl From<&str> for Index {
    fn from(name: &str) -> Self {
        Index::Name(name.to_string())
    }
}

impl From<String> for Index {
    fn from(name: String) -> Self {
        Index::Name(name)
    }
}

impl From<&String> for Index {
    fn from(name: &String) -> Self {
        Index::Name(name.clone())
    }
}

impl From<Attribute> for Index {
    fn from(attr: Attribute) -> Self {
        Index::Name(attr.name().to_string())
    }
}

impl<A, B> From<(A, B)> for Index
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    fn from((a, b): (A, B)) -> Self {
        Index::Pair(a.as_ref().to_string(), b.as_ref().to_string())
    }
}

/// A classified index. Rows are referred to by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    /// A whole column
    ByAttribute(Attribute),
    /// A whole row
    ByParameter(usize),
    /// A single cell
    ByCell { row: usize, attribute: Attribute },
    /// Tie `row` to the parameter the assigned series came from
    BySeriesTie { row: usize, source: String },
}

/// Why an index could not be used. Reported, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid index {index}: valid rows are {rows:?} and valid columns are {columns:?}")]
    Unknown {
        index: Index,
        rows: Vec<String>,
        columns: Vec<String>,
    },

    #[error("Invalid index {0}: a pair must name one parameter and one column")]
    Ambiguous(Index),

    #[error("Invalid index {0}: a table row can only be assigned to a single parameter")]
    SeriesTarget(Index),
}

/// Identity of a row or column read out of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRef {
    /// Parameter name for a row, column name for a column
    pub name: String,
}

/// The right-hand side of a write.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteValue {
    /// A single value, or a [`Cell::List`] treated like a sequence
    Scalar(Cell),
    /// An ordered list of values
    Sequence(Vec<Cell>),
    /// Key/value pairs; keys are parameter names or column names depending
    /// on the address
    Mapping(Vec<(String, Cell)>),
    /// A row or column previously read from a table
    Series(SeriesRef),
}

impl WriteValue {
    /// Build a [`WriteValue::Mapping`] from key/value pairs, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramtable_rs::table::{Cell, WriteValue};
    ///
    /// let update = WriteValue::mapping([("Status", Cell::from("fixed")), ("Value", Cell::from(4))]);
    /// assert!(matches!(update, WriteValue::Mapping(ref entries) if entries.len() == 2));
    /// ```
    pub fn mapping<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Cell>,
        I: IntoIterator<Item = (K, V)>,
    {
        WriteValue::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a [`WriteValue::Sequence`].
    pub fn sequence<V, I>(items: I) -> Self
    where
        V: Into<Cell>,
        I: IntoIterator<Item = V>,
    {
        WriteValue::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Name of the shape, for messages.
    pub fn shape(&self) -> &'static str {
        match self {
            WriteValue::Scalar(_) => "scalar",
            WriteValue::Sequence(_) => "sequence",
            WriteValue::Mapping(_) => "mapping",
            WriteValue::Series(_) => "series",
        }
    }
}

macro_rules! scalar_write_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for WriteValue {
                fn from(value: $ty) -> Self {
                    WriteValue::Scalar(Cell::from(value))
                }
            }
        )*
    };
}

scalar_write_value!(
    &str,
    String,
    f64,
    f32,
    i32,
    i64,
    (f64, f64),
    (i32, i32),
    (Option<f64>, Option<f64>),
    Status,
    Bounds,
    ErrorInterval,
);

impl From<Cell> for WriteValue {
    fn from(cell: Cell) -> Self {
        WriteValue::Scalar(cell)
    }
}

impl<T: Into<Cell>> From<Vec<T>> for WriteValue {
    fn from(items: Vec<T>) -> Self {
        WriteValue::sequence(items)
    }
}

impl<K: Into<String>, V: Into<Cell>> From<HashMap<K, V>> for WriteValue {
    fn from(entries: HashMap<K, V>) -> Self {
        WriteValue::mapping(entries)
    }
}

impl<K: Into<String>, V: Into<Cell>> From<BTreeMap<K, V>> for WriteValue {
    fn from(entries: BTreeMap<K, V>) -> Self {
        WriteValue::mapping(entries)
    }
}

impl From<SeriesRef> for WriteValue {
    fn from(series: SeriesRef) -> Self {
        WriteValue::Series(series)
    }
}
