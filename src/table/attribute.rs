//! The four attributes tracked for every parameter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A column of the parameter table.
///
/// The declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Whether the parameter is free, frozen or tied
    Status,
    /// Current numeric value
    Value,
    /// `(min, max)` limits used during fitting
    Bounds,
    /// `(-, +)` uncertainty on the value
    Error,
}

impl Attribute {
    /// All attributes, in column order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Status,
        Attribute::Value,
        Attribute::Bounds,
        Attribute::Error,
    ];

    /// Column name as shown in the table header.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Status => "Status",
            Attribute::Value => "Value",
            Attribute::Bounds => "Bounds",
            Attribute::Error => "Error",
        }
    }

    /// Position of the attribute within a row.
    pub fn index(self) -> usize {
        match self {
            Attribute::Status => 0,
            Attribute::Value => 1,
            Attribute::Bounds => 2,
            Attribute::Error => 3,
        }
    }

    /// Unit label attached to the column on export, if any.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Attribute::Bounds => Some("(min,max)"),
            Attribute::Error => Some("(-,+)"),
            _ => None,
        }
    }

    /// Look up an attribute by its exact column name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.name() == name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("'{}' is not a table column", s))
    }
}
