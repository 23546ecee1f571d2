//! Non-fatal outcomes of a write.
//!
//! A write never leaves the table invalid. Anything it could not apply is
//! described by a [`Diagnostic`] and collected into the [`WriteReport`] the
//! write returns.

use crate::table::address::{AddressError, Index};
use crate::table::attribute::Attribute;
use crate::table::cell::Cell;
use thiserror::Error;

/// Why a tie by assignment was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieRejection {
    /// The series does not come from a parameter of this table
    UnknownSource,
    /// The series comes from the parameter being written
    SelfTie,
}

/// Something a write could not apply.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    #[error("{0}. Nothing is being changed.")]
    InvalidAddress(AddressError),

    #[error("Key {key:?} given for {address} is not a {expected}; entry skipped.")]
    UnknownKey {
        address: Index,
        key: String,
        expected: &'static str,
    },

    #[error("The value given ({value}) for parameter {parameter:?} is not a valid parameter table input. Must be a string, int/float, or tuple of length 2.")]
    UnroutableElement { parameter: String, value: Cell },

    #[error("Cannot assign a {shape} to {address}. Nothing is being changed.")]
    UnsupportedValue { address: Index, shape: &'static str },

    #[error("Invalid table element {rejected} for entry [{attribute}, {parameter}]: {reason}. Changing back to {restored}.")]
    ValueRejected {
        parameter: String,
        attribute: Attribute,
        rejected: Cell,
        restored: Cell,
        reason: &'static str,
    },

    #[error("{}", tie_message(parameter, series, *reason))]
    TieRejected {
        parameter: String,
        series: String,
        reason: TieRejection,
    },
}

fn tie_message(parameter: &str, series: &str, reason: TieRejection) -> String {
    match reason {
        TieRejection::UnknownSource => format!(
            "Parameter {:?} not in parameter table. Nothing is being changed.",
            series
        ),
        TieRejection::SelfTie => format!(
            "Tying parameter {:?} to itself would be equivalent to fixing this parameter. Nothing is being changed.",
            parameter
        ),
    }
}

/// Everything a single write reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteReport {
    diagnostics: Vec<Diagnostic>,
}

impl WriteReport {
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn extend(&mut self, other: WriteReport) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// `true` if the write was applied in full.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Cells that were written and then put back.
    pub fn rejected_cells(&self) -> impl Iterator<Item = (&str, Attribute)> {
        self.diagnostics.iter().filter_map(|d| match d {
            Diagnostic::ValueRejected {
                parameter,
                attribute,
                ..
            } => Some((parameter.as_str(), *attribute)),
            _ => None,
        })
    }

    pub fn has_invalid_address(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::InvalidAddress(_)))
    }

    pub fn has_rejected_tie(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::TieRejected { .. }))
    }
}

impl IntoIterator for WriteReport {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}
