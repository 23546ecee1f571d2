//! Post-write validation with per-cell rollback.

use crate::table::attribute::Attribute;
use crate::table::cell::Cell;
use crate::table::diagnostics::Diagnostic;
use crate::table::status::Status;
use crate::table::store::{CellStore, Snapshot};

/// Check one cell. `owner` is the parameter the cell belongs to; `is_known`
/// tells whether a name is a row of the table.
///
/// Returns the reason the cell is invalid, if it is.
pub fn check_cell<F>(attr: Attribute, cell: &Cell, owner: &str, is_known: F) -> Result<(), &'static str>
where
    F: Fn(&str) -> bool,
{
    match (attr, cell) {
        (Attribute::Status, Cell::Status(Status::Free | Status::Frozen)) => Ok(()),
        (Attribute::Status, Cell::Status(Status::Tied(target))) => {
            if target == owner {
                Err("a parameter cannot be tied to itself")
            } else if !is_known(target) {
                Err("tie target is not a parameter of this table")
            } else {
                Ok(())
            }
        }
        (Attribute::Status, _) => {
            Err("must be 'free', 'frozen', or 'tie_paramName' or an accepted synonym")
        }

        (Attribute::Value, Cell::Number(n)) if n.is_finite() => Ok(()),
        (Attribute::Value, _) => Err("must be a finite int or float"),

        (Attribute::Bounds, Cell::Pair(min, max)) if !min.is_nan() && !max.is_nan() => Ok(()),
        (Attribute::Bounds, _) => Err("must be a pair (min, max)"),

        // ±∞ marks an unbounded uncertainty
        (Attribute::Error, Cell::Pair(minus, plus)) if !minus.is_nan() && !plus.is_nan() => Ok(()),
        (Attribute::Error, _) => Err("must be a pair (-, +)"),
    }
}

/// Scan every cell and put back, one cell at a time, anything that is no
/// longer valid. Cells that pass are left as written.
pub(crate) fn rollback_invalid(store: &mut CellStore, snapshot: &Snapshot) -> Vec<Diagnostic> {
    let mut rejected = Vec::new();

    for row in 0..store.len() {
        for attr in Attribute::ALL {
            let cell = store.get_cell(row, attr);
            let outcome = check_cell(attr, cell, store.name(row), |name| store.contains(name));
            if let Err(reason) = outcome {
                rejected.push((row, attr, cell.clone(), reason));
            }
        }
    }

    rejected
        .into_iter()
        .map(|(row, attr, cell, reason)| {
            store.restore_cell(row, attr, snapshot);
            Diagnostic::ValueRejected {
                parameter: store.name(row).to_string(),
                attribute: attr,
                rejected: cell,
                restored: store.get_cell(row, attr).clone(),
                reason,
            }
        })
        .collect()
}
