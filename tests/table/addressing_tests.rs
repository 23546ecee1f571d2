//! Integration tests for table addressing
//!
//! Every write shape is exercised against a small table and the resulting
//! cells are read back through a different address shape.

use paramtable_rs::table::{Attribute, Bounds, Cell, ParameterTable, Status, WriteValue};
use std::collections::BTreeMap;

fn spectra_table() -> ParameterTable {
    ParameterTable::create(
        ["p1_spectrum1", "p2_spectrum1", "p1_spectrum2", "p2_spectrum2"],
        false,
    )
    .unwrap()
}

#[test]
fn test_equivalent_ways_to_freeze_one_parameter() {
    let writes: Vec<Box<dyn Fn(&mut ParameterTable)>> = vec![
        Box::new(|t: &mut ParameterTable| {
            t.set("p1_spectrum1", "fixed").unwrap();
        }),
        Box::new(|t: &mut ParameterTable| {
            t.set(("Status", "p1_spectrum1"), "fixed").unwrap();
        }),
        Box::new(|t: &mut ParameterTable| {
            t.set(("p1_spectrum1", "Status"), "fixed").unwrap();
        }),
        Box::new(|t: &mut ParameterTable| {
            t.set("Status", WriteValue::mapping([("p1_spectrum1", "fixed")]))
                .unwrap();
        }),
        Box::new(|t: &mut ParameterTable| {
            t.set("Status", vec!["fixed", "free", "free", "free"]).unwrap();
        }),
    ];

    for write in writes {
        let mut table = spectra_table();
        write(&mut table);
        assert_eq!(
            table.statuses(),
            vec![Status::Frozen, Status::Free, Status::Free, Status::Free]
        );
    }
}

#[test]
fn test_equivalent_ways_to_update_one_row() {
    let mut by_mapping = spectra_table();
    let mut by_list = spectra_table();

    by_mapping
        .set(
            "p1_spectrum1",
            WriteValue::mapping([
                ("Status", Cell::from("fixed")),
                ("Value", Cell::from(4)),
                ("Bounds", Cell::from((1, 50))),
            ]),
        )
        .unwrap();
    by_list
        .set(
            "p1_spectrum1",
            WriteValue::sequence([Cell::from("fixed"), Cell::from(4), Cell::from((1, 50))]),
        )
        .unwrap();

    assert_eq!(by_mapping.row("p1_spectrum1"), by_list.row("p1_spectrum1"));
    let row = by_list.row("p1_spectrum1").unwrap();
    assert_eq!(row.status(), Some(&Status::Frozen));
    assert_eq!(row.value(), Some(4.0));
    assert_eq!(row.bounds(), Some(Bounds::new(1.0, 50.0)));
}

#[test]
fn test_cell_round_trip_for_every_parameter_and_attribute() {
    let mut table = spectra_table();
    let names: Vec<String> = table.row_names().to_vec();

    for (i, name) in names.iter().enumerate() {
        let x = i as f64;
        for attr in Attribute::ALL {
            let written: Cell = match attr {
                Attribute::Status => Status::Frozen.into(),
                Attribute::Value => (10.0 + x).into(),
                Attribute::Bounds => (x, 100.0 + x).into(),
                Attribute::Error => (0.1 * x, 0.2 * x).into(),
            };
            let report = table.set((name.as_str(), attr.name()), written.clone()).unwrap();
            assert!(report.is_clean(), "{:?}", report);

            let a = table.get((name.as_str(), attr.name())).unwrap().into_cell();
            let b = table.get((attr.name(), name.as_str())).unwrap().into_cell();
            assert_eq!(a, b);
            assert_eq!(a, Some(written));
        }
    }
}

#[test]
fn test_whole_column_from_sorted_map() {
    let mut table = spectra_table();
    let mut values = BTreeMap::new();
    values.insert("p2_spectrum2", 0.25);
    values.insert("p1_spectrum1", 7.0);

    let report = table.set(Attribute::Value, values).unwrap();
    assert!(report.is_clean());
    assert_eq!(table.values(), vec![7.0, 1.0, 1.0, 0.25]);
}

#[test]
fn test_error_column_is_set_by_name_only() {
    let mut table = spectra_table();

    table
        .set("Error", vec![(0.1, 0.2), (0.0, 0.0), (0.3, 0.3), (0.0, 0.5)])
        .unwrap();
    assert_eq!(
        table.cell("p1_spectrum2", Attribute::Error),
        Some(&Cell::Pair(0.3, 0.3))
    );

    // A pair in a row update lands in Bounds
    table.set("p2_spectrum2", (0.5, 0.75)).unwrap();
    assert_eq!(table.bounds_of("p2_spectrum2"), Some(Bounds::new(0.5, 0.75)));
    assert_eq!(
        table.cell("p2_spectrum2", Attribute::Error),
        Some(&Cell::Pair(0.0, 0.5))
    );
}

#[test]
fn test_open_bounds_can_be_written() {
    let mut table = spectra_table();
    table
        .set(("p1_spectrum1", "Bounds"), (None::<f64>, Some(3.0)))
        .unwrap();
    let bounds = table.bounds_of("p1_spectrum1").unwrap();
    assert!(!bounds.has_lower_bound());
    assert_eq!(bounds.max, 3.0);
}

#[test]
fn test_reads_mirror_writes() {
    let table = spectra_table();

    let column = table.get("Value").unwrap().into_column().unwrap();
    assert_eq!(column.len(), 4);
    assert_eq!(
        column.entries()[3],
        ("p2_spectrum2".to_string(), Cell::Number(1.0))
    );

    let row = table.get("p2_spectrum1").unwrap().into_row().unwrap();
    assert_eq!(row.name(), "p2_spectrum1");

    assert!(table.get(("p2_spectrum1", "p1_spectrum1")).is_err());
    assert!(table.get("Param").is_err());
}

#[test]
fn test_store_lookups_by_name() {
    let table = spectra_table();
    let store = table.store();

    assert_eq!(store.len(), 4);
    assert_eq!(store.position("p2_spectrum2"), Some(3));
    assert_eq!(
        store.cell("p1_spectrum2", Attribute::Bounds),
        table.cell("p1_spectrum2", Attribute::Bounds)
    );
    assert_eq!(store.cell("p9_spectrum9", Attribute::Value), None);
}
