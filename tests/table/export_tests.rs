//! Integration tests for export, display and the optimizer-facing views

use crate::test_helpers::{approx_eq, array_approx_eq};
use paramtable_rs::table::{Bounds, Cell, ErrorInterval, ParameterTable, Status};
use paramtable_rs::{TableConfig, TableKind};

#[test]
fn test_export_layout() {
    let mut table = ParameterTable::create(["p1", "p2"], false).unwrap();
    table.set("p2", "fixed").unwrap();

    let export = table.export();
    assert_eq!(
        export.column_names(),
        vec!["Param", "Status", "Value", "Bounds", "Error"]
    );
    assert_eq!(export.num_rows(), 2);

    let param = export.column("Param").unwrap();
    assert_eq!(param.unit, None);
    assert_eq!(param.data, vec![Cell::from("p1"), Cell::from("p2")]);

    assert_eq!(export.column("Bounds").unwrap().unit.as_deref(), Some("(min,max)"));
    assert_eq!(export.column("Error").unwrap().unit.as_deref(), Some("(-,+)"));
    assert_eq!(export.column("Value").unwrap().unit, None);
    assert_eq!(
        export.column("Status").unwrap().data[1],
        Cell::Status(Status::Frozen)
    );
}

#[test]
fn test_export_json_writes_open_bounds_as_null() {
    let table = ParameterTable::create(["p1"], false).unwrap();
    let json = table.export().to_json().unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let columns = parsed["columns"].as_array().unwrap();
    assert_eq!(columns[0]["name"], "Param");
    assert!(columns[0].get("unit").is_none());
    assert_eq!(columns[1]["data"][0], "free");
    assert_eq!(columns[3]["unit"], "(min,max)");
    assert_eq!(columns[3]["data"][0], serde_json::json!([0.0, null]));
}

#[test]
fn test_display_lists_every_parameter() {
    let mut table = ParameterTable::create(["gain", "offset"], true).unwrap();
    table.set("offset", "release").unwrap();

    let text = table.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for header in ["Status", "Value", "Bounds", "Error"] {
        assert!(lines[0].contains(header));
    }
    assert!(lines[1].starts_with("gain") && lines[1].contains("frozen"));
    assert!(lines[2].starts_with("offset") && lines[2].contains("free"));
}

#[test]
fn test_free_views_follow_status() {
    let mut table = ParameterTable::create(["a", "b", "c", "d"], false).unwrap();
    table
        .set("Status", vec!["free", "fixed", "free", "tie_a"])
        .unwrap();
    table.set("Value", vec![0.5, 2.0, 3.25, 9.0]).unwrap();
    table.set(("c", "Bounds"), (1.0, 4.0)).unwrap();

    assert_eq!(table.free_parameters(), vec!["a", "c"]);
    assert_eq!(table.frozen_parameters(), vec!["b"]);
    assert_eq!(table.tied_parameters(), vec![("d", "a")]);
    assert_eq!(
        table.free_bounds(),
        vec![Bounds::min_only(0.0), Bounds::new(1.0, 4.0)]
    );
}

#[cfg(feature = "optimizer")]
#[test]
fn test_free_values_as_array() {
    let mut table = ParameterTable::create(["a", "b", "c"], false).unwrap();
    table.set("Status", vec!["free", "fixed", "free"]).unwrap();
    table.set("Value", vec![0.5, 2.0, 3.25]).unwrap();

    let values = table.free_values();
    assert_eq!(values.len(), 2);
    assert!(array_approx_eq(values.as_slice().unwrap(), &[0.5, 3.25], 1e-12));
}

#[test]
fn test_fit_results_round_trip() {
    let mut table = ParameterTable::create(["a", "b", "c"], false).unwrap();
    table.set("b", "fixed").unwrap();

    let report = table
        .set_fit_results(
            &[1.5, 2.0 / 3.0],
            &[ErrorInterval::symmetric(0.1), ErrorInterval::new(0.2, 0.3)],
        )
        .unwrap();
    assert!(report.is_clean());

    assert!(approx_eq(table.value("a").unwrap(), 1.5, 1e-12));
    assert!(approx_eq(table.value("c").unwrap(), 0.666_666_666_666, 1e-9));
    assert_eq!(table.value("b"), Some(1.0));
    assert_eq!(table.error_of("c"), Some(ErrorInterval::new(0.2, 0.3)));

    // A non-finite fitted value is rejected like any other write
    let report = table
        .set_fit_results(&[f64::NAN, 1.0], &[ErrorInterval::default(); 2])
        .unwrap();
    assert_eq!(report.rejected_cells().count(), 1);
    assert_eq!(table.value("a"), Some(1.5));

    assert!(table.set_fit_results(&[1.0], &[]).is_err());
}

#[test]
fn test_configured_defaults_and_reset() {
    let config = TableConfig::from_json(
        r#"{
            "ordinary": {
                "status": "fixed",
                "value": 0.5,
                "bounds": [null, null],
                "error": { "minus": 0.0, "plus": 0.0 }
            },
            "log_diagnostics": false
        }"#,
    )
    .unwrap();

    let mut table = ParameterTable::with_config(["x", "y"], TableKind::Ordinary, config).unwrap();
    assert_eq!(table.statuses(), vec![Status::Frozen, Status::Frozen]);
    assert_eq!(table.bounds_of("x"), Some(Bounds::unbounded()));

    table.set("Value", vec![7.0, 8.0]).unwrap();
    table.set("y", "tie_x").unwrap();
    table.reset();
    assert_eq!(table.values(), vec![0.5, 0.5]);
    assert_eq!(table.statuses(), vec![Status::Frozen, Status::Frozen]);
}

#[test]
fn test_invalid_configured_defaults_are_refused() {
    let mut config = TableConfig::default();
    config.gain.value = f64::INFINITY;
    assert!(ParameterTable::with_config(["g", "o"], TableKind::Response, config).is_err());
}
