//! Integration tests for status resolution and ties

use paramtable_rs::table::status::{FREE_SYNONYMS, FROZEN_SYNONYMS, TIE_PREFIXES};
use paramtable_rs::table::{resolve_status, Diagnostic, ParameterTable, Status, WriteValue};

#[test]
fn test_every_synonym_through_the_table() {
    let mut table = ParameterTable::create(["a", "b"], false).unwrap();

    for syn in FROZEN_SYNONYMS {
        table.set("a", "free").unwrap();
        let report = table.set("a", syn.to_uppercase()).unwrap();
        assert!(report.is_clean(), "{}", syn);
        assert_eq!(table.status("a"), Some(&Status::Frozen), "{}", syn);
    }

    for syn in FREE_SYNONYMS {
        table.set("a", "frozen").unwrap();
        let report = table.set(("a", "Status"), *syn).unwrap();
        assert!(report.is_clean(), "{}", syn);
        assert_eq!(table.status("a"), Some(&Status::Free), "{}", syn);
    }

    for prefix in TIE_PREFIXES {
        table.set("a", "free").unwrap();
        let report = table.set("a", format!("{}_b", prefix)).unwrap();
        assert!(report.is_clean(), "{}", prefix);
        assert_eq!(table.status("a"), Some(&Status::Tied("b".to_string())));
    }
}

#[test]
fn test_resolution_is_idempotent_on_table_statuses() {
    let mut table = ParameterTable::create(["a", "b", "c"], false).unwrap();
    table
        .set("Status", vec!["chill", "single", "in_a_relationship_with_a"])
        .unwrap();

    let names = table.row_names().to_vec();
    for (name, status) in names.iter().zip(table.statuses()) {
        let text = status.to_string();
        let resolved = resolve_status(&text, |n| table.contains(n)).unwrap();
        assert_eq!(resolved, status);

        // Writing the canonical text back changes nothing
        let before = table.statuses();
        let report = table.set(name.as_str(), text).unwrap();
        assert!(report.is_clean());
        assert_eq!(table.statuses(), before);
    }
}

#[test]
fn test_unresolvable_tie_is_rejected() {
    let mut table = ParameterTable::create(["p1", "p2"], false).unwrap();
    let report = table
        .set("p2", WriteValue::mapping([("Status", "married_with_p1_nonsense")]))
        .unwrap();

    assert_eq!(table.status("p2"), Some(&Status::Free));
    assert!(matches!(
        report.diagnostics(),
        [Diagnostic::ValueRejected { parameter, .. }] if parameter == "p2"
    ));

    // A known prefix with an unknown target is also left as text and rejected
    let report = table.set("p2", "tether_p7").unwrap();
    assert_eq!(report.rejected_cells().count(), 1);
    assert_eq!(table.status("p2"), Some(&Status::Free));
}

#[test]
fn test_tie_chains_and_cycles_are_recorded_as_given() {
    let mut table = ParameterTable::create(["a", "b", "c"], false).unwrap();

    let report = table.set("Status", vec!["tie_b", "tie_c", "free"]).unwrap();
    assert!(report.is_clean());
    assert_eq!(table.tied_parameters(), vec![("a", "b"), ("b", "c")]);

    let report = table.set("c", "tie_a").unwrap();
    assert!(report.is_clean());
    assert_eq!(
        table.tied_parameters(),
        vec![("a", "b"), ("b", "c"), ("c", "a")]
    );
}

#[test]
fn test_tie_by_series_then_untie() {
    let mut table = ParameterTable::create(["gain1", "offset1", "gain2", "offset2"], true).unwrap();

    let gain1 = table.row("gain1").unwrap();
    let report = table.set("gain2", &gain1).unwrap();
    assert!(report.is_clean());
    assert_eq!(table.status("gain2"), Some(&Status::Tied("gain1".to_string())));

    table.set("gain2", "thaw").unwrap();
    assert_eq!(table.status("gain2"), Some(&Status::Free));
}
