//! Example of building and editing a parameter table.
//!
//! This example walks through every way a table can be read and written:
//! by column, by parameter, by cell in either order, and by assigning one
//! parameter's row to another to tie them. Run with `RUST_LOG=warn` to see
//! the diagnostics for rejected writes as they happen.

use paramtable_rs::table::{Attribute, Cell, ErrorInterval, ParameterTable, WriteValue};
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Parameter table example");
    println!("=======================\n");

    let mut table = ParameterTable::create(
        ["p1_spectrum1", "p2_spectrum1", "p1_spectrum2", "p2_spectrum2"],
        false,
    )?;
    println!("{}\n", table);

    // 1. Whole columns
    println!("1. Whole columns");
    println!("----------------");
    table.set("Value", vec![4.0, 0.3, 4.0, 0.3])?;
    let mut bounds = HashMap::new();
    bounds.insert("p1_spectrum1", (1.0, 50.0));
    bounds.insert("p1_spectrum2", (1.0, 50.0));
    table.set("Bounds", bounds)?;
    println!("{}\n", table);

    // 2. One parameter at a time
    println!("2. One parameter at a time");
    println!("--------------------------");
    table.set("p2_spectrum1", "glue")?;
    table.set(
        "p2_spectrum2",
        WriteValue::sequence([Cell::from("thaw"), Cell::from(0.25), Cell::from((0.0, 1.0))]),
    )?;
    println!("{}\n", table);

    // 3. Single cells, in either order
    println!("3. Single cells");
    println!("---------------");
    table.set(("p1_spectrum2", "Value"), 3.5)?;
    table.set(("Error", "p1_spectrum1"), (0.1, 0.2))?;
    println!("{}\n", table);

    // 4. Ties
    println!("4. Ties");
    println!("-------");
    let p1 = table.row("p1_spectrum1").ok_or("p1_spectrum1 is missing")?;
    table.set("p1_spectrum2", &p1)?;
    table.set("p2_spectrum2", "bind_p2_spectrum1")?;
    for (name, target) in table.tied_parameters() {
        println!("{} -> {}", name, target);
    }
    println!();

    // 5. Rejected cells are restored; the rest of the write stands
    println!("5. Rejected writes");
    println!("------------------");
    let report = table.set(
        "p1_spectrum1",
        WriteValue::mapping([
            ("Value", Cell::from(f64::NAN)),
            ("Bounds", Cell::from((0.0, 10.0))),
        ]),
    )?;
    for diagnostic in report.diagnostics() {
        println!("rejected: {}", diagnostic);
    }
    let report = table.set("p3_spectrum1", 1.0)?;
    if report.has_invalid_address() {
        println!("p3_spectrum1 is not in the table");
    }
    println!(
        "p1_spectrum1 value: {:?}, bounds: {}",
        table.value("p1_spectrum1"),
        table.cell("p1_spectrum1", Attribute::Bounds).unwrap_or(&Cell::Empty)
    );
    println!();

    // 6. Handing the free parameters to a fit and writing results back
    println!("6. Fit round trip");
    println!("-----------------");
    let free = table.free_parameters().join(", ");
    println!("free: {}", free);
    println!("starting values: {}", table.free_values());
    let n = table.free_parameters().len();
    let fitted: Vec<f64> = table.free_values().iter().map(|v| v * 1.1).collect();
    let errors = vec![ErrorInterval::symmetric(0.05); n];
    table.set_fit_results(&fitted, &errors)?;
    println!("{}\n", table);

    println!("export:\n{}", table.export().to_json()?);
    Ok(())
}
