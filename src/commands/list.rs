//! `cppvend list`

use crate::ledger::Ledger;
use crate::ui;
use anyhow::Result;
use colored::*;

pub fn run() -> Result<()> {
    let ledger = Ledger::load()?;
    let table = table(&ledger);
    if table.is_empty() {
        println!("{} No packages installed.", "ℹ".blue());
    } else {
        table.print();
    }
    Ok(())
}

fn table(ledger: &Ledger) -> ui::Table {
    let mut table = ui::Table::new(&["Package", "Version", "Files"]);
    for (key, record) in &ledger.packages {
        table.add_row(vec![
            key.clone(),
            record.version.clone(),
            record.files.len().to_string(),
        ]);
    }
    table
}
