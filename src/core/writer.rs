use crate::domain::model::Contract;
use crate::utils::error::Result;
use std::fs;

pub const CANONICAL_HEADER: [&str; 4] = ["id", "customer", "date", "amount"];

/// Any of these inside a cell forces double-quote wrapping on write.
const QUOTE_TRIGGERS: [char; 6] = [',', ';', '\t', '|', '"', '\n'];

pub fn write_table(path: &str, contracts: &[Contract]) -> Result<()> {
    fs::write(path, render_table(contracts))?;
    Ok(())
}

/// Canonical comma-separated form: header line first, one record per line,
/// trailing newline, minimal quoting with inner quotes doubled.
pub fn render_table(contracts: &[Contract]) -> String {
    let mut out = String::new();
    out.push_str(&CANONICAL_HEADER.join(","));
    out.push('\n');
    for contract in contracts {
        let line: Vec<String> = contract.to_row().iter().map(|cell| quote_cell(cell)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

fn quote_cell(cell: &str) -> String {
    if cell.contains(&QUOTE_TRIGGERS[..]) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
