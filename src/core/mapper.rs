use crate::core::date::parse_date;
use crate::domain::model::Contract;
use crate::utils::error::{DeskError, Result};
use std::collections::HashMap;

/// Accepted column names per canonical field, in priority order.
const ID_ALIASES: [&str; 3] = ["id", "contract_id", "cid"];
const CUSTOMER_ALIASES: [&str; 3] = ["customer", "client", "name"];
const DATE_ALIASES: [&str; 3] = ["date", "day", "created_at"];
const AMOUNT_ALIASES: [&str; 3] = ["amount", "sum", "price"];

/// Ephemeral view of one data row, keyed by lower-cased header name.
pub type RawRow = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct MapOutcome {
    pub contracts: Vec<Contract>,
    pub skipped: usize,
}

/// Builds contracts from aligned rows. A row that fails to map is skipped and
/// counted; the remaining rows are still processed.
pub fn map_rows(header: &[String], rows: &[Vec<String>]) -> MapOutcome {
    let header: Vec<String> = header
        .iter()
        .map(|name| name.trim().to_lowercase())
        .collect();

    let mut contracts = Vec::new();
    let mut skipped = 0;
    for fields in rows {
        let row: RawRow = header
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let value = fields.get(i).cloned().unwrap_or_default();
                (name.clone(), value)
            })
            .collect();
        match contract_from_row(&row) {
            Ok(contract) => contracts.push(contract),
            Err(_) => skipped += 1,
        }
    }
    MapOutcome { contracts, skipped }
}

pub fn contract_from_row(row: &RawRow) -> Result<Contract> {
    let id = first_non_empty(row, &ID_ALIASES);
    let customer = first_non_empty(row, &CUSTOMER_ALIASES);
    let day = parse_date(first_non_empty(row, &DATE_ALIASES))?;
    let amount = parse_amount(first_non_empty(row, &AMOUNT_ALIASES))?;
    Contract::new(id, customer, day, amount)
}

/// Resolves the first alias whose cell is non-empty; empty string otherwise.
fn first_non_empty<'r>(row: &'r RawRow, aliases: &[&str]) -> &'r str {
    aliases
        .iter()
        .filter_map(|alias| row.get(*alias))
        .map(String::as_str)
        .find(|value| !value.is_empty())
        .unwrap_or("")
}

/// Decimal commas are normalized to periods before parsing; an empty cell
/// means the amount is absent, not zero.
fn parse_amount(raw: &str) -> Result<Option<f64>> {
    let normalized = raw.replace(',', ".");
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return Ok(None);
    }
    let value: f64 = normalized.parse().map_err(|_| DeskError::NumericError {
        value: normalized.to_string(),
    })?;
    Ok(Some(value))
}
