use crate::domain::model::Contract;
use chrono::{Datelike, Local};
use std::collections::HashMap;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One labeled value of an ordered breakdown, ready for the chart layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: u64,
}

impl Segment {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBreakdown {
    pub year: i32,
    pub segments: Vec<Segment>,
}

/// Record count per customer, ordered by descending count; ties keep the
/// customers' first-encounter order.
pub fn by_customer(contracts: &[Contract]) -> Vec<Segment> {
    let mut counts: HashMap<&str, (usize, u64)> = HashMap::new();
    for (index, contract) in contracts.iter().enumerate() {
        counts
            .entry(contract.customer())
            .or_insert((index, 0))
            .1 += 1;
    }

    let mut entries: Vec<(&str, usize, u64)> = counts
        .into_iter()
        .map(|(customer, (first_seen, count))| (customer, first_seen, count))
        .collect();
    entries.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    entries
        .into_iter()
        .map(|(customer, _, count)| Segment::new(customer, count))
        .collect()
}

/// Record count per month of one display year: the preferred year when it
/// appears in the data, otherwise the smallest year present. All twelve
/// slots are emitted in calendar order, zeros included. `None` means there
/// are no records at all.
pub fn by_month(contracts: &[Contract], preferred_year: i32) -> Option<MonthlyBreakdown> {
    let mut years: HashMap<i32, [u64; 12]> = HashMap::new();
    for contract in contracts {
        let slots = years.entry(contract.day().year()).or_insert([0; 12]);
        slots[contract.day().month0() as usize] += 1;
    }

    let year = if years.contains_key(&preferred_year) {
        preferred_year
    } else {
        years.keys().min().copied()?
    };
    let slots = years[&year];

    Some(MonthlyBreakdown {
        year,
        segments: MONTH_LABELS
            .iter()
            .zip(slots)
            .map(|(label, value)| Segment::new(*label, value))
            .collect(),
    })
}

/// [`by_month`] anchored to the current real-world year.
pub fn by_month_current(contracts: &[Contract]) -> Option<MonthlyBreakdown> {
    by_month(contracts, Local::now().year())
}
