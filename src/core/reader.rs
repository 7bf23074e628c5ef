use crate::utils::error::Result;
use std::fs;

/// Delimiter candidates, tried in order against the header line only.
const DELIMITER_CANDIDATES: [char; 4] = [',', ';', '\t', '|'];

/// A split but otherwise uninterpreted table: trimmed header names plus data
/// rows already aligned to header width.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub delimiter: char,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }
}

/// Picks whichever candidate yields the most fields; ties go to the earlier
/// candidate, and `,` stands when every candidate yields a single field.
pub fn sniff_delimiter(header_line: &str) -> char {
    let mut best = ',';
    let mut best_fields = 1;
    for candidate in DELIMITER_CANDIDATES {
        let fields = header_line.split(candidate).count();
        if fields > best_fields {
            best = candidate;
            best_fields = fields;
        }
    }
    best
}

pub fn read_table(path: &str) -> Result<RawTable> {
    let text = fs::read_to_string(path)?;
    Ok(parse_table(&text))
}

/// Splitting is purely delimiter-based: no quoting or escaping is honored,
/// and the sniffed delimiter is not re-validated against data rows.
pub fn parse_table(text: &str) -> RawTable {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    let Some((first, rest)) = lines.split_first() else {
        return RawTable {
            header: Vec::new(),
            rows: Vec::new(),
            delimiter: ',',
        };
    };

    let delimiter = sniff_delimiter(first);
    let header = split_fields(first, delimiter);
    let rows = rest
        .iter()
        .map(|line| {
            let mut fields = split_fields(line, delimiter);
            // Align to header width: pad short rows, truncate long ones.
            fields.resize(header.len(), String::new());
            fields
        })
        .collect();

    RawTable {
        header,
        rows,
        delimiter,
    }
}

fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|field| field.trim().to_string())
        .collect()
}
