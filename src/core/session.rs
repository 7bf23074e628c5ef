use crate::core::aggregate::{self, MonthlyBreakdown, Segment};
use crate::core::{mapper, reader, writer};
use crate::domain::model::Contract;
use crate::utils::error::Result;

/// Owns the in-memory record list and exposes the user-triggered operations.
/// Each operation runs to completion over the current snapshot; the list is
/// only ever replaced wholesale by a successful load.
#[derive(Debug, Default)]
pub struct Session {
    contracts: Vec<Contract>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadOutcome {
    /// The file held no non-blank lines; the previous list is untouched.
    EmptyFile,
    Loaded { loaded: usize, skipped: usize },
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    pub fn load(&mut self, path: &str) -> Result<LoadOutcome> {
        tracing::debug!("Reading table from {}", path);
        let table = reader::read_table(path)?;
        if table.is_empty() {
            tracing::info!("{}: file is empty", path);
            return Ok(LoadOutcome::EmptyFile);
        }

        tracing::debug!(
            "Sniffed delimiter {:?}, {} data rows",
            table.delimiter,
            table.rows.len()
        );
        let outcome = mapper::map_rows(&table.header, &table.rows);
        let (loaded, skipped) = (outcome.contracts.len(), outcome.skipped);
        self.contracts = outcome.contracts;
        tracing::info!("Loaded {} contracts, skipped {} rows", loaded, skipped);
        Ok(LoadOutcome::Loaded { loaded, skipped })
    }

    /// Writes the canonical CSV form; returns the record count written.
    pub fn export(&self, path: &str) -> Result<usize> {
        writer::write_table(path, &self.contracts)?;
        tracing::info!("Exported {} contracts to {}", self.contracts.len(), path);
        Ok(self.contracts.len())
    }

    pub fn segment_by_customer(&self) -> Vec<Segment> {
        aggregate::by_customer(&self.contracts)
    }

    pub fn segment_by_month(&self) -> Option<MonthlyBreakdown> {
        aggregate::by_month_current(&self.contracts)
    }

    /// Listing lines in row order, one `id | customer | date | amount` each.
    pub fn listing(&self) -> Vec<String> {
        self.contracts
            .iter()
            .map(|contract| contract.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_table(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_load_replaces_list_and_reports_counts() {
        let file = temp_table("id,customer,date,amount\nC-1,Acme,2024-03-05,10\nC-2,,2024-03-05,\n");
        let mut session = Session::new();

        let outcome = session.load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                loaded: 1,
                skipped: 1
            }
        );
        assert_eq!(session.contracts().len(), 1);
    }

    #[test]
    fn test_empty_file_leaves_previous_list_installed() {
        let good = temp_table("id,customer,date\nC-1,Acme,2024-03-05\n");
        let empty = temp_table("\n   \n");
        let mut session = Session::new();

        session.load(good.path().to_str().unwrap()).unwrap();
        let outcome = session.load(empty.path().to_str().unwrap()).unwrap();

        assert_eq!(outcome, LoadOutcome::EmptyFile);
        assert_eq!(session.contracts().len(), 1);
    }

    #[test]
    fn test_failed_load_leaves_previous_list_installed() {
        let good = temp_table("id,customer,date\nC-1,Acme,2024-03-05\n");
        let mut session = Session::new();

        session.load(good.path().to_str().unwrap()).unwrap();
        assert!(session.load("/nonexistent/contracts.csv").is_err());
        assert_eq!(session.contracts().len(), 1);
    }

    #[test]
    fn test_listing_lines() {
        let file = temp_table("id,customer,date,amount\nC-1,Acme,2024-03-05,1200.7\n");
        let mut session = Session::new();
        session.load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(session.listing(), vec!["C-1 | Acme | 2024-03-05 | 1201"]);
    }

    #[test]
    fn test_export_and_segmentations_are_reentrant() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let file = temp_table(
            "id,customer,date\nC-1,Acme,2024-03-05\nC-2,Acme,2024-04-01\nC-3,Globex,2024-04-02\n",
        );
        let mut session = Session::new();
        session.load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(session.export(out.to_str().unwrap()).unwrap(), 3);
        assert_eq!(session.export(out.to_str().unwrap()).unwrap(), 3);

        let by_customer = session.segment_by_customer();
        assert_eq!(by_customer[0], Segment::new("Acme", 2));
        assert_eq!(by_customer[1], Segment::new("Globex", 1));
        assert_eq!(session.segment_by_customer(), by_customer);
    }
}
