use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_positive_number, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SegmentMode {
    /// Pie of record counts per customer
    Customers,
    /// Pie of record counts per month of the displayed year
    Months,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contract-desk")]
#[command(about = "Load, segment and chart delimited contract tables")]
pub struct CliConfig {
    /// Input table (.txt or .csv)
    pub input: String,

    /// Re-export the loaded records to this file as canonical CSV
    #[arg(long)]
    pub export: Option<String>,

    /// Which breakdown to chart
    #[arg(long, value_enum, default_value = "customers")]
    pub segment: SegmentMode,

    /// Where the pie chart is written
    #[arg(long, default_value = "chart.svg")]
    pub chart: String,

    /// Chart viewport width in pixels
    #[arg(long, default_value_t = 980)]
    pub width: u32,

    /// Chart viewport height in pixels
    #[arg(long, default_value_t = 560)]
    pub height: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_file_extension("input", &self.input, &["txt", "csv"])?;
        if let Some(export) = &self.export {
            validate_file_extension("export", export, &["txt", "csv"])?;
        }
        validate_file_extension("chart", &self.chart, &["svg"])?;
        validate_positive_number("width", self.width, 1)?;
        validate_positive_number("height", self.height, 1)?;
        Ok(())
    }
}
