pub mod chart;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::chart::svg::SvgBackend;
pub use crate::chart::view::ChartView;
pub use crate::config::{CliConfig, SegmentMode};
pub use crate::core::session::{LoadOutcome, Session};
pub use crate::domain::model::Contract;
pub use crate::utils::error::{DeskError, Result};
