pub mod aggregate;
pub mod date;
pub mod mapper;
pub mod reader;
pub mod session;
pub mod writer;

pub use crate::domain::model::Contract;
pub use crate::utils::error::Result;
