//! tape-report Library
//!
//! Loads tape gateway report exports (simple, full and archived tape
//! lists), normalizes them into one typed table, and filters, sorts,
//! searches and renders that table.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logger;
pub mod pipeline;
pub mod query;
pub mod report;


// Re-export key types for easier use
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use pipeline::{run, run_str, ReportOutcome};
pub use report::{CellValue, Column, ColumnKind, Shape, TapeRecord, TapeReport};
