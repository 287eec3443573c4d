//! Tape Report Module
//!
//! Loading and normalization of tape gateway report exports.
//!
//! ## Structure
//! - `types`: Shapes, columns and the normalized record model
//! - `loader`: JSON document decoding and shape detection
//! - `normalizer`: Raw record to `TapeRecord` conversion
//! - `identifier`: Archive identifier extraction

pub mod identifier;
pub mod loader;
pub mod normalizer;
pub mod types;

pub use identifier::extract_archive_identifier;
pub use loader::{load_report, parse_report, RawReport};
pub use normalizer::parse_timestamp;
pub use types::{
    CellValue, Column, ColumnKind, CreationInfo, RawTape, Shape, TapeDetails, TapeRecord,
    TapeReport,
};
