//! Query Module
//!
//! Date-range filtering, sorting and search over a normalized report.

pub mod date_range;
pub mod search;
pub mod sort;

pub use date_range::DateRangeSpec;
pub use search::{apply_conditions, parse_conditions, SearchCondition};
pub use sort::{resolve_sort_column, sort_by_column, sort_report, DEFAULT_SORT_COLUMN};
