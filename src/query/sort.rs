//! Column sorting with a Pool Entry Date tie-break

use crate::error::{ReportError, Result};
use crate::report::types::{compact, Column, Shape, TapeReport};
use tracing::debug;

pub const DEFAULT_SORT_COLUMN: &str = "Pool Entry Date";

/// Title-case every whitespace-separated word: `tape size` -> `Tape Size`
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Resolve a user-supplied column name against the columns of `shape`
pub fn resolve_sort_column(shape: Shape, name: &str) -> Result<Column> {
    // "Pool ID" title-cases to "Pool Id", so the exact match alone is not enough
    if let Some(column) = shape.column_named(&title_case(name)) {
        return Ok(column);
    }

    let wanted = compact(name);
    let legacy = match wanted.as_str() {
        "date" => Some(Column::PoolEntryDate),
        "location" => Some(Column::PoolId),
        _ => None,
    };

    shape
        .columns()
        .iter()
        .copied()
        .find(|column| column.compact_name() == wanted)
        .or(legacy)
        .ok_or_else(|| {
            let valid: Vec<&str> = shape.columns().iter().map(|c| c.name()).collect();
            ReportError::invalid_sort_column(format!(
                "'{}' is not a column of a {} (expected one of: {})",
                name,
                shape,
                valid.join(", ")
            ))
        })
}

/// Resolve `name` for the report's shape, then sort by it
pub fn sort_report(report: &mut TapeReport, name: &str) -> Result<Column> {
    let column = resolve_sort_column(report.shape, name)?;
    sort_by_column(report, column);
    Ok(column)
}

/// Stable ascending sort on `column`, ties broken by Pool Entry Date
pub fn sort_by_column(report: &mut TapeReport, column: Column) {
    debug!("Sorting {} tape(s) by '{}'", report.len(), column);

    report.records.sort_by(|a, b| {
        a.value(column)
            .cmp(&b.value(column))
            .then_with(|| a.pool_entry_date.cmp(&b.pool_entry_date))
    });
}
