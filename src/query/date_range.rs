//! Inclusive date-range filtering on a date column

use crate::error::{ReportError, Result};
use crate::report::types::{compact, CellValue, Column, Shape, TapeReport};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;
use tracing::{debug, info};

const DATE_FORMAT: &str = "%Y/%m/%d";

/// Parsed `[Column: ]YYYY/MM/DD-YYYY/MM/DD` expression.
/// The column stays unresolved until the report shape is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeSpec {
    pub column: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

fn parse_day(text: &str) -> Result<NaiveDateTime> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map(|day| day.and_time(NaiveTime::default()))
        .map_err(|e| {
            ReportError::invalid_date_range(format!(
                "'{}' is not a YYYY/MM/DD date ({})",
                text.trim(),
                e
            ))
        })
}

impl FromStr for DateRangeSpec {
    type Err = ReportError;

    fn from_str(expr: &str) -> Result<Self> {
        let (column, range) = match expr.split_once(':') {
            Some((column, range)) => (Some(column.trim()), range),
            None => (None, expr),
        };

        let bounds: Vec<&str> = range.split('-').collect();
        let [start, end] = bounds[..] else {
            return Err(ReportError::invalid_date_range(format!(
                "'{}' must be two dates separated by '-'",
                range.trim()
            )));
        };

        let start = parse_day(start)?;
        let end = parse_day(end)?;
        if start > end {
            return Err(ReportError::invalid_date_range(format!(
                "start {} is after end {}",
                start.date(),
                end.date()
            )));
        }

        Ok(Self {
            column: column.filter(|c| !c.is_empty()).map(str::to_string),
            start,
            end,
        })
    }
}

impl DateRangeSpec {
    /// Date column this range applies to for `shape`; defaults to Pool Entry Date
    pub fn resolve_column(&self, shape: Shape) -> Result<Column> {
        let Some(name) = &self.column else {
            return Ok(Column::PoolEntryDate);
        };

        let wanted = compact(name);
        shape
            .date_columns()
            .find(|column| column.compact_name() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = shape.date_columns().map(Column::name).collect();
                ReportError::invalid_date_range(format!(
                    "'{}' is not a date column of a {} (expected one of: {})",
                    name,
                    shape,
                    valid.join(", ")
                ))
            })
    }

    pub fn contains(&self, value: NaiveDateTime) -> bool {
        self.start <= value && value <= self.end
    }

    /// Keep only records whose date falls inside the range, at full precision
    pub fn apply(&self, report: &mut TapeReport) -> Result<()> {
        let column = self.resolve_column(report.shape)?;
        let before = report.len();

        report.records.retain(|record| match record.value(column) {
            Some(CellValue::Date(value)) => self.contains(value),
            _ => false,
        });

        debug!(
            "Date range {} to {} on '{}'",
            self.start.date(),
            self.end.date(),
            column
        );
        info!("{} of {} tape(s) within date range", report.len(), before);
        Ok(())
    }
}
