//! Equality search conditions on non-date columns

use crate::error::{ReportError, Result};
use crate::report::types::{CellValue, Column, ColumnKind, TapeReport};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// One `Column: value` condition, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCondition {
    pub column: String,
    pub value: String,
}

/// Typed operand a condition compares against
#[derive(Debug, Clone, PartialEq, Eq)]
enum Needle {
    Integer(u64),
    Boolean(bool),
    Text(String),
}

impl Needle {
    fn matches(&self, cell: Option<CellValue<'_>>) -> bool {
        match (self, cell) {
            (Needle::Integer(wanted), Some(CellValue::Integer(value))) => *wanted == value,
            (Needle::Boolean(wanted), Some(CellValue::Boolean(value))) => *wanted == value,
            (Needle::Text(wanted), Some(CellValue::Text(value))) => wanted == value,
            _ => false,
        }
    }
}

/// Parse a comma-separated condition list. Entries without `:` are skipped.
pub fn parse_conditions(expr: &str) -> Vec<SearchCondition> {
    expr.split(',')
        .filter(|part| !part.trim().is_empty())
        .filter_map(|part| match part.parse::<SearchCondition>() {
            Ok(condition) => Some(condition),
            Err(_) => {
                warn!("Skipping search condition '{}': expected 'Column: value'", part.trim());
                None
            }
        })
        .collect()
}

impl FromStr for SearchCondition {
    type Err = ReportError;

    fn from_str(part: &str) -> Result<Self> {
        let (column, value) = part.split_once(':').ok_or_else(|| {
            ReportError::invalid_search_value(format!("'{}' has no ':' separator", part.trim()))
        })?;

        Ok(Self {
            column: column.trim().to_string(),
            value: value.trim().to_string(),
        })
    }
}

impl SearchCondition {
    /// Coerce the value for `column`; `None` means the column cannot be searched
    fn needle(&self, column: Column) -> Result<Option<Needle>> {
        let needle = match column.kind() {
            ColumnKind::Date => return Ok(None),
            ColumnKind::Integer => Needle::Integer(self.value.parse().map_err(|_| {
                ReportError::invalid_search_value(format!(
                    "'{}' expects an integer, got '{}'",
                    column, self.value
                ))
            })?),
            ColumnKind::Boolean => Needle::Boolean(!self.value.eq_ignore_ascii_case("false")),
            ColumnKind::Text => Needle::Text(self.value.clone()),
        };
        Ok(Some(needle))
    }

    /// Narrow `report` to the matching records. Unknown and date columns are skipped.
    pub fn apply(&self, report: &mut TapeReport) -> Result<()> {
        let Some(column) = report.shape.column_named(&self.column) else {
            warn!(
                "Skipping search on '{}': not a column of a {}",
                self.column, report.shape
            );
            return Ok(());
        };

        let Some(needle) = self.needle(column)? else {
            warn!(
                "Skipping search on '{}': date columns are filtered with --date-range",
                column
            );
            return Ok(());
        };

        debug!("Search {} = {:?}", column, needle);
        report
            .records
            .retain(|record| needle.matches(record.value(column)));
        Ok(())
    }
}

/// Apply every condition in order; each narrows the previous result
pub fn apply_conditions(report: &mut TapeReport, conditions: &[SearchCondition]) -> Result<()> {
    if conditions.is_empty() {
        return Ok(());
    }

    let before = report.len();
    for condition in conditions {
        condition.apply(report)?;
    }
    info!("{} of {} tape(s) match search", report.len(), before);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::{CreationInfo, Shape, TapeDetails, TapeRecord};
    use chrono::NaiveDate;

    fn tape(barcode: &str, pool: &str, status: &str, used: u64, worm: bool) -> TapeRecord {
        let at = NaiveDate::from_ymd_opt(2021, 8, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        TapeRecord {
            arn: format!("arn:aws:storagegateway:r:1:tape/{}", barcode),
            barcode: barcode.to_string(),
            tape_size: 2000,
            status: status.to_string(),
            pool_id: pool.to_string(),
            pool_entry_date: at,
            details: TapeDetails::Full(CreationInfo {
                tape_used: used,
                worm,
                tape_created: at,
            }),
        }
    }

    fn sample() -> TapeReport {
        TapeReport {
            shape: Shape::Full,
            records: vec![
                tape("T1", "GLACIER", "ARCHIVED", 10, false),
                tape("T2", "GLACIER", "AVAILABLE", 20, true),
                tape("T3", "DEEP_ARCHIVE", "ARCHIVED", 10, true),
                tape("T4", "GLACIER", "ARCHIVED", 30, false),
            ],
        }
    }

    fn barcodes(report: &TapeReport) -> Vec<&str> {
        report.records.iter().map(|r| r.barcode.as_str()).collect()
    }

    fn search(expr: &str) -> Result<TapeReport> {
        let mut report = sample();
        apply_conditions(&mut report, &parse_conditions(expr))?;
        Ok(report)
    }

    #[test]
    fn test_parse_conditions() {
        let conditions = parse_conditions("Pool ID: GLACIER , Worm:false,,bogus");
        assert_eq!(
            conditions,
            vec![
                SearchCondition {
                    column: "Pool ID".to_string(),
                    value: "GLACIER".to_string()
                },
                SearchCondition {
                    column: "Worm".to_string(),
                    value: "false".to_string()
                },
            ]
        );
        assert!(parse_conditions("").is_empty());
    }

    #[test]
    fn test_boolean_search() {
        assert_eq!(barcodes(&search("Worm: false").unwrap()), vec!["T1", "T4"]);
        assert_eq!(barcodes(&search("Worm: FALSE").unwrap()), vec!["T1", "T4"]);
        assert_eq!(barcodes(&search("Worm: yes").unwrap()), vec!["T2", "T3"]);
    }

    #[test]
    fn test_integer_search() {
        assert_eq!(barcodes(&search("Tape Used: 10").unwrap()), vec!["T1", "T3"]);

        let err = search("Tape Used: ten").unwrap_err();
        assert!(matches!(err, ReportError::InvalidSearchValue(_)));
    }

    #[test]
    fn test_text_search_is_exact() {
        assert_eq!(barcodes(&search("Status: ARCHIVED").unwrap()), vec!["T1", "T3", "T4"]);
        assert!(search("Status: archived").unwrap().is_empty());
    }

    #[test]
    fn test_conditions_compose_as_intersection() {
        let pool = search("Pool ID: GLACIER").unwrap();
        let status = search("Status: ARCHIVED").unwrap();
        let both = search("Pool ID: GLACIER, Status: ARCHIVED").unwrap();

        let expected: Vec<&str> = barcodes(&pool)
            .into_iter()
            .filter(|b| barcodes(&status).contains(b))
            .collect();
        assert_eq!(barcodes(&both), expected);
        assert_eq!(barcodes(&both), vec!["T1", "T4"]);
    }

    #[test]
    fn test_skipped_conditions_leave_records_unchanged() {
        let all = barcodes(&sample()).len();
        assert_eq!(search("Pool Entry Date: 2021/08/01").unwrap().len(), all);
        assert_eq!(search("Tape Created: 2021/08/01").unwrap().len(), all);
        assert_eq!(search("pool id: GLACIER").unwrap().len(), all);
        assert_eq!(search("Colour: red").unwrap().len(), all);
    }
}
