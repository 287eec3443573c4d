//! Archive identifier extraction from tape ARNs

use super::types::TapeReport;
use crate::error::{ReportError, Result};

const ARN_PREFIX: &str = "arn:aws:";
const RESOURCE_MARKERS: [&str; 2] = [":tape", ":gateway"];

/// Text between `arn:aws:` and the `:tape` (or else `:gateway`) marker.
///
/// `arn:aws:storagegateway:us-east-1:111:tape/T1` yields
/// `storagegateway:us-east-1:111`.
pub fn extract_archive_identifier(arn: &str) -> Result<String> {
    let start = arn
        .find(ARN_PREFIX)
        .map(|pos| pos + ARN_PREFIX.len())
        .ok_or_else(|| {
            ReportError::malformed_identifier(format!("'{}' does not contain '{}'", arn, ARN_PREFIX))
        })?;

    let end = RESOURCE_MARKERS
        .iter()
        .find_map(|marker| arn[start..].find(marker))
        .map(|pos| start + pos)
        .ok_or_else(|| {
            ReportError::malformed_identifier(format!(
                "'{}' contains neither ':tape' nor ':gateway'",
                arn
            ))
        })?;

    Ok(arn[start..end].to_string())
}

impl TapeReport {
    /// Archive identifier shared by the report, taken from its first record.
    /// `None` for a report without records.
    pub fn archive_identifier(&self) -> Option<Result<String>> {
        self.records
            .first()
            .map(|first| extract_archive_identifier(first.arn()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tape_arn() {
        assert_eq!(
            extract_archive_identifier("arn:aws:storagegateway:region:acct:tape/TAPE01").unwrap(),
            "storagegateway:region:acct"
        );
    }

    #[test]
    fn test_gateway_arn() {
        assert_eq!(
            extract_archive_identifier("arn:aws:storagegateway:us-west-2:222:gateway/GW01")
                .unwrap(),
            "storagegateway:us-west-2:222"
        );
    }

    #[test]
    fn test_tape_marker_preferred() {
        assert_eq!(
            extract_archive_identifier("arn:aws:sgw:r:1:gateway/G1:tape/T1").unwrap(),
            "sgw:r:1:gateway/G1"
        );
    }

    #[test]
    fn test_report_identifier() {
        use crate::report::types::{Shape, TapeDetails, TapeRecord};
        use chrono::NaiveDate;

        let mut report = TapeReport {
            shape: Shape::Simple,
            records: Vec::new(),
        };
        assert!(report.archive_identifier().is_none());

        report.records.push(TapeRecord {
            arn: "arn:aws:storagegateway:us-east-1:111:tape/T1".to_string(),
            barcode: "T1".to_string(),
            tape_size: 100,
            status: "AVAILABLE".to_string(),
            pool_id: String::new(),
            pool_entry_date: NaiveDate::from_ymd_opt(2021, 8, 10)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap(),
            details: TapeDetails::Simple,
        });
        assert_eq!(
            report.archive_identifier().unwrap().unwrap(),
            "storagegateway:us-east-1:111"
        );
    }

    #[test]
    fn test_malformed_identifier() {
        for arn in ["", "storagegateway:r:1:tape/T1", "arn:aws:storagegateway:r:1:volume/V1"] {
            let err = extract_archive_identifier(arn).unwrap_err();
            assert!(matches!(err, ReportError::MalformedIdentifier(_)), "{}", arn);
        }
    }
}
