//! Tape Record Normalization
//!
//! Turns raw records of any shape into typed `TapeRecord`s.

use super::loader::RawReport;
use super::types::{CreationInfo, RawTape, Shape, TapeDetails, TapeRecord, TapeReport};
use crate::error::{ReportError, Result};
use chrono::NaiveDateTime;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse an exported timestamp such as `2021-10-14T14:16:11.709000-04:00`.
///
/// Everything from the last `-` onward is discarded, so the offset is lost
/// and the wall-clock value is kept as-is.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let local = &raw[..raw.rfind('-')?];
    NaiveDateTime::parse_from_str(local, TIMESTAMP_FORMAT).ok()
}

impl TapeReport {
    pub fn from_raw(raw: RawReport) -> Result<Self> {
        let shape = raw.shape;
        let records = raw
            .records
            .into_iter()
            .enumerate()
            .map(|(index, tape)| RecordFields { index, tape }.into_record(shape))
            .collect::<Result<Vec<_>>>()?;

        debug!("Normalized {} {} record(s)", records.len(), shape);
        Ok(Self { shape, records })
    }
}

struct RecordFields {
    index: usize,
    tape: RawTape,
}

impl RecordFields {
    fn require<T>(&self, value: Option<T>, key: &str) -> Result<T> {
        value.ok_or_else(|| ReportError::missing_field(self.index, key))
    }

    fn timestamp(&self, value: Option<&str>, key: &str) -> Result<NaiveDateTime> {
        let raw = self.require(value, key)?;
        parse_timestamp(raw).ok_or_else(|| {
            ReportError::malformed_input(format!(
                "record {}: '{}' is not a timestamp like 2021-08-10T00:00:00.000000-04:00 (got '{}')",
                self.index, key, raw
            ))
        })
    }

    fn creation(&self) -> Result<CreationInfo> {
        Ok(CreationInfo {
            tape_used: self.require(self.tape.tape_used_in_bytes, "TapeUsedInBytes")?,
            worm: self.require(self.tape.worm, "Worm")?,
            tape_created: self.timestamp(self.tape.tape_created_date.as_deref(), "TapeCreatedDate")?,
        })
    }

    fn into_record(self, shape: Shape) -> Result<TapeRecord> {
        let details = match shape {
            Shape::Simple => TapeDetails::Simple,
            Shape::Full => TapeDetails::Full(self.creation()?),
            Shape::Archived => TapeDetails::Archived {
                creation: self.creation()?,
                date_archived: self.timestamp(self.tape.completion_time.as_deref(), "CompletionTime")?,
            },
        };

        let pool_entry_date = self.timestamp(self.tape.pool_entry_date.as_deref(), "PoolEntryDate")?;
        let tape_size = self.require(self.tape.tape_size_in_bytes, "TapeSizeInBytes")?;
        let RawTape {
            tape_arn,
            tape_barcode,
            tape_status,
            pool_id,
            ..
        } = self.tape;

        Ok(TapeRecord {
            arn: tape_arn.ok_or_else(|| ReportError::missing_field(self.index, "TapeARN"))?,
            barcode: tape_barcode.ok_or_else(|| ReportError::missing_field(self.index, "TapeBarcode"))?,
            tape_size,
            status: tape_status.ok_or_else(|| ReportError::missing_field(self.index, "TapeStatus"))?,
            pool_id: pool_id.unwrap_or_default(),
            pool_entry_date,
            details,
        })
    }
}
