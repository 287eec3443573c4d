//! Tape Report JSON Loader
//!
//! Reads an exported report document and locates its record array.

use super::types::{RawTape, Shape};
use crate::error::{ReportError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Pagination token the export tooling may emit next to the record array
const MARKER_KEY: &str = "Marker";

/// Record array of a document together with its shape
#[derive(Debug, Clone)]
pub struct RawReport {
    pub shape: Shape,
    pub records: Vec<RawTape>,
}

/// Read and decode the report stored at `path`
pub fn load_report(path: &Path) -> Result<RawReport> {
    debug!("Reading tape report: {}", path.display());
    let content = fs::read_to_string(path)?;
    let report = parse_report(&content)?;

    info!(
        "Loaded {} record(s) from {} ({})",
        report.records.len(),
        path.display(),
        report.shape
    );
    Ok(report)
}

/// Decode a report document already held in memory
pub fn parse_report(content: &str) -> Result<RawReport> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| ReportError::malformed_input(format!("invalid JSON: {}", e)))?;

    let Value::Object(fields) = document else {
        return Err(ReportError::malformed_input(
            "document must be a JSON object with one top-level field",
        ));
    };

    let (shape, value) = locate_records(fields)?;

    let Value::Array(items) = value else {
        return Err(ReportError::malformed_input(format!(
            "'{}' must hold an array of tape records",
            shape.key()
        )));
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<RawTape>(item).map_err(|e| {
                ReportError::malformed_input(format!("record {} of '{}': {}", index, shape.key(), e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Decoded {} raw {} record(s)", records.len(), shape);
    Ok(RawReport { shape, records })
}

/// Find the single recognised shape key among the document's top-level fields.
/// `fields` keeps document order, so the first key is the one written first.
fn locate_records(fields: Map<String, Value>) -> Result<(Shape, Value)> {
    let first_key = match fields.keys().next() {
        Some(key) => key.clone(),
        None => {
            return Err(ReportError::malformed_input(
                "document has no top-level fields",
            ))
        }
    };

    let mut found: Option<(Shape, Value)> = None;
    for (key, value) in fields {
        match Shape::from_key(&key) {
            Some(shape) => {
                if let Some((previous, _)) = &found {
                    return Err(ReportError::malformed_input(format!(
                        "document holds both '{}' and '{}'",
                        previous.key(),
                        key
                    )));
                }
                found = Some((shape, value));
            }
            None if key == MARKER_KEY => debug!("Ignoring pagination marker"),
            None => debug!("Ignoring top-level field '{}'", key),
        }
    }

    found.ok_or_else(|| ReportError::unsupported_shape(first_key))
}
