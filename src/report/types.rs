//! Tape Report Type Definitions
//!
//! Raw JSON record layout as exported by the tape gateway, and the typed
//! tabular model every shape is normalized into.

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fmt;

/// Which of the three report layouts a document uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Simple,
    Full,
    Archived,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Simple, Shape::Full, Shape::Archived];

    /// Top-level document key that carries records of this shape
    pub fn key(self) -> &'static str {
        match self {
            Shape::Simple => "TapeInfos",
            Shape::Full => "Tapes",
            Shape::Archived => "TapeArchives",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shape| shape.key() == key)
    }

    /// Displayed columns, in display order
    pub fn columns(self) -> &'static [Column] {
        match self {
            Shape::Simple => &[
                Column::Barcode,
                Column::TapeSize,
                Column::Status,
                Column::PoolId,
                Column::PoolEntryDate,
            ],
            Shape::Full => &[
                Column::Barcode,
                Column::TapeSize,
                Column::TapeUsed,
                Column::Status,
                Column::PoolId,
                Column::Worm,
                Column::PoolEntryDate,
                Column::TapeCreated,
            ],
            Shape::Archived => &[
                Column::Barcode,
                Column::TapeSize,
                Column::TapeUsed,
                Column::Status,
                Column::PoolId,
                Column::Worm,
                Column::DateArchived,
                Column::PoolEntryDate,
                Column::TapeCreated,
            ],
        }
    }

    pub fn date_columns(self) -> impl Iterator<Item = Column> {
        self.columns()
            .iter()
            .copied()
            .filter(|column| column.kind() == ColumnKind::Date)
    }

    /// Exact, case- and space-sensitive lookup by displayed name
    pub fn column_named(self, name: &str) -> Option<Column> {
        self.columns()
            .iter()
            .copied()
            .find(|column| column.name() == name)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Simple => "simple tape list",
            Shape::Full => "full tape list",
            Shape::Archived => "archived tape list",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Barcode,
    TapeSize,
    TapeUsed,
    Status,
    PoolId,
    Worm,
    DateArchived,
    PoolEntryDate,
    TapeCreated,
}

/// Value type of a column; picks the comparison and search coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Boolean,
    Text,
    Date,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::Barcode => "Barcode",
            Column::TapeSize => "Tape Size",
            Column::TapeUsed => "Tape Used",
            Column::Status => "Status",
            Column::PoolId => "Pool ID",
            Column::Worm => "Worm",
            Column::DateArchived => "Date Archived",
            Column::PoolEntryDate => "Pool Entry Date",
            Column::TapeCreated => "Tape Created",
        }
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            Column::TapeSize | Column::TapeUsed => ColumnKind::Integer,
            Column::Worm => ColumnKind::Boolean,
            Column::DateArchived | Column::PoolEntryDate | Column::TapeCreated => ColumnKind::Date,
            Column::Barcode | Column::Status | Column::PoolId => ColumnKind::Text,
        }
    }

    /// Lower-cased name with spaces removed, e.g. `poolentrydate`
    pub fn compact_name(self) -> String {
        compact(self.name())
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn compact(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// One typed table cell. Ordering is only meaningful within a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellValue<'a> {
    Integer(u64),
    Boolean(bool),
    Text(&'a str),
    Date(NaiveDateTime),
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(value) => write!(f, "{}", value),
            CellValue::Boolean(value) => write!(f, "{}", value),
            CellValue::Text(value) => f.write_str(value),
            // whole seconds only; offset was already dropped while parsing
            CellValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Tape record exactly as it appears in the exported JSON.
/// Every key is optional here; the normalizer decides what each shape requires.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawTape {
    #[serde(rename = "TapeARN")]
    pub tape_arn: Option<String>,
    pub tape_barcode: Option<String>,
    pub tape_size_in_bytes: Option<u64>,
    pub tape_used_in_bytes: Option<u64>,
    pub tape_status: Option<String>,
    pub pool_id: Option<String>,
    pub worm: Option<bool>,
    pub pool_entry_date: Option<String>,
    pub tape_created_date: Option<String>,
    pub completion_time: Option<String>,
}

/// Fields only the full and archived listings carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationInfo {
    pub tape_used: u64,
    pub worm: bool,
    pub tape_created: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapeDetails {
    Simple,
    Full(CreationInfo),
    Archived {
        creation: CreationInfo,
        date_archived: NaiveDateTime,
    },
}

/// A normalized tape row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapeRecord {
    pub(crate) arn: String,
    pub barcode: String,
    pub tape_size: u64,
    pub status: String,
    pub pool_id: String,
    pub pool_entry_date: NaiveDateTime,
    pub details: TapeDetails,
}

impl TapeRecord {
    pub fn shape(&self) -> Shape {
        match self.details {
            TapeDetails::Simple => Shape::Simple,
            TapeDetails::Full(_) => Shape::Full,
            TapeDetails::Archived { .. } => Shape::Archived,
        }
    }

    /// Identifier string the archive identifier is derived from
    pub fn arn(&self) -> &str {
        &self.arn
    }

    fn creation(&self) -> Option<&CreationInfo> {
        match &self.details {
            TapeDetails::Simple => None,
            TapeDetails::Full(creation) | TapeDetails::Archived { creation, .. } => Some(creation),
        }
    }

    /// Typed cell for `column`, or `None` when this record's shape lacks it
    pub fn value(&self, column: Column) -> Option<CellValue<'_>> {
        let value = match column {
            Column::Barcode => CellValue::Text(&self.barcode),
            Column::TapeSize => CellValue::Integer(self.tape_size),
            Column::Status => CellValue::Text(&self.status),
            Column::PoolId => CellValue::Text(&self.pool_id),
            Column::PoolEntryDate => CellValue::Date(self.pool_entry_date),
            Column::TapeUsed => CellValue::Integer(self.creation()?.tape_used),
            Column::Worm => CellValue::Boolean(self.creation()?.worm),
            Column::TapeCreated => CellValue::Date(self.creation()?.tape_created),
            Column::DateArchived => match &self.details {
                TapeDetails::Archived { date_archived, .. } => CellValue::Date(*date_archived),
                _ => return None,
            },
        };
        Some(value)
    }
}

/// A normalized report: one shape, many rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapeReport {
    pub shape: Shape,
    pub records: Vec<TapeRecord>,
}

impl TapeReport {
    pub fn columns(&self) -> &'static [Column] {
        self.shape.columns()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
