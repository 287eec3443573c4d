use std::process::ExitCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Unsupported report shape: top-level key '{0}' is not one of TapeInfos, Tapes, TapeArchives")]
    UnsupportedShape(String),

    #[error("Missing field '{field}' in record {index}")]
    MissingField { index: usize, field: String },

    #[error("Malformed tape identifier: {0}")]
    MalformedIdentifier(String),

    #[error("Invalid date range: {0}. Example: 2021/08/01-2021/08/26")]
    InvalidDateRange(String),

    #[error("Invalid sort column: {0}")]
    InvalidSortColumn(String),

    #[error("Invalid search value: {0}")]
    InvalidSearchValue(String),
}

impl ReportError {
    pub fn malformed_input<T: Into<String>>(msg: T) -> Self {
        Self::MalformedInput(msg.into())
    }

    pub fn unsupported_shape<T: Into<String>>(key: T) -> Self {
        Self::UnsupportedShape(key.into())
    }

    pub fn missing_field<T: Into<String>>(index: usize, field: T) -> Self {
        Self::MissingField {
            index,
            field: field.into(),
        }
    }

    pub fn malformed_identifier<T: Into<String>>(msg: T) -> Self {
        Self::MalformedIdentifier(msg.into())
    }

    pub fn invalid_date_range<T: Into<String>>(msg: T) -> Self {
        Self::InvalidDateRange(msg.into())
    }

    pub fn invalid_sort_column<T: Into<String>>(msg: T) -> Self {
        Self::InvalidSortColumn(msg.into())
    }

    pub fn invalid_search_value<T: Into<String>>(msg: T) -> Self {
        Self::InvalidSearchValue(msg.into())
    }

    /// Process exit code for this failure kind. Codes are listed in `--help`.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => 3,
            Self::MalformedInput(_) => 4,
            Self::UnsupportedShape(_) => 5,
            Self::MissingField { .. } => 6,
            Self::MalformedIdentifier(_) => 7,
            Self::InvalidDateRange(_) => 8,
            Self::InvalidSortColumn(_) => 9,
            Self::InvalidSearchValue(_) => 10,
        }
    }
}

impl From<&ReportError> for ExitCode {
    fn from(err: &ReportError) -> Self {
        ExitCode::from(err.exit_code())
    }
}
