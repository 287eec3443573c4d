//! Run configuration, built once from the command line

use crate::cli::Cli;
use crate::error::Result;
use crate::query::{parse_conditions, DateRangeSpec, SearchCondition, DEFAULT_SORT_COLUMN};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub file: PathBuf,
    pub date_range: Option<DateRangeSpec>,
    pub sort: String,
    pub search: Vec<SearchCondition>,
}

impl ReportConfig {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            date_range: None,
            sort: DEFAULT_SORT_COLUMN.to_string(),
            search: Vec::new(),
        }
    }

    /// Validate the date range syntax up front; columns are resolved per shape later
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let date_range = cli
            .date_range
            .as_deref()
            .filter(|expr| !expr.trim().is_empty())
            .map(str::parse::<DateRangeSpec>)
            .transpose()?;

        Ok(Self {
            file: cli.file.clone(),
            date_range,
            sort: cli.sort.clone(),
            search: cli
                .search
                .as_deref()
                .map(parse_conditions)
                .unwrap_or_default(),
        })
    }

    pub fn with_date_range(mut self, expr: &str) -> Result<Self> {
        self.date_range = Some(expr.parse()?);
        Ok(self)
    }

    pub fn with_sort(mut self, column: impl Into<String>) -> Self {
        self.sort = column.into();
        self
    }

    pub fn with_search(mut self, expr: &str) -> Self {
        self.search = parse_conditions(expr);
        self
    }
}
