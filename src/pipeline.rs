//! Report pipeline: load, normalize, filter, identify, sort, search

use crate::config::ReportConfig;
use crate::error::Result;
use crate::query::{apply_conditions, resolve_sort_column, sort_by_column};
use crate::report::{load_report, parse_report, RawReport, TapeReport};
use tracing::{debug, info};

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Nothing left after the date-range filter, or an empty report
    NoTapes,
    Table {
        archive_identifier: String,
        report: TapeReport,
    },
}

/// Run the whole pipeline against the file named in `config`
pub fn run(config: &ReportConfig) -> Result<ReportOutcome> {
    let raw = load_report(&config.file)?;
    process(raw, config)
}

/// Run the pipeline against an in-memory document
pub fn run_str(content: &str, config: &ReportConfig) -> Result<ReportOutcome> {
    process(parse_report(content)?, config)
}

fn process(raw: RawReport, config: &ReportConfig) -> Result<ReportOutcome> {
    let mut report = TapeReport::from_raw(raw)?;
    let sort_column = resolve_sort_column(report.shape, &config.sort)?;

    if let Some(range) = &config.date_range {
        range.apply(&mut report)?;
    }

    let Some(archive_identifier) = report.archive_identifier().transpose()? else {
        info!("No tapes found");
        return Ok(ReportOutcome::NoTapes);
    };
    debug!("Archive identifier: {}", archive_identifier);

    sort_by_column(&mut report, sort_column);
    apply_conditions(&mut report, &config.search)?;

    if report.is_empty() {
        info!("No tapes match the search conditions");
    }

    Ok(ReportOutcome::Table {
        archive_identifier,
        report,
    })
}
