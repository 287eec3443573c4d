use crate::pipeline::ReportOutcome;
use crate::report::{TapeRecord, TapeReport};
use tabled::builder::Builder;
use tabled::settings::Style;

pub const NO_TAPES_MESSAGE: &str = "No tapes found.";

/// Render a pipeline outcome as the text printed on stdout
pub fn render_outcome(outcome: &ReportOutcome) -> String {
    match outcome {
        ReportOutcome::NoTapes => NO_TAPES_MESSAGE.to_string(),
        ReportOutcome::Table {
            archive_identifier,
            report,
        } => format!(
            "Archive Identifier: {}\n{}",
            archive_identifier,
            render_table(report)
        ),
    }
}

/// Bordered table with one header row; columns follow the report shape
pub fn render_table(report: &TapeReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(report.columns().iter().map(|column| column.name()));

    for record in &report.records {
        builder.push_record(row(report, record));
    }

    builder.build().with(Style::ascii()).to_string()
}

fn row(report: &TapeReport, record: &TapeRecord) -> Vec<String> {
    report
        .columns()
        .iter()
        .map(|&column| {
            record
                .value(column)
                .map(|value| value.to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Display error message in consistent format
pub fn display_error(error: &str) {
    eprintln!("Error: {}", error);
}
