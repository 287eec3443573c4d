use clap::Parser;
use std::path::PathBuf;

const EXIT_CODES: &str = "\
Exit codes:
  0   Report printed, or no tapes found
  2   Invalid command line
  3   Input file could not be read
  4   Malformed input document
  5   Unsupported report shape
  6   Record is missing a required field
  7   Tape identifier lacks the expected markers
  8   Invalid date range
  9   Invalid sort column
  10  Invalid search value";

#[derive(Parser, Debug)]
#[command(name = "tapereport")]
#[command(about = "Filter, sort and print tape gateway tape reports")]
#[command(version)]
#[command(after_help = EXIT_CODES)]
pub struct Cli {
    /// Exported report (TapeInfos, Tapes or TapeArchives JSON)
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Inclusive date range, e.g. "2021/08/01-2021/08/26" or "Tape Created: 2021/08/01-2021/08/26"
    #[arg(short, long, value_name = "[COLUMN: ]YYYY/MM/DD-YYYY/MM/DD")]
    pub date_range: Option<String>,

    /// Column to sort by (case-insensitive)
    #[arg(short, long, value_name = "COLUMN", default_value = "Pool Entry Date")]
    pub sort: String,

    /// Comma-separated equality conditions, e.g. "Pool ID: GLACIER, Worm: false"
    #[arg(long, value_name = "CONDITIONS")]
    pub search: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
