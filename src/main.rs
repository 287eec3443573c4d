use std::process::ExitCode;
use tape_report::cli::Cli;
use tape_report::config::ReportConfig;
use tape_report::error::Result;
use tape_report::{display, logger, pipeline};
use tracing::{debug, error};

fn main() -> ExitCode {
    let args = Cli::parse_args();

    // Initialize logging system
    logger::init(args.verbose);

    debug!("tapereport starting");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Operation failed: {}", e);
            display::display_error(&e.to_string());
            ExitCode::from(&e)
        }
    }
}

fn run(args: &Cli) -> Result<()> {
    let config = ReportConfig::from_cli(args)?;
    let outcome = pipeline::run(&config)?;
    println!("{}", display::render_outcome(&outcome));
    Ok(())
}
