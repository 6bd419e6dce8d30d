// crates/cli/src/lib.rs

//! Command line surface of `feature-report`.

mod formatter;
pub mod options;
mod print;
mod validate;

use clap::ArgMatches;
use feature_report_core::{ReportSummary, Result, generate_with_config};

pub use feature_report_core::{ExitCode, ReportError};
pub use options::cli_command;
pub use print::{PROGRAM_NAME, handle_clap_error};
pub use validate::{exit_code_from_error_kind, parse_config};

/// Run a report for already parsed arguments.
///
/// Written chart paths are printed on stdout unless `--quiet` is given.
pub fn run(matches: &ArgMatches) -> Result<ReportSummary> {
    let cfg = match parse_config(matches) {
        Ok(cfg) => cfg,
        Err(e) => handle_clap_error(e),
    };
    let summary = generate_with_config(&cfg)?;
    if !cfg.quiet {
        print::print_summary(&summary, cfg.dry_run);
    }
    Ok(summary)
}
