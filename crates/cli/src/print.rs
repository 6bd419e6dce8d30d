// crates/cli/src/print.rs
use feature_report_core::{ExitCode, ReportSummary};

use crate::validate::exit_code_from_error_kind;

pub const PROGRAM_NAME: &str = "feature-report";

/// Report a clap error the way the program reports its own errors and exit.
pub fn handle_clap_error(e: clap::Error) -> ! {
    let code = exit_code_from_error_kind(e.kind());
    if code == ExitCode::Ok {
        // --help and --version
        let _ = e.print();
    } else {
        let msg = e.to_string();
        let msg = msg.strip_prefix("error: ").unwrap_or(&msg).trim_end();
        let mut lines = msg.lines();
        if let Some(first) = lines.next() {
            eprintln!("{PROGRAM_NAME}: {first}");
            for line in lines {
                eprintln!("{line}");
            }
        }
        eprintln!(
            "{PROGRAM_NAME} error: syntax or usage error (code {})",
            u8::from(code)
        );
    }
    std::process::exit(i32::from(code));
}

pub(crate) fn print_summary(summary: &ReportSummary, dry_run: bool) {
    if dry_run {
        println!(
            "{} features, {} charts planned (dry run)",
            summary.features, summary.charts
        );
        return;
    }
    for path in &summary.written {
        println!("{}", path.display());
    }
}
