// src/bin/feature-report/main.rs
use feature_report_cli::{PROGRAM_NAME, cli_command};

fn main() {
    let mut cmd = cli_command();
    let matches = cmd
        .try_get_matches_from_mut(std::env::args_os())
        .unwrap_or_else(|e| feature_report_cli::handle_clap_error(e));
    if let Err(e) = feature_report_cli::run(&matches) {
        eprintln!("{PROGRAM_NAME}: {e}");
        std::process::exit(i32::from(e.exit_code()));
    }
}
