// crates/cli/tests/run.rs
use std::fs;

use feature_report_cli::{ExitCode, cli_command, run};
use tempfile::tempdir;

const RESULTS: &str = r#"{
    "feature1": {"test_coverage": "87.5%", "mutation_score": "70%",
                 "benchmark_score": "123.4ns/op", "cyclo_score": [3, 3, 5],
                 "maintainability_index": [80, 80]},
    "feature11": {"test_coverage": "50%", "mutation_score": "40%",
                  "benchmark_score": "77ns/op", "cyclo_score": [9],
                  "maintainability_index": [60]}
}"#;

#[test]
fn runs_from_parsed_arguments() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("results.json");
    fs::write(&input, RESULTS).unwrap();
    let out = tmp.path().join("svg");

    let matches = cli_command()
        .try_get_matches_from([
            "feature-report",
            "--quiet",
            "--input",
            input.to_str().unwrap(),
            "--out-dir",
            out.to_str().unwrap(),
        ])
        .unwrap();
    let summary = run(&matches).unwrap();

    assert_eq!(summary.features, 2);
    assert_eq!(summary.written.len(), 5);
    assert!(out.join("maintainability.svg").is_file());
}

#[test]
fn failure_carries_exit_code() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("results.json");
    fs::write(&input, "{ not json").unwrap();

    let matches = cli_command()
        .try_get_matches_from([
            "feature-report",
            "-q",
            "-i",
            input.to_str().unwrap(),
            "-o",
            tmp.path().join("svg").to_str().unwrap(),
        ])
        .unwrap();
    let err = run(&matches).unwrap_err();
    assert_eq!(err.exit_code(), ExitCode::DocumentRead);
}

#[test]
fn unknown_row_layout_is_rejected() {
    let err = cli_command()
        .try_get_matches_from(["feature-report", "--row-layout=diagonal"])
        .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn help_lists_every_option() {
    let help = cli_command().render_help().to_string();
    for flag in [
        "--input",
        "--out-dir",
        "--row-layout",
        "--dry-run",
        "--verbose",
        "--quiet",
        "--log-format",
        "--log-file",
        "--info",
        "--debug",
    ] {
        assert!(help.contains(flag), "{flag} missing from help");
    }
}
