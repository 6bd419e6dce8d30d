// crates/cli/src/validate.rs
use clap::{ArgMatches, FromArgMatches};

use crate::options::ReportOpts;
use feature_report_core::{ExitCode, ReportConfig};

/// Map parsed arguments onto a [`ReportConfig`].
pub fn parse_config(matches: &ArgMatches) -> Result<ReportConfig, clap::Error> {
    let opts = ReportOpts::from_arg_matches(matches)?;
    let (info, debug) = if opts.quiet {
        (Vec::new(), Vec::new())
    } else {
        (opts.info, opts.debug)
    };
    let log_file = opts.log_file.map(|path| (path, opts.log_file_format));
    Ok(ReportConfig::builder()
        .input(opts.input)
        .out_dir(opts.out_dir)
        .row_layout(opts.row_layout.into())
        .dry_run(opts.dry_run)
        .log_format(opts.log_format)
        .verbose(opts.verbose)
        .info(info)
        .debug(debug)
        .quiet(opts.quiet)
        .log_file(log_file)
        .colored(!opts.no_color)
        .timestamps(opts.timestamps)
        .build())
}

pub fn exit_code_from_error_kind(kind: clap::error::ErrorKind) -> ExitCode {
    use clap::error::ErrorKind::*;
    match kind {
        DisplayHelp => ExitCode::Ok,
        DisplayVersion => ExitCode::Ok,
        InvalidValue => ExitCode::SyntaxOrUsage,
        UnknownArgument => ExitCode::SyntaxOrUsage,
        InvalidSubcommand => ExitCode::SyntaxOrUsage,
        NoEquals => ExitCode::SyntaxOrUsage,
        ValueValidation => ExitCode::SyntaxOrUsage,
        TooManyValues => ExitCode::SyntaxOrUsage,
        TooFewValues => ExitCode::SyntaxOrUsage,
        WrongNumberOfValues => ExitCode::SyntaxOrUsage,
        ArgumentConflict => ExitCode::SyntaxOrUsage,
        MissingRequiredArgument => ExitCode::SyntaxOrUsage,
        MissingSubcommand => ExitCode::SyntaxOrUsage,
        InvalidUtf8 => ExitCode::SyntaxOrUsage,
        DisplayHelpOnMissingArgumentOrSubcommand => ExitCode::SyntaxOrUsage,
        Io => ExitCode::SyntaxOrUsage,
        Format => ExitCode::SyntaxOrUsage,
        #[allow(unreachable_patterns)]
        _ => ExitCode::SyntaxOrUsage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::cli_command;
    use logging::{DebugFlag, InfoFlag, LogFormat};
    use metrics::RowLayout;
    use std::path::PathBuf;

    fn config(args: &[&str]) -> ReportConfig {
        let matches = cli_command()
            .try_get_matches_from(std::iter::once("feature-report").chain(args.iter().copied()))
            .unwrap();
        parse_config(&matches).unwrap()
    }

    #[test]
    fn no_arguments_use_fixed_paths() {
        let cfg = config(&[]);
        assert_eq!(cfg.input, PathBuf::from("results.json"));
        assert_eq!(cfg.out_dir, PathBuf::from("charts"));
        assert_eq!(cfg.row_layout, RowLayout::TrailingDigit);
        assert_eq!(cfg.log_format, LogFormat::Text);
        assert!(cfg.colored);
    }

    #[test]
    fn maps_every_flag() {
        let cfg = config(&[
            "-i",
            "in.json",
            "--out-dir=out",
            "--row-layout=ordinal",
            "-n",
            "-vv",
            "--log-format=json",
            "--log-file=report.log",
            "--log-file-format=json",
            "--info=render,load",
            "--debug=layout",
            "--no-color",
            "--timestamps",
        ]);
        assert_eq!(cfg.input, PathBuf::from("in.json"));
        assert_eq!(cfg.out_dir, PathBuf::from("out"));
        assert_eq!(cfg.row_layout, RowLayout::Ordinal);
        assert!(cfg.dry_run);
        assert_eq!(cfg.verbose, 2);
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(
            cfg.log_file,
            Some((PathBuf::from("report.log"), Some("json".to_string())))
        );
        assert_eq!(cfg.info, vec![InfoFlag::Load, InfoFlag::Render]);
        assert_eq!(cfg.debug, vec![DebugFlag::Layout]);
        assert!(!cfg.colored);
        assert!(cfg.timestamps);
    }

    #[test]
    fn quiet_clears_stage_flags() {
        let cfg = config(&["-q", "--info=load", "--debug=render"]);
        assert!(cfg.quiet);
        assert!(cfg.info.is_empty());
        assert!(cfg.debug.is_empty());
    }

    #[test]
    fn log_file_format_requires_log_file() {
        let err = cli_command()
            .try_get_matches_from(["feature-report", "--log-file-format=%m"])
            .unwrap_err();
        assert_eq!(
            exit_code_from_error_kind(err.kind()),
            ExitCode::SyntaxOrUsage
        );
    }

    #[test]
    fn maps_error_kinds_to_exit_codes() {
        use clap::error::ErrorKind::*;
        let cases = [
            (InvalidValue, ExitCode::SyntaxOrUsage),
            (UnknownArgument, ExitCode::SyntaxOrUsage),
            (ArgumentConflict, ExitCode::SyntaxOrUsage),
            (MissingRequiredArgument, ExitCode::SyntaxOrUsage),
            (DisplayHelp, ExitCode::Ok),
            (DisplayVersion, ExitCode::Ok),
        ];
        for (kind, expected) in cases {
            assert_eq!(exit_code_from_error_kind(kind), expected);
        }
    }
}
