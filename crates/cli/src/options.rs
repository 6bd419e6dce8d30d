// crates/cli/src/options.rs

use std::path::PathBuf;

use crate::formatter;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use logging::{DebugFlag, InfoFlag, LogFormat};
use metrics::RowLayout;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum RowLayoutArg {
    /// row = 10 x last digit of the feature name
    #[default]
    TrailingDigit,
    /// row = 10 x position in the document
    Ordinal,
}

impl From<RowLayoutArg> for RowLayout {
    fn from(arg: RowLayoutArg) -> Self {
        match arg {
            RowLayoutArg::TrailingDigit => RowLayout::TrailingDigit,
            RowLayoutArg::Ordinal => RowLayout::Ordinal,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "feature-report",
    version,
    about = "Render per-feature quality metrics as charts"
)]
pub(crate) struct ReportOpts {
    #[arg(
        short = 'i',
        long,
        value_name = "FILE",
        default_value = "results.json",
        env = "FEATURE_REPORT_INPUT",
        help_heading = "Input",
        help = "metrics document to read"
    )]
    pub input: PathBuf,
    #[arg(
        long = "row-layout",
        value_name = "LAYOUT",
        value_enum,
        default_value_t = RowLayoutArg::TrailingDigit,
        help_heading = "Input",
        help = "how features are placed on scatter rows"
    )]
    pub row_layout: RowLayoutArg,
    #[arg(
        short = 'o',
        long = "out-dir",
        value_name = "DIR",
        default_value = "charts",
        env = "FEATURE_REPORT_OUT_DIR",
        help_heading = "Output",
        help = "directory the SVG charts are written to"
    )]
    pub out_dir: PathBuf,
    #[arg(
        short = 'n',
        long,
        help_heading = "Output",
        help = "extract and plan the charts without writing them"
    )]
    pub dry_run: bool,
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,
    #[arg(
        long = "log-format",
        value_name = "FMT",
        value_enum,
        default_value_t = LogFormat::Text,
        help_heading = "Logging"
    )]
    pub log_format: LogFormat,
    #[arg(long = "log-file", value_name = "FILE", help_heading = "Logging")]
    pub log_file: Option<PathBuf>,
    #[arg(
        long = "log-file-format",
        value_name = "FMT",
        requires = "log_file",
        help_heading = "Logging",
        help = "line template for --log-file, or \"json\""
    )]
    pub log_file_format: Option<String>,
    #[arg(
        long,
        value_name = "FLAGS",
        value_delimiter = ',',
        value_enum,
        help_heading = "Logging"
    )]
    pub info: Vec<InfoFlag>,
    #[arg(
        long,
        value_name = "FLAGS",
        value_delimiter = ',',
        value_enum,
        help_heading = "Logging"
    )]
    pub debug: Vec<DebugFlag>,
    #[arg(long = "no-color", help_heading = "Logging")]
    pub no_color: bool,
    #[arg(long, help_heading = "Logging")]
    pub timestamps: bool,
}

pub fn cli_command() -> clap::Command {
    formatter::apply(ReportOpts::command())
}
