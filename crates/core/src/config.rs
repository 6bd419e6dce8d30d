// crates/core/src/config.rs

use logging::{DebugFlag, InfoFlag, LogFormat};
use metrics::RowLayout;
use std::path::PathBuf;

/// Metrics file read when no input is given.
pub const DEFAULT_INPUT: &str = "results.json";
/// Directory charts are written to when none is given.
pub const DEFAULT_OUT_DIR: &str = "charts";

/// Configuration for a report run.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub row_layout: RowLayout,
    pub dry_run: bool,
    pub log_format: LogFormat,
    pub verbose: u8,
    pub info: Vec<InfoFlag>,
    pub debug: Vec<DebugFlag>,
    pub quiet: bool,
    pub log_file: Option<(PathBuf, Option<String>)>,
    pub colored: bool,
    pub timestamps: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            row_layout: RowLayout::default(),
            dry_run: false,
            log_format: LogFormat::Text,
            verbose: 0,
            info: Vec::new(),
            debug: Vec::new(),
            quiet: false,
            log_file: None,
            colored: true,
            timestamps: false,
        }
    }
}

impl ReportConfig {
    /// Create a new builder for [`ReportConfig`].
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }
}

/// Builder for [`ReportConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct ReportConfigBuilder {
    cfg: ReportConfig,
}

impl ReportConfigBuilder {
    pub fn input<P: Into<PathBuf>>(mut self, input: P) -> Self {
        self.cfg.input = input.into();
        self
    }

    pub fn out_dir<P: Into<PathBuf>>(mut self, out_dir: P) -> Self {
        self.cfg.out_dir = out_dir.into();
        self
    }

    pub fn row_layout(mut self, row_layout: RowLayout) -> Self {
        self.cfg.row_layout = row_layout;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.cfg.dry_run = dry_run;
        self
    }

    pub fn log_format(mut self, log_format: LogFormat) -> Self {
        self.cfg.log_format = log_format;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.cfg.verbose = verbose;
        self
    }

    pub fn info<I>(mut self, info: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<InfoFlag>,
    {
        let mut info = info.into_iter().map(Into::into).collect::<Vec<_>>();
        info.sort_by_key(|flag| flag.as_str());
        info.dedup();
        self.cfg.info = info;
        self
    }

    pub fn debug<I>(mut self, debug: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DebugFlag>,
    {
        let mut debug = debug.into_iter().map(Into::into).collect::<Vec<_>>();
        debug.sort_by_key(|flag| flag.as_str());
        debug.dedup();
        self.cfg.debug = debug;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.cfg.quiet = quiet;
        self
    }

    pub fn log_file(mut self, log_file: Option<(PathBuf, Option<String>)>) -> Self {
        self.cfg.log_file = log_file;
        self
    }

    pub fn colored(mut self, enable: bool) -> Self {
        self.cfg.colored = enable;
        self
    }

    pub fn timestamps(mut self, enable: bool) -> Self {
        self.cfg.timestamps = enable;
        self
    }

    pub fn build(self) -> ReportConfig {
        self.cfg
    }
}
