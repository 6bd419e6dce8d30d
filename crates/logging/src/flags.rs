// crates/logging/src/flags.rs
#![allow(missing_docs)]

use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Pipeline stages that can be raised to INFO independently of `-v`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum InfoFlag {
    Load,
    Extract,
    Render,
}

impl InfoFlag {
    pub const fn as_str(self) -> &'static str {
        match self {
            InfoFlag::Load => "load",
            InfoFlag::Extract => "extract",
            InfoFlag::Render => "render",
        }
    }

    pub const fn target(self) -> &'static str {
        match self {
            InfoFlag::Load => "info::load",
            InfoFlag::Extract => "info::extract",
            InfoFlag::Render => "info::render",
        }
    }
}

impl From<&InfoFlag> for InfoFlag {
    fn from(flag: &InfoFlag) -> Self {
        *flag
    }
}

/// Pipeline stages that can be raised to TRACE independently of `-v`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum DebugFlag {
    Load,
    Extract,
    Layout,
    Render,
}

impl DebugFlag {
    pub const fn as_str(self) -> &'static str {
        match self {
            DebugFlag::Load => "load",
            DebugFlag::Extract => "extract",
            DebugFlag::Layout => "layout",
            DebugFlag::Render => "render",
        }
    }

    pub const fn target(self) -> &'static str {
        match self {
            DebugFlag::Load => "debug::load",
            DebugFlag::Extract => "debug::extract",
            DebugFlag::Layout => "debug::layout",
            DebugFlag::Render => "debug::render",
        }
    }
}

impl From<&DebugFlag> for DebugFlag {
    fn from(flag: &DebugFlag) -> Self {
        *flag
    }
}

#[derive(Clone, Debug)]
pub struct SubscriberConfig {
    pub format: LogFormat,
    pub verbose: u8,
    pub info: Vec<InfoFlag>,
    pub debug: Vec<DebugFlag>,
    pub quiet: bool,
    /// Log file path and optional line template (`"json"` selects JSON lines).
    pub log_file: Option<(PathBuf, Option<String>)>,
    pub colored: bool,
    pub timestamps: bool,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
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

#[derive(Default)]
pub struct SubscriberConfigBuilder {
    cfg: SubscriberConfig,
}

impl SubscriberConfig {
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }
}

impl SubscriberConfigBuilder {
    pub fn format(mut self, format: LogFormat) -> Self {
        self.cfg.format = format;
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
        self.cfg.info = info.into_iter().map(Into::into).collect();
        self
    }

    pub fn debug<I>(mut self, debug: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DebugFlag>,
    {
        self.cfg.debug = debug.into_iter().map(Into::into).collect();
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

    pub fn colored(mut self, colored: bool) -> Self {
        self.cfg.colored = colored;
        self
    }

    pub fn timestamps(mut self, timestamps: bool) -> Self {
        self.cfg.timestamps = timestamps;
        self
    }

    pub fn build(self) -> SubscriberConfig {
        self.cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_are_namespaced_by_level() {
        for flag in InfoFlag::value_variants() {
            assert_eq!(flag.target(), format!("info::{}", flag.as_str()));
        }
        for flag in DebugFlag::value_variants() {
            assert_eq!(flag.target(), format!("debug::{}", flag.as_str()));
        }
    }

    #[test]
    fn default_config_is_warn_text_without_file() {
        let cfg = SubscriberConfig::default();
        assert_eq!(cfg.format, LogFormat::Text);
        assert_eq!(cfg.verbose, 0);
        assert!(!cfg.quiet);
        assert!(cfg.log_file.is_none());
    }
}
