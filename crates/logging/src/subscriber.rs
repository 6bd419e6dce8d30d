// crates/logging/src/subscriber.rs
#![allow(missing_docs)]

use crate::flags::{LogFormat, SubscriberConfig};
use crate::formatter::ReportFormatter;
use crate::json_format::JsonFormatter;
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, filter::Directive, fmt as tracing_fmt, layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Stderr line template used with `timestamps`.
const TIMESTAMPED: &str = "%t [%p] %m";

fn base_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose > 2 {
        LevelFilter::TRACE
    } else if verbose > 1 {
        LevelFilter::DEBUG
    } else if verbose > 0 {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Build a [`tracing`] subscriber for a report run.
///
/// Fails only when the log file cannot be opened for appending.
pub fn subscriber(cfg: SubscriberConfig) -> io::Result<Box<dyn tracing::Subscriber + Send + Sync>> {
    let SubscriberConfig {
        format,
        verbose,
        info,
        debug,
        quiet,
        log_file,
        colored,
        timestamps,
    } = cfg;

    let mut level = base_level(verbose, quiet);
    if !quiet {
        if !debug.is_empty() && level < LevelFilter::DEBUG {
            level = LevelFilter::DEBUG;
        } else if !info.is_empty() && level < LevelFilter::INFO {
            level = LevelFilter::INFO;
        }
    }

    let mut filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if !quiet {
        for flag in &info {
            let directive: Directive = format!("{}=info", flag.target())
                .parse()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            filter = filter.add_directive(directive);
        }
        for flag in &debug {
            let directive: Directive = format!("{}=trace", flag.target())
                .parse()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            filter = filter.add_directive(directive);
        }
    }

    let base = tracing_fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(false)
        .with_ansi(colored);
    let fmt_layer = match (format, timestamps) {
        (LogFormat::Json, _) => base.event_format(JsonFormatter).boxed(),
        (LogFormat::Text, true) => base
            .event_format(ReportFormatter::new(Some(TIMESTAMPED.to_string())))
            .boxed(),
        (LogFormat::Text, false) => base.event_format(ReportFormatter::new(None)).boxed(),
    };

    let file_layer = match log_file {
        Some((path, fmt)) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let base = tracing_fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false);
            let layer = match fmt.as_deref() {
                Some("json") => base.event_format(JsonFormatter).boxed(),
                Some(template) => base
                    .event_format(ReportFormatter::new(Some(template.to_string())))
                    .boxed(),
                None => base.event_format(ReportFormatter::new(None)).boxed(),
            };
            Some(layer)
        }
        None => None,
    };

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(file_layer);
    Ok(Box::new(registry))
}

/// Initialise the global [`tracing`] subscriber.
pub fn init(cfg: SubscriberConfig) -> io::Result<()> {
    subscriber(cfg)?
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
