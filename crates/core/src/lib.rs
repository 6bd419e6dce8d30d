// crates/core/src/lib.rs

//! Report pipeline: load a metrics document, extract every view, render the
//! five charts.

mod config;
mod error;
mod plan;
mod run;

pub use config::{ReportConfig, ReportConfigBuilder};
pub use error::{ExitCode, ReportError, Result};
pub use plan::ReportPlan;
pub use run::{ReportSummary, generate, generate_report, generate_with_config};

pub use charts::{ChartSink, RecordingSink, SvgSink};
pub use metrics::{MetricsDocument, RowLayout};
