// crates/charts/src/lib.rs

mod chart;
mod sink;
mod svg;

pub use chart::{BarChart, Chart, Rgb, ScatterChart};
pub use sink::{ChartSink, RecordingSink, render};
pub use svg::SvgSink;

use thiserror::Error;

/// Error type for chart rendering.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("chart {chart}: {message}")]
    Backend { chart: String, message: String },
}

/// Result type for chart rendering.
pub type Result<T> = std::result::Result<T, ChartError>;
