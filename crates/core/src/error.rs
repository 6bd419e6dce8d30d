// crates/core/src/error.rs

use charts::ChartError;
use metrics::MetricsError;
use thiserror::Error;

/// Process exit status of a report run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum ExitCode {
    Ok = 0,
    SyntaxOrUsage = 1,
    DocumentRead = 2,
    MetricFormat = 3,
    MetricShape = 4,
    Render = 5,
    LogSetup = 6,
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        i32::from(code as u8)
    }
}

/// Error type for a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("cannot set up logging: {0}")]
    Logging(#[source] std::io::Error),
}

impl ReportError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ReportError::Metrics(MetricsError::DocumentRead { .. }) => ExitCode::DocumentRead,
            ReportError::Metrics(MetricsError::MetricFormat { .. }) => ExitCode::MetricFormat,
            ReportError::Metrics(MetricsError::MetricShape { .. }) => ExitCode::MetricShape,
            ReportError::Chart(_) => ExitCode::Render,
            ReportError::Logging(_) => ExitCode::LogSetup,
        }
    }
}

/// Result type for report runs.
pub type Result<T> = std::result::Result<T, ReportError>;
