// crates/metrics/src/error.rs

use thiserror::Error;

use crate::field::{SampleField, ScalarField};

/// Underlying cause of a [`MetricsError::DocumentRead`].
#[derive(Debug, Error)]
pub enum DocumentSource {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Why a feature's shape cannot be plotted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ShapeReason {
    #[error("name does not end in a row digit 1-9")]
    MissingRowDigit,
    #[error("{0} has no samples")]
    EmptySamples(SampleField),
}

/// Error type for loading and extracting metrics.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("cannot read metrics document {origin}: {source}")]
    DocumentRead {
        origin: String,
        #[source]
        source: DocumentSource,
    },
    #[error("feature {feature}: {field} value {value:?} is not a number followed by {}", .field.unit())]
    MetricFormat {
        feature: String,
        field: ScalarField,
        value: String,
    },
    #[error("feature {feature}: {reason}")]
    MetricShape { feature: String, reason: ShapeReason },
}

/// Result type for metrics operations.
pub type Result<T> = std::result::Result<T, MetricsError>;
