// crates/metrics/src/lib.rs

//! Metrics document model and the numeric views derived from it.
//!
//! A document maps feature names to their recorded quality metrics. Scalar
//! fields (`test_coverage`, `mutation_score`, `benchmark_score`) become one
//! value per feature; sample fields (`cyclo_score`, `maintainability_index`)
//! become frequency series laid out on scatter-plot rows.

mod error;
mod extract;
mod field;
mod layout;
mod load;
mod model;

pub use error::{DocumentSource, MetricsError, Result, ShapeReason};
pub use extract::{
    Frequency, FrequencySeries, POINT_SIZE_SCALE, ScalarSeries, ScatterPoint,
    extract_frequency_series, extract_scalar_series, frequencies, parse_suffixed,
};
pub use field::{SampleField, ScalarField};
pub use layout::{ROW_SPACING, RowLayout, row_ticks};
pub use load::load;
pub use model::{FeatureMetrics, MetricValue, MetricsDocument, Unit};
