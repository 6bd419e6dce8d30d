// src/lib.rs

//! Render per-feature quality metrics as charts.
//!
//! A metrics document maps feature names to their coverage, mutation score,
//! benchmark timing and two sample series (cyclomatic complexity and
//! maintainability index). [`generate`] reads such a document and writes five
//! SVG charts: one bar chart for each scalar metric and one scatter plot for
//! each sample series, where marker size follows how often a value occurs.
//!
//! # Examples
//!
//! ```
//! use feature_report::{MetricsDocument, RecordingSink, RowLayout, generate_report};
//!
//! let doc = MetricsDocument::from_json_str(
//!     r#"{"feature1": {"test_coverage": "87.5%", "mutation_score": "70%",
//!                      "benchmark_score": "123.4ns/op", "cyclo_score": [3, 3, 5],
//!                      "maintainability_index": [80]}}"#,
//! )
//! .unwrap();
//! let mut sink = RecordingSink::new();
//! let charts = generate_report(&doc, RowLayout::TrailingDigit, &mut sink).unwrap();
//! assert_eq!(charts, 5);
//! assert_eq!(sink.names()[0], "coverage");
//! ```

pub use charts::{BarChart, Chart, ChartError, ChartSink, RecordingSink, Rgb, ScatterChart, SvgSink};
pub use feature_report_core::{
    ExitCode, ReportConfig, ReportConfigBuilder, ReportError, ReportPlan, ReportSummary, Result,
    generate, generate_report, generate_with_config,
};
pub use metrics::{
    FeatureMetrics, FrequencySeries, MetricValue, MetricsDocument, MetricsError, RowLayout,
    SampleField, ScalarField, ScalarSeries, ScatterPoint, ShapeReason, Unit,
    extract_frequency_series, extract_scalar_series, load,
};
