// crates/metrics/src/field.rs

use std::fmt;

use crate::model::{FeatureMetrics, MetricValue, Unit};

/// Per-feature scalar metrics, each carrying a fixed unit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ScalarField {
    TestCoverage,
    MutationScore,
    BenchmarkScore,
}

impl ScalarField {
    pub const ALL: [ScalarField; 3] = [
        ScalarField::TestCoverage,
        ScalarField::MutationScore,
        ScalarField::BenchmarkScore,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ScalarField::TestCoverage => "test_coverage",
            ScalarField::MutationScore => "mutation_score",
            ScalarField::BenchmarkScore => "benchmark_score",
        }
    }

    pub const fn unit(self) -> Unit {
        match self {
            ScalarField::TestCoverage | ScalarField::MutationScore => Unit::Percent,
            ScalarField::BenchmarkScore => Unit::NanosPerOp,
        }
    }

    pub fn select(self, metrics: &FeatureMetrics) -> &MetricValue {
        match self {
            ScalarField::TestCoverage => &metrics.test_coverage,
            ScalarField::MutationScore => &metrics.mutation_score,
            ScalarField::BenchmarkScore => &metrics.benchmark_score,
        }
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-feature sample sequences.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SampleField {
    CycloScore,
    MaintainabilityIndex,
}

impl SampleField {
    pub const ALL: [SampleField; 2] = [SampleField::CycloScore, SampleField::MaintainabilityIndex];

    pub const fn as_str(self) -> &'static str {
        match self {
            SampleField::CycloScore => "cyclo_score",
            SampleField::MaintainabilityIndex => "maintainability_index",
        }
    }

    pub fn select(self, metrics: &FeatureMetrics) -> &[f64] {
        match self {
            SampleField::CycloScore => &metrics.cyclo_score,
            SampleField::MaintainabilityIndex => &metrics.maintainability_index,
        }
    }
}

impl fmt::Display for SampleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
