// crates/metrics/src/model.rs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

use crate::error::{DocumentSource, MetricsError, Result};

/// Unit attached to a scalar metric.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "ns/op")]
    NanosPerOp,
}

impl Unit {
    /// Textual suffix used by the legacy string encoding.
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::NanosPerOp => "ns/op",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A scalar metric as it appears in the input file.
///
/// Accepts both the suffixed text form (`"87.5%"`) and a typed object
/// (`{"value": 87.5, "unit": "%"}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Typed { value: f64, unit: Unit },
    Text(String),
}

impl MetricValue {
    pub fn typed(value: f64, unit: Unit) -> Self {
        MetricValue::Typed { value, unit }
    }
}

impl From<&str> for MetricValue {
    fn from(text: &str) -> Self {
        MetricValue::Text(text.to_string())
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Typed { value, unit } => write!(f, "{value}{unit}"),
            MetricValue::Text(text) => f.write_str(text),
        }
    }
}

/// Metrics recorded for one feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureMetrics {
    pub test_coverage: MetricValue,
    pub mutation_score: MetricValue,
    pub benchmark_score: MetricValue,
    pub cyclo_score: Vec<f64>,
    pub maintainability_index: Vec<f64>,
}

/// Feature name to metrics, in input order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsDocument {
    features: IndexMap<String, FeatureMetrics>,
}

impl MetricsDocument {
    /// Parse a document held in memory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| MetricsError::DocumentRead {
            origin: "<memory>".to_string(),
            source: DocumentSource::Json(e),
        })
    }

    /// Parse a document from any reader. `origin` names the input in errors.
    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| MetricsError::DocumentRead {
            origin: origin.to_string(),
            source: DocumentSource::Json(e),
        })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, feature: &str) -> Option<&FeatureMetrics> {
        self.features.get(feature)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureMetrics)> {
        self.features.iter().map(|(name, metrics)| (name.as_str(), metrics))
    }
}

impl FromIterator<(String, FeatureMetrics)> for MetricsDocument {
    fn from_iter<I: IntoIterator<Item = (String, FeatureMetrics)>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}
