// crates/metrics/src/extract.rs

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::{MetricsError, Result, ShapeReason};
use crate::field::{SampleField, ScalarField};
use crate::layout::RowLayout;
use crate::model::{MetricValue, MetricsDocument, Unit};
use logging::{DebugFlag, InfoFlag};

/// Marker area per occurrence of a sample value.
pub const POINT_SIZE_SCALE: f64 = 30.0;

/// One value per feature for a scalar field, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarSeries {
    pub field: ScalarField,
    pub features: Vec<String>,
    pub values: Vec<f64>,
}

impl ScalarSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.features
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// A distinct sample value and how often it occurs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frequency {
    pub value: f64,
    pub count: usize,
}

/// One marker on a scatter plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Markers for one feature on a scatter plot.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencySeries {
    pub feature: String,
    pub row: u32,
    pub points: Vec<ScatterPoint>,
}

/// Strip `unit`'s suffix from `text` and parse the rest as a finite number.
///
/// Surrounding whitespace is ignored on both sides of the number.
pub fn parse_suffixed(text: &str, unit: Unit) -> Option<f64> {
    text.trim()
        .strip_suffix(unit.suffix())?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn scalar_value(value: &MetricValue, unit: Unit) -> Option<f64> {
    match value {
        MetricValue::Typed { value, unit: actual } if *actual == unit && value.is_finite() => {
            Some(*value)
        }
        MetricValue::Typed { .. } => None,
        MetricValue::Text(text) => parse_suffixed(text, unit),
    }
}

/// Extract `field` for every feature of `doc`, in document order.
///
/// # Errors
///
/// [`MetricsError::MetricFormat`] for the first value without the field's
/// unit suffix or with a non-numeric remainder.
pub fn extract_scalar_series(doc: &MetricsDocument, field: ScalarField) -> Result<ScalarSeries> {
    let unit = field.unit();
    let mut features = Vec::with_capacity(doc.len());
    let mut values = Vec::with_capacity(doc.len());
    for (name, metrics) in doc.iter() {
        let raw = field.select(metrics);
        let value = scalar_value(raw, unit).ok_or_else(|| MetricsError::MetricFormat {
            feature: name.to_string(),
            field,
            value: raw.to_string(),
        })?;
        debug!(target: DebugFlag::Extract.target(), feature = name, field = field.as_str(), value);
        features.push(name.to_string());
        values.push(value);
    }
    info!(
        target: InfoFlag::Extract.target(),
        field = field.as_str(),
        features = values.len(),
        "extracted scalar series"
    );
    Ok(ScalarSeries {
        field,
        features,
        values,
    })
}

/// Distinct values of `samples` with their occurrence counts, in order of
/// first occurrence. `0.0` and `-0.0` count as the same value.
pub fn frequencies(samples: &[f64]) -> Vec<Frequency> {
    let mut counts: IndexMap<u64, Frequency> = IndexMap::new();
    for &sample in samples {
        let value = if sample == 0.0 { 0.0 } else { sample };
        counts
            .entry(value.to_bits())
            .or_insert(Frequency { value, count: 0 })
            .count += 1;
    }
    counts.into_values().collect()
}

/// Frequency series of `field` for every feature of `doc`.
///
/// Every distinct sample becomes a point at `x = value`, `y = row` with
/// `size = count × POINT_SIZE_SCALE`. Rows come from `layout`.
///
/// # Errors
///
/// [`MetricsError::MetricShape`] if a feature has no row under `layout` or
/// no samples for `field`. All features are checked before any series is
/// returned.
pub fn extract_frequency_series(
    doc: &MetricsDocument,
    field: SampleField,
    layout: RowLayout,
) -> Result<Vec<FrequencySeries>> {
    let rows = layout.rows(doc)?;
    let series = doc
        .iter()
        .zip(rows)
        .map(|((name, metrics), row)| {
            let samples = field.select(metrics);
            if samples.is_empty() {
                return Err(MetricsError::MetricShape {
                    feature: name.to_string(),
                    reason: ShapeReason::EmptySamples(field),
                });
            }
            let y = f64::from(row);
            let points = frequencies(samples)
                .into_iter()
                .map(|f| ScatterPoint {
                    x: f.value,
                    y,
                    size: f.count as f64 * POINT_SIZE_SCALE,
                })
                .collect::<Vec<_>>();
            debug!(
                target: DebugFlag::Extract.target(),
                feature = name,
                field = field.as_str(),
                row,
                distinct = points.len(),
                "built frequency series"
            );
            Ok(FrequencySeries {
                feature: name.to_string(),
                row,
                points,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    info!(
        target: InfoFlag::Extract.target(),
        field = field.as_str(),
        features = series.len(),
        "extracted frequency series"
    );
    Ok(series)
}
