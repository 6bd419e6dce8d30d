// crates/metrics/src/layout.rs

use tracing::trace;

use crate::error::{MetricsError, Result, ShapeReason};
use crate::model::MetricsDocument;
use logging::DebugFlag;

/// Distance between two adjacent scatter rows.
pub const ROW_SPACING: u32 = 10;

/// Number of features the trailing-digit layout labels on the y axis.
const TRAILING_DIGIT_TICKS: usize = 3;

/// How features are assigned to rows on a shared scatter plot.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum RowLayout {
    /// Row is `10 × last digit of the feature name`.
    ///
    /// Names ending in the same digit share a row: `feature1` and
    /// `feature11` both land on row 10.
    #[default]
    TrailingDigit,
    /// Row is `10 × (position + 1)` in document order. Never collides.
    Ordinal,
}

impl RowLayout {
    /// Row for the feature at `index` named `name`.
    pub fn row(self, index: usize, name: &str) -> std::result::Result<u32, ShapeReason> {
        match self {
            RowLayout::TrailingDigit => name
                .chars()
                .next_back()
                .and_then(|c| c.to_digit(10))
                .filter(|&d| d > 0)
                .map(|d| d * ROW_SPACING)
                .ok_or(ShapeReason::MissingRowDigit),
            RowLayout::Ordinal => Ok((index as u32 + 1) * ROW_SPACING),
        }
    }

    /// Rows for every feature of `doc`, in document order.
    ///
    /// # Errors
    ///
    /// [`MetricsError::MetricShape`] for the first feature without a row.
    pub fn rows(self, doc: &MetricsDocument) -> Result<Vec<u32>> {
        doc.names()
            .enumerate()
            .map(|(index, name)| {
                let row = self.row(index, name).map_err(|reason| MetricsError::MetricShape {
                    feature: name.to_string(),
                    reason,
                })?;
                trace!(target: DebugFlag::Layout.target(), feature = name, row, "assigned row");
                Ok(row)
            })
            .collect()
    }
}

/// Y-axis tick positions and labels for a scatter plot of `doc`.
///
/// The trailing-digit layout always ticks rows 10, 20 and 30. Each is labelled
/// with the first feature in document order placed on that row, or left
/// empty when none is. The ordinal layout labels every row.
pub fn row_ticks(doc: &MetricsDocument, layout: RowLayout) -> Vec<(f64, String)> {
    match layout {
        RowLayout::TrailingDigit => (1..=TRAILING_DIGIT_TICKS as u32)
            .map(|digit| {
                let row = digit * ROW_SPACING;
                let label = doc
                    .names()
                    .enumerate()
                    .find(|&(index, name)| layout.row(index, name) == Ok(row))
                    .map(|(_, name)| name.to_string())
                    .unwrap_or_default();
                (f64::from(row), label)
            })
            .collect(),
        RowLayout::Ordinal => doc
            .names()
            .enumerate()
            .map(|(index, name)| (f64::from((index as u32 + 1) * ROW_SPACING), name.to_string()))
            .collect(),
    }
}
