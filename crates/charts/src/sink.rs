// crates/charts/src/sink.rs

use tracing::info;

use crate::Result;
use crate::chart::{BarChart, Chart, ScatterChart};
use logging::InfoFlag;

/// A destination for rendered charts.
///
/// Implementations can write files, open windows or simply keep the chart
/// descriptions for inspection.
pub trait ChartSink {
    /// Produce a bar chart.
    fn bar(&mut self, chart: &BarChart) -> Result<()>;

    /// Produce a scatter chart.
    fn scatter(&mut self, chart: &ScatterChart) -> Result<()>;
}

/// Sink that keeps every chart it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub charts: Vec<Chart>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<&str> {
        self.charts.iter().map(Chart::name).collect()
    }
}

impl ChartSink for RecordingSink {
    fn bar(&mut self, chart: &BarChart) -> Result<()> {
        self.charts.push(Chart::Bar(chart.clone()));
        Ok(())
    }

    fn scatter(&mut self, chart: &ScatterChart) -> Result<()> {
        self.charts.push(Chart::Scatter(chart.clone()));
        Ok(())
    }
}

/// Hand `charts` to `sink` in order. Stops at the first failure; charts
/// produced before it are left in place.
///
/// Returns the number of charts produced.
pub fn render<S: ChartSink + ?Sized>(charts: &[Chart], sink: &mut S) -> Result<usize> {
    for (index, chart) in charts.iter().enumerate() {
        match chart {
            Chart::Bar(c) => sink.bar(c)?,
            Chart::Scatter(c) => sink.scatter(c)?,
        }
        info!(
            target: InfoFlag::Render.target(),
            chart = chart.name(),
            index = index + 1,
            total = charts.len(),
            "rendered {}",
            chart.title()
        );
    }
    Ok(charts.len())
}
