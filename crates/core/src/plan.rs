// crates/core/src/plan.rs

use charts::{BarChart, Chart, ChartSink, Rgb, ScatterChart};
use metrics::{
    MetricsDocument, RowLayout, SampleField, ScalarField, extract_frequency_series,
    extract_scalar_series, row_ticks,
};
use tracing::debug;

use crate::error::Result;
use logging::DebugFlag;

const BAR_SIZE: (u32, u32) = (800, 500);
const SCATTER_SIZE: (u32, u32) = (1000, 600);
const SCATTER_OPACITY: f64 = 0.6;

struct BarDef {
    name: &'static str,
    field: ScalarField,
    title: &'static str,
    y_label: &'static str,
    color: Rgb,
}

struct ScatterDef {
    name: &'static str,
    field: SampleField,
    title: &'static str,
    x_label: &'static str,
}

const BARS: [BarDef; 3] = [
    BarDef {
        name: "coverage",
        field: ScalarField::TestCoverage,
        title: "Test Coverage per Feature",
        y_label: "Test Coverage (%)",
        color: Rgb::SKY_BLUE,
    },
    BarDef {
        name: "mutation",
        field: ScalarField::MutationScore,
        title: "Mutation Score per Feature",
        y_label: "Mutation Score (%)",
        color: Rgb::LIGHT_GREEN,
    },
    BarDef {
        name: "benchmark",
        field: ScalarField::BenchmarkScore,
        title: "Benchmark Time per Feature",
        y_label: "Benchmark Time (ns/op)",
        color: Rgb::SALMON,
    },
];

const SCATTERS: [ScatterDef; 2] = [
    ScatterDef {
        name: "cyclomatic",
        field: SampleField::CycloScore,
        title: "Cyclomatic Complexity Scatter Plot (Point Size ~ Frequency)",
        x_label: "Cyclomatic Complexity",
    },
    ScatterDef {
        name: "maintainability",
        field: SampleField::MaintainabilityIndex,
        title: "Maintainability Index Scatter Plot (Point Size ~ Frequency)",
        x_label: "Maintainability Index",
    },
];

/// The five charts of a report, fully extracted from a document.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportPlan {
    charts: Vec<Chart>,
}

impl ReportPlan {
    /// Extract every view of `doc` and describe the charts.
    ///
    /// Nothing is rendered here, so a malformed document fails before the
    /// first chart exists.
    pub fn build(doc: &MetricsDocument, layout: RowLayout) -> Result<Self> {
        let mut charts = Vec::with_capacity(BARS.len() + SCATTERS.len());
        for def in &BARS {
            let series = extract_scalar_series(doc, def.field)?;
            charts.push(Chart::Bar(BarChart {
                name: def.name.to_string(),
                title: def.title.to_string(),
                x_label: "Feature".to_string(),
                y_label: def.y_label.to_string(),
                color: def.color,
                size: BAR_SIZE,
                series,
            }));
        }
        let y_ticks = row_ticks(doc, layout);
        for def in &SCATTERS {
            let series = extract_frequency_series(doc, def.field, layout)?;
            charts.push(Chart::Scatter(ScatterChart {
                name: def.name.to_string(),
                title: def.title.to_string(),
                x_label: def.x_label.to_string(),
                y_label: "Feature".to_string(),
                size: SCATTER_SIZE,
                opacity: SCATTER_OPACITY,
                series,
                y_ticks: y_ticks.clone(),
            }));
        }
        debug!(target: DebugFlag::Render.target(), charts = charts.len(), ?layout, "planned report");
        Ok(Self { charts })
    }

    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    /// Hand every chart to `sink` in order. Returns the number produced.
    pub fn render<S: ChartSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        Ok(charts::render(&self.charts, sink)?)
    }
}
