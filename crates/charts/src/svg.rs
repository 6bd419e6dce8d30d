// crates/charts/src/svg.rs

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::debug;

use crate::chart::{BarChart, Rgb, ScatterChart};
use crate::sink::ChartSink;
use crate::{ChartError, Result};
use logging::DebugFlag;
use metrics::ROW_SPACING;

type DrawResult = std::result::Result<(), Box<dyn Error>>;

/// Writes each chart to `<out_dir>/<name>.svg`.
#[derive(Debug)]
pub struct SvgSink {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl SvgSink {
    /// Create the sink, creating `out_dir` if needed.
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Result<Self> {
        let out_dir = out_dir.as_ref().to_path_buf();
        fs::create_dir_all(&out_dir)?;
        Ok(Self {
            out_dir,
            written: Vec::new(),
        })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.out_dir.join(format!("{name}.svg"))
    }

    fn finish(&mut self, name: &str, path: PathBuf, result: DrawResult) -> Result<()> {
        result.map_err(|e| ChartError::Backend {
            chart: name.to_string(),
            message: e.to_string(),
        })?;
        debug!(target: DebugFlag::Render.target(), chart = name, path = %path.display(), "wrote svg");
        self.written.push(path);
        Ok(())
    }
}

impl ChartSink for SvgSink {
    fn bar(&mut self, chart: &BarChart) -> Result<()> {
        let path = self.path_for(&chart.name);
        let result = draw_bar(&path, chart);
        self.finish(&chart.name, path, result)
    }

    fn scatter(&mut self, chart: &ScatterChart) -> Result<()> {
        let path = self.path_for(&chart.name);
        let result = draw_scatter(&path, chart);
        self.finish(&chart.name, path, result)
    }
}

/// Axis range around `lo..=hi` with `frac` of headroom on both sides.
///
/// The pad grows with the span and with the magnitude of the values, so
/// `lo == hi` still gives a non-empty range. Both bounds and their distance
/// stay finite for any finite input.
fn padded_range(lo: f64, hi: f64, frac: f64) -> (f64, f64) {
    let magnitude = lo.abs().max(hi.abs());
    let pad = (hi * frac - lo * frac).max(magnitude * frac).max(1.0);
    let upper = (hi + pad).min(f64::MAX);
    let lower = (lo - pad).max(f64::MIN).max(upper - f64::MAX);
    (lower, upper)
}

/// Marker radius in pixels for a marker area.
fn marker_radius(size: f64) -> i32 {
    (size.sqrt().round() as i32).max(1)
}

fn draw_bar(path: &Path, chart: &BarChart) -> DrawResult {
    let root = SVGBackend::new(path, chart.size).into_drawing_area();
    root.fill(&WHITE)?;

    let names = &chart.series.features;
    let values = &chart.series.values;
    let (lo, hi) = values
        .iter()
        .fold((0f64, 0f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let (y_lo, y_hi) = padded_range(lo, hi, 0.1);
    let y_min = if lo < 0.0 { y_lo } else { 0.0 };
    let slots = values.len().max(1) as u32;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..slots).into_segmented(), y_min..y_hi)?;

    let label = |v: &SegmentValue<u32>| match v {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
            names.get(*i as usize).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    };
    ctx.configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(BLACK.mix(0.05))
        .x_labels(slots as usize)
        .x_label_formatter(&label)
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()?;

    let Rgb(r, g, b) = chart.color;
    ctx.draw_series(
        Histogram::vertical(&ctx)
            .style(RGBColor(r, g, b).filled())
            .margin(10)
            .data(values.iter().enumerate().map(|(i, v)| (i as u32, *v))),
    )?;

    root.present()?;
    Ok(())
}

fn draw_scatter(path: &Path, chart: &ScatterChart) -> DrawResult {
    let root = SVGBackend::new(path, chart.size).into_drawing_area();
    root.fill(&WHITE)?;

    let (lo, hi) = chart.x_bounds().unwrap_or((0.0, 1.0));
    let (x_lo, x_hi) = padded_range(lo, hi, 0.05);
    let spacing = f64::from(ROW_SPACING);
    let top_row = chart
        .y_ticks
        .iter()
        .map(|(row, _)| *row)
        .fold(f64::from(chart.max_row()), f64::max);
    let y_top = top_row + spacing;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(100)
        .build_cartesian_2d(x_lo..x_hi, 0f64..y_top)?;

    let tick = |y: &f64| chart.tick_label(*y).to_string();
    ctx.configure_mesh()
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(BLACK.mix(0.05))
        .y_labels((y_top / spacing) as usize + 1)
        .y_label_formatter(&tick)
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .draw()?;

    for (index, series) in chart.series.iter().enumerate() {
        let color = Palette99::pick(index).mix(chart.opacity);
        ctx.draw_series(
            series
                .points
                .iter()
                .map(|p| Circle::new((p.x, p.y), marker_radius(p.size), color.filled())),
        )?
        .label(series.feature.as_str())
        .legend(move |(x, y)| Circle::new((x + 5, y), 5, color.filled()));
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
