// crates/charts/src/chart.rs

use metrics::{FrequencySeries, ScalarSeries};

/// An sRGB color.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const SKY_BLUE: Rgb = Rgb(135, 206, 235);
    pub const LIGHT_GREEN: Rgb = Rgb(144, 238, 144);
    pub const SALMON: Rgb = Rgb(250, 128, 114);
}

/// One bar per feature, value on the y axis.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    /// Output name without extension.
    pub name: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: Rgb,
    pub size: (u32, u32),
    pub series: ScalarSeries,
}

/// One colored series per feature; marker area encodes frequency.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterChart {
    /// Output name without extension.
    pub name: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub size: (u32, u32),
    pub opacity: f64,
    pub series: Vec<FrequencySeries>,
    pub y_ticks: Vec<(f64, String)>,
}

impl ScatterChart {
    /// Smallest and largest x over all points, if any.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.x))
            .fold(None, |acc, x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
    }

    pub fn max_row(&self) -> u32 {
        self.series.iter().map(|s| s.row).max().unwrap_or(0)
    }

    /// Label for the tick at `y`, empty when `y` is not a labelled row.
    pub fn tick_label(&self, y: f64) -> &str {
        self.y_ticks
            .iter()
            .find(|(row, _)| (row - y).abs() < 1e-6)
            .map(|(_, label)| label.as_str())
            .unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Chart {
    Bar(BarChart),
    Scatter(ScatterChart),
}

impl Chart {
    pub fn name(&self) -> &str {
        match self {
            Chart::Bar(c) => &c.name,
            Chart::Scatter(c) => &c.name,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Chart::Bar(c) => &c.title,
            Chart::Scatter(c) => &c.title,
        }
    }
}
