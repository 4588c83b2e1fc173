use serde::{Deserialize, Serialize};

use super::LineStyle;

/// Declarative description of one chart.
///
/// Describes what to draw, not how: renderers map it onto their own primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub legend: LegendSpec,
    pub hover_mode: HoverMode,
    /// Visual template name for renderers that support themes.
    pub template: String,
    pub series: Vec<LineSeries>,
}

impl ChartSpec {
    pub fn series_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.iter().map(|s| s.name.as_str())
    }

    pub fn series(&self, name: &str) -> Option<&LineSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendSpec {
    pub title: String,
    pub visible: bool,
    /// What a click on a legend entry does.
    pub item_click: LegendClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendClick {
    /// Toggle visibility of the clicked series.
    Toggle,
    /// Show only the clicked series.
    ToggleOthers,
    /// Legend entries are inert.
    None,
}

/// Hover interaction of the whole chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoverMode {
    /// Hovering any x position shows every series' value at that x in one label.
    XUnified,
    /// Hover labels for the nearest point only.
    Closest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineMode {
    Lines,
    LinesAndMarkers,
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub name: String,
    /// Category labels, in table order.
    pub x: Vec<String>,
    /// Values aligned with `x`; `None` leaves a gap.
    pub y: Vec<Option<f64>>,
    pub mode: LineMode,
    pub line: LineStyle,
    /// `1.0` is fully opaque.
    pub opacity: f64,
}
