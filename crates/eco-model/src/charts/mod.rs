//! Declarative line-chart specs for a [`SeriesTable`].

mod formatting;
mod indicators;
mod model;

pub use formatting::{Color, LineDash, LineStyle};
pub use indicators::KnownIndicator;
pub use model::{ChartSpec, HoverMode, LegendClick, LegendSpec, LineMode, LineSeries};

use crate::{SeriesTable, PERIOD_AXIS_NAME};

pub const X_AXIS_TITLE: &str = PERIOD_AXIS_NAME;
pub const Y_AXIS_TITLE: &str = "Index (2021=100)";
pub const LEGEND_TITLE: &str = "De-select indicators here";
pub const DEFAULT_TEMPLATE: &str = "plotly_white";

pub fn chart_title(sector: &str, country: &str) -> String {
    format!("{sector} short-term indicators in {country}")
}

/// Build the chart for one selection.
///
/// Adds one series per [`KnownIndicator`] whose label is a column of `series`, in
/// [`KnownIndicator::ALL`] order. Other columns are ignored. When none of the known indicators
/// is present the chart still carries its title and axes but no series.
pub fn build_chart(series: &SeriesTable, sector: &str, country: &str) -> ChartSpec {
    let lines: Vec<LineSeries> = KnownIndicator::ALL
        .into_iter()
        .filter_map(|indicator| {
            let values = series.column(indicator.label())?;
            Some(LineSeries {
                name: indicator.label().to_string(),
                x: series.periods().to_vec(),
                y: values.to_vec(),
                mode: LineMode::Lines,
                line: indicator.line_style(),
                opacity: indicator.opacity(),
            })
        })
        .collect();

    log::debug!(
        "chart for sector `{sector}` in `{country}` has {} of {} columns plotted",
        lines.len(),
        series.column_count()
    );

    ChartSpec {
        title: chart_title(sector, country),
        x_axis_title: X_AXIS_TITLE.to_string(),
        y_axis_title: Y_AXIS_TITLE.to_string(),
        legend: LegendSpec {
            title: LEGEND_TITLE.to_string(),
            visible: true,
            item_click: LegendClick::Toggle,
        },
        hover_mode: HoverMode::XUnified,
        template: DEFAULT_TEMPLATE.to_string(),
        series: lines,
    }
}
