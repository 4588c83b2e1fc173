//! Plotly.js figure encoding for [`ChartSpec`].
//!
//! Only the attributes the viewer uses are modeled. Field names follow the Plotly.js schema, so
//! the serialized [`Figure`] can be passed to `Plotly.newPlot` as-is.

use eco_model::{ChartSpec, HoverMode, LegendClick, LineDash, LineMode, LineSeries};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: String,
    pub mode: String,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    pub line: Line,
    /// Omitted when fully opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    pub dash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Title,
    /// `"toggle"`, `"toggleothers"` or `false`.
    pub itemclick: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
    pub hovermode: String,
    pub showlegend: bool,
    /// Expanded template object; Plotly.js does not resolve template names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Value>,
}

/// Plotly.js `config` for a chart that fills its container.
pub fn config(fill_width: bool) -> Value {
    json!({ "responsive": fill_width, "displaylogo": false })
}

pub fn figure(chart: &ChartSpec) -> Figure {
    Figure {
        data: chart.series.iter().map(trace).collect(),
        layout: Layout {
            title: Title::new(&chart.title),
            xaxis: Axis {
                title: Title::new(&chart.x_axis_title),
            },
            yaxis: Axis {
                title: Title::new(&chart.y_axis_title),
            },
            legend: Legend {
                title: Title::new(&chart.legend.title),
                itemclick: match chart.legend.item_click {
                    LegendClick::Toggle => json!("toggle"),
                    LegendClick::ToggleOthers => json!("toggleothers"),
                    LegendClick::None => json!(false),
                },
            },
            hovermode: match chart.hover_mode {
                HoverMode::XUnified => "x unified",
                HoverMode::Closest => "closest",
            }
            .to_string(),
            showlegend: chart.legend.visible,
            template: template(&chart.template),
        },
    }
}

fn trace(series: &LineSeries) -> Trace {
    Trace {
        kind: "scatter".to_string(),
        mode: match series.mode {
            LineMode::Lines => "lines",
            LineMode::LinesAndMarkers => "lines+markers",
        }
        .to_string(),
        name: series.name.clone(),
        x: series.x.clone(),
        y: series.y.clone(),
        line: Line {
            color: series.line.color.css().to_string(),
            width: series.line.width,
            dash: match series.line.dash {
                LineDash::Solid => "solid",
                LineDash::Dashed => "dash",
                LineDash::Dotted => "dot",
            }
            .to_string(),
        },
        opacity: (series.opacity < 1.0).then_some(series.opacity),
    }
}

/// Layout defaults for the named templates the viewer knows about.
fn template(name: &str) -> Option<Value> {
    match name {
        "plotly_white" => Some(json!({
            "layout": {
                "paper_bgcolor": "white",
                "plot_bgcolor": "white",
                "xaxis": { "gridcolor": "rgb(232,232,232)", "linecolor": "rgb(36,36,36)", "zeroline": false },
                "yaxis": { "gridcolor": "rgb(232,232,232)", "linecolor": "rgb(36,36,36)", "zeroline": false },
            }
        })),
        other => {
            log::debug!("unknown chart template `{other}`; using renderer defaults");
            None
        }
    }
}
