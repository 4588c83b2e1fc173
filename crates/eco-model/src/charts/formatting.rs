use std::fmt;

use serde::{Deserialize, Serialize};

/// Named line colors used by the indicator palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Blue,
    LightGreen,
    Green,
    Purple,
}

impl Color {
    /// Human-readable color name, as listed in the indicator palette.
    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::LightGreen => "light green",
            Color::Green => "green",
            Color::Purple => "purple",
        }
    }

    /// CSS color keyword understood by browser renderers.
    pub fn css(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::LightGreen => "lightgreen",
            Color::Green => "green",
            Color::Purple => "purple",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Line dash style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineDash {
    pub fn as_str(self) -> &'static str {
        match self {
            LineDash::Solid => "solid",
            LineDash::Dashed => "dashed",
            LineDash::Dotted => "dotted",
        }
    }
}

/// Stroke formatting for one line series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub color: Color,
    /// Stroke width in pixels. `None` leaves the renderer default in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default)]
    pub dash: LineDash,
}
