use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Color, LineDash, LineStyle};

/// The four indicators eligible for plotting.
///
/// Any other `indic_bt` value in the data stays in the series table but never becomes a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownIndicator {
    IndustrialProduction,
    PersonsEmployed,
    HoursWorked,
    Turnover,
}

impl KnownIndicator {
    /// Plot order.
    pub const ALL: [KnownIndicator; 4] = [
        KnownIndicator::IndustrialProduction,
        KnownIndicator::PersonsEmployed,
        KnownIndicator::HoursWorked,
        KnownIndicator::Turnover,
    ];

    /// Exact `indic_bt` label in the dataset.
    pub fn label(self) -> &'static str {
        match self {
            KnownIndicator::IndustrialProduction => "Industrial production",
            KnownIndicator::PersonsEmployed => "Persons employed",
            KnownIndicator::HoursWorked => "Hours worked",
            KnownIndicator::Turnover => "Turnover (revenues)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.label() == label)
    }

    pub fn line_style(self) -> LineStyle {
        match self {
            KnownIndicator::IndustrialProduction => LineStyle {
                color: Color::Blue,
                width: None,
                dash: LineDash::Solid,
            },
            KnownIndicator::PersonsEmployed => LineStyle {
                color: Color::LightGreen,
                width: Some(2.0),
                dash: LineDash::Dashed,
            },
            KnownIndicator::HoursWorked => LineStyle {
                color: Color::Green,
                width: Some(2.0),
                dash: LineDash::Dotted,
            },
            KnownIndicator::Turnover => LineStyle {
                color: Color::Purple,
                width: Some(2.0),
                dash: LineDash::Solid,
            },
        }
    }

    /// Headline indicator is opaque; the labour and turnover lines are drawn faded behind it.
    pub fn opacity(self) -> f64 {
        match self {
            KnownIndicator::IndustrialProduction => 1.0,
            _ => 0.3,
        }
    }
}

impl fmt::Display for KnownIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
