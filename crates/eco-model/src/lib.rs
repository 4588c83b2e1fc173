//! `eco-model` defines the in-memory data structures behind the short-term indicator viewer.
//!
//! The crate covers everything that does not touch a display:
//! - loading the observation table from a delimited file ([`import`])
//! - the dropdown option lists and the current [`Selection`]
//! - reshaping matching rows into a [`SeriesTable`] ([`series::reshape`])
//! - building a declarative [`ChartSpec`] ([`charts::build_chart`])
//!
//! Chart specs and series tables are `serde`-friendly so display layers can ship them
//! across process or language boundaries unchanged.

pub mod charts;
mod display;
pub mod import;
mod observation;
pub mod selection;
pub mod series;

pub use charts::{
    build_chart, chart_title, ChartSpec, Color, HoverMode, KnownIndicator, LegendClick,
    LegendSpec, LineDash, LineMode, LineSeries, LineStyle, DEFAULT_TEMPLATE, LEGEND_TITLE,
    X_AXIS_TITLE, Y_AXIS_TITLE,
};
pub use display::{format_value, SeriesTableDisplay};
pub use import::{
    load_observations, load_observations_from_path, LoadError, LoadOptions,
    DEFAULT_MISSING_MARKERS,
};
pub use observation::{Column, Observation, ObservationTable, TableError};
pub use selection::{Selection, SelectionError, SelectionOptions, PREFERRED_COUNTRY};
pub use series::{reshape, SeriesColumn, SeriesTable, PERIOD_AXIS_NAME};
