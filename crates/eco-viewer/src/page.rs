use eco_model::{build_chart, reshape, ObservationTable, Selection, SelectionOptions};
use serde::Serialize;

use crate::{DisplaySurface, ViewerSettings};

/// How a page render ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum PageOutcome {
    /// Chart drawn with this many series.
    #[serde(rename_all = "camelCase")]
    Rendered { series_count: usize },
    /// The selection matched no rows; only the warning was drawn.
    NoData,
}

/// Render the viewer page for one selection.
///
/// Stateless: everything it needs comes in as arguments, and calling it twice with the same
/// inputs issues the same surface calls. When the selection matches no rows the surface gets a
/// warning and nothing after it, and no chart is built.
pub fn render_page(
    table: &ObservationTable,
    settings: &ViewerSettings,
    selection: &Selection,
    surface: &mut dyn DisplaySurface,
) -> PageOutcome {
    let options = SelectionOptions::from_table(table, &settings.preferred_country);

    surface.markdown(&settings.intro);
    surface.sidebar_title(&settings.sidebar_title);
    surface.dropdown(&settings.sector_label, &options.sectors, &selection.sector);
    surface.dropdown(&settings.country_label, &options.countries, &selection.country);

    let series = reshape(table, &selection.sector, &selection.country);
    if series.is_empty() {
        log::debug!(
            "no data for sector `{}` in `{}`",
            selection.sector,
            selection.country
        );
        surface.warning(&settings.no_data_message);
        return PageOutcome::NoData;
    }

    let chart = build_chart(&series, &selection.sector, &selection.country);
    surface.chart(&chart, true);

    if settings.show_raw_data {
        surface.data_table(&settings.raw_data_label, &series);
    }

    PageOutcome::Rendered {
        series_count: chart.series.len(),
    }
}
