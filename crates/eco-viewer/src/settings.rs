use std::path::Path;

use eco_model::PREFERRED_COUNTRY;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page wording and layout toggles.
///
/// Every field has a default, so a settings file only needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerSettings {
    /// Introductory text shown above the chart (markdown).
    pub intro: String,
    pub sidebar_title: String,
    pub sector_label: String,
    pub country_label: String,
    /// Country listed first in the country dropdown.
    pub preferred_country: String,
    /// Warning shown when the selection has no rows.
    pub no_data_message: String,
    pub raw_data_label: String,
    /// Whether the expandable raw-data table is rendered below the chart.
    pub show_raw_data: bool,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            intro: "This interactive chart displays quarterly labour market and industrial \
                    production indicators.\nSelect your country-sector combination on the left \
                    side of the screen. Only the indicators with available data will be plotted."
                .to_string(),
            sidebar_title: "Filter Options".to_string(),
            sector_label: "Select sector".to_string(),
            country_label: "Select country".to_string(),
            preferred_country: PREFERRED_COUNTRY.to_string(),
            no_data_message: "No data available for this combination of country and sector."
                .to_string(),
            raw_data_label: "Show raw data".to_string(),
            show_raw_data: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ViewerSettings {
    pub fn from_json_str(input: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
