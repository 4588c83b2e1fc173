//! Dropdown option lists and the current `(sector, country)` selection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ObservationTable;

/// Country label listed ahead of every other country.
pub const PREFERRED_COUNTRY: &str = "European Union";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown sector `{0}`")]
    UnknownSector(String),
    #[error("unknown country `{0}`")]
    UnknownCountry(String),
    #[error("dataset has no {0} to choose from")]
    NoOptions(&'static str),
}

/// Options offered by the two dropdowns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOptions {
    /// Sorted sector codes.
    pub sectors: Vec<String>,
    /// Preferred country first, then the rest sorted.
    pub countries: Vec<String>,
}

impl SelectionOptions {
    pub fn from_table(table: &ObservationTable, preferred_country: &str) -> Self {
        Self {
            sectors: table.distinct_sectors().into_iter().collect(),
            countries: table.distinct_countries(preferred_country),
        }
    }
}

/// The `(sector, country)` pair of one interaction.
///
/// A new value is built for every interaction rather than mutating the previous one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub sector: String,
    pub country: String,
}

impl Selection {
    pub fn new(sector: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            sector: sector.into(),
            country: country.into(),
        }
    }

    /// Resolve a selection against the dropdown options.
    ///
    /// A side that is not given defaults to the first option, like a freshly rendered dropdown.
    /// Values that are not offered as options are rejected.
    pub fn resolve(
        options: &SelectionOptions,
        sector: Option<&str>,
        country: Option<&str>,
    ) -> Result<Self, SelectionError> {
        let sector = pick(&options.sectors, sector, "sectors", SelectionError::UnknownSector)?;
        let country = pick(
            &options.countries,
            country,
            "countries",
            SelectionError::UnknownCountry,
        )?;
        Ok(Self::new(sector, country))
    }

    /// A copy of this selection with a different sector.
    pub fn with_sector(&self, sector: impl Into<String>) -> Self {
        Self::new(sector, self.country.clone())
    }

    /// A copy of this selection with a different country.
    pub fn with_country(&self, country: impl Into<String>) -> Self {
        Self::new(self.sector.clone(), country)
    }
}

fn pick<'a>(
    options: &'a [String],
    requested: Option<&'a str>,
    what: &'static str,
    unknown: fn(String) -> SelectionError,
) -> Result<&'a str, SelectionError> {
    match requested {
        Some(value) if options.iter().any(|o| o == value) => Ok(value),
        Some(value) => Err(unknown(value.to_string())),
        None => options
            .first()
            .map(String::as_str)
            .ok_or(SelectionError::NoOptions(what)),
    }
}
