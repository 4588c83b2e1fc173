//! Reshaping matching observation rows into a period-indexed series table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ObservationTable;

/// Name of the row-key axis of a [`SeriesTable`].
pub const PERIOD_AXIS_NAME: &str = "Quarter";

/// Values of one indicator across all periods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesColumn {
    pub name: String,
    /// One value per period of the owning table. `None` marks a missing observation.
    pub values: Vec<Option<f64>>,
}

/// Time-indexed table of indicator values for one `(sector, country)` pair.
///
/// Rows are periods, columns are indicator names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesTable {
    pub index_name: String,
    periods: Vec<String>,
    columns: Vec<SeriesColumn>,
}

impl Default for SeriesTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl SeriesTable {
    /// The zero-row, zero-column table.
    pub fn empty() -> Self {
        Self {
            index_name: PERIOD_AXIS_NAME.to_string(),
            periods: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// `true` when there is nothing to plot: no periods or no indicator columns.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty() || self.columns.is_empty()
    }

    /// Period labels (row keys), in source order.
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    pub fn columns(&self) -> &[SeriesColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Values of the column with exactly this name.
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.periods.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Single cell lookup by period label and indicator name.
    pub fn value(&self, period: &str, indicator: &str) -> Option<f64> {
        let row = self.periods.iter().position(|p| p == period)?;
        self.column(indicator)?.get(row).copied().flatten()
    }
}

/// Select the rows for `(sector, country)` and pivot them into a [`SeriesTable`].
///
/// Matching rows become columns keyed by their indicator name (in table order) and the period
/// columns become rows. When nothing matches, the result is [`SeriesTable::empty`].
///
/// Duplicate indicator rows within the selection keep the first occurrence.
pub fn reshape(table: &ObservationTable, sector: &str, country: &str) -> SeriesTable {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut columns = Vec::new();

    for row in table.rows_matching(sector, country) {
        if !seen.insert(row.indic_bt.as_str()) {
            log::warn!(
                "duplicate indicator `{}` for sector `{sector}` in `{country}`; keeping the first row",
                row.indic_bt
            );
            continue;
        }
        columns.push(SeriesColumn {
            name: row.indic_bt.clone(),
            values: row.values.clone(),
        });
    }

    if columns.is_empty() {
        log::debug!("no rows for sector `{sector}` in `{country}`");
        return SeriesTable::empty();
    }

    log::debug!(
        "reshaped {} indicator rows for sector `{sector}` in `{country}`",
        columns.len()
    );
    SeriesTable {
        index_name: PERIOD_AXIS_NAME.to_string(),
        periods: table.periods().to_vec(),
        columns,
    }
}
