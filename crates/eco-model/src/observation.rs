use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key columns of the observation table.
///
/// Everything else in the source file is a period column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Region / country label.
    Geo,
    /// NACE Rev. 2 sector code.
    NaceR2,
    /// Business-trend indicator name.
    IndicBt,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Geo, Column::NaceR2, Column::IndicBt];

    /// Header name used in the source file.
    pub fn header(self) -> &'static str {
        match self {
            Column::Geo => "geo",
            Column::NaceR2 => "nace_r2",
            Column::IndicBt => "indic_bt",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// One row of the observation table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub geo: String,
    pub nace_r2: String,
    pub indic_bt: String,
    /// One slot per period column, in file order. `None` marks a missing observation.
    pub values: Vec<Option<f64>>,
}

impl Observation {
    pub fn key(&self, column: Column) -> &str {
        match column {
            Column::Geo => &self.geo,
            Column::NaceR2 => &self.nace_r2,
            Column::IndicBt => &self.indic_bt,
        }
    }

    pub fn matches(&self, sector: &str, country: &str) -> bool {
        self.nace_r2 == sector && self.geo == country
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("row {row} has {actual} values but the table has {expected} period columns")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// The full loaded dataset.
///
/// Built once at startup and only ever read afterwards; callers share it by reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationTable {
    periods: Vec<String>,
    rows: Vec<Observation>,
}

impl ObservationTable {
    pub fn new(periods: Vec<String>, rows: Vec<Observation>) -> Result<Self, TableError> {
        for (idx, row) in rows.iter().enumerate() {
            if row.values.len() != periods.len() {
                return Err(TableError::RowWidth {
                    row: idx,
                    expected: periods.len(),
                    actual: row.values.len(),
                });
            }
        }
        Ok(Self { periods, rows })
    }

    /// Period labels, in source column order.
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All distinct values of a key column, sorted lexicographically.
    pub fn distinct(&self, column: Column) -> BTreeSet<String> {
        self.rows
            .iter()
            .map(|row| row.key(column).to_string())
            .collect()
    }

    /// Rows for one `(sector, country)` pair, in table order.
    pub fn rows_matching<'a>(
        &'a self,
        sector: &'a str,
        country: &'a str,
    ) -> impl Iterator<Item = &'a Observation> + 'a {
        self.rows
            .iter()
            .filter(move |row| row.matches(sector, country))
    }

    pub fn distinct_sectors(&self) -> BTreeSet<String> {
        self.distinct(Column::NaceR2)
    }

    /// Country options with `preferred` listed first.
    ///
    /// The preferred label is only listed when it actually occurs in the `geo` column, and it is
    /// never repeated in the sorted remainder. Prepending it unconditionally would offer a
    /// country with no rows and list it twice, so a table without it simply starts with the
    /// first country in sorted order.
    pub fn distinct_countries(&self, preferred: &str) -> Vec<String> {
        order_countries(self.distinct(Column::Geo), preferred)
    }
}

pub(crate) fn order_countries(
    countries: impl IntoIterator<Item = String>,
    preferred: &str,
) -> Vec<String> {
    let mut rest: BTreeSet<String> = countries.into_iter().collect();
    let mut out = Vec::with_capacity(rest.len());
    if rest.remove(preferred) {
        out.push(preferred.to_string());
    }
    out.extend(rest);
    out
}
