use std::fmt;

use crate::SeriesTable;

/// Marker printed for a missing observation.
const MISSING: &str = "-";

/// Plain-text grid rendering of a [`SeriesTable`].
///
/// The first column holds the period labels under the table's index name; each indicator gets a
/// right-aligned column. Values keep at most two decimals.
pub struct SeriesTableDisplay<'a> {
    table: &'a SeriesTable,
}

impl<'a> SeriesTableDisplay<'a> {
    pub fn new(table: &'a SeriesTable) -> Self {
        Self { table }
    }
}

impl SeriesTable {
    pub fn display(&self) -> SeriesTableDisplay<'_> {
        SeriesTableDisplay::new(self)
    }
}

/// Compact text for one observation: integers without decimals, others with at most two.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        None => MISSING.to_string(),
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{v:.0}"),
        Some(v) => {
            let s = format!("{v:.2}");
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

impl fmt::Display for SeriesTableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table;
        let cells: Vec<Vec<String>> = table
            .columns()
            .iter()
            .map(|c| c.values.iter().map(|v| format_value(*v)).collect())
            .collect();

        let index_width = table
            .periods()
            .iter()
            .map(|p| p.chars().count())
            .chain(std::iter::once(table.index_name.chars().count()))
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = table
            .columns()
            .iter()
            .zip(&cells)
            .map(|(column, values)| {
                values
                    .iter()
                    .map(|v| v.chars().count())
                    .chain(std::iter::once(column.name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:<index_width$}", table.index_name)?;
        for (column, width) in table.columns().iter().zip(&widths) {
            write!(f, "  {:>width$}", column.name, width = *width)?;
        }
        writeln!(f)?;

        for (row, period) in table.periods().iter().enumerate() {
            write!(f, "{period:<index_width$}")?;
            for (values, width) in cells.iter().zip(&widths) {
                let value = values.get(row).map(String::as_str).unwrap_or(MISSING);
                write!(f, "  {value:>width$}", width = *width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
