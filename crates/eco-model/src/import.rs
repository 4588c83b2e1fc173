use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ByteRecord;
use encoding_rs::WINDOWS_1252;
use thiserror::Error;

use crate::{Column, Observation, ObservationTable, TableError};

/// Field values read as a missing observation unless [`LoadOptions`] says otherwise.
///
/// The usual dataframe null spellings plus Eurostat's `:` flag.
pub const DEFAULT_MISSING_MARKERS: &[&str] = &[
    "", ":", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Clone, Debug)]
pub struct LoadOptions {
    pub delimiter: u8,
    /// How to decode raw bytes into text fields.
    pub encoding: TextEncoding,
    /// Field values (after trimming) that mark a missing observation.
    pub missing_markers: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            encoding: TextEncoding::Auto,
            missing_markers: DEFAULT_MISSING_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextEncoding {
    /// Attempt to decode as UTF-8; if a field contains invalid UTF-8, fall back to Windows-1252.
    #[default]
    Auto,
    /// Decode as UTF-8 and reject invalid byte sequences.
    Utf8,
    /// Decode as Windows-1252 (aka CP-1252).
    Windows1252,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset was empty")]
    EmptyInput,
    #[error("dataset header is missing required column `{0}`")]
    MissingColumn(Column),
    #[error("dataset parse error at row {row}, column {column}: {reason}")]
    Parse { row: u64, column: u64, reason: String },
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Column positions resolved from the header row.
struct HeaderLayout {
    geo: usize,
    nace_r2: usize,
    indic_bt: usize,
    /// `(field index, label)` for every period column, in file order.
    periods: Vec<(usize, String)>,
}

impl HeaderLayout {
    fn from_header(header: &[String]) -> Result<Self, LoadError> {
        let [geo, nace_r2, indic_bt] = Column::ALL.map(|column| {
            header
                .iter()
                .position(|name| name.trim() == column.header())
                .ok_or(LoadError::MissingColumn(column))
        });
        let (geo, nace_r2, indic_bt) = (geo?, nace_r2?, indic_bt?);

        // The first column is the row index written by the exporting tool.
        let periods = header
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(idx, _)| ![geo, nace_r2, indic_bt].contains(idx))
            .map(|(idx, name)| (idx, name.trim().to_string()))
            .collect();

        Ok(Self {
            geo,
            nace_r2,
            indic_bt,
            periods,
        })
    }
}

/// Load an observation table from a file on disk.
pub fn load_observations_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<ObservationTable, LoadError> {
    let file = File::open(path.as_ref())?;
    load_observations(BufReader::new(file), options)
}

/// Load an observation table from a delimited stream.
///
/// The header must name `geo`, `nace_r2` and `indic_bt`; the first column is a row index and
/// is discarded, every other column is a period. Rows may be shorter than the header, in which
/// case the trailing periods are missing.
pub fn load_observations<R: Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<ObservationTable, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        // Headers are handled manually so row/column locations stay consistent in errors.
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut record = ByteRecord::new();
    let mut record_index: u64 = 0;

    let has_header = csv_reader
        .read_byte_record(&mut record)
        .map_err(|e| map_csv_error(e, record_index + 1))?;
    if !has_header {
        return Err(LoadError::EmptyInput);
    }
    record_index += 1;

    let header = decode_record_to_strings(&record, record_index, options.encoding)?;
    let layout = HeaderLayout::from_header(&header)?;

    let mut rows = Vec::new();
    loop {
        record.clear();
        match csv_reader.read_byte_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                record_index += 1;
                let fields = decode_record_to_strings(&record, record_index, options.encoding)?;
                if fields.iter().all(|f| f.trim().is_empty()) {
                    continue;
                }
                rows.push(parse_row(&fields, &layout, record_index, options)?);
            }
            Err(e) => return Err(map_csv_error(e, record_index + 1)),
        }
    }

    let periods = layout.periods.into_iter().map(|(_, label)| label).collect();
    let table = ObservationTable::new(periods, rows)?;
    log::info!(
        "loaded {} observation rows across {} periods",
        table.len(),
        table.periods().len()
    );
    Ok(table)
}

fn parse_row(
    fields: &[String],
    layout: &HeaderLayout,
    row: u64,
    options: &LoadOptions,
) -> Result<Observation, LoadError> {
    let key = |idx: usize| -> Result<String, LoadError> {
        match fields.get(idx).map(|f| f.trim()) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(LoadError::Parse {
                row,
                column: idx as u64 + 1,
                reason: "missing key value".to_string(),
            }),
        }
    };

    let geo = key(layout.geo)?;
    let nace_r2 = key(layout.nace_r2)?;
    let indic_bt = key(layout.indic_bt)?;

    let mut values = Vec::with_capacity(layout.periods.len());
    for (idx, _) in &layout.periods {
        let raw = fields.get(*idx).map(|f| f.trim()).unwrap_or("");
        values.push(parse_value(raw, row, *idx as u64 + 1, options)?);
    }

    Ok(Observation {
        geo,
        nace_r2,
        indic_bt,
        values,
    })
}

fn parse_value(
    raw: &str,
    row: u64,
    column: u64,
    options: &LoadOptions,
) -> Result<Option<f64>, LoadError> {
    if options.missing_markers.iter().any(|m| m == raw) {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|e| LoadError::Parse {
            row,
            column,
            reason: format!("invalid number `{raw}`: {e}"),
        })
}

fn decode_record_to_strings(
    record: &ByteRecord,
    row: u64,
    encoding: TextEncoding,
) -> Result<Vec<String>, LoadError> {
    let mut out = Vec::with_capacity(record.len());
    for (idx, field) in record.iter().enumerate() {
        let s = decode_field(field, row, idx as u64 + 1, encoding)?;
        out.push(s.into_owned());
    }
    Ok(out)
}

fn decode_field<'a>(
    field: &'a [u8],
    row: u64,
    column: u64,
    encoding: TextEncoding,
) -> Result<Cow<'a, str>, LoadError> {
    // UTF-8 BOM at the start of the file, common in spreadsheet exports.
    let field = if row == 1 && column == 1 && field.starts_with(&[0xEF, 0xBB, 0xBF]) {
        &field[3..]
    } else {
        field
    };

    match encoding {
        TextEncoding::Utf8 => std::str::from_utf8(field)
            .map(Cow::Borrowed)
            .map_err(|e| LoadError::Parse {
                row,
                column,
                reason: format!("invalid UTF-8: {e}"),
            }),
        TextEncoding::Windows1252 => {
            let (cow, _, _) = WINDOWS_1252.decode(field);
            Ok(cow)
        }
        TextEncoding::Auto => match std::str::from_utf8(field) {
            Ok(s) => Ok(Cow::Borrowed(s)),
            Err(_) => {
                let (cow, _, _) = WINDOWS_1252.decode(field);
                Ok(cow)
            }
        },
    }
}

fn map_csv_error(err: csv::Error, fallback_row: u64) -> LoadError {
    let reason = err.to_string();
    let pos = err.position().cloned();

    match err.into_kind() {
        csv::ErrorKind::Io(e) => LoadError::Io(e),
        _ => {
            let row = pos
                .map(|p| p.record())
                .filter(|r| *r > 0)
                .unwrap_or(fallback_row);
            LoadError::Parse {
                row,
                column: 0,
                reason,
            }
        }
    }
}
