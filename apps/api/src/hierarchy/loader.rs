//! HR export loader — delimited rows to [`TitleRecord`]s.
//!
//! The export is `;`-separated with a header row, and older files are not
//! always valid UTF-8, so fields are decoded lossily. Rows too short to hold
//! both configured columns are skipped and counted.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::hierarchy::index::TitleRecord;

pub const DEFAULT_TITLE_COLUMN: usize = 7;
pub const DEFAULT_DIVISION_COLUMN: usize = 11;
pub const DEFAULT_DELIMITER: u8 = b';';

/// Zero-based column positions of the fields the resolver needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub title_column: usize,
    pub division_column: usize,
    pub delimiter: u8,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            title_column: DEFAULT_TITLE_COLUMN,
            division_column: DEFAULT_DIVISION_COLUMN,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ColumnLayout {
    fn min_fields(&self) -> usize {
        self.title_column.max(self.division_column) + 1
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("hierarchy source unavailable at {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Row accounting for one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub records: usize,
}

/// Turns data rows (header already removed) into title records.
pub fn records_from_rows<R, S>(
    rows: impl IntoIterator<Item = R>,
    layout: &ColumnLayout,
) -> (Vec<TitleRecord>, LoadStats)
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut stats = LoadStats::default();
    let mut records = Vec::new();

    for (idx, row) in rows.into_iter().enumerate() {
        stats.rows_read += 1;
        let fields = row.as_ref();
        if fields.len() < layout.min_fields() {
            debug!(row = idx + 1, fields = fields.len(), "skipping short row");
            stats.rows_skipped += 1;
            continue;
        }
        records.push(TitleRecord::new(
            fields[layout.title_column].as_ref(),
            fields[layout.division_column].as_ref(),
        ));
    }

    stats.records = records.len();
    (records, stats)
}

/// Reads every data row from a delimited source, skipping the header.
pub fn read_rows(reader: impl Read, layout: &ColumnLayout) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(layout.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.byte_records() {
        let record = result?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }
    Ok(rows)
}

/// Opens and reads an export file.
pub fn read_path(path: &Path, layout: &ColumnLayout) -> Result<Vec<Vec<String>>, LoadError> {
    let unavailable = |source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::open(path).map_err(|e| unavailable(csv::Error::from(e)))?;
    read_rows(file, layout).map_err(unavailable)
}
