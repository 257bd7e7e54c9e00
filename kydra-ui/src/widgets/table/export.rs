//! CSV export of the filtered and sorted rows.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::column::Column;
use crate::error::ExportError;
use crate::model::Record;

/// Byte-order mark written before the header so spreadsheet apps pick UTF-8.
pub const BOM: char = '\u{feff}';

/// A finished CSV artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
}

impl CsvExport {
    pub fn new<R: Record>(columns: &[Column<R>], rows: &[&R]) -> Result<Self, ExportError> {
        Self::at(columns, rows, Utc::now())
    }

    pub fn at<R: Record>(
        columns: &[Column<R>],
        rows: &[&R],
        time: DateTime<Utc>,
    ) -> Result<Self, ExportError> {
        Ok(Self {
            file_name: export_file_name(time),
            contents: to_csv(columns, rows)?,
        })
    }

    /// Write the artifact into `dir`, returning the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, self.contents.as_bytes()).map_err(|e| ExportError::io(&path, e))?;
        log::debug!("wrote {} bytes to {}", self.contents.len(), path.display());
        Ok(path)
    }
}

/// `Export_<unix epoch millis>.csv`
pub fn export_file_name(time: DateTime<Utc>) -> String {
    format!("Export_{}.csv", time.timestamp_millis())
}

/// Header plus one line per row over the exported columns. Every field is
/// quoted and every line, the last included, ends with `\n`.
pub fn to_csv<R: Record>(columns: &[Column<R>], rows: &[&R]) -> Result<String, ExportError> {
    let exported: Vec<&Column<R>> = columns.iter().filter(|c| c.is_exported()).collect();

    let mut out = Vec::new();
    out.extend_from_slice(BOM.encode_utf8(&mut [0; 4]).as_bytes());

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);
    writer.write_record(exported.iter().map(|c| c.header.as_str()))?;
    for record in rows {
        writer.write_record(exported.iter().map(|c| record.field(&c.accessor).to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
