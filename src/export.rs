//! Bulk CSV/JSON export of the filtered or selected rows.
//!
//! CSV is a header of field names taken from the first record followed by one
//! line per record, cells joined with `,`. Cells are written verbatim unless
//! quoting is switched on, so a value containing a comma shifts the columns of
//! its line.

use crate::record::{to_fields, FieldValue};
use crate::utils::datetime::format_ymd;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Nothing to export")]
    NoRecords,

    #[error("Record {0} cannot be exported as a table row")]
    NotTabular(usize),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

/// A serialized export ready to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub format: ExportFormat,
    pub content: Vec<u8>,
}

impl ExportFile {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Write the file into `dir`, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, ExportError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.content).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        log::info!("Exported {} ({} bytes) to {}", self.file_name, self.content.len(), path.display());
        Ok(path)
    }
}

/// `<domain>-<YYYY-MM-DD>.<ext>`
pub fn export_file_name(domain: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!("{}-{}.{}", domain, format_ymd(date), format.extension())
}

/// Serializes rows for one page's domain.
#[derive(Debug, Clone)]
pub struct BulkExporter {
    domain: String,
    quote_fields: bool,
}

impl BulkExporter {
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            quote_fields: false,
        }
    }

    /// Quote cells containing delimiters, quotes or line breaks (RFC 4180).
    pub fn with_quoting(mut self, quote_fields: bool) -> Self {
        self.quote_fields = quote_fields;
        self
    }

    pub fn export<R: Serialize>(
        &self,
        records: &[Arc<R>],
        format: ExportFormat,
        date: NaiveDate,
    ) -> Result<ExportFile, ExportError> {
        let content = match format {
            ExportFormat::Csv => self.to_csv(records)?,
            ExportFormat::Json => self.to_json(records)?,
        };

        Ok(ExportFile {
            file_name: export_file_name(&self.domain, date, format),
            format,
            content: content.into_bytes(),
        })
    }

    pub fn to_csv<R: Serialize>(&self, records: &[Arc<R>]) -> Result<String, ExportError> {
        let rows = records
            .iter()
            .enumerate()
            .map(|(i, record)| to_fields::<R>(record).ok_or(ExportError::NotTabular(i)))
            .collect::<Result<Vec<_>, _>>()?;

        let header: Vec<String> = match rows.first() {
            Some(first) => first.keys().cloned().collect(),
            None => return Err(ExportError::NoRecords),
        };

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(self.join_cells(header.iter().cloned()));
        for row in &rows {
            let cells = header.iter().map(|key| {
                row.get(key)
                    .map(|value| FieldValue::from(value).display())
                    .unwrap_or_default()
            });
            lines.push(self.join_cells(cells));
        }

        Ok(lines.join("\n"))
    }

    pub fn to_json<R: Serialize>(&self, records: &[Arc<R>]) -> Result<String, ExportError> {
        if records.is_empty() {
            return Err(ExportError::NoRecords);
        }
        let plain: Vec<&R> = records.iter().map(|r| &**r).collect();
        Ok(serde_json::to_string_pretty(&plain)?)
    }

    fn join_cells<I: Iterator<Item = String>>(&self, cells: I) -> String {
        cells
            .map(|cell| if self.quote_fields { quote_cell(cell) } else { cell })
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn quote_cell(cell: String) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell
    }
}
