// logslice - core/render.rs
//
// Table and JSON rendering of sliced records.
// Core layer: writes to any Write implementation.

use crate::core::model::LogRecord;
use crate::util::constants::{TABLE_BLANK_TIMESTAMP, TABLE_COLUMN_SEPARATOR, TABLE_LEVEL_WIDTH};
use crate::util::error::OutputError;
use std::io::Write;

/// How records are presented on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One aligned line per record.
    #[default]
    Table,

    /// A pretty-printed JSON array of record objects.
    Json,
}

impl OutputFormat {
    /// Parse a config value, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Render records in the given format. Returns the number written.
pub fn render<W: Write>(
    records: &[LogRecord],
    format: OutputFormat,
    writer: W,
) -> Result<usize, OutputError> {
    match format {
        OutputFormat::Table => write_table(records, writer),
        OutputFormat::Json => write_json(records, writer),
    }
}

/// Format one record as a table row (without newline).
pub fn table_row(record: &LogRecord) -> String {
    let ts = record.timestamp.as_deref().unwrap_or(TABLE_BLANK_TIMESTAMP);
    let level = record.level.as_deref().unwrap_or("");
    format!(
        "{ts}{sep}{level:<width$}{sep}{msg}",
        sep = TABLE_COLUMN_SEPARATOR,
        width = TABLE_LEVEL_WIDTH,
        msg = record.message,
    )
}

/// Write one table row per record.
pub fn write_table<W: Write>(records: &[LogRecord], mut writer: W) -> Result<usize, OutputError> {
    for record in records {
        writeln!(writer, "{}", table_row(record))?;
    }
    writer.flush()?;
    Ok(records.len())
}

/// Write records as a pretty-printed JSON array followed by a newline.
///
/// Write failures surface as `OutputError::Io` with their original kind, the
/// same as for table output.
pub fn write_json<W: Write>(records: &[LogRecord], mut writer: W) -> Result<usize, OutputError> {
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| {
        if e.is_io() {
            OutputError::Io(e.into())
        } else {
            OutputError::Json(e)
        }
    })?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(records.len())
}
