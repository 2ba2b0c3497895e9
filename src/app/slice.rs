// logslice - app/slice.rs
//
// Orchestrates one slice invocation: build the filter, open the source,
// run the engine, and report what happened.
//
// Order matters: the pattern is compiled before the file is opened, so an
// invalid pattern is reported even when the path is also bad.

use crate::core::filter::FilterConfig;
use crate::core::model::{LogRecord, Severity};
use crate::core::slice::slice_lines;
use crate::platform::fs::open_lines;
use crate::util::error::Result;
use std::path::PathBuf;
use std::time::Instant;

/// Everything one invocation needs to slice a file.
#[derive(Debug, Clone, Default)]
pub struct SliceRequest {
    /// File to read.
    pub path: PathBuf,
    /// Level to keep (case-insensitive).
    pub level: Option<String>,
    /// Regular expression searched in each message (case-insensitive).
    pub pattern: Option<String>,
    /// Result cap. 0 = unlimited.
    pub limit: usize,
}

/// Run a slice over the requested file.
///
/// Errors abort the pass: no partial result is returned.
pub fn run(request: &SliceRequest) -> Result<Vec<LogRecord>> {
    let filter = FilterConfig::new(
        request.level.as_deref(),
        request.pattern.as_deref(),
        request.limit,
    )?;

    if let Some(level) = request.level.as_deref().filter(|l| !l.is_empty()) {
        if level.parse::<Severity>().is_err() {
            tracing::warn!(
                level,
                "Level is not one of DEBUG, INFO, WARN, WARNING, ERROR, FATAL, CRITICAL; \
                 no line will match"
            );
        }
    }

    tracing::debug!(
        path = %request.path.display(),
        level = ?request.level,
        pattern = ?request.pattern,
        limit = request.limit,
        unfiltered = filter.is_empty(),
        "Slice started"
    );

    let started = Instant::now();
    let lines = open_lines(&request.path)?;
    let records = slice_lines(lines, &filter)?;

    tracing::info!(
        path = %request.path.display(),
        records = records.len(),
        limited = filter.is_full(records.len()),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Slice completed"
    );

    Ok(records)
}
