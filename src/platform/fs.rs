// logslice - platform/fs.rs
//
// Line source provider: opens a log file and yields its lines lazily.
// The file handle lives inside the returned iterator, so it is closed as
// soon as the iterator is dropped on success, early stop, or error.

use crate::core::slice::LossyLines;
use crate::util::error::SourceError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Lines of an open file, with read failures tagged by path and line number.
#[derive(Debug)]
pub struct FileLines<R = BufReader<File>> {
    path: PathBuf,
    lines: LossyLines<R>,
    line_number: u64,
}

impl<R: BufRead> FileLines<R> {
    fn new(path: &Path, reader: R) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: LossyLines::new(reader),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for FileLines<R> {
    type Item = Result<String, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.lines.next()?;
        self.line_number += 1;
        Some(next.map_err(|e| SourceError::Read {
            path: self.path.clone(),
            line_number: self.line_number,
            source: e,
        }))
    }
}

/// Open `path` as a line source.
///
/// Fails with `SourceError::Unavailable` if the file cannot be opened or is
/// a directory.
pub fn open_lines(path: &Path) -> Result<FileLines, SourceError> {
    let unavailable = |source| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unavailable)?;
    let metadata = file.metadata().map_err(unavailable)?;
    if metadata.is_dir() {
        return Err(unavailable(std::io::Error::new(
            std::io::ErrorKind::Other,
            "is a directory",
        )));
    }

    tracing::debug!(path = %path.display(), size = metadata.len(), "Opened line source");

    Ok(FileLines::new(path, BufReader::new(file)))
}
