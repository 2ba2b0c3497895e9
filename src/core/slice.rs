// logslice - core/slice.rs
//
// The slice engine: one pull-based pass over a line source.
// Core layer: accepts any line iterator or BufRead, never touches the
// filesystem directly and never logs.

use crate::core::filter::FilterConfig;
use crate::core::model::LogRecord;
use crate::core::parser::parse_line;
use std::io::{self, BufRead};

/// Run one slice pass.
///
/// Lines are numbered from 1 in the order the iterator yields them. Each line
/// is parsed, then checked against the filter; accepted records are kept in
/// input order. Once the limit is reached the iterator is dropped without
/// pulling another line.
///
/// The first error yielded by `lines` aborts the pass and is returned as-is;
/// records accumulated so far are discarded.
pub fn slice_lines<I, E>(lines: I, filter: &FilterConfig) -> Result<Vec<LogRecord>, E>
where
    I: IntoIterator<Item = Result<String, E>>,
{
    let mut accepted = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let record = parse_line((idx as u64) + 1, &line?);
        if !filter.accepts(&record) {
            continue;
        }
        accepted.push(record);
        if filter.is_full(accepted.len()) {
            break;
        }
    }

    Ok(accepted)
}

/// Iterator over the lines of a reader, decoding invalid UTF-8 lossily.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, and the terminator is not
/// part of the yielded text. A final line without a terminator is still
/// yielded; a terminator at end of input does not add an empty line.
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
    /// The previous line ended in `\r`; a `\n` right after it belongs to it.
    skip_lf: bool,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            skip_lf: false,
        }
    }

    fn take_line(&mut self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        let mut partial = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Some(Err(e)),
            };

            if available.is_empty() {
                return partial.then(|| Ok(self.take_line()));
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.buf.extend_from_slice(&available[..end]);
                    self.skip_lf = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    return Some(Ok(self.take_line()));
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                    partial = true;
                }
            }
        }
    }
}
