// logslice - core/parser.rs
//
// Line parser: maps one raw line onto a LogRecord.
// Core layer: pure function, never fails, no I/O.

use crate::core::model::LogRecord;
use regex::Regex;
use std::sync::OnceLock;

/// The recognised log-line shape, anchored at the start of the trimmed line.
///
/// Timestamp: `YYYY-MM-DD` then `T` or a space, then `HH:MM:SS`, then any run
/// of dots and digits (fractional seconds) and any non-whitespace suffix
/// (timezone offset or `Z`). Level: one token from the fixed vocabulary,
/// matched case-insensitively. Message: the rest of the line, possibly empty.
const LINE_PATTERN: &str = concat!(
    r"^(?P<timestamp>\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}[.\d]*\S*)\s+",
    r"(?P<level>(?i:DEBUG|INFO|WARN(?:ING)?|ERROR|FATAL|CRITICAL))\s+",
    r"(?P<message>.*)",
);

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LINE_PATTERN).expect("built-in line pattern is valid"))
}

/// Parse one input line.
///
/// The line is trimmed first. When it has the recognised shape the record
/// carries the captured timestamp, level, and message; otherwise both
/// timestamp and level are `None` and the whole trimmed line is the message.
pub fn parse_line(line_number: u64, raw_line: &str) -> LogRecord {
    let line = raw_line.trim();

    if let Some(caps) = line_regex().captures(line) {
        if let (Some(ts), Some(level), Some(message)) =
            (caps.name("timestamp"), caps.name("level"), caps.name("message"))
        {
            return LogRecord {
                line_number,
                timestamp: Some(ts.as_str().to_string()),
                level: Some(level.as_str().to_string()),
                message: message.as_str().to_string(),
            };
        }
    }

    LogRecord {
        line_number,
        timestamp: None,
        level: None,
        message: line.to_string(),
    }
}
