// logslice - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.

use serde::Serialize;
use std::str::FromStr;

// =============================================================================
// Log Record (output of parsing)
// =============================================================================

/// One input line after parsing.
///
/// Every input line yields exactly one record. `timestamp` and `level` are
/// captured together: both are `Some` when the line has the recognised
/// `<timestamp> <level> <message>` shape and both are `None` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// 1-based position of the line in the input.
    pub line_number: u64,

    /// Timestamp text exactly as it appeared in the line.
    pub timestamp: Option<String>,

    /// Level token in the casing it appeared in the line.
    pub level: Option<String>,

    /// Remainder after timestamp and level, or the whole trimmed line when
    /// the line is unstructured. May be empty.
    pub message: String,
}

impl LogRecord {
    /// True when the line did not have the recognised shape.
    pub fn is_unstructured(&self) -> bool {
        self.level.is_none()
    }
}

// =============================================================================
// Severity
// =============================================================================

/// The fixed severity vocabulary recognised by the line parser.
///
/// `Warn` and `Warning` are distinct accepted spellings. Each variant maps to
/// exactly one upper-case literal; matching against input is case-insensitive,
/// but records keep the casing they were read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Warning,
    Error,
    Fatal,
    Critical,
}

impl Severity {
    /// Returns all variants in the order they appear in the line pattern.
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Debug,
            Severity::Info,
            Severity::Warn,
            Severity::Warning,
            Severity::Error,
            Severity::Fatal,
            Severity::Critical,
        ]
    }

    /// The canonical literal spelling.
    pub fn literal(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.literal())
    }
}

/// Returned when a token is not part of the severity vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSeverity(pub String);

impl std::fmt::Display for UnknownSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown severity '{}'", self.0)
    }
}

impl std::error::Error for UnknownSeverity {}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    /// Case-insensitive lookup of the literal spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::all()
            .iter()
            .copied()
            .find(|sev| sev.literal().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse_is_case_insensitive() {
        assert_eq!("info".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("WARN".parse::<Severity>(), Ok(Severity::Warn));
        assert!("TRACE".parse::<Severity>().is_err());
    }

    #[test]
    fn test_record_keeps_source_casing() {
        let record = LogRecord {
            line_number: 1,
            timestamp: Some("2024-01-01T00:00:00".to_string()),
            level: Some("eRRor".to_string()),
            message: "boom".to_string(),
        };
        assert_eq!(
            record.level.as_deref().map(str::parse::<Severity>),
            Some(Ok(Severity::Error))
        );
        assert_eq!(record.level.as_deref(), Some("eRRor"));
        assert!(!record.is_unstructured());
    }

    #[test]
    fn test_serialises_with_camel_case_and_nulls() {
        let record = LogRecord {
            line_number: 7,
            timestamp: None,
            level: None,
            message: String::new(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "lineNumber": 7,
                "timestamp": null,
                "level": null,
                "message": ""
            })
        );
    }
}
