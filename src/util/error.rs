// logslice - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error keeps its causal source for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all logslice operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogSliceError {
    /// The content filter could not be built.
    Filter(FilterError),

    /// The line source could not be opened or read.
    Source(SourceError),

    /// Rendering the result set failed.
    Output(OutputError),
}

impl LogSliceError {
    /// Process exit status the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        crate::util::constants::EXIT_FAILURE
    }
}

impl fmt::Display for LogSliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter(e) => write!(f, "{e}"),
            Self::Source(e) => write!(f, "{e}"),
            Self::Output(e) => write!(f, "Output error: {e}"),
        }
    }
}

impl std::error::Error for LogSliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Filter(e) => Some(e),
            Self::Source(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors raised while building a filter, before any line is read.
#[derive(Debug)]
pub enum FilterError {
    /// The content pattern is not a valid regular expression.
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, source } => {
                write!(f, "Invalid pattern '{pattern}': {source}")
            }
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
        }
    }
}

impl From<FilterError> for LogSliceError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// The line source is unavailable: it could not be opened, or reading it failed.
#[derive(Debug)]
pub enum SourceError {
    /// Opening the file failed (not found, permission denied, is a directory).
    Unavailable { path: PathBuf, source: io::Error },

    /// An I/O failure interrupted iteration.
    Read {
        path: PathBuf,
        line_number: u64,
        source: io::Error,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, source } => {
                write!(f, "Cannot open '{}': {source}", path.display())
            }
            Self::Read {
                path,
                line_number,
                source,
            } => write!(
                f,
                "Failed reading '{}' at line {line_number}: {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } => Some(source),
            Self::Read { source, .. } => Some(source),
        }
    }
}

impl From<SourceError> for LogSliceError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

/// Errors related to rendering records.
#[derive(Debug)]
pub enum OutputError {
    /// Writing to the output stream failed.
    Io(io::Error),

    /// JSON serialisation failed.
    Json(serde_json::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "write failed: {e}"),
            Self::Json(e) => write!(f, "JSON serialisation failed: {e}"),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<OutputError> for LogSliceError {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// These never abort a run: `load_config` turns them into warnings.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Config '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::FileTooLarge { .. } => None,
        }
    }
}

/// Convenience type alias for logslice results.
pub type Result<T> = std::result::Result<T, LogSliceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_pattern_keeps_regex_source() {
        let source = regex::Regex::new("[oops").unwrap_err();
        let err: LogSliceError = FilterError::InvalidPattern {
            pattern: "[oops".to_string(),
            source,
        }
        .into();
        assert!(err.to_string().starts_with("Invalid pattern '[oops'"));
        assert!(err.source().and_then(|e| e.source()).is_some());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_unavailable_source_names_path() {
        let err = SourceError::Unavailable {
            path: PathBuf::from("missing.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.log"));
    }
}
