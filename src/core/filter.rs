// logslice - core/filter.rs
//
// Filter configuration for a single slice pass.
// Level, pattern, and limit are AND-combined; the pattern is compiled once,
// up front, so a bad expression fails before any line is read.
// Core layer: pure logic, no I/O.

use crate::core::model::LogRecord;
use crate::util::error::FilterError;
use regex::{Regex, RegexBuilder};

/// Complete filter state for one pass.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Upper-cased level to require. `None` = no level filter.
    level: Option<String>,

    /// Case-insensitive content pattern. `None` = no pattern filter.
    pattern: Option<Regex>,

    /// Maximum number of accepted records. 0 = unlimited.
    limit: usize,
}

impl FilterConfig {
    /// Build a filter, compiling the content pattern.
    ///
    /// Empty strings are treated the same as absent filters.
    pub fn new(
        level: Option<&str>,
        pattern: Option<&str>,
        limit: usize,
    ) -> Result<Self, FilterError> {
        let mut filter = Self {
            limit,
            ..Default::default()
        };
        filter.set_level(level);
        filter.set_pattern(pattern)?;
        Ok(filter)
    }

    /// Set the level filter. Comparison is case-insensitive.
    fn set_level(&mut self, level: Option<&str>) {
        self.level = level.filter(|l| !l.is_empty()).map(str::to_uppercase);
    }

    /// Set the content pattern, compiling it case-insensitively.
    /// Returns an error if the pattern is invalid.
    fn set_pattern(&mut self, pattern: Option<&str>) -> Result<(), FilterError> {
        let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
            self.pattern = None;
            return Ok(());
        };
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| FilterError::InvalidPattern {
                pattern: pattern.to_string(),
                source: e,
            })?;
        self.pattern = Some(regex);
        Ok(())
    }

    /// The result cap, or `None` when unlimited.
    pub fn limit(&self) -> Option<usize> {
        (self.limit > 0).then_some(self.limit)
    }

    /// Returns true if no level or pattern filter is active.
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.pattern.is_none()
    }

    /// Check a record against the level and pattern filters.
    ///
    /// A level filter never matches an unstructured record.
    pub fn accepts(&self, record: &LogRecord) -> bool {
        if let Some(ref wanted) = self.level {
            match record.level {
                Some(ref level) if level.to_uppercase() == *wanted => {}
                _ => return false,
            }
        }

        if let Some(ref regex) = self.pattern {
            if !regex.is_match(&record.message) {
                return false;
            }
        }

        true
    }

    /// True once `accepted` records have filled the limit.
    pub fn is_full(&self, accepted: usize) -> bool {
        self.limit().is_some_and(|limit| accepted >= limit)
    }
}
