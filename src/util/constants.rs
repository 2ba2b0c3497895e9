// logslice - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logslice";

/// Application identifier used for config directories.
pub const APP_ID: &str = "logslice";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Configuration
// =============================================================================

/// Name of the optional configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum accepted size of `config.toml` in bytes.
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024; // 64 KB

// =============================================================================
// Slicing
// =============================================================================

/// Default result cap. Zero means unlimited.
pub const DEFAULT_LIMIT: usize = 0;

// =============================================================================
// Presentation
// =============================================================================

/// Placeholder printed in the timestamp column for unstructured lines.
pub const TABLE_BLANK_TIMESTAMP: &str = "           ";

/// Width the level column is padded to in table output.
pub const TABLE_LEVEL_WIDTH: usize = 8;

/// Separator between table columns.
pub const TABLE_COLUMN_SEPARATOR: &str = "  ";

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when neither RUST_LOG, --debug, nor config set one.
///
/// Kept at `warn` so a normal run prints nothing but results.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in the `[logging] level` config key.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Process exit codes
// =============================================================================

/// Exit status for a failed slice (bad pattern, unreadable source, write failure).
pub const EXIT_FAILURE: i32 = 1;
