// logslice - platform/config.rs
//
// Config directory resolution and config.toml loading with validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance. CLI flags always win over config values.

use crate::core::render::OutputFormat;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for logslice configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/logslice/ or %APPDATA%\logslice\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::debug!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of the default config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[output]` section.
    pub output: OutputSection,
    /// `[slice]` section.
    pub slice: SliceSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// "table" or "json".
    pub format: Option<String>,
}

/// `[slice]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SliceSection {
    /// Default result cap (0 = unlimited).
    pub limit: Option<i64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Output format used when --json is not given.
    pub output_format: OutputFormat,
    /// Result cap used when --limit is not given.
    pub limit: usize,
    /// Logging level string (applied before tracing is initialised).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            limit: constants::DEFAULT_LIMIT,
            log_level: None,
        }
    }
}

/// Read and parse a config file without validating values.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_raw_config(config_path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    let metadata = match std::fs::metadata(config_path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            })
        }
    };

    if metadata.len() > constants::MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::FileTooLarge {
            path: config_path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_CONFIG_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::TomlParse {
            path: config_path.to_path_buf(),
            source: e,
        })
}

/// Check raw values against their allowed ranges.
///
/// Invalid values fall back to defaults and produce a warning each.
pub fn validate(raw: &RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- Output: format --
    if let Some(ref format) = raw.output.format {
        match OutputFormat::from_name(format) {
            Some(f) => config.output_format = f,
            None => warnings.push(format!(
                "[output] format = \"{format}\" is not recognised. \
                 Expected \"table\" or \"json\". Using default (table)."
            )),
        }
    }

    // -- Slice: limit --
    if let Some(limit) = raw.slice.limit {
        match usize::try_from(limit) {
            Ok(l) => config.limit = l,
            Err(_) => warnings.push(format!(
                "[slice] limit = {limit} must be zero or positive. Using default ({}).",
                constants::DEFAULT_LIMIT,
            )),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    (config, warnings)
}

/// Load and validate a config file.
///
/// Never fails: a missing file yields defaults silently; an unreadable or
/// unparseable file yields defaults plus a warning describing the problem.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    match read_raw_config(config_path) {
        Ok(None) => (AppConfig::default(), Vec::new()),
        Ok(Some(raw)) => validate(&raw),
        Err(e) => (AppConfig::default(), vec![format!("{e}. Using defaults.")]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config() {
        let file = write_config(
            "[output]\nformat = \"JSON\"\n[slice]\nlimit = 25\n[logging]\nlevel = \"Debug\"\n",
        );
        let (config, warnings) = load_config(file.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.limit, 25);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values_fall_back_with_warnings() {
        let file = write_config(
            "[output]\nformat = \"xml\"\n[slice]\nlimit = -3\n[logging]\nlevel = \"loud\"\n",
        );
        let (config, warnings) = load_config(file.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let file = write_config("[future]\nthing = true\n[slice]\nlimit = 3\n");
        let (config, warnings) = load_config(file.path());
        assert!(warnings.is_empty());
        assert_eq!(config.limit, 3);
    }

    #[test]
    fn test_unparseable_file_warns() {
        let file = write_config("[output\nformat = ");
        let (config, warnings) = load_config(file.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }

    #[test]
    fn test_oversized_file_rejected() {
        let file = write_config(&"#".repeat(constants::MAX_CONFIG_FILE_SIZE as usize + 1));
        let result = read_raw_config(file.path());
        assert!(matches!(result, Err(ConfigError::FileTooLarge { .. })));
    }
}
