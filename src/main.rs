// logslice - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading (config.toml, overridden by flags)
// 3. Logging initialisation (debug mode support)
// 4. Running the slice and rendering results to stdout

use clap::Parser;
use logslice::app::slice::{self, SliceRequest};
use logslice::core::render::{self, OutputFormat};
use logslice::platform::config::{self, AppConfig, PlatformPaths};
use logslice::util;
use logslice::util::error::{LogSliceError, OutputError};
use std::path::PathBuf;
use std::process::ExitCode;

/// logslice - Parse and filter log files with pattern matching.
///
/// Each line is split into timestamp, level, and message when it looks like
/// `<timestamp> <LEVEL> <message>`; other lines are kept whole.
#[derive(Parser, Debug)]
#[command(name = "logslice", version, about)]
struct Cli {
    /// Log file to read.
    file: PathBuf,

    /// Keep only lines with this level (case-insensitive).
    #[arg(short = 'l', long = "level")]
    level: Option<String>,

    /// Keep only lines whose message matches this regex (case-insensitive).
    #[arg(short = 'p', long = "pattern")]
    pattern: Option<String>,

    /// Stop after this many matching lines (0 = unlimited).
    #[arg(short = 'n', long = "limit")]
    limit: Option<usize>,

    /// Print a JSON array instead of a table.
    #[arg(long = "json")]
    json: bool,

    /// Enable debug logging on stderr (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Read settings from this config file instead of the platform default.
    #[arg(long = "config", value_name = "PATH", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore config.toml entirely.
    #[arg(long = "no-config")]
    no_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (app_config, config_warnings) = if cli.no_config {
        (AppConfig::default(), Vec::new())
    } else {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| PlatformPaths::resolve().config_file());
        config::load_config(&path)
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::debug!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "logslice starting"
    );
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    let request = SliceRequest {
        path: cli.file,
        level: cli.level,
        pattern: cli.pattern,
        limit: cli.limit.unwrap_or(app_config.limit),
    };
    let format = if cli.json {
        OutputFormat::Json
    } else {
        app_config.output_format
    };

    let result = slice::run(&request).and_then(|records| {
        render::render(&records, format, std::io::stdout().lock()).map_err(LogSliceError::from)
    });

    match result {
        Ok(count) => {
            tracing::debug!(count, "Records written");
            ExitCode::SUCCESS
        }
        Err(LogSliceError::Output(OutputError::Io(e)))
            if e.kind() == std::io::ErrorKind::BrokenPipe =>
        {
            // Reader went away (e.g. piped into `head`).
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Slice failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
