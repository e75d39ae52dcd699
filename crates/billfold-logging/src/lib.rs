// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Logging initialization shared by Billfold binaries.
//!
//! The TUI owns stdout, so TUI binaries always log to a file; the standard
//! location is platform specific and can be overridden with `--log-dir` and
//! `--log-file`. `RUST_LOG` wins over every flag when it is set.

use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub use tracing::Level;

/// Output format for log lines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Plaintext,
    /// One JSON object per line
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Plaintext => f.write_str("plaintext"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plaintext" => Ok(LogFormat::Plaintext),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}. Use 'plaintext' or 'json'", s)),
        }
    }
}

/// Verbosity selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CliLogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for Level {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

/// Logging flags shared by every Billfold binary, flattened into its clap
/// struct with `#[command(flatten)]`.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct CliLoggingArgs {
    /// Log verbosity level
    #[arg(long, value_enum, help = "Log verbosity level (default: info)")]
    pub log_level: Option<CliLogLevel>,

    /// Log output format
    #[arg(long, value_enum, help = "Log output format (default: plaintext)")]
    pub log_format: Option<LogFormat>,

    /// Directory for log files
    #[arg(long, help = "Directory for log files (default: platform specific)")]
    pub log_dir: Option<String>,

    /// Log filename
    #[arg(long, help = "Log filename")]
    pub log_file: Option<String>,
}

impl CliLoggingArgs {
    /// Initialize logging for `component`.
    ///
    /// TUI binaries (`is_tui`) always log to a file; others log to stdout
    /// unless `--log-file` or `--log-dir` asks for a file.
    pub fn init(self, component: &str, is_tui: bool) -> anyhow::Result<()> {
        let level = Level::from(self.log_level.unwrap_or_default());
        let format = self.log_format.unwrap_or_default();

        if is_tui || self.log_file.is_some() || self.log_dir.is_some() {
            init_to_file(component, level, format, &self.resolve_log_path(component))
        } else {
            init(component, level, format)
        }
    }

    /// Where the log file goes.
    ///
    /// An absolute `--log-file` wins outright. A relative one with a
    /// directory part is joined onto `--log-dir` when given. A bare filename
    /// lands in `--log-dir` or next to the standard log file. With no
    /// `--log-file`, `--log-dir` gets `<component>.log`, and with neither
    /// flag the platform standard path is used.
    fn resolve_log_path(&self, component: &str) -> PathBuf {
        let standard = get_standard_log_path();

        let Some(file) = self.log_file.as_deref().map(Path::new) else {
            return match &self.log_dir {
                Some(dir) => Path::new(dir).join(format!("{}.log", component)),
                None => standard,
            };
        };

        if file.is_absolute() {
            return file.to_path_buf();
        }
        if let Some(dir) = &self.log_dir {
            return Path::new(dir).join(file);
        }
        let has_dir_part = file.parent().is_some_and(|p| !p.as_os_str().is_empty());
        if has_dir_part {
            return file.to_path_buf();
        }
        match standard.parent() {
            Some(parent) => parent.join(file),
            None => file.to_path_buf(),
        }
    }
}

/// Standard log file path for the current OS.
///
/// - Windows: `%APPDATA%\billfold\billfold.log`
/// - macOS: `~/Library/Logs/billfold.log`
/// - Linux: `~/.local/share/billfold/billfold.log`
/// - Other: `~/billfold.log`
pub fn get_standard_log_path() -> PathBuf {
    let home_or_tmp = || dirs::home_dir().unwrap_or_else(|| PathBuf::from("/tmp"));

    if cfg!(target_os = "macos") {
        home_or_tmp().join("Library").join("Logs").join("billfold.log")
    } else if cfg!(any(target_os = "linux", target_os = "windows")) {
        dirs::data_dir()
            .unwrap_or_else(home_or_tmp)
            .join("billfold")
            .join("billfold.log")
    } else {
        home_or_tmp().join("billfold.log")
    }
}

/// Console logging with the given defaults; `RUST_LOG` takes precedence.
pub fn init(component: &str, default_level: Level, format: LogFormat) -> anyhow::Result<()> {
    init_with_writer(component, default_level, io::stdout, format)
}

/// Append to `log_path`, creating parent directories as needed.
pub fn init_to_file(
    component: &str,
    default_level: Level,
    format: LogFormat,
    log_path: &Path,
) -> anyhow::Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new().create(true).append(true).open(log_path)?;
    init_with_writer(component, default_level, file, format)
}

fn init_with_writer<W>(
    component: &str,
    default_level: Level,
    writer: W,
    format: LogFormat,
) -> anyhow::Result<()>
where
    W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},{}={}", default_level, component, default_level))
    });
    let layer = tracing_subscriber::fmt::layer().with_writer(writer);
    #[cfg(debug_assertions)]
    let layer = layer.with_file(true).with_line_number(true);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(layer.json()).try_init()?,
        LogFormat::Plaintext => registry.with(layer).try_init()?,
    }

    Ok(())
}
