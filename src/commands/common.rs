//! Shared plumbing for all subcommands: catalog loading, logging setup,
//! and color handling.

use clap::{Args, ValueEnum};
use ohno::IntoAppError;
use owo_colors::OwoColorize;
use sizewise::{Catalog, format_size};
use std::io::{IsTerminal, stdout};
use std::path::PathBuf;
use terminal_size::{Width, terminal_size};

type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

const DEFAULT_TERMINAL_WIDTH: usize = 120;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

/// Control when colored output is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// Arguments shared by every subcommand
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Path to a catalog JSON file [default: the built-in catalog]
    #[arg(long, value_name = "PATH", env = "SIZEWISE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// The loaded catalog plus presentation state every command needs.
pub struct Common {
    pub catalog: Catalog,
    colors: bool,
}

impl Common {
    /// Initialize logging and load the catalog (from the given path, or the
    /// built-in one).
    pub fn new(args: &CommonArgs) -> Result<Self> {
        init_logging(args.log_level);

        let catalog = match &args.catalog {
            Some(path) => {
                Catalog::load(path).into_app_err_with(|| format!("unable to load catalog '{}'", path.display()))?
            }
            None => Catalog::builtin().into_app_err("unable to load the built-in catalog")?,
        };

        let colors =
            matches!(args.color, ColorMode::Always) || (matches!(args.color, ColorMode::Auto) && stdout().is_terminal());

        Ok(Self { catalog, colors })
    }

    pub fn bold(&self, text: &str) -> String {
        if self.colors { text.bold().to_string() } else { text.to_string() }
    }

    pub fn dimmed(&self, text: &str) -> String {
        if self.colors { text.dimmed().to_string() } else { text.to_string() }
    }

    pub fn accent(&self, text: &str) -> String {
        if self.colors { text.cyan().to_string() } else { text.to_string() }
    }

    /// Color an accuracy percentage by quality band: green at 80 and above,
    /// yellow at 50 and above, red below.
    pub fn accuracy(&self, percent: f64) -> String {
        let text = format!("{percent:.1}%");
        if !self.colors {
            return text;
        }
        if percent >= 80.0 {
            text.green().to_string()
        } else if percent >= 50.0 {
            text.yellow().to_string()
        } else {
            text.red().to_string()
        }
    }
}

/// A size in meters rendered in its most legible metric unit.
pub fn size_text(meters: f64) -> Result<String> {
    let formatted = format_size(meters).into_app_err_with(|| format!("unable to format size {meters}"))?;
    Ok(formatted.to_string())
}

/// Shorten text to the terminal's width, ellipsis at the cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }

    let kept: String = text.chars().take(max_width.saturating_sub(1)).collect();
    format!("{kept}…")
}

pub fn detect_terminal_width() -> usize {
    if stdout().is_terminal() {
        terminal_size().map_or(DEFAULT_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w))
    } else {
        DEFAULT_TERMINAL_WIDTH
    }
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    if log_level == LogLevel::None {
        return;
    }

    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug) || matches!(log_level, LogLevel::Trace))
        .init();
}
