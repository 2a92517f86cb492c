//! Logging for the randomart executable.
//!
//! Log records go to stderr, stdout only ever carries the art.

use atty::Stream;
use colored::Colorize;
use fern::{Dispatch, FormatCallback};
use log::{Level, LevelFilter, Record, SetLoggerError};
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

static TIME_FORMAT: &[FormatItem] =
    format_description!("[hour]:[minute]:[second].[subsecond digits:4]");

/// Provides helpful logging args for clap clis
#[derive(Debug, clap::Args, Clone, Default)]
#[clap(next_help_heading = "Log Level")]
pub struct LoggingOpts {
    /// Only display error level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(["warn", "info", "debug", "trace"]))]
    #[clap(display_order = 1)]
    error: bool,

    /// Display warning and above level log messages (default)
    #[clap(short, long)]
    #[clap(conflicts_with_all(["error", "info", "debug", "trace"]))]
    #[clap(display_order = 2)]
    warn: bool,

    /// Display info and above level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(["error", "warn", "debug", "trace"]))]
    #[clap(display_order = 3)]
    info: bool,

    /// Display debug and above level log messages
    #[clap(long, short)]
    #[clap(conflicts_with_all(["error", "warn", "info", "trace"]))]
    #[clap(display_order = 4)]
    debug: bool,

    /// Display trace and above level log messages
    #[clap(long)]
    #[clap(conflicts_with_all(["error", "warn", "info", "debug"]))]
    #[clap(display_order = 5)]
    trace: bool,

    /// Show the source of a logging statement
    #[clap(long)]
    #[clap(help_heading = "Logging Settings")]
    pub show_source: bool,

    /// The console output mode.
    #[clap(long, value_enum, default_value_t = ConsoleMode::Auto)]
    #[clap(help_heading = "Logging Settings")]
    pub console: ConsoleMode,
}

#[derive(Debug, Copy, Clone, clap::ValueEnum, Eq, PartialEq, Default)]
pub enum ConsoleMode {
    #[default]
    Auto,
    Rich,
    Plain,
}

impl ConsoleMode {
    pub fn resolve(self) -> Self {
        match self {
            ConsoleMode::Auto => {
                if atty::is(Stream::Stderr) {
                    ConsoleMode::Rich
                } else {
                    ConsoleMode::Plain
                }
            }
            ConsoleMode::Rich | ConsoleMode::Plain => self,
        }
    }
}

/// How much detail goes before each message
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum OutputType {
    Basic,
    Complicated,
}

impl LoggingOpts {
    /// Gets the log level
    pub fn log_level_filter(&self) -> LevelFilter {
        if self.error {
            LevelFilter::Error
        } else if self.warn {
            LevelFilter::Warn
        } else if self.info {
            LevelFilter::Info
        } else if self.debug {
            LevelFilter::Debug
        } else if self.trace {
            LevelFilter::Trace
        } else {
            LevelFilter::Warn
        }
    }

    fn output_type(&self) -> OutputType {
        match self.log_level_filter() {
            LevelFilter::Debug | LevelFilter::Trace => OutputType::Complicated,
            _ => OutputType::Basic,
        }
    }

    /// Installs the global logger.
    pub fn init_root_logger(&self) -> Result<(), SetLoggerError> {
        self.create_logger().apply()
    }

    pub fn create_logger(&self) -> Dispatch {
        if self.console.resolve() == ConsoleMode::Plain {
            colored::control::set_override(false);
        }
        Dispatch::new()
            .level(self.log_level_filter())
            .format(Self::message_format(self.output_type(), self.show_source))
            .chain(std::io::stderr())
    }

    fn message_format(
        output_type: OutputType,
        show_source: bool,
    ) -> impl Fn(FormatCallback, &fmt::Arguments, &Record) + Sync + Send + 'static {
        move |out, message, record| {
            let message = match record.level() {
                Level::Error => message.to_string().red().to_string(),
                Level::Warn => message.to_string().yellow().to_string(),
                Level::Info | Level::Debug => message.to_string(),
                Level::Trace => message.to_string().bright_blue().to_string(),
            };
            out.finish(format_args!(
                "{} {}",
                Self::format_prefix(output_type, show_source, record),
                message
            ))
        }
    }

    fn format_prefix(output_type: OutputType, show_source: bool, record: &Record) -> String {
        let level_string = record.level().to_string().to_lowercase();
        let level_string = match record.level() {
            Level::Error => level_string.red(),
            Level::Warn => level_string.yellow(),
            Level::Info => level_string.green(),
            Level::Debug => level_string.blue(),
            Level::Trace => level_string.bright_black(),
        };
        match output_type {
            OutputType::Basic if show_source => {
                format!("{} {}:", Self::source(record).italic(), level_string)
            }
            OutputType::Basic => format!("{}:", level_string),
            OutputType::Complicated => {
                let time = OffsetDateTime::now_utc()
                    .format(TIME_FORMAT)
                    .unwrap_or_default();
                let file = record
                    .file()
                    .and_then(|f| Path::new(f).file_name())
                    .and_then(|f| f.to_str())
                    .unwrap_or("unknown");
                let line = record.line().map(|l| format!(":{l}")).unwrap_or_default();
                format!("[{} {}{} {}]", time, file, line, level_string)
            }
        }
    }

    /// `(crate :: path/in/src.rs:line)` for a record
    fn source(record: &Record) -> String {
        match record.module_path().zip(record.file()) {
            Some((module, file)) => {
                let line = record.line().map(|i| format!(":{}", i)).unwrap_or_default();
                let crate_name = module.split("::").next().unwrap_or(module);
                let source: PathBuf = Path::new(file)
                    .iter()
                    .skip_while(|&p| p != OsStr::new("src"))
                    .skip(1)
                    .collect();
                format!(
                    "({crate_name} :: {source}{line})",
                    source = source.to_string_lossy()
                )
            }
            None => "(<unknown source>)".to_string(),
        }
    }
}
