//! Settings controlling how fingerprints are drawn.
//!
//! Settings come from the command line and from TOML files. Command line
//! values win over the file given with `--config`, which wins over the user's
//! config file.

use crate::error::{CliError, CliResult};
use merge::Merge;
use randomart_core::bounds::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use randomart_core::{Bounds, Frame, Options, SymbolTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The name of the config file looked for in the user's config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Drawing settings, all optional so they can be layered.
#[derive(Debug, Default, Clone, PartialEq, Eq, clap::Args, Serialize, Deserialize, Merge)]
#[clap(next_help_heading = "Drawing")]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// The width of the board
    #[clap(short = 'W', long)]
    #[clap(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// The height of the board
    #[clap(short = 'H', long)]
    #[clap(value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// The symbols to draw with: one per visit count starting at zero, then the start and end symbols
    #[clap(short, long, value_name = "SYMBOLS")]
    #[clap(allow_hyphen_values = true)]
    pub symbols: Option<String>,

    /// Draw a border around the art
    #[clap(short, long)]
    #[merge(strategy = merge::bool::overwrite_false)]
    pub frame: bool,

    /// A label for the top border, implies --frame
    #[clap(long, value_name = "LABEL")]
    pub header: Option<String>,

    /// A label for the bottom border, implies --frame
    #[clap(long, value_name = "LABEL")]
    pub footer: Option<String>,
}

impl Settings {
    /// Reads settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> CliResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = toml::from_str(&text).map_err(|source| CliError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded settings from {:?}: {:?}", path, settings);
        Ok(settings)
    }

    /// The user's config file, if there is a config directory on this platform
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("randomart").join(CONFIG_FILE_NAME))
    }

    /// Gets the options to draw with.
    ///
    /// # Error
    /// Errors if the bounds or symbols aren't valid
    pub fn options(&self) -> CliResult<Options> {
        let bounds = Bounds::new(
            self.width.map(|w| w as usize).unwrap_or(DEFAULT_WIDTH),
            self.height.map(|h| h as usize).unwrap_or(DEFAULT_HEIGHT),
        )?;
        let symbols = match &self.symbols {
            Some(symbols) => symbols.parse::<SymbolTable>()?,
            None => SymbolTable::default(),
        };
        Ok(Options::new(bounds, symbols))
    }

    /// Gets the border to draw, if any
    pub fn frame(&self) -> Option<Frame> {
        if !self.frame && self.header.is_none() && self.footer.is_none() {
            return None;
        }
        let mut frame = Frame::new();
        if let Some(header) = &self.header {
            frame = frame.header(header);
        }
        if let Some(footer) = &self.footer {
            frame = frame.footer(footer);
        }
        Some(frame)
    }
}
