use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use merge::Merge;

use crate::config::Settings;
use crate::error::CliResult;
use crate::logging::LoggingOpts;

/// Draws randomart for digests, the way ssh-keygen draws key fingerprints.
///
/// Each digest is written as hex, optionally prefixed by its algorithm and with
/// bytes separated by colons, like `MD5:48:22:9d:e1:...`. When no digest is
/// given, 16 random bytes are drawn instead.
#[derive(Debug, Parser, Clone)]
#[clap(name = "randomart")]
#[clap(version, author)]
#[clap(disable_version_flag = true)]
#[clap(term_width = 80)]
pub struct RandomartArgs {
    /// Log level to run in.
    #[clap(flatten)]
    logging: LoggingOpts,

    /// How to draw.
    #[clap(flatten)]
    settings: Settings,

    /// Read drawing settings from a TOML file.
    ///
    /// Settings given on the command line take precedence.
    #[clap(short, long, value_name = "FILE")]
    #[clap(help_heading = None)]
    config: Option<PathBuf>,

    /// Print version
    #[clap(short = 'v', long, action = ArgAction::Version)]
    #[clap(help_heading = None)]
    version: Option<bool>,

    /// The digests to draw
    #[clap(value_name = "DIGEST")]
    digests: Vec<String>,
}

impl RandomartArgs {
    /// Simulate creating the args from the command line
    pub fn command_line<S: AsRef<str>>(cmd: S) -> Self {
        Self::try_command_line(cmd).expect("Couldn't parse cmd line")
    }

    /// Simulate creating the args from the command line
    pub fn try_command_line<S: AsRef<str>>(cmd: S) -> Result<Self, clap::Error> {
        Self::try_parse_args(cmd.as_ref().split_whitespace())
    }

    /// Create an args instance from the surrounding environment.
    pub fn from_env() -> Self {
        match Self::try_parse_args(std::env::args_os().skip(1)) {
            Ok(s) => s,
            Err(e) => {
                e.exit();
            }
        }
    }

    fn try_parse_args<S, I>(iter: I) -> Result<Self, clap::Error>
    where
        S: Into<OsString>,
        I: IntoIterator<Item = S>,
    {
        let args = std::iter::once(OsString::from("randomart")).chain(iter.into_iter().map(Into::into));
        <Self as Parser>::try_parse_from(args)
    }

    /// Gets the logging args
    pub fn logging(&self) -> &LoggingOpts {
        &self.logging
    }

    /// The settings given on the command line alone
    pub fn command_line_settings(&self) -> &Settings {
        &self.settings
    }

    /// Gets the alternative config file, if one was given
    pub fn config_file(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    /// The digests requested
    pub fn digests(&self) -> &[String] {
        &self.digests[..]
    }

    /// Layers the command line settings over the config files.
    ///
    /// `user_config` is only read if it exists, the `--config` file must exist.
    pub fn settings(&self, user_config: Option<&Path>) -> CliResult<Settings> {
        let mut settings = self.settings.clone();
        if let Some(config) = self.config_file() {
            settings.merge(Settings::from_file(config)?);
        }
        if let Some(user_config) = user_config.filter(|p| p.exists()) {
            settings.merge(Settings::from_file(user_config)?);
        }
        Ok(settings)
    }
}
