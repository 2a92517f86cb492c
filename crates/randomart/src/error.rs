//! Error result

use log::SetLoggerError;
use randomart_core::RandomartError;
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    RandomartError(#[from] RandomartError),
    #[error("Could not read config file {}: {}", path.display(), source)]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config file {}: {}", path.display(), source)]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    IoError(#[from] io::Error),
    #[error(transparent)]
    LoggerError(#[from] SetLoggerError),
}

pub type CliResult<T> = Result<T, CliError>;
