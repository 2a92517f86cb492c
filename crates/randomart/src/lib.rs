//! The randomart executable.
//!
//! Parses the command line, sets up logging, layers the configuration and
//! prints the art for every requested digest.

#[macro_use]
extern crate log;

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use randomart_core::bytes::{parse_hex, to_hex};
use randomart_core::fingerprint::{random_bytes, DEFAULT_DATA_LEN};

use crate::cli::RandomartArgs;
use crate::config::Settings;
use crate::error::CliResult;

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

/// Runs randomart from the command line of this process.
pub fn execute() -> Result<(), ()> {
    let args = RandomartArgs::from_env();
    if let Err(e) = init_logging(&args) {
        eprintln!("could not start logging: {}", e);
        return Err(());
    }

    let user_config = Settings::user_config_path();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    with_args(&args, user_config.as_deref(), &mut out)
        .context("could not draw randomart")
        .map_err(|e| {
            error!("{:#}", e);
        })
}

/// Installs the global logger configured by the args.
///
/// # Error
/// Errors if a global logger was already installed
pub fn init_logging(args: &RandomartArgs) -> CliResult<()> {
    args.logging().init_root_logger()?;
    Ok(())
}

/// Draws the art requested by the args into `out`.
///
/// Every fingerprint is followed by a newline.
pub fn with_args<W: Write + ?Sized>(
    args: &RandomartArgs,
    user_config: Option<&Path>,
    out: &mut W,
) -> CliResult<()> {
    let settings = args.settings(user_config)?;
    let options = settings.options()?;
    let frame = settings.frame();
    debug!(
        "drawing on a {} board with symbols {:?}",
        options.bounds, options.symbols.to_string()
    );

    let inputs: Vec<Vec<u8>> = if args.digests().is_empty() {
        let data = random_bytes(DEFAULT_DATA_LEN);
        info!("no digest given, using random bytes {}", to_hex(&data));
        vec![data]
    } else {
        args.digests()
            .iter()
            .map(|digest| parse_hex(digest))
            .collect::<Result<_, _>>()?
    };

    for data in inputs {
        trace!("drawing {}", to_hex(&data));
        let art = match &frame {
            Some(frame) => options.framed(&data, frame),
            None => options.fingerprint(&data),
        };
        writeln!(out, "{}", art)?;
    }
    Ok(())
}
