//! Converts a PNG image or TrueType font into a C header declaring its bytes.

use std::{io, process::ExitCode};

use anyhow::Result;
use asset_embedder::cli;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()?;

    let config = cli::get_config();
    let code = cli::run(&config, io::stdout().lock())?;

    Ok(ExitCode::from(code))
}
