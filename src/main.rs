use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tether_sig::cli::Cli;
use tether_sig::ParseError;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let signatures = match tether_sig::load_signature_file(&cli.path) {
        Ok(signatures) => signatures,
        Err(err) => {
            if let ParseError::Io(_) = err {
                eprintln!("could not read {}", cli.path.display());
            }
            err.report();
            return Ok(ExitCode::FAILURE);
        }
    };

    let out = cli
        .format
        .format(&signatures)
        .context("failed to serialize signatures")?;
    print!("{out}");

    Ok(ExitCode::SUCCESS)
}
