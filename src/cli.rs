use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::signature::Signature;
use crate::visualize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per signature and member
    Text,
    /// The parsed signature list as pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "tether-sig")]
#[command(about = "Inspect tether signature files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Signature file to read
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

impl OutputFormat {
    pub fn format(self, signatures: &[Signature]) -> serde_json::Result<String> {
        match self {
            OutputFormat::Text => Ok(visualize::render(signatures)),
            OutputFormat::Json => serde_json::to_string_pretty(signatures).map(|mut json| {
                json.push('\n');
                json
            }),
        }
    }
}
