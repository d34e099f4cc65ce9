use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `verifact` binary.
#[derive(Debug, Parser)]
#[command(
    name = "verifact",
    version,
    about = "VeriFact - check whether a news article reads as real or fake"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress notices and progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Classifier endpoint, overriding `gateway.url`
    #[arg(long, global = true, value_name = "URL")]
    pub gateway_url: Option<String>,

    /// Directory holding the local store, overriding `storage.data_dir`
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            gateway_url: self.gateway_url.clone(),
            data_dir: self.data_dir.clone(),
        }
    }
}
