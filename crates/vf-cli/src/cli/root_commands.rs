use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{HistoryCommands, ThemeCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate an article and send it to the classifier.
    Check(CheckArgs),
    /// Print the built-in sample article.
    Sample,
    /// Past results.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Light/dark preference.
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
    /// Manual fact-checking tips and trusted sites.
    Resources,
    /// Print the JSON schema of a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Article headline.
    #[arg(long, conflicts_with = "sample")]
    pub title: Option<String>,
    /// Article author.
    #[arg(long, conflicts_with = "sample")]
    pub author: Option<String>,
    /// Article body.
    #[arg(long, conflicts_with_all = ["sample", "text_file"])]
    pub text: Option<String>,
    /// Read the article body from a file.
    #[arg(long, value_name = "PATH", conflicts_with = "sample")]
    pub text_file: Option<String>,
    /// Submit the built-in sample article.
    #[arg(long)]
    pub sample: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    PredictionResult,
    ArticleInput,
    History,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
