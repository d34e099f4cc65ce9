use clap::Subcommand;

/// Stored results, newest first.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List stored results.
    List,
    /// Delete every stored result.
    Clear,
    /// Print a shareable one-line summary of a result.
    Share {
        /// Result id as shown by `history list`.
        id: String,
    },
}
