use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ThemeCommands {
    /// Show the current preference.
    Get,
    /// Store a preference.
    Set {
        /// `dark` or `light`.
        value: String,
    },
    /// Switch between dark and light.
    Toggle,
}
