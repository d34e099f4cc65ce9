use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Check(args) => commands::check::handle(&args, ctx, flags).await,
        Commands::History { action } => commands::history::handle(&action, ctx, flags),
        Commands::Theme { action } => commands::theme::handle(&action, ctx, flags),
        Commands::Sample | Commands::Resources | Commands::Schema(_) => {
            unreachable!("sample/resources/schema are pre-dispatched in main")
        }
    }
}
