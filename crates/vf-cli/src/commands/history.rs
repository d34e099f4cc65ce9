use vf_core::responses::{HistoryClearResponse, ShareResponse};

use crate::cli::subcommands::HistoryCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::rows::ResultRow;
use crate::context::AppContext;
use crate::output::{notices, output};

/// Handle `verifact history`.
pub fn handle(
    action: &HistoryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HistoryCommands::List => {
            let entries = ctx.session.history().entries();
            if flags.format == OutputFormat::Table {
                let rows = entries.iter().map(ResultRow::from).collect::<Vec<_>>();
                output(&rows, flags.format)
            } else {
                output(&entries, flags.format)
            }
        }
        HistoryCommands::Clear => {
            let cleared = ctx.session.clear_history()?;
            notices(&ctx.session.take_notices(), flags);
            output(&HistoryClearResponse { cleared }, flags.format)
        }
        HistoryCommands::Share { id } => {
            let text = ctx.session.share(id)?;
            output(
                &ShareResponse {
                    id: id.clone(),
                    text,
                },
                flags.format,
            )
        }
    }
}
