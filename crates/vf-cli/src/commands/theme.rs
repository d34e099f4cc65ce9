use vf_core::Theme;
use vf_core::responses::ThemeResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThemeCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `verifact theme`.
pub fn handle(action: &ThemeCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let theme = match action {
        ThemeCommands::Get => ctx.session.theme(),
        ThemeCommands::Set { value } => ctx.session.set_theme(value.parse::<Theme>()?)?,
        ThemeCommands::Toggle => ctx.session.toggle_theme()?,
    };
    output(&ThemeResponse { theme }, flags.format)
}
