use vf_core::sample_article;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `verifact sample`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&sample_article(), flags.format)
}
