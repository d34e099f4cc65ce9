use vf_core::responses::ResourcesResponse;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `verifact resources`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ResourcesResponse::default(), flags.format)
}
