//! Build-only handler.

use neurosim_runtime::build::build_project;
use neurosim_runtime::pipeline::announce_platform;

use crate::bootstrap::CliContext;
use crate::error::CliError;

pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let session = ctx.session();
    announce_platform(&session);
    build_project(&session)?;
    session.say("Build complete.");
    Ok(())
}
