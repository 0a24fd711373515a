//! Full setup handler (the default command).

use neurosim_runtime::run_setup;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Build, provision, print the activation hint.
pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    run_setup(&ctx.session())?;
    Ok(())
}
