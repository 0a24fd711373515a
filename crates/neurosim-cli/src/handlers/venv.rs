//! Environment-only handler.

use neurosim_runtime::activation::print_activation_hint;
use neurosim_runtime::pipeline::announce_platform;
use neurosim_runtime::venv::provision_environment;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Provision the environment, then say how to activate it.
pub fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let session = ctx.session();
    announce_platform(&session);
    provision_environment(&session)?;
    print_activation_hint(session.reporter(), &session.paths.venv);
    Ok(())
}
