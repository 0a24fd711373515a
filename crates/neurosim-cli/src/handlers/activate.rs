//! Activation hint handler.

use neurosim_core::ProjectPaths;
use neurosim_runtime::activation::print_activation_hint;

use crate::bootstrap::CliContext;

pub fn execute(ctx: &CliContext) {
    let paths = ProjectPaths::resolve(ctx.setup_config(), ctx.os);
    if !paths.venv.root().is_dir() {
        tracing::warn!(venv = %paths.venv.root().display(), "virtual environment not created yet");
    }
    print_activation_hint(ctx.reporter(), &paths.venv);
}
