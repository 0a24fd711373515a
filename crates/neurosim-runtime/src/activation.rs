//! Activation instructions for the provisioned environment.

use neurosim_core::VenvLayout;

use crate::report::Reporter;

/// Print how to activate `layout`: the PowerShell script on Windows, a
/// `source` line for the shell script elsewhere.
pub fn print_activation_hint(reporter: &dyn Reporter, layout: &VenvLayout) {
    reporter.message(&layout.activation_hint());
}
