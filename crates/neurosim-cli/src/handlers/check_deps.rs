//! Check system dependencies handler.
//!
//! Lists the external tools a setup run shells out to, with versions, and
//! fails if a required one is missing.

use neurosim_core::{Dependency, DependencyStatus, SystemProbePort};

use crate::error::CliError;

// ANSI color codes for better UX
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Execute the check-deps command.
pub fn execute(probe: &dyn SystemProbePort) -> Result<(), CliError> {
    println!("{BOLD}{BLUE}Checking system dependencies...{RESET}\n");

    let dependencies = probe.check_all_dependencies();

    println!(
        "{}{:<20} {:<15} {:<50}{}",
        BOLD, "DEPENDENCY", "STATUS", "NOTES", RESET
    );
    println!("{}", "=".repeat(85));
    for dep in &dependencies {
        print_dependency(dep);
    }
    println!("{}", "=".repeat(85));

    let missing = missing_required(&dependencies);
    if missing.is_empty() {
        println!("{GREEN}✓ All required dependencies are installed!{RESET}");
        println!("\n{BOLD}You can now run: {BLUE}neurosim-setup{RESET}");
        return Ok(());
    }

    println!(
        "{RED}✗ {} required dependencies are missing.{RESET}\n",
        missing.len()
    );
    for dep in &missing {
        if let Some(hint) = &dep.install_hint {
            println!("  {}: {hint}", dep.name);
        }
    }
    let names: Vec<&str> = missing.iter().map(|d| d.name.as_str()).collect();
    Err(CliError::MissingDependencies(names.join(", ")))
}

fn missing_required(dependencies: &[Dependency]) -> Vec<&Dependency> {
    dependencies
        .iter()
        .filter(|d| d.is_missing_required())
        .collect()
}

/// Print a single dependency row in the status table.
fn print_dependency(dep: &Dependency) {
    let status_str = match &dep.status {
        DependencyStatus::Present { version } => format!("{GREEN}✓ v{version}{RESET}"),
        DependencyStatus::Missing if dep.required => format!("{RED}✗ missing{RESET}"),
        DependencyStatus::Missing => format!("{YELLOW}○ missing{RESET}"),
    };

    let req_indicator = if dep.required {
        format!("{RED}*{RESET}")
    } else {
        " ".to_string()
    };

    println!(
        "{}{:<19} {:<25} {}",
        req_indicator, dep.name, status_str, dep.description
    );
}
