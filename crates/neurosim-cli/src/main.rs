//! CLI entry point - the composition root.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use neurosim_cli::{Cli, CliConfig, CliContext, CliError, Commands, bootstrap, handlers};
use neurosim_runtime::DefaultSystemProbe;

fn main() {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.clone().unwrap_or(Commands::Setup);

    let result = bootstrap(CliConfig::from_cli(&cli)).and_then(|ctx| dispatch(&ctx, command));
    if let Err(err) = result {
        if !err.already_reported() {
            eprintln!("Error: {err:#}");
        }
        std::process::exit(err.exit_code());
    }
}

fn dispatch(ctx: &CliContext, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Setup => handlers::setup::execute(ctx),
        Commands::Build => handlers::build::execute(ctx),
        Commands::Venv => handlers::venv::execute(ctx),
        Commands::Activate => {
            handlers::activate::execute(ctx);
            Ok(())
        }
        Commands::CheckDeps => handlers::check_deps::execute(&DefaultSystemProbe::new()),
        Commands::Paths { json } => handlers::paths::execute(ctx, json),
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
