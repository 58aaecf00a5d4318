//! Cotejo CLI: compare recorded style snapshots of UI toggle runs
//!
//! ## Usage
//!
//! ```bash
//! cotejo compare run.json --phase toggled --expect changed
//! cotejo check runs/*.json           # toggled changed, reverted restored
//! cotejo slug --category Videos "Intro to KMS"
//! cotejo config --format json
//! ```

use clap::Parser;
use cotejo_cli::{handlers, Cli, CliConfig, CliResult, Commands, Reporter, Verbosity};
use std::process::ExitCode;

/// Exit code for runs whose styles broke an expectation
const EXIT_VIOLATION: u8 = 1;
/// Exit code for invocation, I/O and data errors
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match CliConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };
    init_tracing(config.verbosity);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_violation() {
                ExitCode::from(EXIT_VIOLATION)
            } else {
                ExitCode::from(EXIT_ERROR)
            }
        }
    }
}

fn init_tracing(verbosity: Verbosity) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(verbosity.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, config: &CliConfig) -> CliResult<()> {
    let mut reporter =
        Reporter::new(config.color.should_color(), config.verbosity.is_quiet());

    match cli.command {
        Commands::Compare(args) => handlers::run_compare(config, &args, &reporter).map(|_| ()),
        Commands::Check(args) => handlers::run_check(config, &args, &mut reporter).map(|_| ()),
        Commands::Slug(args) => handlers::run_slug(&args, &reporter).map(|_| ()),
        Commands::Config(args) => handlers::run_config(config, &args, &reporter).map(|_| ()),
    }
}
