//! `qtnative`: write the Ubuntu target of a React Native project.
//!
//! Exit codes: 0 success, 1 internal, 2 bad input, 3 not found,
//! 4 configuration.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A `.env` in the working directory may set QTNATIVE__* overrides.
    let dotenv = dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("qtnative: {e:#}");
        return ExitCode::FAILURE;
    }
    if let Some(path) = dotenv {
        debug!(path = %path.display(), "loaded .env");
    }

    let verbose = cli.global.verbose > 0;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, verbose),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    let Cli { global, command } = cli;

    // `init` is what creates the file, so an explicit path need not exist.
    let config = match command {
        Commands::Init(_) => AppConfig::load(None)?,
        _ => AppConfig::load(global.config.as_ref())?,
    };
    debug!(?config, "configuration loaded");

    let output = OutputManager::new(&global, &config);
    match command {
        Commands::Ubuntu(args) => commands::ubuntu::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, global.config.as_deref(), output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, config, global.config.as_deref(), output)
        }
    }
}

/// Print `err` to stderr and map it to an exit code.
fn report(err: &CliError, verbose: bool) -> ExitCode {
    err.log();
    let message = if io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{message}");
    ExitCode::from(err.exit_code())
}
