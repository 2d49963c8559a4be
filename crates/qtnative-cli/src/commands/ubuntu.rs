//! Implementation of the `qtnative ubuntu` command.
//!
//! Responsibility: translate CLI arguments into generator options, run the
//! generator phases, and display results. No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use qtnative_adapters::{LocalFilesystem, SimpleRenderer, builtin_templates::resolve_assets};
use qtnative_core::{application::GeneratorService, domain::GeneratorOptions, error::CoreError};

use crate::{
    cli::UbuntuArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// JSON shape of a `--dry-run`.
#[derive(Debug, Serialize)]
struct Plan {
    root: PathBuf,
    files: Vec<PathBuf>,
    directories: Vec<PathBuf>,
}

/// Execute the `qtnative ubuntu` command.
///
/// 1. `initialize`: validate package and name before touching the disk
/// 2. Resolve the destination root and template source
/// 3. `write` (or render only for `--dry-run`)
/// 4. `end`: print how to run the app
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: UbuntuArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = GeneratorOptions::with_suffix(
        &args.name,
        args.package,
        &config.generator.package_suffix,
    );
    options.validate().map_err(CoreError::from)?;

    let destination = resolve_destination(args.destination)?;
    debug!(package = %options.package(), root = %destination.display(), "Options resolved");

    let templates_dir = args.templates_dir.or(config.templates.local_path);
    let assets = resolve_assets(templates_dir.as_deref()).with_cli_context(|| "templates")?;

    let generator = GeneratorService::ubuntu(
        assets,
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    generator
        .initialize(&options)
        .with_cli_context(|| "validating options")?;

    if args.dry_run {
        let structure = generator
            .plan(&options, &destination)
            .with_cli_context(|| "rendering templates")?;

        let plan = Plan {
            root: destination.clone(),
            files: structure.files().iter().map(|f| f.path.clone()).collect(),
            directories: structure.directories().to_vec(),
        };

        if output.is_json() {
            output.json(&plan)?;
        } else {
            output.info(&format!(
                "Dry run: would write {} files under {}",
                plan.files.len(),
                destination.display()
            ))?;
            for path in plan.directories.iter().chain(&plan.files) {
                output.print(&format!("  {}", path.display()))?;
            }
        }
        return Ok(());
    }

    info!(root = %destination.display(), "Generation started");
    let summary = generator
        .write(&options, &destination)
        .with_cli_context(|| "writing files")?;

    if output.is_json() {
        output.json(&summary)?;
        return Ok(());
    }

    output.success(&format!(
        "Ubuntu target for '{}' written ({} files, package {})",
        summary.params.name,
        summary.files.len(),
        summary.params.package,
    ))?;
    output.print("")?;
    output.next_steps(&generator.end(&destination))?;

    Ok(())
}

/// The project root, defaulting to the current directory. Must exist.
fn resolve_destination(destination: Option<PathBuf>) -> CliResult<PathBuf> {
    let path = match destination {
        Some(path) => path,
        None => std::env::current_dir().with_cli_context(|| "reading current directory")?,
    };

    if !path.is_dir() {
        return Err(CliError::DestinationNotFound { path });
    }
    Ok(path)
}
