//! `qtnative config get|list|path`.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// `config_file` is the `--config` override, if any; `path` reports it in
/// preference to the platform location.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&Path>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => output.print(&lookup(&config, &key)?)?,
        ConfigCommands::List if output.is_json() => output.json(&config)?,
        ConfigCommands::List => {
            output.header("Effective configuration")?;
            output.print(config.to_toml()?.trim_end())?;
        }
        ConfigCommands::Path => {
            let path = config_file
                .map(Path::to_path_buf)
                .unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }
    Ok(())
}

fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    config
        .get(key)
        .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })
}
