//! `qtnative init [--force]`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Write the default configuration to `config_file`, or to the platform
/// location. An existing file is kept unless `--force` is given.
pub fn execute(args: InitArgs, config_file: Option<&Path>, output: OutputManager) -> CliResult<()> {
    let path = config_file.map_or_else(AppConfig::config_path, Path::to_path_buf);

    if path.exists() && !args.force {
        output.warning(&format!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        ))?;
        return Ok(());
    }

    write_defaults(&path)?;
    output.success(&format!("Wrote default configuration to {}", path.display()))?;
    Ok(())
}

fn write_defaults(path: &Path) -> CliResult<()> {
    let contents = AppConfig::default().to_toml()?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_cli_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(path, contents).with_cli_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), "configuration written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_written_and_parse_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/qtnative.toml");

        write_defaults(&path).unwrap();

        let parsed: AppConfig = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
