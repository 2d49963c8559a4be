//! Command-line surface. Parsing only; handlers live in `crate::commands`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "qtnative",
    version,
    author,
    about = "Generate the Ubuntu target of a React Native app",
    long_about = "Writes ubuntu/ (CMake build, click manifest, desktop entry, \
                  AppArmor profile and icon) into an existing React Native project.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the Ubuntu click-package target.
    #[command(after_help = "EXAMPLES:\n  \
        qtnative ubuntu MyApp                      # package myapp.dev\n  \
        qtnative ubuntu MyApp -p com.example.myapp\n  \
        qtnative ubuntu MyApp -d ../MyApp --dry-run")]
    Ubuntu(UbuntuArgs),

    /// Write a configuration file with the defaults.
    Init(InitArgs),

    /// Print a shell completion script.
    #[command(after_help = "EXAMPLE:\n  \
        qtnative completions bash > ~/.local/share/bash-completion/completions/qtnative")]
    Completions(CompletionsArgs),

    /// Show configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Args)]
pub struct UbuntuArgs {
    /// Application name; used in file names and substituted as {{NAME}}.
    pub name: String,

    /// Reverse-domain package, e.g. appname.developer [default: <name>.dev]
    #[arg(short, long, value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Project root that receives ubuntu/ [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Read templates from DIR instead of the built-in set.
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// List what would be written and stop.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Replace an existing file.
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value by dotted key, e.g. generator.package_suffix.
    Get { key: String },
    /// Print every value.
    List,
    /// Print the config file location.
    Path,
}
