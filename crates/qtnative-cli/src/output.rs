//! User-facing output on stdout.
//!
//! Diagnostics go through `tracing` to stderr; this is only for results.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use qtnative_core::application::NextSteps;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Info,
}

impl Tone {
    fn marker(self) -> &'static str {
        match self {
            Tone::Success => "\u{2713}",
            Tone::Warning => "\u{26a0}",
            Tone::Info => "\u{2139}",
        }
    }

    fn paint(self, text: &str) -> String {
        match self {
            Tone::Success => text.green().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Info => text.blue().to_string(),
        }
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// `Auto` becomes `Human` on a terminal and `Plain` otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };
        let color =
            format == OutputFormat::Human && !args.no_color && !config.output.no_color;

        Self {
            format,
            quiet: args.quiet,
            color,
            term: Term::stdout(),
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.tagged(Tone::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.tagged(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.tagged(Tone::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.color {
            self.print(&text.cyan().bold().to_string())
        } else {
            self.print(text)
        }
    }

    /// Title in bold, then the instruction lines untouched.
    pub fn next_steps(&self, steps: &NextSteps) -> io::Result<()> {
        if self.color {
            self.print(&steps.title.bold().to_string())?;
        } else {
            self.print(&steps.title)?;
        }
        steps.lines.iter().try_for_each(|line| self.print(line))
    }

    /// Pretty JSON. Printed under `--quiet` too, since it is the result.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn uses_color(&self) -> bool {
        self.color
    }

    fn tagged(&self, tone: Tone, msg: &str) -> io::Result<()> {
        let line = if self.color {
            format!("{} {}", tone.paint(tone.marker()).bold(), tone.paint(msg))
        } else {
            format!("{} {msg}", tone.marker())
        };
        self.print(&line)
    }
}
