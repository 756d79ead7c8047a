//! Decompose command implementation.
//!
//! Prints every decomposition of a path, in human-readable or JSON form.

use crate::error::CliError;
use crate::utils::{lexical_style, GlobalOptions};
use clap::{Args, ValueEnum};
use pathkit::FsPath;
use serde::Serialize;
use std::io::Write;

/// Show every part of a path.
#[derive(Args)]
pub struct DecomposeCommand {
    /// Path to decompose
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: DecomposeFormat,
}

/// Output format for the decompose command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DecomposeFormat {
    /// One `name: value` line per part
    Human,
    /// A JSON object
    Json,
}

#[derive(Serialize)]
struct Parts {
    path: String,
    style: String,
    root_name: String,
    root_directory: String,
    root_path: String,
    relative_path: String,
    parent_path: String,
    filename: String,
    stem: String,
    extension: String,
    is_absolute: bool,
}

impl Parts {
    fn of(p: &FsPath) -> Self {
        Self {
            path: p.to_string(),
            style: p.style().to_string(),
            root_name: p.root_name().into_string(),
            root_directory: p.root_directory().into_string(),
            root_path: p.root_path().into_string(),
            relative_path: p.relative_path().into_string(),
            parent_path: p.parent_path().into_string(),
            filename: p.filename().into_string(),
            stem: p.stem().into_string(),
            extension: p.extension().into_string(),
            is_absolute: p.is_absolute(),
        }
    }
}

impl DecomposeCommand {
    /// Execute the decompose command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = FsPath::with_style(self.path, lexical_style(global)?);
        let parts = Parts::of(&path);

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            DecomposeFormat::Human => {
                for (name, value) in [
                    ("root-name", &parts.root_name),
                    ("root-directory", &parts.root_directory),
                    ("root-path", &parts.root_path),
                    ("relative-path", &parts.relative_path),
                    ("parent-path", &parts.parent_path),
                    ("filename", &parts.filename),
                    ("stem", &parts.stem),
                    ("extension", &parts.extension),
                ] {
                    writeln!(handle, "{name}: {value}")?;
                }
                writeln!(handle, "absolute: {}", parts.is_absolute)?;
            }
            DecomposeFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &parts)?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}
