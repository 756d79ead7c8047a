//! Normalize command implementation.

use crate::error::CliError;
use crate::utils::{lexical_style, GlobalOptions};
use clap::Args;
use pathkit::FsPath;
use std::io::Write;

/// Lexically normalize paths.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl NormalizeCommand {
    /// Execute the normalize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let style = lexical_style(global)?;
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        for path in self.paths {
            let normal = FsPath::with_style(path, style).lexically_normal();
            writeln!(handle, "{normal}")?;
        }

        Ok(())
    }
}
