//! Components command implementation.

use crate::error::CliError;
use crate::utils::{lexical_style, GlobalOptions};
use clap::Args;
use pathkit::FsPath;
use std::io::Write;

/// List the elements of a path, one per line.
///
/// A trailing separator shows up as a final empty line.
#[derive(Args)]
pub struct ComponentsCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Walk from the last element to the first
    #[arg(long)]
    pub reverse: bool,
}

impl ComponentsCommand {
    /// Execute the components command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = FsPath::with_style(self.path, lexical_style(global)?);
        let elements: Vec<FsPath> = if self.reverse {
            path.iter().rev().collect()
        } else {
            path.iter().collect()
        };

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for element in elements {
            writeln!(handle, "{element}")?;
        }
        Ok(())
    }
}
