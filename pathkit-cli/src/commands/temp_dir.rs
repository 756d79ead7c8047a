//! Temp-dir command implementation.

use crate::error::CliError;
use crate::utils::{host_filesystem, GlobalOptions};
use clap::Args;

/// Print the directory for temporary files.
#[derive(Args)]
pub struct TempDirCommand {}

impl TempDirCommand {
    /// Execute the temp-dir command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", host_filesystem().temp_directory_path()?);
        Ok(())
    }
}
