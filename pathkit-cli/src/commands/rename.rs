//! Rename command implementation.

use crate::error::CliError;
use crate::utils::{host_filesystem, host_path, GlobalOptions};
use clap::Args;

/// Rename or move an entry, replacing a compatible destination.
#[derive(Args)]
pub struct RenameCommand {
    /// Entry to move
    #[arg(value_name = "FROM")]
    pub from: String,

    /// New location
    #[arg(value_name = "TO")]
    pub to: String,
}

impl RenameCommand {
    /// Execute the rename command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        host_filesystem().rename(&host_path(&self.from), &host_path(&self.to))?;
        Ok(())
    }
}
