//! Absolute command implementation.

use crate::error::CliError;
use crate::utils::{host_filesystem, host_path, GlobalOptions};
use clap::Args;

/// Make a path absolute against the current directory.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Path to make absolute
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl AbsoluteCommand {
    /// Execute the absolute command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let absolute = host_filesystem().absolute(&host_path(&self.path))?;
        println!("{absolute}");
        Ok(())
    }
}
