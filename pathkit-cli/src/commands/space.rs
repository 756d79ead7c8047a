//! Space command implementation.

use crate::error::CliError;
use crate::utils::{host_filesystem, host_path, GlobalOptions};
use clap::Args;

/// Show space information for the filesystem holding a path.
#[derive(Args)]
pub struct SpaceCommand {
    /// Any path on the filesystem of interest
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: String,
}

impl SpaceCommand {
    /// Execute the space command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let info = host_filesystem().space(&host_path(&self.path))?;
        println!("capacity: {}", info.capacity);
        println!("free: {}", info.free);
        println!("available: {}", info.available);
        Ok(())
    }
}
