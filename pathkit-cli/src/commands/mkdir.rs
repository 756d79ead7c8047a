//! Mkdir command implementation.

use crate::error::CliError;
use crate::utils::{host_filesystem, host_path, GlobalOptions};
use clap::Args;
use log::info;

/// Create directories.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directories to create
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Create missing parents, and accept directories that already exist
    #[arg(long, short = 'p')]
    pub parents: bool,
}

impl MkdirCommand {
    /// Execute the mkdir command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let fs = host_filesystem();

        for arg in &self.paths {
            let path = host_path(arg);
            if self.parents {
                if fs.create_directories(&path)? {
                    info!("created {path}");
                }
                continue;
            }
            if !fs.create_directory(&path)? {
                return Err(CliError::SemanticFailure(format!(
                    "Directory already exists: {path}"
                )));
            }
            info!("created {path}");
        }

        Ok(())
    }
}
