//! Remove command implementation.

use crate::error::CliError;
use crate::utils::{host_filesystem, host_path, GlobalOptions};
use clap::Args;
use log::info;

/// Remove files or directory trees.
#[derive(Args)]
pub struct RemoveCommand {
    /// Entries to remove
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Remove directories with everything below them, and print the count
    #[arg(long, short = 'a')]
    pub all: bool,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let fs = host_filesystem();

        if self.all {
            let mut total = 0;
            for arg in &self.paths {
                let path = host_path(arg);
                let removed = fs.remove_all(&path)?;
                info!("removed {removed} entries under {path}");
                total += removed;
            }
            println!("{total}");
            return Ok(());
        }

        for arg in &self.paths {
            let path = host_path(arg);
            if !fs.remove(&path)? {
                return Err(CliError::SemanticFailure(format!(
                    "No such file or directory: {path}"
                )));
            }
            info!("removed {path}");
        }
        Ok(())
    }
}
