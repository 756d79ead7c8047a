//! Canonical command implementation.

use crate::error::CliError;
use crate::utils::{host_filesystem, host_path, GlobalOptions};
use clap::Args;
use log::debug;

/// Resolve a path to its canonical form.
#[derive(Args)]
pub struct CanonicalCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Allow a missing tail, resolving only the existing prefix
    #[arg(long)]
    pub weak: bool,
}

impl CanonicalCommand {
    /// Execute the canonical command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let fs = host_filesystem();
        let path = host_path(&self.path);
        let resolved = if self.weak {
            fs.weakly_canonical(&path)?
        } else {
            fs.canonical(&path)?
        };
        debug!("resolved {path} to {resolved}");
        println!("{resolved}");
        Ok(())
    }
}
