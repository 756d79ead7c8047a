//! Copy command implementation.
//!
//! Options start from the configured copy defaults; flags override them.

use crate::error::CliError;
use crate::utils::{host_filesystem, host_path, load_configuration, GlobalOptions};
use clap::Args;
use log::info;
use pathkit::{CopyForm, CopyOptions, ExistingPolicy, SymlinkPolicy};

/// Copy files, directories and symlinks.
#[derive(Args)]
pub struct CopyCommand {
    /// Source entry
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Destination
    #[arg(value_name = "TO")]
    pub to: String,

    /// Copy directory contents recursively
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// What to do when the destination exists (error, skip, overwrite, update)
    #[arg(long, value_name = "POLICY")]
    pub existing: Option<ExistingPolicy>,

    /// How to treat symlinks (follow, copy, skip)
    #[arg(long, value_name = "POLICY")]
    pub symlinks: Option<SymlinkPolicy>,

    /// What to create (copy, directories-only, create-symlinks, create-hard-links)
    #[arg(long, value_name = "FORM")]
    pub form: Option<CopyForm>,
}

impl CopyCommand {
    /// The effective copy options.
    pub fn options(&self, defaults: CopyOptions) -> CopyOptions {
        let mut options = defaults;
        if self.recursive {
            options.recursive = true;
        }
        if let Some(existing) = self.existing {
            options.existing = existing;
        }
        if let Some(symlinks) = self.symlinks {
            options.symlinks = symlinks;
        }
        if let Some(form) = self.form {
            options.form = form;
        }
        options
    }

    /// Execute the copy command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let options = self.options(CopyOptions::from(&config));

        let from = host_path(&self.from);
        let to = host_path(&self.to);
        host_filesystem().copy(&from, &to, options)?;
        info!("copied {from} to {to}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> CopyCommand {
        CopyCommand {
            from: "a".into(),
            to: "b".into(),
            recursive: false,
            existing: None,
            symlinks: None,
            form: None,
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let defaults = CopyOptions::default()
            .existing(ExistingPolicy::Skip)
            .symlinks(SymlinkPolicy::Copy);
        let cmd = CopyCommand {
            recursive: true,
            existing: Some(ExistingPolicy::Update),
            ..command()
        };
        let options = cmd.options(defaults);
        assert!(options.recursive);
        assert_eq!(options.existing, ExistingPolicy::Update);
        assert_eq!(options.symlinks, SymlinkPolicy::Copy);
    }

    #[test]
    fn test_absent_flags_keep_defaults() {
        let defaults = CopyOptions::default().recursive(true);
        assert_eq!(command().options(defaults), defaults);
    }
}
