//! Command to validate a pathkit configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathkit::config::{Config, ConfigLoader, ConfigValidator};
use pathkit::{CopyOptions, DirectoryOptions};
use std::path::PathBuf;

/// Validate a pathkit configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    ///
    /// A valid file is followed by the operation defaults it produces on its
    /// own, without other sources merged in.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = match ConfigLoader::load_file(&self.config_path) {
            Ok(config) => config,
            Err(e) if e.is_not_found() => {
                return Err(CliError::InvalidArguments(format!(
                    "File not found: {}",
                    self.config_path.display()
                )));
            }
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        if let Err(e) = ConfigValidator::validate(&config) {
            eprintln!("Validation error: {e}");
            return Err(CliError::SemanticFailure(
                "Configuration validation failed".to_string(),
            ));
        }

        println!("Configuration is valid");
        if !global.quiet {
            print_effective(&config);
        }
        Ok(())
    }
}

fn print_effective(config: &Config) {
    let copy = CopyOptions::from(config);
    let directory = DirectoryOptions::from(config);

    println!("  style: {}", config.style());
    println!(
        "  copy: existing={} symlinks={} form={} recursive={}",
        copy.existing, copy.symlinks, copy.form, copy.recursive
    );
    println!(
        "  directory: follow_directory_symlink={} skip_permission_denied={}",
        directory.follow_directory_symlink, directory.skip_permission_denied
    );
    if let Some(ref mode) = config.log_mode {
        println!("  log_mode: {mode}");
    }
}
