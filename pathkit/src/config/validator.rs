//! Configuration validation.
//!
//! Keywords are checked while parsing; this module catches values that
//! parse but cannot work together.

use crate::config::schema::{Config, CopyConfig};
use crate::error::{Error, Result};
use crate::fs::options::{CopyForm, SymlinkPolicy};
use crate::logging::LogLevel;

/// Validates configuration values and their combinations.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }

        if let Some(ref copy) = config.copy {
            Self::validate_copy(copy)?;
        }

        Ok(())
    }

    fn validate_copy(copy: &CopyConfig) -> Result<()> {
        let form = copy.form.unwrap_or_default();

        // Directories cannot be symlinked, so a recursive copy in this form
        // fails on its first subdirectory.
        if form == CopyForm::CreateSymlinks && copy.recursive == Some(true) {
            return Err(Error::Validation {
                field: "copy.form".into(),
                message: "create-symlinks cannot be combined with recursive copies".into(),
            });
        }

        if form == CopyForm::CreateHardLinks && copy.symlinks == Some(SymlinkPolicy::Copy) {
            return Err(Error::Validation {
                field: "copy.symlinks".into(),
                message: "symlinks cannot be copied when creating hard links".into(),
            });
        }

        Ok(())
    }
}
