//! Assembles the effective configuration from every source.

use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builder for the merged, validated configuration.
///
/// Sources apply lowest precedence first: user file, project file,
/// environment, then the programmatic override.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigBuilder, StyleSetting};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         style: Some(StyleSetting::Windows),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.style, Some(StyleSetting::Windows));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that consults files and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not read configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `PATHKIT_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Start project file discovery at `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Look for the user file in `dir` instead of `~/.pathkit`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.user_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?;
            for source in &sources {
                debug!("loaded configuration from {}", source.path.display());
            }
            config = ConfigMerger::merge(sources);
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::STYLE_ENV;
    use crate::config::loader::PROJECT_CONFIG_FILE;
    use crate::config::schema::{CopyConfig, StyleSetting};
    use crate::fs::options::{CopyForm, ExistingPolicy};
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                copy: Some(CopyConfig {
                    form: Some(CopyForm::CreateSymlinks),
                    recursive: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_precedence_across_sources() {
        let temp = TempDir::new().unwrap();
        let user = temp.path().join("user");
        let project = temp.path().join("project");
        fs::create_dir_all(&user).unwrap();
        fs::create_dir_all(&project).unwrap();
        fs::write(
            user.join("config.yaml"),
            "style: windows\ncopy:\n  existing: skip\n  recursive: true\n",
        )
        .unwrap();
        fs::write(
            project.join(PROJECT_CONFIG_FILE),
            "copy:\n  existing: update\n",
        )
        .unwrap();

        env::set_var(STYLE_ENV, "posix");
        let config = ConfigBuilder::new()
            .with_working_dir(&project)
            .with_user_dir(&user)
            .build();
        env::remove_var(STYLE_ENV);

        let config = config.unwrap();
        assert_eq!(config.style, Some(StyleSetting::Posix));
        let copy = config.copy.unwrap();
        assert_eq!(copy.existing, Some(ExistingPolicy::Update));
        assert_eq!(copy.recursive, Some(true));
    }

    #[test]
    fn test_bad_file_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), "style: [\n").unwrap();
        let result = ConfigBuilder::new()
            .skip_env()
            .with_working_dir(temp.path())
            .with_user_dir(temp.path().join("nobody"))
            .build();
        assert!(result.is_err());
    }
}
