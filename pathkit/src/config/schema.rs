//! Configuration schema definitions.
//!
//! Every field is optional so that files, environment variables and
//! programmatic overrides can each set only what they care about.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::fs::options::{CopyForm, CopyOptions, DirectoryOptions, ExistingPolicy, SymlinkPolicy};
use crate::path::Style;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, CopyConfig, StyleSetting};
/// use pathkit::{CopyOptions, ExistingPolicy};
///
/// let config = Config {
///     style: Some(StyleSetting::Posix),
///     copy: Some(CopyConfig {
///         existing: Some(ExistingPolicy::Update),
///         recursive: Some(true),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// let opts = CopyOptions::from(&config);
/// assert!(opts.recursive);
/// assert_eq!(opts.existing, ExistingPolicy::Update);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Grammar used for lexical path commands.
    pub style: Option<StyleSetting>,

    /// Defaults for copy operations.
    pub copy: Option<CopyConfig>,

    /// Defaults for directory iteration.
    pub directory: Option<DirectoryConfig>,

    /// Diagnostic verbosity: `quiet`, `normal` or `verbose`.
    pub log_mode: Option<String>,
}

impl Config {
    /// The configured path style, or the host's when unset.
    #[must_use]
    pub fn style(&self) -> Style {
        self.style.map_or_else(Style::native, StyleSetting::resolve)
    }
}

/// Path style selection, with `native` meaning the host's style.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StyleSetting {
    /// Whatever the host uses.
    Native,
    /// POSIX grammar.
    Posix,
    /// Windows grammar.
    Windows,
}

impl StyleSetting {
    /// The concrete style this setting stands for.
    #[must_use]
    pub fn resolve(self) -> Style {
        match self {
            Self::Native => Style::native(),
            Self::Posix => Style::Posix,
            Self::Windows => Style::Windows,
        }
    }
}

impl fmt::Display for StyleSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for StyleSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "posix" | "unix" => Ok(Self::Posix),
            "windows" | "win" => Ok(Self::Windows),
            _ => Err(format!("invalid style: {s}")),
        }
    }
}

/// Copy defaults.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CopyConfig {
    /// What to do with an existing destination.
    pub existing: Option<ExistingPolicy>,

    /// How to treat symlinks.
    pub symlinks: Option<SymlinkPolicy>,

    /// What to produce at the destination.
    pub form: Option<CopyForm>,

    /// Descend into directories.
    pub recursive: Option<bool>,
}

/// Directory iteration defaults.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DirectoryConfig {
    /// Descend through symlinks to directories.
    pub follow_directory_symlink: Option<bool>,

    /// Treat unreadable directories as empty.
    pub skip_permission_denied: Option<bool>,
}

impl From<&CopyConfig> for CopyOptions {
    fn from(config: &CopyConfig) -> Self {
        Self {
            existing: config.existing.unwrap_or_default(),
            symlinks: config.symlinks.unwrap_or_default(),
            form: config.form.unwrap_or_default(),
            recursive: config.recursive.unwrap_or(false),
        }
    }
}

impl From<&Config> for CopyOptions {
    fn from(config: &Config) -> Self {
        config
            .copy
            .as_ref()
            .map_or_else(Self::default, Self::from)
    }
}

impl From<&DirectoryConfig> for DirectoryOptions {
    fn from(config: &DirectoryConfig) -> Self {
        Self {
            follow_directory_symlink: config.follow_directory_symlink.unwrap_or(false),
            skip_permission_denied: config.skip_permission_denied.unwrap_or(false),
        }
    }
}

impl From<&Config> for DirectoryOptions {
    fn from(config: &Config) -> Self {
        config
            .directory
            .as_ref()
            .map_or_else(Self::default, Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.copy.is_none());
        assert_eq!(config.style(), Style::native());
        assert_eq!(CopyOptions::from(&config), CopyOptions::default());
        assert_eq!(DirectoryOptions::from(&config), DirectoryOptions::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r"
style: windows
copy:
  existing: overwrite
  symlinks: copy
  form: directories-only
  recursive: true
directory:
  follow_directory_symlink: true
  skip_permission_denied: false
log_mode: verbose
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.style(), Style::Windows);
        let copy = CopyOptions::from(&config);
        assert_eq!(copy.existing, ExistingPolicy::Overwrite);
        assert_eq!(copy.symlinks, SymlinkPolicy::Copy);
        assert_eq!(copy.form, CopyForm::DirectoriesOnly);
        assert!(copy.recursive);
        assert!(DirectoryOptions::from(&config).follow_directory_symlink);
        assert_eq!(config.log_mode.as_deref(), Some("verbose"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(serde_yaml::from_str::<Config>("colour: blue\n").is_err());
        assert!(serde_yaml::from_str::<Config>("copy:\n  deep: true\n").is_err());
    }

    #[test]
    fn test_invalid_keyword_rejected() {
        assert!(serde_yaml::from_str::<Config>("copy:\n  existing: maybe\n").is_err());
        assert!(serde_yaml::from_str::<Config>("style: vms\n").is_err());
    }

    #[test]
    fn test_style_setting_from_str() {
        assert_eq!("POSIX".parse::<StyleSetting>().unwrap(), StyleSetting::Posix);
        assert_eq!("native".parse::<StyleSetting>().unwrap().resolve(), Style::native());
        assert!("dos".parse::<StyleSetting>().is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = Config {
            style: Some(StyleSetting::Posix),
            directory: Some(DirectoryConfig {
                skip_permission_denied: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }
}
