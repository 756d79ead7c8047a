//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, CopyConfig, DirectoryConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigMerger, StyleSetting};
///
/// let low = Config { style: Some(StyleSetting::Posix), ..Default::default() };
/// let high = Config { style: Some(StyleSetting::Windows), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.style, Some(StyleSetting::Windows));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Nested sections: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.style.is_some() {
            target.style = source.style;
        }

        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }

        if let Some(ref source_copy) = source.copy {
            target.copy = Some(match &target.copy {
                Some(target_copy) => Self::merge_copy(target_copy, source_copy),
                None => *source_copy,
            });
        }

        if let Some(ref source_dir) = source.directory {
            target.directory = Some(match &target.directory {
                Some(target_dir) => Self::merge_directory(target_dir, source_dir),
                None => *source_dir,
            });
        }
    }

    fn merge_copy(target: &CopyConfig, source: &CopyConfig) -> CopyConfig {
        CopyConfig {
            existing: source.existing.or(target.existing),
            symlinks: source.symlinks.or(target.symlinks),
            form: source.form.or(target.form),
            recursive: source.recursive.or(target.recursive),
        }
    }

    fn merge_directory(target: &DirectoryConfig, source: &DirectoryConfig) -> DirectoryConfig {
        DirectoryConfig {
            follow_directory_symlink: source
                .follow_directory_symlink
                .or(target.follow_directory_symlink),
            skip_permission_denied: source
                .skip_permission_denied
                .or(target.skip_permission_denied),
        }
    }
}
