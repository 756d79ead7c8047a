//! Environment variable handling for configuration overrides.
//!
//! `PATHKIT_*` variables override values from configuration files.

use std::env;
use std::str::FromStr;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};

/// Path style: `native`, `posix` or `windows`.
pub const STYLE_ENV: &str = "PATHKIT_STYLE";
/// Copy destination policy.
pub const COPY_EXISTING_ENV: &str = "PATHKIT_COPY_EXISTING";
/// Copy symlink policy.
pub const COPY_SYMLINKS_ENV: &str = "PATHKIT_COPY_SYMLINKS";
/// Copy recursion.
pub const COPY_RECURSIVE_ENV: &str = "PATHKIT_COPY_RECURSIVE";
/// Descend through directory symlinks while iterating.
pub const FOLLOW_SYMLINKS_ENV: &str = "PATHKIT_FOLLOW_SYMLINKS";
/// Skip unreadable directories while iterating.
pub const SKIP_PERMISSION_DENIED_ENV: &str = "PATHKIT_SKIP_PERMISSION_DENIED";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(STYLE_ENV) {
            config.style = Some(Self::parse_keyword(STYLE_ENV, &val)?);
        }

        if let Ok(val) = env::var(COPY_EXISTING_ENV) {
            let copy = config.copy.get_or_insert_with(Default::default);
            copy.existing = Some(Self::parse_keyword(COPY_EXISTING_ENV, &val)?);
        }

        if let Ok(val) = env::var(COPY_SYMLINKS_ENV) {
            let copy = config.copy.get_or_insert_with(Default::default);
            copy.symlinks = Some(Self::parse_keyword(COPY_SYMLINKS_ENV, &val)?);
        }

        if let Ok(val) = env::var(COPY_RECURSIVE_ENV) {
            let copy = config.copy.get_or_insert_with(Default::default);
            copy.recursive = Some(Self::parse_bool(COPY_RECURSIVE_ENV, &val)?);
        }

        if let Ok(val) = env::var(FOLLOW_SYMLINKS_ENV) {
            let directory = config.directory.get_or_insert_with(Default::default);
            directory.follow_directory_symlink = Some(Self::parse_bool(FOLLOW_SYMLINKS_ENV, &val)?);
        }

        if let Ok(val) = env::var(SKIP_PERMISSION_DENIED_ENV) {
            let directory = config.directory.get_or_insert_with(Default::default);
            directory.skip_permission_denied =
                Some(Self::parse_bool(SKIP_PERMISSION_DENIED_ENV, &val)?);
        }

        if let Ok(val) = env::var(LOG_MODE_ENV) {
            let level = LogLevel::parse(&val).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?;
            config.log_mode = Some(level.to_string());
        }

        Ok(())
    }

    /// Parse boolean from string, accepting common variants.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_keyword<T>(field: &str, s: &str) -> Result<T>
    where
        T: FromStr<Err = String>,
    {
        s.trim().parse().map_err(|message| Error::Validation {
            field: field.into(),
            message,
        })
    }
}


#[cfg(test)]
#[allow(unused_doc_comments)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Property: boolean parsing is case-insensitive
    proptest! {
        #[test]
        fn prop_bool_parsing_case_insensitive(use_uppercase in any::<bool>()) {
            for (variant, expected) in [
                ("true", true), ("1", true), ("yes", true), ("on", true),
                ("false", false), ("0", false), ("no", false), ("off", false),
            ] {
                let input = if use_uppercase {
                    variant.to_uppercase()
                } else {
                    variant.to_string()
                };
                let parsed = EnvironmentConfig::parse_bool("test", &input);
                prop_assert_eq!(parsed.ok(), Some(expected), "{}", input);
            }
        }
    }

    /// Property: anything outside the accepted words is rejected
    proptest! {
        #[test]
        fn prop_bool_parsing_rejects_invalid(
            s in "[a-z]{2,10}".prop_filter("Not a valid bool string", |s| {
                !matches!(s.as_str(), "true" | "false" | "yes" | "no" | "on" | "off")
            })
        ) {
            prop_assert!(EnvironmentConfig::parse_bool("test", &s).is_err());
        }
    }
}
