//! Option records for copy, directory iteration and permission changes.
//!
//! Each independent decision is its own field, so conflicting flag
//! combinations cannot be expressed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do when the destination of a copy already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExistingPolicy {
    /// Fail with `FileExists`.
    #[default]
    Error,
    /// Leave the destination alone.
    Skip,
    /// Replace the destination.
    Overwrite,
    /// Replace the destination only if the source is newer.
    Update,
}

/// How a copy treats symbolic links it meets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymlinkPolicy {
    /// Copy what the link points to.
    #[default]
    Follow,
    /// Recreate the link itself.
    Copy,
    /// Ignore links.
    Skip,
}

/// What a copy produces at the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyForm {
    /// Copy file contents.
    #[default]
    Copy,
    /// Recreate the directory structure only.
    DirectoriesOnly,
    /// Create symlinks to the source files.
    CreateSymlinks,
    /// Create hard links to the source files.
    CreateHardLinks,
}

macro_rules! keyword_enum {
    ($ty:ty, $what:literal, { $($text:literal => $variant:path),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($text => Ok($variant),)+
                    _ => Err(format!(concat!("invalid ", $what, ": {}"), s)),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($variant => f.write_str($text),)+
                }
            }
        }
    };
}

keyword_enum!(ExistingPolicy, "existing policy", {
    "error" => ExistingPolicy::Error,
    "skip" => ExistingPolicy::Skip,
    "overwrite" => ExistingPolicy::Overwrite,
    "update" => ExistingPolicy::Update,
});

keyword_enum!(SymlinkPolicy, "symlink policy", {
    "follow" => SymlinkPolicy::Follow,
    "copy" => SymlinkPolicy::Copy,
    "skip" => SymlinkPolicy::Skip,
});

keyword_enum!(CopyForm, "copy form", {
    "copy" => CopyForm::Copy,
    "directories-only" => CopyForm::DirectoriesOnly,
    "create-symlinks" => CopyForm::CreateSymlinks,
    "create-hard-links" => CopyForm::CreateHardLinks,
});

/// Options for `copy` and `copy_file`.
///
/// # Examples
///
/// ```
/// use pathkit::{CopyOptions, ExistingPolicy};
///
/// let opts = CopyOptions::default()
///     .recursive(true)
///     .existing(ExistingPolicy::Update);
/// assert!(opts.recursive);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CopyOptions {
    /// Destination-exists policy.
    pub existing: ExistingPolicy,
    /// Symlink policy.
    pub symlinks: SymlinkPolicy,
    /// Output form.
    pub form: CopyForm,
    /// Descend into directories.
    pub recursive: bool,
}

impl CopyOptions {
    /// Sets the destination-exists policy.
    #[must_use]
    pub const fn existing(mut self, existing: ExistingPolicy) -> Self {
        self.existing = existing;
        self
    }

    /// Sets the symlink policy.
    #[must_use]
    pub const fn symlinks(mut self, symlinks: SymlinkPolicy) -> Self {
        self.symlinks = symlinks;
        self
    }

    /// Sets the output form.
    #[must_use]
    pub const fn form(mut self, form: CopyForm) -> Self {
        self.form = form;
        self
    }

    /// Sets recursion.
    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

/// Options for directory iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirectoryOptions {
    /// Descend through symlinks that resolve to directories.
    pub follow_directory_symlink: bool,
    /// Treat unreadable directories as empty.
    pub skip_permission_denied: bool,
}

/// How `permissions` combines the given bits with the current ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PermMode {
    /// Set exactly the given bits.
    #[default]
    Replace,
    /// Set the given bits in addition to the current ones.
    Add,
    /// Clear the given bits.
    Remove,
}

/// Options for `permissions`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PermOptions {
    /// How to combine bits.
    pub mode: PermMode,
    /// Act on a symlink itself rather than its target.
    pub nofollow: bool,
}

impl PermOptions {
    /// Options with the given combination mode, following symlinks.
    #[must_use]
    pub const fn new(mode: PermMode) -> Self {
        Self {
            mode,
            nofollow: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = CopyOptions::default();
        assert_eq!(opts.existing, ExistingPolicy::Error);
        assert_eq!(opts.symlinks, SymlinkPolicy::Follow);
        assert_eq!(opts.form, CopyForm::Copy);
        assert!(!opts.recursive);
    }

    #[test]
    fn test_keywords_round_trip() {
        for policy in [
            ExistingPolicy::Error,
            ExistingPolicy::Skip,
            ExistingPolicy::Overwrite,
            ExistingPolicy::Update,
        ] {
            assert_eq!(policy.to_string().parse::<ExistingPolicy>().unwrap(), policy);
        }
        assert_eq!(
            "Create-Hard-Links".parse::<CopyForm>().unwrap(),
            CopyForm::CreateHardLinks
        );
        assert!("sometimes".parse::<SymlinkPolicy>().is_err());
    }

    #[test]
    fn test_serde_keywords() {
        let form: CopyForm = serde_yaml::from_str("directories-only").unwrap();
        assert_eq!(form, CopyForm::DirectoriesOnly);
    }
}
