//! Filesystem operations over a pluggable provider.
//!
//! [`FileSystem`] implements the decision logic of every operation (copy
//! policies, recursive removal, directory materialization, canonicalization)
//! on top of the primitives of an [`FsProvider`]. The layer keeps no state of
//! its own: every observable effect is the provider's.
//!
//! # Examples
//!
//! ```
//! use pathkit::fs::{FileSystem, MemoryProvider};
//! use pathkit::{FsPath, Style};
//!
//! let fs = FileSystem::new(MemoryProvider::new(Style::Posix));
//! fs.create_directories(&FsPath::posix("/srv/app/logs")).unwrap();
//! assert!(fs.is_directory(&FsPath::posix("/srv/app")).unwrap());
//! assert_eq!(fs.remove_all(&FsPath::posix("/srv")).unwrap(), 3);
//! ```

use std::slice;
use std::vec;

use crate::path::FsPath;

pub mod options;
mod ops;
pub mod provider;
pub mod types;

pub use ops::FileSystem;
pub use options::{
    CopyForm, CopyOptions, DirectoryOptions, ExistingPolicy, PermMode, PermOptions, SymlinkPolicy,
};
pub use provider::{FsProvider, MemoryProvider, OsProvider};
pub use types::{FileId, FileStatus, FileTime, FileType, Perms, SpaceInfo};

/// Eagerly materialized directory listing.
///
/// Entries are full paths, formed by appending each name to the directory
/// that was listed. Order follows the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirEntries {
    entries: Vec<FsPath>,
}

impl DirEntries {
    pub(crate) fn new(entries: Vec<FsPath>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the listing is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> slice::Iter<'_, FsPath> {
        self.entries.iter()
    }

    /// The entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[FsPath] {
        &self.entries
    }
}

impl IntoIterator for DirEntries {
    type Item = FsPath;
    type IntoIter = vec::IntoIter<FsPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a DirEntries {
    type Item = &'a FsPath;
    type IntoIter = slice::Iter<'a, FsPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<DirEntries> for Vec<FsPath> {
    fn from(entries: DirEntries) -> Self {
        entries.entries
    }
}
