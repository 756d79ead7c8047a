//! The per-entry primitive layer that filesystem operations are built on.
//!
//! [`FsProvider`] is the complete set of OS interactions the operation layer
//! performs. Two backends ship with the crate:
//!
//! - [`OsProvider`] talks to the host through `std::fs`, `filetime` and, on
//!   Unix, `statvfs`.
//! - [`MemoryProvider`] keeps a whole tree in memory, in either path style,
//!   so Windows-style behavior can be exercised on any host.
//!
//! Providers report failures as plain [`std::io::Error`]s; the operation layer
//! attaches the path and classifies them into the system error domain.

#![cfg_attr(test, allow(missing_docs))]

use std::io;

use crate::fs::types::{FileId, FileStatus, FileTime, Perms, SpaceInfo};
use crate::path::{FsPath, Style};

pub mod memory;
pub mod os;

pub use memory::MemoryProvider;
pub use os::OsProvider;

/// Filesystem primitives.
///
/// Paths handed to a provider are already non-empty and in the provider's
/// [`Style`]. Relative paths resolve against the provider's current
/// directory.
///
/// # Examples
///
/// ```
/// use pathkit::fs::{FsProvider, MemoryProvider};
/// use pathkit::{FsPath, Style};
///
/// let provider = MemoryProvider::new(Style::Posix);
/// provider.create_dir(&FsPath::posix("/data"), None).unwrap();
/// assert!(provider.status(&FsPath::posix("/data")).unwrap().is_directory());
/// assert!(!provider.status(&FsPath::posix("/nope")).unwrap().exists());
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait FsProvider: Send + Sync {
    /// The path grammar this provider speaks.
    fn style(&self) -> Style;

    /// Status of `p`, following symlinks. A missing entry is reported as
    /// [`FileStatus::not_found`], not as an error.
    ///
    /// # Errors
    ///
    /// Any failure other than nonexistence.
    fn status(&self, p: &FsPath) -> io::Result<FileStatus>;

    /// Status of `p` without following a final symlink.
    ///
    /// # Errors
    ///
    /// Any failure other than nonexistence.
    fn symlink_status(&self, p: &FsPath) -> io::Result<FileStatus>;

    /// Durable identity of the entry `p` resolves to.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be resolved.
    fn file_id(&self, p: &FsPath) -> io::Result<FileId>;

    /// Size in bytes of the entry `p` resolves to.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be resolved.
    fn file_size(&self, p: &FsPath) -> io::Result<u64>;

    /// Number of hard links to the entry `p` resolves to.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be resolved.
    fn hard_link_count(&self, p: &FsPath) -> io::Result<u64>;

    /// Names of the entries in directory `p`, without `.` and `..`.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [`io::ErrorKind::PermissionDenied`] for an
    /// unreadable directory, and other errors as they occur.
    fn read_dir(&self, p: &FsPath) -> io::Result<Vec<String>>;

    /// Absolute form of `p` with every symlink resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if any component cannot be resolved.
    fn real_path(&self, p: &FsPath) -> io::Result<FsPath>;

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined.
    fn current_dir(&self) -> io::Result<FsPath>;

    /// Changes the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not an accessible directory.
    fn set_current_dir(&self, p: &FsPath) -> io::Result<()>;

    /// Creates one directory, with `perms` or the backend default.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` exists or its parent is missing.
    fn create_dir(&self, p: &FsPath, perms: Option<Perms>) -> io::Result<()>;

    /// Removes an empty directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not an empty directory.
    fn remove_dir(&self, p: &FsPath) -> io::Result<()>;

    /// Removes a non-directory entry.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is missing or is a directory.
    fn remove_file(&self, p: &FsPath) -> io::Result<()>;

    /// Removes a symlink, whatever it points to.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` cannot be removed.
    fn remove_symlink(&self, p: &FsPath) -> io::Result<()>;

    /// Creates `link` as another name for `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `link` exists or `target` cannot be linked.
    fn hard_link(&self, target: &FsPath, link: &FsPath) -> io::Result<()>;

    /// The stored target of symlink `p`.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not a symlink.
    fn read_link(&self, p: &FsPath) -> io::Result<FsPath>;

    /// Creates symlink `link` pointing at `target`. `directory` marks a link
    /// to a directory on backends that distinguish the two.
    ///
    /// # Errors
    ///
    /// Returns an error if `link` exists or its parent is missing.
    fn symlink(&self, target: &FsPath, link: &FsPath, directory: bool) -> io::Result<()>;

    /// Modification time of the entry `p` resolves to.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be resolved.
    fn last_write_time(&self, p: &FsPath) -> io::Result<FileTime>;

    /// Sets the modification time of the entry `p` resolves to.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be resolved or updated.
    fn set_last_write_time(&self, p: &FsPath, time: FileTime) -> io::Result<()>;

    /// Sets permission bits, on the symlink itself when `follow` is false.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::Unsupported`] when the backend cannot change
    /// a symlink's own bits, and other errors as they occur.
    fn set_permissions(&self, p: &FsPath, perms: Perms, follow: bool) -> io::Result<()>;

    /// Capacity of the filesystem holding `p`.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` cannot be resolved.
    fn space(&self, p: &FsPath) -> io::Result<SpaceInfo>;

    /// Copies the bytes of regular file `from` to `to`, creating or
    /// truncating `to` and giving it `from`'s permission bits.
    ///
    /// # Errors
    ///
    /// Returns an error if either side cannot be opened.
    fn copy_contents(&self, from: &FsPath, to: &FsPath) -> io::Result<()>;

    /// Truncates or zero-extends regular file `p` to `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` cannot be opened for writing.
    fn resize(&self, p: &FsPath, size: u64) -> io::Result<()>;

    /// Moves `from` to `to`, replacing a compatible existing `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the move is impossible.
    fn rename(&self, from: &FsPath, to: &FsPath) -> io::Result<()>;

    /// A directory suitable for temporary files.
    ///
    /// # Errors
    ///
    /// Returns an error if no location can be determined.
    fn temp_dir(&self) -> io::Result<FsPath>;
}
