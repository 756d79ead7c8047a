//! Value types reported by filesystem queries.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bitflags::bitflags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// The type of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileType {
    /// No attempt was made to resolve the entry.
    None,
    /// The entry definitely does not exist.
    NotFound,
    /// A regular file.
    Regular,
    /// A directory.
    Directory,
    /// A symbolic link.
    Symlink,
    /// A block device.
    Block,
    /// A character device.
    Character,
    /// A named pipe.
    Fifo,
    /// A local socket.
    Socket,
    /// Exists, but the type could not be determined.
    Unknown,
    /// A Windows directory junction.
    Junction,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::NotFound => "not-found",
            Self::Regular => "regular",
            Self::Directory => "directory",
            Self::Symlink => "symlink",
            Self::Block => "block",
            Self::Character => "character",
            Self::Fifo => "fifo",
            Self::Socket => "socket",
            Self::Unknown => "unknown",
            Self::Junction => "junction",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// POSIX permission bits, including setuid, setgid and sticky.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Perms: u32 {
        /// Owner read.
        const OWNER_READ = 0o400;
        /// Owner write.
        const OWNER_WRITE = 0o200;
        /// Owner execute.
        const OWNER_EXEC = 0o100;
        /// Owner read, write and execute.
        const OWNER_ALL = 0o700;
        /// Group read.
        const GROUP_READ = 0o040;
        /// Group write.
        const GROUP_WRITE = 0o020;
        /// Group execute.
        const GROUP_EXEC = 0o010;
        /// Group read, write and execute.
        const GROUP_ALL = 0o070;
        /// Others read.
        const OTHERS_READ = 0o004;
        /// Others write.
        const OTHERS_WRITE = 0o002;
        /// Others execute.
        const OTHERS_EXEC = 0o001;
        /// Others read, write and execute.
        const OTHERS_ALL = 0o007;
        /// Set user id on execution.
        const SET_UID = 0o4000;
        /// Set group id on execution.
        const SET_GID = 0o2000;
        /// Restricted deletion.
        const STICKY_BIT = 0o1000;
    }
}

impl Perms {
    /// Every meaningful permission bit.
    pub const MASK: u32 = 0o7777;

    /// Builds permissions from a raw mode, discarding file-type bits.
    #[must_use]
    pub const fn from_mode(mode: u32) -> Self {
        Self::from_bits_truncate(mode & Self::MASK)
    }

    /// The raw mode bits.
    #[must_use]
    pub const fn mode(self) -> u32 {
        self.bits()
    }
}

impl fmt::Display for Perms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.bits())
    }
}

/// Type and permissions of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStatus {
    /// The entry type.
    pub file_type: FileType,
    /// Permission bits, or `None` when they are unknown.
    pub permissions: Option<Perms>,
}

impl FileStatus {
    /// A status with known permissions.
    #[must_use]
    pub const fn new(file_type: FileType, permissions: Perms) -> Self {
        Self {
            file_type,
            permissions: Some(permissions),
        }
    }

    /// The status reported for a missing entry.
    #[must_use]
    pub const fn not_found() -> Self {
        Self {
            file_type: FileType::NotFound,
            permissions: None,
        }
    }

    /// Whether the type was determined, including as not-found.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.file_type != FileType::None
    }

    /// Whether the entry exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.is_known() && self.file_type != FileType::NotFound
    }

    /// Whether the entry is a regular file.
    #[must_use]
    pub fn is_regular_file(&self) -> bool {
        self.file_type == FileType::Regular
    }

    /// Whether the entry is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.file_type == FileType::Directory
    }

    /// Whether the entry is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.file_type == FileType::Symlink
    }

    /// Whether the entry is a block device.
    #[must_use]
    pub fn is_block_file(&self) -> bool {
        self.file_type == FileType::Block
    }

    /// Whether the entry is a character device.
    #[must_use]
    pub fn is_character_file(&self) -> bool {
        self.file_type == FileType::Character
    }

    /// Whether the entry is a named pipe.
    #[must_use]
    pub fn is_fifo(&self) -> bool {
        self.file_type == FileType::Fifo
    }

    /// Whether the entry is a socket.
    #[must_use]
    pub fn is_socket(&self) -> bool {
        self.file_type == FileType::Socket
    }

    /// Whether the entry exists but is neither a regular file, a directory
    /// nor a symlink.
    #[must_use]
    pub fn is_other(&self) -> bool {
        self.exists() && !self.is_regular_file() && !self.is_directory() && !self.is_symlink()
    }
}

/// A platform-neutral timestamp.
///
/// # Examples
///
/// ```
/// use pathkit::FileTime;
///
/// let t = FileTime::new(1_700_000_000, 500).unwrap();
/// assert_eq!(t.seconds, 1_700_000_000);
/// assert!(FileTime::new(0, 1_000_000_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileTime {
    /// Seconds since the Unix epoch.
    pub seconds: i64,
    /// Sub-second part, always below one billion.
    pub nanoseconds: u32,
}

impl FileTime {
    /// Creates a timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`] if `nanoseconds` is one second
    /// or more.
    pub fn new(seconds: i64, nanoseconds: u32) -> Result<Self> {
        if nanoseconds >= 1_000_000_000 {
            return Err(Error::library(
                ErrorKind::InvalidArgument,
                format!("{seconds}.{nanoseconds}"),
            ));
        }
        Ok(Self {
            seconds,
            nanoseconds,
        })
    }

    /// The timestamp as a UTC date-time, if representable.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanoseconds)
    }

    /// The current time.
    #[must_use]
    pub fn now() -> Self {
        Self::from(SystemTime::now())
    }
}

impl From<DateTime<Utc>> for FileTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            seconds: dt.timestamp(),
            nanoseconds: dt.timestamp_subsec_nanos() % 1_000_000_000,
        }
    }
}

impl From<SystemTime> for FileTime {
    fn from(t: SystemTime) -> Self {
        match t.duration_since(UNIX_EPOCH) {
            Ok(d) => Self {
                seconds: i64::try_from(d.as_secs()).unwrap_or(i64::MAX),
                nanoseconds: d.subsec_nanos(),
            },
            Err(before) => {
                let d = before.duration();
                let secs = i64::try_from(d.as_secs()).unwrap_or(i64::MAX);
                if d.subsec_nanos() == 0 {
                    Self {
                        seconds: -secs,
                        nanoseconds: 0,
                    }
                } else {
                    Self {
                        seconds: -secs - 1,
                        nanoseconds: 1_000_000_000 - d.subsec_nanos(),
                    }
                }
            }
        }
    }
}

impl From<FileTime> for SystemTime {
    fn from(t: FileTime) -> Self {
        let nanos = Duration::from_nanos(u64::from(t.nanoseconds));
        if t.seconds >= 0 {
            UNIX_EPOCH + Duration::from_secs(t.seconds.unsigned_abs()) + nanos
        } else {
            UNIX_EPOCH - Duration::from_secs(t.seconds.unsigned_abs()) + nanos
        }
    }
}

impl fmt::Display for FileTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "{}.{:09}", self.seconds, self.nanoseconds),
        }
    }
}

/// Capacity figures for the filesystem holding a path.
///
/// A field that the backend cannot report is `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceInfo {
    /// Total size in bytes.
    pub capacity: u64,
    /// Free bytes.
    pub free: u64,
    /// Bytes available to an unprivileged caller.
    pub available: u64,
}

impl SpaceInfo {
    /// Every field unknown.
    pub const UNKNOWN: Self = Self {
        capacity: u64::MAX,
        free: u64::MAX,
        available: u64::MAX,
    };
}

/// Durable identity of an entry: device and inode, or their equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId {
    /// Device or volume number.
    pub dev: u64,
    /// Inode or file index.
    pub ino: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        let dir = FileStatus::new(FileType::Directory, Perms::OWNER_ALL);
        assert!(dir.exists());
        assert!(dir.is_directory());
        assert!(!dir.is_other());

        let missing = FileStatus::not_found();
        assert!(missing.is_known());
        assert!(!missing.exists());
        assert!(!missing.is_other());

        let unresolved = FileStatus {
            file_type: FileType::None,
            permissions: None,
        };
        assert!(!unresolved.is_known());
        assert!(!unresolved.exists());
    }

    #[test]
    fn test_other_types() {
        for t in [
            FileType::Block,
            FileType::Character,
            FileType::Fifo,
            FileType::Socket,
            FileType::Unknown,
            FileType::Junction,
        ] {
            assert!(FileStatus::new(t, Perms::empty()).is_other(), "{t}");
        }
        assert!(!FileStatus::new(FileType::Symlink, Perms::empty()).is_other());
    }

    #[test]
    fn test_perms_mode() {
        let p = Perms::from_mode(0o100_644);
        assert_eq!(p.mode(), 0o644);
        assert!(p.contains(Perms::OWNER_READ | Perms::OWNER_WRITE));
        assert_eq!(p.to_string(), "0644");
        assert_eq!(Perms::from_mode(0o4755).mode(), 0o4755);
    }

    #[test]
    fn test_file_time_system_time_conversion() {
        let t = FileTime::new(1_600_000_000, 123_456_789).unwrap();
        let back = FileTime::from(SystemTime::from(t));
        assert_eq!(back, t);

        let before = FileTime::new(-5, 250_000_000).unwrap();
        assert_eq!(FileTime::from(SystemTime::from(before)), before);
    }

    #[test]
    fn test_file_time_datetime() {
        let t = FileTime::new(0, 0).unwrap();
        assert_eq!(t.to_string(), "1970-01-01T00:00:00+00:00");
        let dt = t.to_datetime().unwrap();
        assert_eq!(FileTime::from(dt), t);
    }

    #[test]
    fn test_space_unknown() {
        assert_eq!(SpaceInfo::UNKNOWN.capacity, u64::MAX);
    }
}
