//! Error types for the pathkit library.
//!
//! Every fallible operation returns [`Result`]. Errors fall into two domains:
//!
//! - **Library** errors are raised by pathkit's own precondition checks and
//!   decision logic (an empty path argument, copying a directory onto a file,
//!   and so on). They carry an [`ErrorKind`].
//! - **System** errors are the provider's native error forwarded unmodified.
//!
//! A library error always wins when both could apply: an empty path is
//! reported as [`ErrorKind::InvalidArgument`] before the provider is consulted.

use std::fmt;
use std::io;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The domain an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorDomain {
    /// Raised by pathkit itself.
    Library,
    /// Forwarded from the filesystem provider.
    System,
}

impl fmt::Display for ErrorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library => write!(f, "library"),
            Self::System => write!(f, "system"),
        }
    }
}

/// Library-defined error conditions.
///
/// The numeric codes match the conventional POSIX errno values so callers can
/// compare library and system codes on one scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument was empty, malformed, or inconsistent with the entry type.
    InvalidArgument,
    /// The entry does not exist.
    NoSuchFileOrDirectory,
    /// The entry already exists.
    FileExists,
    /// A path prefix that must be a directory is not one.
    NotADirectory,
    /// The entry is a directory where a non-directory was required.
    IsADirectory,
    /// A resolved name exceeds the platform limit.
    NameTooLong,
    /// Too many levels of symbolic links.
    Loop,
    /// The backend cannot perform the requested operation.
    FunctionNotSupported,
}

impl ErrorKind {
    /// Numeric code of this condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::InvalidArgument.code(), 22);
    /// assert_eq!(ErrorKind::NoSuchFileOrDirectory.code(), 2);
    /// ```
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::NoSuchFileOrDirectory => 2,
            Self::FileExists => 17,
            Self::NotADirectory => 20,
            Self::IsADirectory => 21,
            Self::InvalidArgument => 22,
            Self::NameTooLong => 36,
            Self::Loop => 40,
            Self::FunctionNotSupported => 95,
        }
    }

    /// Static description of this condition.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::NoSuchFileOrDirectory => "no such file or directory",
            Self::FileExists => "file exists",
            Self::NotADirectory => "not a directory",
            Self::IsADirectory => "is a directory",
            Self::NameTooLong => "file name too long",
            Self::Loop => "too many levels of symbolic links",
            Self::FunctionNotSupported => "function not supported",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The main error type for the pathkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// A library-domain failure.
    #[error("pathkit error: {kind}: '{path}'")]
    Library {
        /// The condition that was detected.
        kind: ErrorKind,
        /// The path the condition was detected on (may be empty).
        path: String,
    },

    /// A failure reported by the filesystem provider.
    #[error("system error: {source}: '{path}'")]
    System {
        /// The path the provider was operating on.
        path: String,
        /// The provider's native error.
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Builds a library-domain error for `path`.
    #[must_use]
    pub fn library(kind: ErrorKind, path: impl fmt::Display) -> Self {
        Self::Library {
            kind,
            path: path.to_string(),
        }
    }

    /// Builds a system-domain error for `path`.
    #[must_use]
    pub fn system(source: io::Error, path: impl fmt::Display) -> Self {
        Self::System {
            path: path.to_string(),
            source,
        }
    }

    /// The domain of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{Error, ErrorDomain, ErrorKind};
    ///
    /// let err = Error::library(ErrorKind::FileExists, "a/b");
    /// assert_eq!(err.domain(), ErrorDomain::Library);
    /// ```
    #[must_use]
    pub fn domain(&self) -> ErrorDomain {
        match self {
            Self::System { .. } | Self::Io(_) => ErrorDomain::System,
            Self::Library { .. } | Self::Configuration(_) | Self::Validation { .. } => {
                ErrorDomain::Library
            }
        }
    }

    /// The numeric code of this error within its domain.
    ///
    /// System errors report the raw OS error number when the provider supplied
    /// one, otherwise the errno conventionally associated with the error kind.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Library { kind, .. } => kind.code(),
            Self::Configuration(_) | Self::Validation { .. } => ErrorKind::InvalidArgument.code(),
            Self::System { source, .. } | Self::Io(source) => io_code(source),
        }
    }

    /// The library condition, if this is a library-domain error.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Library { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::{Error, ErrorKind};
    ///
    /// let err = Error::library(ErrorKind::NoSuchFileOrDirectory, "/nonexistent");
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Library { kind, .. } => *kind == ErrorKind::NoSuchFileOrDirectory,
            Self::System { source, .. } | Self::Io(source) => {
                source.kind() == io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    /// use std::io;
    ///
    /// let err = Error::system(io::Error::from(io::ErrorKind::PermissionDenied), "/restricted");
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::System { source, .. } | Self::Io(source) => {
                source.kind() == io::ErrorKind::PermissionDenied
            }
            _ => false,
        }
    }
}

fn io_code(err: &io::Error) -> i32 {
    if let Some(raw) = err.raw_os_error() {
        return raw;
    }
    match err.kind() {
        io::ErrorKind::NotFound => 2,
        io::ErrorKind::PermissionDenied => 13,
        io::ErrorKind::AlreadyExists => 17,
        io::ErrorKind::InvalidInput => 22,
        io::ErrorKind::Unsupported => 95,
        _ => 5,
    }
}
