#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! Portable path grammar, lexical path algebra and file-tree operations.
//!
//! Paths are parsed under an explicit [`Style`] (POSIX or Windows) regardless
//! of the host, so the same code can reason about either grammar. Filesystem
//! operations run through a [`FileSystem`] over a pluggable provider: the
//! host's filesystem or an in-memory tree.
//!
//! ## Core Types
//!
//! - [`FsPath`] and [`Style`]: Paths and the grammar they are read under
//! - [`FileSystem`]: Copy, removal, iteration and canonicalization
//! - [`CopyOptions`] and [`DirectoryOptions`]: Operation option records
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathkit::{FsPath, Style};
//!
//! let p = FsPath::windows("C:/a/../b/file.txt");
//! assert_eq!(p.lexically_normal().as_str(), "C:\\b\\file.txt");
//! assert_eq!(p.extension().as_str(), ".txt");
//! assert_eq!(p.style(), Style::Windows);
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, ErrorDomain, ErrorKind, Result};
pub use fs::{
    CopyForm, CopyOptions, DirEntries, DirectoryOptions, ExistingPolicy, FileId, FileStatus,
    FileSystem, FileTime, FileType, FsProvider, MemoryProvider, OsProvider, PermMode, PermOptions,
    Perms, SpaceInfo, SymlinkPolicy,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Components, FsPath, PathIter, Style};
