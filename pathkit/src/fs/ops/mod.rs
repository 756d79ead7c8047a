//! The operation layer.
//!
//! Operations are grouped by concern into `impl` blocks on [`FileSystem`];
//! this module holds the type itself and the argument and error plumbing
//! they share.

use std::io;

use crate::error::{Error, ErrorKind, Result};
use crate::fs::provider::{FsProvider, OsProvider};
use crate::path::{FsPath, Style};

mod attrs;
mod copy;
mod create;
mod dir_iter;
mod query;
mod remove;
mod resolve;

/// Filesystem operations bound to a provider.
///
/// Every operation rejects an empty path with
/// [`ErrorKind::InvalidArgument`] before touching the provider, and reports
/// provider failures as [`Error::System`] carrying the offending path.
///
/// # Examples
///
/// ```no_run
/// use pathkit::fs::FileSystem;
/// use pathkit::FsPath;
///
/// let fs = FileSystem::native();
/// let here = fs.current_path().unwrap();
/// assert!(fs.is_directory(&here).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileSystem<P = OsProvider> {
    provider: P,
}

impl FileSystem<OsProvider> {
    /// Operations on the host filesystem.
    #[must_use]
    pub const fn native() -> Self {
        Self {
            provider: OsProvider::new(),
        }
    }
}

impl<P: FsProvider> FileSystem<P> {
    /// Binds the operations to `provider`.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The underlying provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// The path grammar of the provider.
    pub fn style(&self) -> Style {
        self.provider.style()
    }

    /// Validates an argument and restyles it for the provider.
    fn arg(&self, p: &FsPath) -> Result<FsPath> {
        if p.is_empty() {
            return Err(Error::library(ErrorKind::InvalidArgument, p));
        }
        Ok(p.restyled(self.provider.style()))
    }
}

/// Attaches a path to a provider failure.
trait IoResultExt<T> {
    fn at(self, p: &FsPath) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at(self, p: &FsPath) -> Result<T> {
        self.map_err(|err| match err.kind() {
            io::ErrorKind::Unsupported => Error::library(ErrorKind::FunctionNotSupported, p),
            _ => Error::system(err, p),
        })
    }
}
