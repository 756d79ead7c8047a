//! Timestamps, permissions and link targets.

use super::{FileSystem, IoResultExt};
use crate::error::{Error, ErrorKind, Result};
use crate::fs::options::{PermMode, PermOptions};
use crate::fs::provider::FsProvider;
use crate::fs::types::{FileTime, Perms};
use crate::path::FsPath;

impl<P: FsProvider> FileSystem<P> {
    /// Modification time of the entry `p` resolves to.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is empty or cannot be resolved.
    pub fn last_write_time(&self, p: &FsPath) -> Result<FileTime> {
        let p = self.arg(p)?;
        self.provider.last_write_time(&p).at(&p)
    }

    /// Sets the modification time of the entry `p` resolves to.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is empty or cannot be updated.
    pub fn set_last_write_time(&self, p: &FsPath, time: FileTime) -> Result<()> {
        let p = self.arg(p)?;
        self.provider.set_last_write_time(&p, time).at(&p)
    }

    /// Changes the permission bits of `p`, combining `perms` with the
    /// current bits as `opts.mode` says.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NoSuchFileOrDirectory`] if `p` is missing and
    /// [`ErrorKind::FunctionNotSupported`] if `opts.nofollow` cannot be
    /// honored for a symlink.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::fs::{FileSystem, MemoryProvider, PermMode, PermOptions, Perms};
    /// use pathkit::{FsPath, Style};
    ///
    /// let fs = FileSystem::new(MemoryProvider::new(Style::Posix));
    /// let tmp = FsPath::posix("/tmp");
    /// fs.permissions(&tmp, Perms::from_mode(0o700), PermOptions::default()).unwrap();
    /// fs.permissions(&tmp, Perms::GROUP_READ, PermOptions::new(PermMode::Add)).unwrap();
    /// assert_eq!(fs.status(&tmp).unwrap().permissions, Some(Perms::from_mode(0o740)));
    /// ```
    pub fn permissions(&self, p: &FsPath, perms: Perms, opts: PermOptions) -> Result<()> {
        let p = self.arg(p)?;
        let st = if opts.nofollow {
            self.provider.symlink_status(&p)
        } else {
            self.provider.status(&p)
        }
        .at(&p)?;
        if !st.exists() {
            return Err(Error::library(ErrorKind::NoSuchFileOrDirectory, &p));
        }

        let current = st.permissions.unwrap_or_else(Perms::empty);
        let target = match opts.mode {
            PermMode::Replace => perms,
            PermMode::Add => current | perms,
            PermMode::Remove => current - perms,
        };
        self.provider
            .set_permissions(&p, target, !opts.nofollow)
            .at(&p)
    }

    /// The stored target of symlink `p`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`] if `p` is not a symlink.
    pub fn read_symlink(&self, p: &FsPath) -> Result<FsPath> {
        let p = self.arg(p)?;
        if !self.provider.symlink_status(&p).at(&p)?.is_symlink() {
            return Err(Error::library(ErrorKind::InvalidArgument, &p));
        }
        self.provider.read_link(&p).at(&p)
    }
}
