//! Removal, renaming and resizing.

use log::debug;

use super::{FileSystem, IoResultExt};
use crate::error::Result;
use crate::fs::provider::FsProvider;
use crate::fs::types::FileType;
use crate::path::FsPath;

impl<P: FsProvider> FileSystem<P> {
    /// Removes the entry `p` itself, not following a final symlink. A
    /// missing entry is not an error; the result says whether anything was
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the status of `p` is unknown or the provider
    /// refuses the removal, e.g. for a non-empty directory.
    pub fn remove(&self, p: &FsPath) -> Result<bool> {
        let p = self.arg(p)?;
        let st = self.provider.symlink_status(&p).at(&p)?;
        if !st.exists() {
            return Ok(false);
        }
        let removed = match st.file_type {
            FileType::Symlink => self.provider.remove_symlink(&p),
            FileType::Directory | FileType::Junction => self.provider.remove_dir(&p),
            _ => self.provider.remove_file(&p),
        };
        removed.at(&p)?;
        Ok(true)
    }

    /// Removes `p` and, for a directory, everything below it. Returns the
    /// number of entries removed.
    ///
    /// Symlinks are removed, never followed. Processing stops at the first
    /// failure; entries already removed stay removed.
    ///
    /// # Errors
    ///
    /// Returns the first error met.
    pub fn remove_all(&self, p: &FsPath) -> Result<u64> {
        let p = self.arg(p)?;
        if !self.provider.symlink_status(&p).at(&p)?.is_directory() {
            return Ok(u64::from(self.remove(&p)?));
        }

        let mut count = 0;
        for name in self.provider.read_dir(&p).at(&p)? {
            let child = p.join(&name);
            if self.provider.symlink_status(&child).at(&child)?.is_directory() {
                count += self.remove_all(&child)?;
            } else {
                count += u64::from(self.remove(&child)?);
            }
        }
        self.provider.remove_dir(&p).at(&p)?;
        count += 1;
        debug!("remove_all {p}: {count} entries");
        Ok(count)
    }

    /// Moves `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if either path is empty or the provider refuses the
    /// move.
    pub fn rename(&self, from: &FsPath, to: &FsPath) -> Result<()> {
        let from = self.arg(from)?;
        let to = self.arg(to)?;
        self.provider.rename(&from, &to).at(&from)
    }

    /// Truncates or zero-extends the regular file `p` to `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is empty or cannot be resized.
    pub fn resize_file(&self, p: &FsPath, size: u64) -> Result<()> {
        let p = self.arg(p)?;
        self.provider.resize(&p, size).at(&p)
    }
}
