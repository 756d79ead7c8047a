//! Status queries and type predicates.

use super::{FileSystem, IoResultExt};
use crate::error::{Error, ErrorKind, Result};
use crate::fs::provider::FsProvider;
use crate::fs::types::{FileStatus, SpaceInfo};
use crate::path::FsPath;

impl<P: FsProvider> FileSystem<P> {
    /// Status of `p`, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is empty or the status cannot be determined.
    /// A missing entry is not an error.
    pub fn status(&self, p: &FsPath) -> Result<FileStatus> {
        let p = self.arg(p)?;
        self.provider.status(&p).at(&p)
    }

    /// Status of `p` itself, not following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is empty or the status cannot be determined.
    pub fn symlink_status(&self, p: &FsPath) -> Result<FileStatus> {
        let p = self.arg(p)?;
        self.provider.symlink_status(&p).at(&p)
    }

    /// Whether `p` resolves to an existing entry.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is empty or the status cannot be determined.
    pub fn exists(&self, p: &FsPath) -> Result<bool> {
        Ok(self.status(p)?.exists())
    }

    /// # Errors
    ///
    /// As for [`status`](Self::status).
    pub fn is_directory(&self, p: &FsPath) -> Result<bool> {
        Ok(self.status(p)?.is_directory())
    }

    /// # Errors
    ///
    /// As for [`status`](Self::status).
    pub fn is_regular_file(&self, p: &FsPath) -> Result<bool> {
        Ok(self.status(p)?.is_regular_file())
    }

    /// Whether `p` itself is a symlink.
    ///
    /// # Errors
    ///
    /// As for [`symlink_status`](Self::symlink_status).
    pub fn is_symlink(&self, p: &FsPath) -> Result<bool> {
        Ok(self.symlink_status(p)?.is_symlink())
    }

    /// # Errors
    ///
    /// As for [`status`](Self::status).
    pub fn is_block_file(&self, p: &FsPath) -> Result<bool> {
        Ok(self.status(p)?.is_block_file())
    }

    /// # Errors
    ///
    /// As for [`status`](Self::status).
    pub fn is_character_file(&self, p: &FsPath) -> Result<bool> {
        Ok(self.status(p)?.is_character_file())
    }

    /// # Errors
    ///
    /// As for [`status`](Self::status).
    pub fn is_fifo(&self, p: &FsPath) -> Result<bool> {
        Ok(self.status(p)?.is_fifo())
    }

    /// # Errors
    ///
    /// As for [`status`](Self::status).
    pub fn is_socket(&self, p: &FsPath) -> Result<bool> {
        Ok(self.status(p)?.is_socket())
    }

    /// # Errors
    ///
    /// As for [`status`](Self::status).
    pub fn is_other(&self, p: &FsPath) -> Result<bool> {
        Ok(self.status(p)?.is_other())
    }

    /// Whether `p` is an empty directory or a zero-length file.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is missing, or is neither a directory nor a
    /// regular file.
    pub fn is_empty(&self, p: &FsPath) -> Result<bool> {
        let p = self.arg(p)?;
        if self.provider.symlink_status(&p).at(&p)?.is_directory() {
            Ok(self.provider.read_dir(&p).at(&p)?.is_empty())
        } else {
            Ok(self.file_size(&p)? == 0)
        }
    }

    /// Whether `p1` and `p2` resolve to the same entry.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NoSuchFileOrDirectory`] if either path does not
    /// exist.
    pub fn equivalent(&self, p1: &FsPath, p2: &FsPath) -> Result<bool> {
        let p1 = self.arg(p1)?;
        let p2 = self.arg(p2)?;
        let s1 = self.provider.status(&p1).at(&p1)?;
        let s2 = self.provider.status(&p2).at(&p2)?;
        for (p, st) in [(&p1, s1), (&p2, s2)] {
            if !st.exists() {
                return Err(Error::library(ErrorKind::NoSuchFileOrDirectory, p));
            }
        }
        if s1.file_type != s2.file_type {
            return Ok(false);
        }
        let id1 = self.provider.file_id(&p1).at(&p1)?;
        let id2 = self.provider.file_id(&p2).at(&p2)?;
        Ok(id1 == id2)
    }

    /// Size in bytes of the regular file `p` resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NoSuchFileOrDirectory`] for a missing entry,
    /// [`ErrorKind::IsADirectory`] for a directory and
    /// [`ErrorKind::FunctionNotSupported`] for any other non-regular entry.
    pub fn file_size(&self, p: &FsPath) -> Result<u64> {
        let p = self.arg(p)?;
        let st = self.provider.status(&p).at(&p)?;
        if !st.exists() {
            return Err(Error::library(ErrorKind::NoSuchFileOrDirectory, &p));
        }
        if st.is_directory() {
            return Err(Error::library(ErrorKind::IsADirectory, &p));
        }
        if !st.is_regular_file() {
            return Err(Error::library(ErrorKind::FunctionNotSupported, &p));
        }
        self.provider.file_size(&p).at(&p)
    }

    /// Number of hard links to the entry `p` resolves to.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is empty or cannot be resolved.
    pub fn hard_link_count(&self, p: &FsPath) -> Result<u64> {
        let p = self.arg(p)?;
        self.provider.hard_link_count(&p).at(&p)
    }

    /// Capacity of the filesystem holding `p`.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is empty or cannot be resolved.
    pub fn space(&self, p: &FsPath) -> Result<SpaceInfo> {
        let p = self.arg(p)?;
        self.provider.space(&p).at(&p)
    }

    /// A directory suitable for temporary files.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotADirectory`] if the location found is not a
    /// directory.
    pub fn temp_directory_path(&self) -> Result<FsPath> {
        let style = self.provider.style();
        let dir = self
            .provider
            .temp_dir()
            .at(&FsPath::empty(style))?;
        if !self.provider.status(&dir).at(&dir)?.is_directory() {
            return Err(Error::library(ErrorKind::NotADirectory, &dir));
        }
        Ok(dir)
    }
}
