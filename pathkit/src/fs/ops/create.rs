//! Directory and link creation, and the working directory.

use std::io;

use log::debug;

use super::{FileSystem, IoResultExt};
use crate::error::{Error, ErrorKind, Result};
use crate::fs::provider::FsProvider;
use crate::fs::types::Perms;
use crate::path::FsPath;

impl<P: FsProvider> FileSystem<P> {
    fn make_dir(&self, p: &FsPath, perms: Option<Perms>) -> Result<bool> {
        match self.provider.create_dir(p, perms) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                if self.provider.status(p).at(p)?.is_directory() {
                    Ok(false)
                } else {
                    Err(Error::library(ErrorKind::FileExists, p))
                }
            }
            Err(err) => Err::<bool, _>(err).at(p),
        }
    }

    /// Creates directory `p`. Returns `false` if it already existed.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::FileExists`] if `p` exists but is not a
    /// directory, and a system error if the parent is missing.
    pub fn create_directory(&self, p: &FsPath) -> Result<bool> {
        let p = self.arg(p)?;
        self.make_dir(&p, None)
    }

    /// Creates directory `p` with the permission bits of `existing`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NoSuchFileOrDirectory`] if `existing` is
    /// missing, and otherwise as for
    /// [`create_directory`](Self::create_directory).
    pub fn create_directory_cp(&self, p: &FsPath, existing: &FsPath) -> Result<bool> {
        let p = self.arg(p)?;
        let existing = self.arg(existing)?;
        let st = self.provider.status(&existing).at(&existing)?;
        if !st.exists() {
            return Err(Error::library(ErrorKind::NoSuchFileOrDirectory, &existing));
        }
        self.make_dir(&p, st.permissions)
    }

    /// Creates `p` and every missing ancestor. Returns `false` when `p`
    /// already existed.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotADirectory`] if an existing ancestor is not a
    /// directory.
    pub fn create_directories(&self, p: &FsPath) -> Result<bool> {
        let p = self.arg(p)?;
        if self.provider.status(&p).at(&p)?.exists() {
            return Ok(false);
        }

        let abs = self.absolute(&p)?;
        let mut current = abs.root_path();
        let mut existing = true;
        let mut created = 0usize;
        for element in abs.relative_path().iter() {
            match element.as_str() {
                "" | "." => continue,
                ".." => {
                    current = current.parent_path();
                    continue;
                }
                _ => {}
            }
            current.append(&element);
            if existing {
                let st = self.provider.status(&current).at(&current)?;
                if st.exists() {
                    if !st.is_directory() {
                        return Err(Error::library(ErrorKind::NotADirectory, &current));
                    }
                    continue;
                }
                existing = false;
            }
            if self.make_dir(&current, None)? {
                created += 1;
            }
        }
        debug!("create_directories {abs}: created {created}");
        Ok(true)
    }

    /// Creates `link` as a hard link to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if either path is empty or the link cannot be made.
    pub fn create_hard_link(&self, target: &FsPath, link: &FsPath) -> Result<()> {
        let target = self.arg(target)?;
        let link = self.arg(link)?;
        self.provider.hard_link(&target, &link).at(&link)
    }

    /// Creates `link` as a symlink to the file `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if either path is empty or the link cannot be made.
    pub fn create_symlink(&self, target: &FsPath, link: &FsPath) -> Result<()> {
        let target = self.arg(target)?;
        let link = self.arg(link)?;
        self.provider.symlink(&target, &link, false).at(&link)
    }

    /// Creates `link` as a symlink to the directory `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if either path is empty or the link cannot be made.
    pub fn create_directory_symlink(&self, target: &FsPath, link: &FsPath) -> Result<()> {
        let target = self.arg(target)?;
        let link = self.arg(link)?;
        self.provider.symlink(&target, &link, true).at(&link)
    }

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot report it.
    pub fn current_path(&self) -> Result<FsPath> {
        let style = self.provider.style();
        self.provider.current_dir().at(&FsPath::empty(style))
    }

    /// Changes the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is empty or not an accessible directory.
    pub fn set_current_path(&self, p: &FsPath) -> Result<()> {
        let p = self.arg(p)?;
        self.provider.set_current_dir(&p).at(&p)
    }
}
