//! Copying files, links and trees.

use log::debug;

use super::{FileSystem, IoResultExt};
use crate::error::{Error, ErrorKind, Result};
use crate::fs::options::{CopyForm, CopyOptions, ExistingPolicy, SymlinkPolicy};
use crate::fs::provider::FsProvider;
use crate::fs::types::{FileStatus, FileType};
use crate::path::FsPath;

impl<P: FsProvider> FileSystem<P> {
    /// Copies `from` to `to` according to `options`.
    ///
    /// The decision order is: resolve `from` (not following a symlink when
    /// any symlink handling or symlink creation is requested), resolve `to`,
    /// apply the existing-destination policy, reject special files and a
    /// directory onto a file, then dispatch on the type of `from`. A
    /// directory is created with `from`'s permission bits and its children
    /// are copied only with `options.recursive`. A regular file copied onto
    /// an existing directory lands inside it under its own name.
    ///
    /// Under [`ExistingPolicy::Error`] an existing destination directory is
    /// not a conflict: a directory copied onto it is merged into it, keeping
    /// entries `from` does not have. Only clashing children fail.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::NoSuchFileOrDirectory`] if `from` is missing.
    /// - [`ErrorKind::FileExists`] if `to` is `from`, or is an existing
    ///   non-directory and the policy is [`ExistingPolicy::Error`].
    /// - [`ErrorKind::InvalidArgument`] for special files, or a symlink met
    ///   while [`SymlinkPolicy::Follow`] is combined with symlink creation.
    /// - [`ErrorKind::IsADirectory`] for a directory onto a regular file, or
    ///   a directory with [`CopyForm::CreateSymlinks`].
    ///
    /// A recursive copy stops at the first error without undoing what it
    /// already copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::fs::{CopyOptions, FileSystem, MemoryProvider};
    /// use pathkit::{FsPath, Style};
    ///
    /// let provider = MemoryProvider::new(Style::Posix);
    /// provider.write_file(&FsPath::posix("/tmp/a.txt"), "data").unwrap();
    /// let fs = FileSystem::new(provider);
    ///
    /// fs.copy(&FsPath::posix("/tmp"), &FsPath::posix("/backup"), CopyOptions::default().recursive(true))
    ///     .unwrap();
    /// assert_eq!(fs.provider().read_file(&FsPath::posix("/backup/a.txt")).unwrap(), b"data");
    /// ```
    pub fn copy(&self, from: &FsPath, to: &FsPath, options: CopyOptions) -> Result<()> {
        let from = self.arg(from)?;
        let to = self.arg(to)?;
        self.copy_entry(&from, &to, options)
    }

    fn stat(&self, p: &FsPath, follow: bool) -> Result<FileStatus> {
        if follow {
            self.provider.status(p).at(p)
        } else {
            self.provider.symlink_status(p).at(p)
        }
    }

    /// Whether an existing `to` is newer than or as new as `from`.
    fn up_to_date(&self, from: &FsPath, to: &FsPath) -> Result<bool> {
        let from_time = self.provider.last_write_time(from).at(from)?;
        let to_time = self.provider.last_write_time(to).at(to)?;
        Ok(from_time <= to_time)
    }

    fn copy_entry(&self, from: &FsPath, to: &FsPath, options: CopyOptions) -> Result<()> {
        let creating_links = options.form == CopyForm::CreateSymlinks;
        let fst = self.stat(
            from,
            options.symlinks == SymlinkPolicy::Follow && !creating_links,
        )?;
        if !fst.exists() {
            return Err(Error::library(ErrorKind::NoSuchFileOrDirectory, from));
        }

        let mut tst = self.stat(
            to,
            options.symlinks != SymlinkPolicy::Skip && !creating_links,
        )?;
        if tst.exists() {
            if self.equivalent(from, to)? {
                return Err(Error::library(ErrorKind::FileExists, to));
            }
            match options.existing {
                ExistingPolicy::Skip => {
                    debug!("copy {from} -> {to}: destination exists, skipped");
                    return Ok(());
                }
                ExistingPolicy::Update if self.up_to_date(from, to)? => {
                    debug!("copy {from} -> {to}: destination is current");
                    return Ok(());
                }
                ExistingPolicy::Overwrite | ExistingPolicy::Update => {
                    let removed = self.remove_all(to)?;
                    debug!("copy {from} -> {to}: replaced {removed} entries");
                    tst = FileStatus::not_found();
                }
                // An existing directory is merged into, or receives a file.
                ExistingPolicy::Error if tst.is_directory() => {}
                ExistingPolicy::Error => {
                    return Err(Error::library(ErrorKind::FileExists, to));
                }
            }
        }

        if fst.is_other() || tst.is_other() {
            return Err(Error::library(ErrorKind::InvalidArgument, from));
        }
        if fst.is_directory() && tst.is_regular_file() {
            return Err(Error::library(ErrorKind::IsADirectory, to));
        }

        match fst.file_type {
            FileType::Symlink => match options.symlinks {
                SymlinkPolicy::Skip => Ok(()),
                SymlinkPolicy::Copy => self.copy_symlink(from, to),
                SymlinkPolicy::Follow => Err(Error::library(ErrorKind::InvalidArgument, from)),
            },
            FileType::Regular => match options.form {
                CopyForm::DirectoriesOnly => Ok(()),
                CopyForm::CreateSymlinks => self.create_symlink(from, to),
                CopyForm::CreateHardLinks => self.create_hard_link(from, to),
                CopyForm::Copy => {
                    let dest = if tst.is_directory() {
                        to.join(from.filename())
                    } else {
                        to.clone()
                    };
                    self.copy_file(from, &dest, options).map(|_| ())
                }
            },
            FileType::Directory => {
                if creating_links {
                    return Err(Error::library(ErrorKind::IsADirectory, from));
                }
                if !tst.exists() {
                    self.create_directory_cp(to, from)?;
                }
                if options.recursive {
                    for child in self.provider.read_dir(from).at(from)? {
                        self.copy_entry(&from.join(&child), &to.join(&child), options)?;
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Copies the contents of regular file `from` to `to`, giving `to` the
    /// permission bits of `from`. Returns whether a copy was made.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidArgument`] if `from` is not a regular file, or
    ///   `to` exists and is not one.
    /// - [`ErrorKind::FileExists`] if `to` is `from`, or exists and the
    ///   policy is [`ExistingPolicy::Error`].
    pub fn copy_file(&self, from: &FsPath, to: &FsPath, options: CopyOptions) -> Result<bool> {
        let from = self.arg(from)?;
        let to = self.arg(to)?;
        let fst = self.provider.status(&from).at(&from)?;
        let tst = self.provider.status(&to).at(&to)?;
        if !fst.exists() {
            return Err(Error::library(ErrorKind::NoSuchFileOrDirectory, &from));
        }
        if !fst.is_regular_file() {
            return Err(Error::library(ErrorKind::InvalidArgument, &from));
        }

        if tst.exists() {
            if !tst.is_regular_file() {
                return Err(Error::library(ErrorKind::InvalidArgument, &to));
            }
            if self.equivalent(&from, &to)? {
                return Err(Error::library(ErrorKind::FileExists, &to));
            }
            match options.existing {
                ExistingPolicy::Error => {
                    return Err(Error::library(ErrorKind::FileExists, &to));
                }
                ExistingPolicy::Skip => return Ok(false),
                ExistingPolicy::Update if self.up_to_date(&from, &to)? => return Ok(false),
                ExistingPolicy::Update | ExistingPolicy::Overwrite => {}
            }
        }

        self.provider.copy_contents(&from, &to).at(&to)?;
        debug!("copied {from} -> {to}");
        Ok(true)
    }

    /// Creates `to` as a symlink with the same target as symlink `from`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`] if `from` is not a symlink.
    pub fn copy_symlink(&self, from: &FsPath, to: &FsPath) -> Result<()> {
        let from = self.arg(from)?;
        let to = self.arg(to)?;
        let target = self.read_symlink(&from)?;
        let directory = self.provider.status(&from).at(&from)?.is_directory();
        self.provider.symlink(&target, &to, directory).at(&to)
    }
}
