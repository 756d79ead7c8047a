//! Eager directory listings.

use std::io;

use log::debug;

use super::{FileSystem, IoResultExt};
use crate::error::{Error, ErrorKind, Result};
use crate::fs::options::DirectoryOptions;
use crate::fs::provider::FsProvider;
use crate::fs::types::FileId;
use crate::fs::DirEntries;
use crate::path::FsPath;

impl<P: FsProvider> FileSystem<P> {
    /// Names in `dir`, or none for an unreadable directory when the options
    /// allow skipping it.
    fn child_names(&self, dir: &FsPath, options: DirectoryOptions) -> Result<Vec<String>> {
        match self.provider.read_dir(dir) {
            Ok(names) => Ok(names
                .into_iter()
                .filter(|name| name != "." && name != "..")
                .collect()),
            Err(err)
                if err.kind() == io::ErrorKind::PermissionDenied
                    && options.skip_permission_denied =>
            {
                debug!("skipping unreadable directory {dir}");
                Ok(Vec::new())
            }
            Err(err) => Err::<Vec<String>, _>(err).at(dir),
        }
    }

    fn require_directory(&self, p: &FsPath) -> Result<()> {
        let st = self.provider.status(p).at(p)?;
        if !st.exists() {
            return Err(Error::library(ErrorKind::NoSuchFileOrDirectory, p));
        }
        if !st.is_directory() {
            return Err(Error::library(ErrorKind::NotADirectory, p));
        }
        Ok(())
    }

    /// The direct children of directory `p`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NotADirectory`] if `p` is not a directory, and a
    /// system error if it cannot be read, unless
    /// `options.skip_permission_denied` covers the failure.
    pub fn directory_iterator(&self, p: &FsPath, options: DirectoryOptions) -> Result<DirEntries> {
        let p = self.arg(p)?;
        self.require_directory(&p)?;
        let entries: Vec<FsPath> = self
            .child_names(&p, options)?
            .iter()
            .map(|name| p.join(name))
            .collect();
        debug!("listed {p}: {} entries", entries.len());
        Ok(DirEntries::new(entries))
    }

    /// Everything below directory `p`, depth first, each directory listed
    /// before its contents.
    ///
    /// Symlinks to directories are descended only with
    /// `options.follow_directory_symlink`. The listing is built completely
    /// before returning, and the first error aborts it.
    ///
    /// # Errors
    ///
    /// As for [`directory_iterator`](Self::directory_iterator), for `p` and
    /// every directory below it. Following a symlink back into one of its
    /// own ancestors yields [`ErrorKind::Loop`].
    pub fn recursive_directory_iterator(
        &self,
        p: &FsPath,
        options: DirectoryOptions,
    ) -> Result<DirEntries> {
        let p = self.arg(p)?;
        self.require_directory(&p)?;
        let mut entries = Vec::new();
        let mut ancestors = Vec::new();
        if options.follow_directory_symlink {
            ancestors.push(self.provider.file_id(&p).at(&p)?);
        }
        self.collect_tree(&p, options, &mut ancestors, &mut entries)?;
        debug!("listed {p} recursively: {} entries", entries.len());
        Ok(DirEntries::new(entries))
    }

    fn collect_tree(
        &self,
        dir: &FsPath,
        options: DirectoryOptions,
        ancestors: &mut Vec<FileId>,
        entries: &mut Vec<FsPath>,
    ) -> Result<()> {
        for name in self.child_names(dir, options)? {
            let child = dir.join(&name);
            entries.push(child.clone());

            let st = self.provider.symlink_status(&child).at(&child)?;
            let follow = options.follow_directory_symlink;
            let descend = st.is_directory()
                || (follow
                    && st.is_symlink()
                    && self.provider.status(&child).at(&child)?.is_directory());
            if !descend {
                continue;
            }
            // Without symlinks in play the tree cannot cycle.
            if !follow {
                self.collect_tree(&child, options, ancestors, entries)?;
                continue;
            }

            let id = self.provider.file_id(&child).at(&child)?;
            if ancestors.contains(&id) {
                return Err(Error::library(ErrorKind::Loop, &child));
            }
            ancestors.push(id);
            let result = self.collect_tree(&child, options, ancestors, entries);
            ancestors.pop();
            result?;
        }
        Ok(())
    }
}
