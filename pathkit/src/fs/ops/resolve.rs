//! Absolute, canonical and relative forms of paths.

use log::debug;

use super::{FileSystem, IoResultExt};
use crate::error::{Error, ErrorKind, Result};
use crate::fs::provider::FsProvider;
use crate::path::{FsPath, Style};

/// Removes the `\\?\` decoration Windows puts on fully resolved paths.
fn strip_verbatim(p: FsPath) -> FsPath {
    if p.style() != Style::Windows {
        return p;
    }
    let s = p.as_str();
    if let Some(rest) = s.strip_prefix(r"\\?\UNC\") {
        return FsPath::windows(format!(r"\\{rest}"));
    }
    if let Some(rest) = s.strip_prefix(r"\\?\") {
        let b = rest.as_bytes();
        if b.len() >= 2 && b[0].is_ascii_alphabetic() && b[1] == b':' {
            return FsPath::windows(rest);
        }
    }
    p
}

impl<P: FsProvider> FileSystem<P> {
    /// `p` anchored at the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is empty or the current directory cannot be
    /// determined.
    pub fn absolute(&self, p: &FsPath) -> Result<FsPath> {
        let p = self.arg(p)?;
        if p.is_absolute() {
            return Ok(p);
        }
        let mut cwd = self.provider.current_dir().at(&p)?;
        cwd.append(&p);
        Ok(cwd)
    }

    /// The absolute, symlink-free form of an existing path.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NoSuchFileOrDirectory`] if `p` does not exist.
    pub fn canonical(&self, p: &FsPath) -> Result<FsPath> {
        let p = self.arg(p)?;
        if !self.provider.status(&p).at(&p)?.exists() {
            return Err(Error::library(ErrorKind::NoSuchFileOrDirectory, &p));
        }
        let resolved = self.provider.real_path(&p).at(&p)?;
        Ok(strip_verbatim(resolved))
    }

    /// Canonical form of the longest existing prefix of `p`, with the rest
    /// appended and lexically normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is empty, the existing prefix cannot be
    /// resolved, or the status of any prefix cannot be determined.
    pub fn weakly_canonical(&self, p: &FsPath) -> Result<FsPath> {
        let p = self.arg(p)?;
        if self.provider.status(&p).at(&p)?.exists() {
            return self.canonical(&p);
        }

        let elements: Vec<FsPath> = p.iter().collect();
        let mut head = FsPath::empty(p.style());
        let mut split = elements.len();
        for (i, element) in elements.iter().enumerate() {
            let candidate = head.join(element);
            if !self.provider.status(&candidate).at(&candidate)?.exists() {
                split = i;
                break;
            }
            head = candidate;
        }

        let mut result = if head.is_empty() {
            head
        } else {
            self.canonical(&head)?
        };
        for element in &elements[split..] {
            result.append(element);
        }
        debug!("weakly canonical {p} -> {result} (existing prefix of {split} elements)");
        Ok(result.lexically_normal())
    }

    /// `p` relative to `base`, after weakly canonicalizing both. Empty when
    /// no relative form exists.
    ///
    /// # Errors
    ///
    /// Returns an error if either operand is empty or cannot be resolved.
    pub fn relative(&self, p: &FsPath, base: &FsPath) -> Result<FsPath> {
        let p = self.weakly_canonical(p)?;
        let base = self.weakly_canonical(base)?;
        Ok(p.lexically_relative(&base))
    }

    /// Like [`relative`](Self::relative), but falls back to the weakly
    /// canonical `p` when no relative form exists.
    ///
    /// # Errors
    ///
    /// Returns an error if either operand is empty or cannot be resolved.
    pub fn proximate(&self, p: &FsPath, base: &FsPath) -> Result<FsPath> {
        let p = self.weakly_canonical(p)?;
        let base = self.weakly_canonical(base)?;
        Ok(p.lexically_proximate(&base))
    }
}
