//! Element iteration.
//!
//! A path's elements are, in order: the root-name (if any), the
//! root-directory rendered as one preferred separator (if any), each
//! separator-delimited component of the relative path, and finally one empty
//! element when the relative path ends with a separator.
//!
//! [`PathIter`] is a bidirectional cursor over those elements. Each position
//! is a byte range into the subject path, so stepping backwards recomputes the
//! same boundaries as stepping forwards without keeping any history.
//! [`Components`] wraps two cursors as a standard double-ended iterator.

use super::fs_path::FsPath;
use crate::error::{Error, ErrorKind, Result};

/// A bidirectional cursor over the elements of a path.
///
/// # Examples
///
/// ```
/// use pathkit::{FsPath, PathIter};
///
/// let p = FsPath::posix("/usr/lib/");
/// let mut it = PathIter::begin(&p).unwrap();
/// let mut seen = Vec::new();
/// while !it.is_end() {
///     seen.push(it.get().into_string());
///     it.next();
/// }
/// assert_eq!(seen, ["/", "usr", "lib", ""]);
///
/// it.prev();
/// assert_eq!(it.get().as_str(), "");
/// it.prev();
/// assert_eq!(it.get().as_str(), "lib");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathIter<'a> {
    path: &'a FsPath,
    start: usize,
    end: usize,
}

impl<'a> PathIter<'a> {
    /// A cursor at the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`] if the path is empty.
    pub fn begin(path: &'a FsPath) -> Result<Self> {
        if path.is_empty() {
            return Err(Error::library(ErrorKind::InvalidArgument, path));
        }
        Ok(Self::first(path))
    }

    /// A cursor one past the last element.
    #[must_use]
    pub fn end(path: &'a FsPath) -> Self {
        let len = path.as_str().len();
        Self {
            path,
            start: len,
            end: len,
        }
    }

    fn first(path: &'a FsPath) -> Self {
        let rtn = path.root_name_end();
        let rtd = path.root_dir_end();
        let mut it = Self::end(path);
        if rtn > 0 {
            it.set(0, rtn);
        } else if rtd > 0 {
            it.set(0, rtd);
        } else if !path.is_empty() {
            let stop = it.scan_forward(0);
            it.set(0, stop);
        }
        it
    }

    fn set(&mut self, start: usize, end: usize) {
        self.start = start;
        self.end = end;
    }

    fn len(&self) -> usize {
        self.path.as_str().len()
    }

    fn is_sep(&self, i: usize) -> bool {
        self.path.style().is_separator(self.path.bytes()[i])
    }

    fn scan_forward(&self, mut i: usize) -> usize {
        while i < self.len() && !self.is_sep(i) {
            i += 1;
        }
        i
    }

    fn is_trailing(&self) -> bool {
        self.start == self.end && self.start + 1 == self.len()
    }

    fn is_root_directory(&self) -> bool {
        let rtn = self.path.root_name_end();
        let rtd = self.path.root_dir_end();
        rtd > rtn && self.start == rtn && self.end == rtd
    }

    /// Whether the cursor is one past the last element.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.start == self.len() && self.end == self.len()
    }

    /// Byte offset of the current element in the subject path.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.start
    }

    /// The current element. Empty at the end position.
    #[must_use]
    pub fn get(&self) -> FsPath {
        if self.is_root_directory() {
            let style = self.path.style();
            return FsPath::with_style(style.preferred_separator().to_string(), style);
        }
        self.path.sub(self.start, self.end)
    }

    /// Advances to the next element. Stays put at the end position.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let len = self.len();
        if self.is_end() {
            return;
        }
        if self.is_trailing() {
            self.set(len, len);
            return;
        }
        let rtn = self.path.root_name_end();
        let rtd = self.path.root_dir_end();
        if rtn > 0 && self.start == 0 && self.end == rtn && rtd > rtn {
            self.set(rtn, rtd);
            return;
        }

        let mut p = self.end;
        if p == len {
            self.set(len, len);
            return;
        }
        while p < len && self.is_sep(p) {
            p += 1;
        }
        if p == len {
            self.set(len - 1, len - 1);
            return;
        }
        let stop = self.scan_forward(p);
        self.set(p, stop);
    }

    /// Steps back to the previous element. Stays put at the first element.
    pub fn prev(&mut self) {
        if self.start == 0 {
            return;
        }
        let len = self.len();
        let rtn = self.path.root_name_end();
        let rtd = self.path.root_dir_end();

        if rtd > rtn && self.start == rtd {
            self.set(rtn, rtd);
            return;
        }
        if rtn > 0 && self.start == rtn {
            self.set(0, rtn);
            return;
        }
        if self.is_end() && len > rtd && self.is_sep(len - 1) {
            self.set(len - 1, len - 1);
            return;
        }

        let mut q = if self.is_trailing() { len } else { self.start };
        while q > rtd && self.is_sep(q - 1) {
            q -= 1;
        }
        let e = q;
        while q > rtd && !self.is_sep(q - 1) {
            q -= 1;
        }
        self.set(q, e);
    }
}

impl PartialEq for PathIter<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.path, other.path) && self.start == other.start && self.end == other.end
    }
}

impl Eq for PathIter<'_> {}

/// Double-ended iterator over the elements of a path.
///
/// Yields nothing for an empty path.
#[derive(Debug, Clone)]
pub struct Components<'a> {
    front: PathIter<'a>,
    back: PathIter<'a>,
}

impl<'a> Components<'a> {
    pub(crate) fn new(path: &'a FsPath) -> Self {
        Self {
            front: PathIter::first(path),
            back: PathIter::end(path),
        }
    }
}

impl Iterator for Components<'_> {
    type Item = FsPath;

    fn next(&mut self) -> Option<FsPath> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.next();
        Some(item)
    }
}

impl DoubleEndedIterator for Components<'_> {
    fn next_back(&mut self) -> Option<FsPath> {
        if self.front == self.back {
            return None;
        }
        self.back.prev();
        Some(self.back.get())
    }
}

impl FsPath {
    /// Iterates over the elements of this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::FsPath;
    ///
    /// let p = FsPath::windows("C:/a\\b");
    /// let parts: Vec<String> = p.iter().map(|e| e.into_string()).collect();
    /// assert_eq!(parts, ["C:", "\\", "a", "b"]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Components<'_> {
        Components::new(self)
    }
}

impl<'a> IntoIterator for &'a FsPath {
    type Item = FsPath;
    type IntoIter = Components<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
