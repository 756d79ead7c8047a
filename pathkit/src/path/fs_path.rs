//! The owned path type and its lexical decomposition.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::grammar;
use super::style::Style;

/// An owned path string interpreted under a [`Style`].
///
/// Construction performs no normalization: the text is kept exactly as given
/// and decomposed on demand. Decomposition accessors are total, so an empty
/// path simply has empty parts; filesystem operations are the ones that reject
/// an empty argument.
///
/// Equality, ordering and hashing follow [`FsPath::compare`], so `a//b` and
/// `a/b` are different paths while `//x` and `/x` (POSIX) are the same.
///
/// # Examples
///
/// ```
/// use pathkit::FsPath;
///
/// let p = FsPath::posix("/usr/lib/libc.so.6");
/// assert_eq!(p.parent_path().as_str(), "/usr/lib");
/// assert_eq!(p.filename().as_str(), "libc.so.6");
/// assert_eq!(p.extension().as_str(), ".6");
///
/// let w = FsPath::windows("C:\\Users\\me");
/// assert_eq!(w.root_name().as_str(), "C:");
/// assert!(w.is_absolute());
/// ```
#[derive(Clone)]
pub struct FsPath {
    pub(crate) inner: String,
    pub(crate) style: Style,
}

impl FsPath {
    /// Creates a path in the host's native style.
    pub fn new(s: impl Into<String>) -> Self {
        Self::with_style(s, Style::native())
    }

    /// Creates a path interpreted under `style`.
    pub fn with_style(s: impl Into<String>, style: Style) -> Self {
        Self {
            inner: s.into(),
            style,
        }
    }

    /// Creates a POSIX-style path.
    pub fn posix(s: impl Into<String>) -> Self {
        Self::with_style(s, Style::Posix)
    }

    /// Creates a Windows-style path.
    pub fn windows(s: impl Into<String>) -> Self {
        Self::with_style(s, Style::Windows)
    }

    /// An empty path of the given style.
    #[must_use]
    pub const fn empty(style: Style) -> Self {
        Self {
            inner: String::new(),
            style,
        }
    }

    /// The raw text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consumes the path, returning the raw text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.inner
    }

    /// The grammar this path is interpreted under.
    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Reinterprets the same text under another style.
    #[must_use]
    pub fn restyled(&self, style: Style) -> Self {
        Self::with_style(self.inner.clone(), style)
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    pub(crate) fn sub(&self, start: usize, end: usize) -> Self {
        Self::with_style(&self.inner[start..end], self.style)
    }

    pub(crate) fn root_name_end(&self) -> usize {
        grammar::root_name_end(self.bytes(), self.style)
    }

    pub(crate) fn root_dir_end(&self) -> usize {
        grammar::root_dir_end(self.bytes(), self.style)
    }

    pub(crate) fn filename_start(&self) -> usize {
        grammar::filename_start(self.bytes(), self.style)
    }

    pub(crate) fn ends_with_separator(&self) -> bool {
        self.bytes()
            .last()
            .is_some_and(|&b| self.style.is_separator(b))
    }

    /// The drive, UNC server or device prefix (Windows style only).
    #[must_use]
    pub fn root_name(&self) -> Self {
        self.sub(0, self.root_name_end())
    }

    /// The separator run following the root-name, as written.
    #[must_use]
    pub fn root_directory(&self) -> Self {
        self.sub(self.root_name_end(), self.root_dir_end())
    }

    /// Root-name followed by root-directory.
    #[must_use]
    pub fn root_path(&self) -> Self {
        self.sub(0, self.root_dir_end())
    }

    /// Everything after the root path.
    #[must_use]
    pub fn relative_path(&self) -> Self {
        self.sub(self.root_dir_end(), self.inner.len())
    }

    /// The path without its final component and the separators before it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::FsPath;
    ///
    /// assert_eq!(FsPath::posix("a//b").parent_path().as_str(), "a");
    /// assert_eq!(FsPath::posix("/").parent_path().as_str(), "/");
    /// assert_eq!(FsPath::posix("a/b/").parent_path().as_str(), "a/b");
    /// ```
    #[must_use]
    pub fn parent_path(&self) -> Self {
        self.sub(0, grammar::parent_end(self.bytes(), self.style))
    }

    /// The final component. Empty when the path ends in a separator.
    ///
    /// On Windows style this includes an alternate-data-stream suffix such as
    /// `:stream`.
    #[must_use]
    pub fn filename(&self) -> Self {
        self.sub(self.filename_start(), self.inner.len())
    }

    /// The filename without its extension.
    #[must_use]
    pub fn stem(&self) -> Self {
        self.sub(
            self.filename_start(),
            grammar::extension_start(self.bytes(), self.style),
        )
    }

    /// The extension of the filename, including the leading dot.
    ///
    /// `.` and `..` and dotfiles like `.profile` have no extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::FsPath;
    ///
    /// assert_eq!(FsPath::posix("a/b.tar.gz").extension().as_str(), ".gz");
    /// assert_eq!(FsPath::posix(".profile").extension().as_str(), "");
    /// assert_eq!(FsPath::windows("f.txt:zone").extension().as_str(), ".txt");
    /// ```
    #[must_use]
    pub fn extension(&self) -> Self {
        self.sub(
            grammar::extension_start(self.bytes(), self.style),
            grammar::stream_start(self.bytes(), self.style),
        )
    }

    /// Whether a root-name is present.
    #[must_use]
    pub fn has_root_name(&self) -> bool {
        self.root_name_end() > 0
    }

    /// Whether a root-directory is present.
    #[must_use]
    pub fn has_root_directory(&self) -> bool {
        self.root_dir_end() > self.root_name_end()
    }

    /// Whether a root-name or root-directory is present.
    #[must_use]
    pub fn has_root_path(&self) -> bool {
        self.root_dir_end() > 0
    }

    /// Whether anything follows the root path.
    #[must_use]
    pub fn has_relative_path(&self) -> bool {
        self.root_dir_end() < self.inner.len()
    }

    /// Whether [`FsPath::parent_path`] is non-empty.
    #[must_use]
    pub fn has_parent_path(&self) -> bool {
        grammar::parent_end(self.bytes(), self.style) > 0
    }

    /// Whether [`FsPath::filename`] is non-empty.
    #[must_use]
    pub fn has_filename(&self) -> bool {
        self.filename_start() < self.inner.len()
    }

    /// Whether [`FsPath::stem`] is non-empty.
    #[must_use]
    pub fn has_stem(&self) -> bool {
        grammar::extension_start(self.bytes(), self.style) > self.filename_start()
    }

    /// Whether [`FsPath::extension`] is non-empty.
    #[must_use]
    pub fn has_extension(&self) -> bool {
        grammar::extension_start(self.bytes(), self.style)
            < grammar::stream_start(self.bytes(), self.style)
    }

    /// Whether the path is absolute.
    ///
    /// POSIX style needs only a root-directory; Windows style needs a
    /// root-name and a root-directory, so `\foo` and `C:foo` are relative.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        match self.style {
            Style::Posix => self.has_root_directory(),
            Style::Windows => self.has_root_name() && self.has_root_directory(),
        }
    }

    /// Negation of [`FsPath::is_absolute`].
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl fmt::Debug for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FsPath({:?}, {})", self.inner, self.style)
    }
}

impl From<&str> for FsPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FsPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for FsPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for FsPath {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FsPath {}

impl PartialOrd for FsPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FsPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
            .then_with(|| (self.style as u8).cmp(&(other.style as u8)))
    }
}

impl Hash for FsPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.style.hash(state);
        let rtn = self.root_name_end();
        let rtd = self.root_dir_end();
        if self.style == Style::Windows {
            self.inner[..rtn].hash(state);
        }
        (rtd > rtn).hash(state);
        self.inner[rtd..].hash(state);
    }
}

impl Serialize for FsPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}

impl<'de> Deserialize<'de> for FsPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
