//! Lexical path algebra: joining, editing, normalizing and relating paths
//! without touching the filesystem.

use std::cmp::Ordering;

use super::fs_path::FsPath;
use super::grammar;
use super::style::Style;

impl FsPath {
    /// Appends `other` with path-joining semantics.
    ///
    /// If `other` is absolute, or names a different root-name, it replaces
    /// `self`. Otherwise one preferred separator is inserted where needed and
    /// the part of `other` after its root-name is added. Appending an empty
    /// path adds a trailing separator. `other` is read under `self`'s style.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::FsPath;
    ///
    /// let mut p = FsPath::posix("usr");
    /// p.append("lib");
    /// assert_eq!(p.as_str(), "usr/lib");
    /// p.append("/etc");
    /// assert_eq!(p.as_str(), "/etc");
    ///
    /// let mut w = FsPath::windows("C:\\a");
    /// w.append("\\b");
    /// assert_eq!(w.as_str(), "C:\\b");
    /// ```
    pub fn append(&mut self, other: impl AsRef<str>) -> &mut Self {
        let style = self.style;
        let o = other.as_ref();
        let ob = o.as_bytes();
        let o_rtn = grammar::root_name_end(ob, style);
        let o_rtd = grammar::root_dir_end(ob, style);
        let o_absolute = match style {
            Style::Posix => o_rtd > o_rtn,
            Style::Windows => o_rtn > 0 && o_rtd > o_rtn,
        };
        let s_rtn = self.root_name_end();

        if self.is_empty() || o_absolute || (o_rtn > 0 && o[..o_rtn] != self.inner[..s_rtn]) {
            self.inner = o.to_string();
            return self;
        }

        match style {
            Style::Windows if o_rtd > o_rtn => self.inner.truncate(s_rtn),
            Style::Windows if s_rtn == self.inner.len() => {}
            _ => {
                if !self.ends_with_separator() {
                    self.inner.push(style.preferred_separator());
                }
            }
        }
        self.inner.push_str(&o[o_rtn..]);
        self
    }

    /// Returns a new path with `other` appended.
    #[must_use]
    pub fn join(&self, other: impl AsRef<str>) -> Self {
        let mut joined = self.clone();
        joined.append(other);
        joined
    }

    /// Appends raw text with no separator handling.
    pub fn concat(&mut self, other: impl AsRef<str>) -> &mut Self {
        self.inner.push_str(other.as_ref());
        self
    }

    /// Converts every separator to the preferred one. A no-op on POSIX style.
    pub fn make_preferred(&mut self) -> &mut Self {
        if self.style == Style::Windows && self.inner.contains('/') {
            self.inner = self.inner.replace('/', "\\");
        }
        self
    }

    /// Removes the final component, keeping the separator before it.
    pub fn remove_filename(&mut self) -> &mut Self {
        let start = self.filename_start();
        self.inner.truncate(start);
        self
    }

    /// Replaces the final component with `replacement`.
    pub fn replace_filename(&mut self, replacement: impl AsRef<str>) -> &mut Self {
        self.remove_filename();
        self.inner.push_str(replacement.as_ref());
        self
    }

    /// Replaces the extension, adding a leading dot if `replacement` lacks
    /// one. An empty replacement removes the extension. A Windows stream
    /// suffix is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::FsPath;
    ///
    /// let mut p = FsPath::posix("dir/report.txt");
    /// p.replace_extension("md");
    /// assert_eq!(p.as_str(), "dir/report.md");
    ///
    /// let mut w = FsPath::windows("report.txt:zone");
    /// w.replace_extension(".bak");
    /// assert_eq!(w.as_str(), "report.bak:zone");
    /// ```
    pub fn replace_extension(&mut self, replacement: impl AsRef<str>) -> &mut Self {
        let replacement = replacement.as_ref();
        let ext = grammar::extension_start(self.bytes(), self.style);
        let stream = grammar::stream_start(self.bytes(), self.style);
        let suffix = self.inner[stream..].to_string();

        self.inner.truncate(ext);
        if !replacement.is_empty() {
            if !replacement.starts_with('.') {
                self.inner.push('.');
            }
            self.inner.push_str(replacement);
        }
        self.inner.push_str(&suffix);
        self
    }

    /// Three-way comparison: root-name bytes, then root-directory presence,
    /// then the bytes of the relative path.
    ///
    /// The length of the root-directory separator run does not matter, but
    /// separators inside the relative path are compared literally.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        let (a, b) = (self.bytes(), other.bytes());
        let a_rtn = self.root_name_end();
        let b_rtn = other.root_name_end();
        let a_rtd = self.root_dir_end();
        let b_rtd = other.root_dir_end();

        a[..a_rtn]
            .cmp(&b[..b_rtn])
            .then_with(|| (a_rtd > a_rtn).cmp(&(b_rtd > b_rtn)))
            .then_with(|| a[a_rtd..].cmp(&b[b_rtd..]))
    }

    /// Lexically normalized form.
    ///
    /// `.` elements are dropped, `name/..` pairs cancel, `..` directly under a
    /// root-directory is dropped, separators become preferred and runs of
    /// them collapse. A trailing separator survives when the last element
    /// was a directory marker. A result with no elements becomes `.`; an
    /// empty input stays empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::FsPath;
    ///
    /// assert_eq!(FsPath::posix("/a/../b").lexically_normal().as_str(), "/b");
    /// assert_eq!(FsPath::posix("a/./b/..").lexically_normal().as_str(), "a/");
    /// assert_eq!(FsPath::posix("a/..").lexically_normal().as_str(), ".");
    /// assert_eq!(FsPath::windows("C:/x/../y").lexically_normal().as_str(), "C:\\y");
    /// ```
    #[must_use]
    pub fn lexically_normal(&self) -> Self {
        if self.is_empty() {
            return Self::empty(self.style);
        }
        let style = self.style;
        let sep = style.preferred_separator();
        let rtn = self.root_name_end();
        let rtd = self.root_dir_end();
        let has_root_dir = rtd > rtn;

        let mut out = self.inner[..rtn].to_string();
        if style == Style::Windows {
            out = out.replace('/', "\\");
        }
        if has_root_dir {
            out.push(sep);
        }

        let mut stack: Vec<&str> = Vec::new();
        let mut trailing = false;
        for name in relative_names(&self.inner[rtd..], style) {
            match name {
                "" | "." => trailing = true,
                ".." => match stack.last() {
                    Some(&top) if top != ".." => {
                        stack.pop();
                        trailing = true;
                    }
                    None if has_root_dir => trailing = true,
                    _ => {
                        stack.push("..");
                        trailing = false;
                    }
                },
                _ => {
                    stack.push(name);
                    trailing = false;
                }
            }
        }

        let mut buf = [0u8; 4];
        out.push_str(&stack.join(sep.encode_utf8(&mut buf)));
        if trailing && stack.last().is_some_and(|&top| top != "..") {
            out.push(sep);
        }
        if out.is_empty() {
            out.push('.');
        }
        Self::with_style(out, style)
    }

    /// This path expressed relative to `base`, computed lexically.
    ///
    /// Returns an empty path when no relative form exists: differing
    /// root-names or absoluteness, a rooted `base` against an unrooted `self`,
    /// or more `..` in `base` than it has names to cancel.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::FsPath;
    ///
    /// let p = FsPath::posix("/a/d");
    /// assert_eq!(p.lexically_relative(&FsPath::posix("/a/b/c")).as_str(), "../../d");
    /// assert_eq!(p.lexically_relative(&p).as_str(), ".");
    /// assert!(p.lexically_relative(&FsPath::posix("a")).is_empty());
    /// ```
    #[must_use]
    pub fn lexically_relative(&self, base: &Self) -> Self {
        let style = self.style;
        let base = if base.style == style {
            base.clone()
        } else {
            base.restyled(style)
        };
        let none = Self::empty(style);

        if self.root_name().as_str() != base.root_name().as_str()
            || self.is_absolute() != base.is_absolute()
            || (!self.has_root_directory() && base.has_root_directory())
            || embeds_root_name(self)
            || embeds_root_name(&base)
        {
            return none;
        }

        let ours: Vec<Self> = self.iter().collect();
        let theirs: Vec<Self> = base.iter().collect();
        let common = ours
            .iter()
            .zip(&theirs)
            .take_while(|(a, b)| a.as_str() == b.as_str())
            .count();

        if common == ours.len() && common == theirs.len() {
            return Self::with_style(".", style);
        }

        let root_elements =
            usize::from(base.has_root_name()) + usize::from(base.has_root_directory());
        let mut depth: i64 = 0;
        for element in theirs.iter().skip(common.max(root_elements)) {
            match element.as_str() {
                "" | "." => {}
                ".." => depth -= 1,
                _ => depth += 1,
            }
        }

        if depth < 0 {
            return none;
        }
        if depth == 0 && ours.get(common).map_or(true, Self::is_empty) {
            return Self::with_style(".", style);
        }

        let mut out = none;
        for _ in 0..depth {
            out.append("..");
        }
        for element in &ours[common..] {
            out.append(element);
        }
        out
    }

    /// [`FsPath::lexically_relative`], or `self` unchanged when that is
    /// empty.
    #[must_use]
    pub fn lexically_proximate(&self, base: &Self) -> Self {
        let relative = self.lexically_relative(base);
        if relative.is_empty() {
            self.clone()
        } else {
            relative
        }
    }
}

/// Names of a relative path. Separator runs collapse; a trailing run yields a
/// final empty name.
fn relative_names(rel: &str, style: Style) -> impl Iterator<Item = &str> {
    let trailing = rel.bytes().last().is_some_and(|b| style.is_separator(b));
    rel.split(move |c: char| c.is_ascii() && style.is_separator(c as u8))
        .filter(|name| !name.is_empty())
        .chain(trailing.then_some(""))
}

fn embeds_root_name(p: &FsPath) -> bool {
    p.style == Style::Windows
        && relative_names(&p.inner[p.root_dir_end()..], p.style)
            .any(|name| grammar::root_name_end(name.as_bytes(), p.style) > 0)
}
