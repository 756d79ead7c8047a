//! In-memory filesystem backend.
//!
//! Entries live in an inode arena; directories map names to inode numbers,
//! so hard links are simply two names for one inode. The tree has a single
//! root: `/` in POSIX style, `C:\` in Windows style.

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use slab::Slab;

use super::FsProvider;
use crate::fs::types::{FileId, FileStatus, FileTime, FileType, Perms, SpaceInfo};
use crate::path::{FsPath, Style};

type Inode = usize;

const MAX_SYMLINK_HOPS: usize = 40;
const DEFAULT_CAPACITY: u64 = 1 << 30;
const WINDOWS_DRIVE: &str = "C:";

static NEXT_DEVICE: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
enum NodeKind {
    File(Vec<u8>),
    Directory(BTreeMap<String, Inode>),
    Symlink(String),
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    perms: Perms,
    mtime: FileTime,
    links: u64,
}

impl Node {
    fn new(kind: NodeKind, perms: Perms) -> Self {
        Self {
            kind,
            perms,
            mtime: FileTime::now(),
            links: 1,
        }
    }

    fn file_type(&self) -> FileType {
        match self.kind {
            NodeKind::File(_) => FileType::Regular,
            NodeKind::Directory(_) => FileType::Directory,
            NodeKind::Symlink(_) => FileType::Symlink,
        }
    }
}

#[derive(Debug)]
struct Inner {
    storage: Slab<Node>,
    root: Inode,
    cwd: Vec<String>,
    denied: HashSet<Inode>,
    unsearchable: HashSet<Inode>,
    capacity: u64,
}

/// A resolved entry and the names leading to it from the root.
struct Resolved {
    ino: Inode,
    names: Vec<String>,
}

fn not_found() -> io::Error {
    io::Error::from(io::ErrorKind::NotFound)
}

fn not_a_directory() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "not a directory")
}

fn other(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Other, message.to_string())
}

impl Inner {
    fn node(&self, ino: Inode) -> io::Result<&Node> {
        self.storage.get(ino).ok_or_else(not_found)
    }

    fn node_mut(&mut self, ino: Inode) -> io::Result<&mut Node> {
        self.storage.get_mut(ino).ok_or_else(not_found)
    }

    fn children(&self, ino: Inode) -> io::Result<&BTreeMap<String, Inode>> {
        match &self.node(ino)?.kind {
            NodeKind::Directory(children) => Ok(children),
            _ => Err(not_a_directory()),
        }
    }

    fn children_mut(&mut self, ino: Inode) -> io::Result<&mut BTreeMap<String, Inode>> {
        match &mut self.node_mut(ino)?.kind {
            NodeKind::Directory(children) => Ok(children),
            _ => Err(not_a_directory()),
        }
    }

    fn child(&self, dir: Inode, name: &str) -> io::Result<Inode> {
        self.children(dir)?.get(name).copied().ok_or_else(not_found)
    }

    fn insert(&mut self, dir: Inode, name: &str, node: Node) -> io::Result<Inode> {
        if self.children(dir)?.contains_key(name) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        let ino = self.storage.insert(node);
        self.children_mut(dir)?.insert(name.to_string(), ino);
        self.touch(dir);
        Ok(ino)
    }

    fn link(&mut self, dir: Inode, name: &str, ino: Inode) -> io::Result<()> {
        if self.children(dir)?.contains_key(name) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        self.children_mut(dir)?.insert(name.to_string(), ino);
        self.node_mut(ino)?.links += 1;
        self.touch(dir);
        Ok(())
    }

    /// Drops the entry `name` from `dir`, freeing the inode with its last link.
    fn unlink(&mut self, dir: Inode, name: &str) -> io::Result<()> {
        let ino = self
            .children_mut(dir)?
            .remove(name)
            .ok_or_else(not_found)?;
        self.touch(dir);
        let node = self.node_mut(ino)?;
        node.links = node.links.saturating_sub(1);
        if node.links == 0 {
            self.storage.remove(ino);
            self.denied.remove(&ino);
            self.unsearchable.remove(&ino);
        }
        Ok(())
    }

    fn touch(&mut self, ino: Inode) {
        if let Some(node) = self.storage.get_mut(ino) {
            node.mtime = FileTime::now();
        }
    }

    fn link_count(&self, ino: Inode) -> io::Result<u64> {
        let node = self.node(ino)?;
        match &node.kind {
            NodeKind::Directory(children) => {
                let subdirs = children
                    .values()
                    .filter(|&&c| matches!(self.storage.get(c), Some(n) if matches!(n.kind, NodeKind::Directory(_))))
                    .count() as u64;
                Ok(2 + subdirs)
            }
            _ => Ok(node.links),
        }
    }

    fn used_bytes(&self) -> u64 {
        self.storage
            .iter()
            .map(|(_, node)| match &node.kind {
                NodeKind::File(data) => data.len() as u64,
                _ => 0,
            })
            .sum()
    }
}

/// An in-memory tree implementing [`FsProvider`].
///
/// Supports directories, regular files, symlinks, hard links, permission
/// bits and modification times, and can simulate unreadable directories.
///
/// # Examples
///
/// ```
/// use pathkit::fs::{FileSystem, MemoryProvider};
/// use pathkit::Style;
///
/// let provider = MemoryProvider::new(Style::Windows);
/// provider.write_file(&provider.path("C:\\notes.txt"), "hi").unwrap();
///
/// let fs = FileSystem::new(provider);
/// assert_eq!(fs.file_size(&"C:/notes.txt".into()).unwrap(), 2);
/// ```
pub struct MemoryProvider {
    style: Style,
    device: u64,
    inner: RwLock<Inner>,
}

impl fmt::Debug for MemoryProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryProvider")
            .field("style", &self.style)
            .field("device", &self.device)
            .finish_non_exhaustive()
    }
}

impl MemoryProvider {
    /// An empty tree, containing only the root and a temporary directory.
    #[must_use]
    pub fn new(style: Style) -> Self {
        let mut storage = Slab::new();
        let root = storage.insert(Node::new(
            NodeKind::Directory(BTreeMap::new()),
            Perms::from_mode(0o755),
        ));
        let mut inner = Inner {
            storage,
            root,
            cwd: Vec::new(),
            denied: HashSet::new(),
            unsearchable: HashSet::new(),
            capacity: DEFAULT_CAPACITY,
        };
        let tmp = Node::new(NodeKind::Directory(BTreeMap::new()), Perms::from_mode(0o1777));
        // The root was just created as a directory, so this cannot fail.
        let _ = inner.insert(root, Self::temp_name(style), tmp);

        Self {
            style,
            device: NEXT_DEVICE.fetch_add(1, Ordering::Relaxed),
            inner: RwLock::new(inner),
        }
    }

    /// Sets the reported capacity in bytes.
    #[must_use]
    pub fn with_capacity(self, capacity: u64) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.capacity = capacity;
        }
        self
    }

    /// Builds a path in this provider's style.
    pub fn path(&self, s: impl Into<String>) -> FsPath {
        FsPath::with_style(s, self.style)
    }

    const fn temp_name(style: Style) -> &'static str {
        match style {
            Style::Posix => "tmp",
            Style::Windows => "Temp",
        }
    }

    fn read(&self) -> io::Result<RwLockReadGuard<'_, Inner>> {
        self.inner.read().map_err(|_| other("memory filesystem lock poisoned"))
    }

    fn write(&self) -> io::Result<RwLockWriteGuard<'_, Inner>> {
        self.inner.write().map_err(|_| other("memory filesystem lock poisoned"))
    }

    fn render(&self, names: &[String]) -> FsPath {
        let mut p = match self.style {
            Style::Posix => self.path("/"),
            Style::Windows => self.path(format!("{WINDOWS_DRIVE}\\")),
        };
        for name in names {
            p.append(name);
        }
        p
    }

    /// Names of `p` below the root, after anchoring it at the cwd.
    fn split(&self, inner: &Inner, p: &FsPath) -> io::Result<Vec<String>> {
        let p = p.restyled(self.style);
        let absolute = if p.is_absolute() {
            p
        } else {
            self.render(&inner.cwd).join(&p)
        };
        if self.style == Style::Windows
            && !absolute
                .root_name()
                .as_str()
                .eq_ignore_ascii_case(WINDOWS_DRIVE)
        {
            return Err(not_found());
        }
        Ok(absolute
            .relative_path()
            .iter()
            .map(FsPath::into_string)
            .filter(|name| !name.is_empty())
            .collect())
    }

    fn walk(&self, inner: &Inner, p: &FsPath, follow_last: bool) -> io::Result<Resolved> {
        let mut pending: VecDeque<String> = self.split(inner, p)?.into();
        let mut stack = vec![inner.root];
        let mut names: Vec<String> = Vec::new();
        let mut hops = 0;

        while let Some(name) = pending.pop_front() {
            match name.as_str() {
                "." => continue,
                ".." => {
                    if stack.len() > 1 {
                        stack.pop();
                        names.pop();
                    }
                    continue;
                }
                _ => {}
            }
            let dir = stack.last().copied().unwrap_or(inner.root);
            if inner.unsearchable.contains(&dir) {
                return Err(io::Error::from(io::ErrorKind::PermissionDenied));
            }
            let child = inner.child(dir, &name)?;
            if let NodeKind::Symlink(target) = &inner.node(child)?.kind {
                if follow_last || !pending.is_empty() {
                    hops += 1;
                    if hops > MAX_SYMLINK_HOPS {
                        return Err(other("too many levels of symbolic links"));
                    }
                    let target = self.path(target.clone());
                    if target.has_root_name()
                        && !target.root_name().as_str().eq_ignore_ascii_case(WINDOWS_DRIVE)
                    {
                        return Err(not_found());
                    }
                    if target.has_root_directory() {
                        stack.truncate(1);
                        names.clear();
                    }
                    let target_names: Vec<String> = target
                        .relative_path()
                        .iter()
                        .map(FsPath::into_string)
                        .filter(|n| !n.is_empty())
                        .collect();
                    for n in target_names.into_iter().rev() {
                        pending.push_front(n);
                    }
                    continue;
                }
            }
            stack.push(child);
            names.push(name);
        }

        Ok(Resolved {
            ino: stack.last().copied().unwrap_or(inner.root),
            names,
        })
    }

    /// The directory that would hold `p`, and `p`'s final name.
    fn parent_of(&self, inner: &Inner, p: &FsPath) -> io::Result<(Inode, String)> {
        let mut names = self.split(inner, p)?;
        let name = match names.pop() {
            Some(n) if n != "." && n != ".." => n,
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "path has no final name",
                ))
            }
        };
        let parent = self.walk(inner, &self.render(&names), true)?;
        inner.children(parent.ino)?;
        Ok((parent.ino, name))
    }

    fn status_with(&self, p: &FsPath, follow: bool) -> io::Result<FileStatus> {
        let inner = self.read()?;
        match self.walk(&inner, p, follow) {
            Ok(found) => {
                let node = inner.node(found.ino)?;
                Ok(FileStatus::new(node.file_type(), node.perms))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(FileStatus::not_found()),
            Err(err) => Err(err),
        }
    }

    /// Creates or overwrites a regular file.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory is missing or `p` is a
    /// directory.
    pub fn write_file(&self, p: &FsPath, contents: impl AsRef<[u8]>) -> io::Result<()> {
        let mut inner = self.write()?;
        let data = contents.as_ref().to_vec();
        match self.walk(&inner, p, true) {
            Ok(found) => {
                let node = inner.node_mut(found.ino)?;
                match &mut node.kind {
                    NodeKind::File(existing) => *existing = data,
                    _ => return Err(other("is a directory")),
                }
                node.mtime = FileTime::now();
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let (dir, name) = self.parent_of(&inner, p)?;
                inner
                    .insert(dir, &name, Node::new(NodeKind::File(data), Perms::from_mode(0o644)))
                    .map(|_| ())
            }
            Err(err) => Err(err),
        }
    }

    /// Contents of a regular file.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is not a regular file.
    pub fn read_file(&self, p: &FsPath) -> io::Result<Vec<u8>> {
        let inner = self.read()?;
        let found = self.walk(&inner, p, true)?;
        match &inner.node(found.ino)?.kind {
            NodeKind::File(data) => Ok(data.clone()),
            _ => Err(other("not a regular file")),
        }
    }

    /// Makes listing directory `p` fail with permission denied.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` does not resolve to a directory.
    pub fn deny_read(&self, p: &FsPath) -> io::Result<()> {
        let mut inner = self.write()?;
        let found = self.walk(&inner, p, true)?;
        inner.children(found.ino)?;
        inner.denied.insert(found.ino);
        Ok(())
    }

    /// Makes looking up any name inside directory `p` fail with permission
    /// denied, like a directory without its search bit.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` does not resolve to a directory.
    pub fn deny_search(&self, p: &FsPath) -> io::Result<()> {
        let mut inner = self.write()?;
        let found = self.walk(&inner, p, true)?;
        inner.children(found.ino)?;
        inner.unsearchable.insert(found.ino);
        Ok(())
    }
}

impl FsProvider for MemoryProvider {
    fn style(&self) -> Style {
        self.style
    }

    fn status(&self, p: &FsPath) -> io::Result<FileStatus> {
        self.status_with(p, true)
    }

    fn symlink_status(&self, p: &FsPath) -> io::Result<FileStatus> {
        self.status_with(p, false)
    }

    fn file_id(&self, p: &FsPath) -> io::Result<FileId> {
        let inner = self.read()?;
        let found = self.walk(&inner, p, true)?;
        Ok(FileId {
            dev: self.device,
            ino: found.ino as u64,
        })
    }

    fn file_size(&self, p: &FsPath) -> io::Result<u64> {
        let inner = self.read()?;
        let found = self.walk(&inner, p, true)?;
        Ok(match &inner.node(found.ino)?.kind {
            NodeKind::File(data) => data.len() as u64,
            _ => 0,
        })
    }

    fn hard_link_count(&self, p: &FsPath) -> io::Result<u64> {
        let inner = self.read()?;
        let found = self.walk(&inner, p, true)?;
        inner.link_count(found.ino)
    }

    fn read_dir(&self, p: &FsPath) -> io::Result<Vec<String>> {
        let inner = self.read()?;
        let found = self.walk(&inner, p, true)?;
        if inner.denied.contains(&found.ino) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        Ok(inner.children(found.ino)?.keys().cloned().collect())
    }

    fn real_path(&self, p: &FsPath) -> io::Result<FsPath> {
        let inner = self.read()?;
        let found = self.walk(&inner, p, true)?;
        Ok(self.render(&found.names))
    }

    fn current_dir(&self) -> io::Result<FsPath> {
        let inner = self.read()?;
        Ok(self.render(&inner.cwd))
    }

    fn set_current_dir(&self, p: &FsPath) -> io::Result<()> {
        let mut inner = self.write()?;
        let found = self.walk(&inner, p, true)?;
        inner.children(found.ino)?;
        inner.cwd = found.names;
        Ok(())
    }

    fn create_dir(&self, p: &FsPath, perms: Option<Perms>) -> io::Result<()> {
        let mut inner = self.write()?;
        let (dir, name) = self.parent_of(&inner, p)?;
        let perms = perms.unwrap_or_else(|| Perms::from_mode(0o755));
        inner
            .insert(dir, &name, Node::new(NodeKind::Directory(BTreeMap::new()), perms))
            .map(|_| ())
    }

    fn remove_dir(&self, p: &FsPath) -> io::Result<()> {
        let mut inner = self.write()?;
        let (dir, name) = self.parent_of(&inner, p)?;
        let ino = inner.child(dir, &name)?;
        match &inner.node(ino)?.kind {
            NodeKind::Directory(children) if children.is_empty() => inner.unlink(dir, &name),
            NodeKind::Directory(_) => Err(other("directory not empty")),
            _ => Err(other("not a directory")),
        }
    }

    fn remove_file(&self, p: &FsPath) -> io::Result<()> {
        let mut inner = self.write()?;
        let (dir, name) = self.parent_of(&inner, p)?;
        let ino = inner.child(dir, &name)?;
        if matches!(inner.node(ino)?.kind, NodeKind::Directory(_)) {
            return Err(other("is a directory"));
        }
        inner.unlink(dir, &name)
    }

    fn remove_symlink(&self, p: &FsPath) -> io::Result<()> {
        self.remove_file(p)
    }

    fn hard_link(&self, target: &FsPath, link: &FsPath) -> io::Result<()> {
        let mut inner = self.write()?;
        let found = self.walk(&inner, target, false)?;
        if matches!(inner.node(found.ino)?.kind, NodeKind::Directory(_)) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        let (dir, name) = self.parent_of(&inner, link)?;
        inner.link(dir, &name, found.ino)
    }

    fn read_link(&self, p: &FsPath) -> io::Result<FsPath> {
        let inner = self.read()?;
        let found = self.walk(&inner, p, false)?;
        match &inner.node(found.ino)?.kind {
            NodeKind::Symlink(target) => Ok(self.path(target.clone())),
            _ => Err(io::Error::new(io::ErrorKind::InvalidInput, "not a symlink")),
        }
    }

    fn symlink(&self, target: &FsPath, link: &FsPath, _directory: bool) -> io::Result<()> {
        let mut inner = self.write()?;
        let (dir, name) = self.parent_of(&inner, link)?;
        let node = Node::new(
            NodeKind::Symlink(target.as_str().to_string()),
            Perms::from_mode(0o777),
        );
        inner.insert(dir, &name, node).map(|_| ())
    }

    fn last_write_time(&self, p: &FsPath) -> io::Result<FileTime> {
        let inner = self.read()?;
        let found = self.walk(&inner, p, true)?;
        Ok(inner.node(found.ino)?.mtime)
    }

    fn set_last_write_time(&self, p: &FsPath, time: FileTime) -> io::Result<()> {
        let mut inner = self.write()?;
        let found = self.walk(&inner, p, true)?;
        inner.node_mut(found.ino)?.mtime = time;
        Ok(())
    }

    fn set_permissions(&self, p: &FsPath, perms: Perms, follow: bool) -> io::Result<()> {
        let mut inner = self.write()?;
        let found = self.walk(&inner, p, follow)?;
        inner.node_mut(found.ino)?.perms = perms;
        Ok(())
    }

    fn space(&self, p: &FsPath) -> io::Result<SpaceInfo> {
        let inner = self.read()?;
        self.walk(&inner, p, true)?;
        let free = inner.capacity.saturating_sub(inner.used_bytes());
        Ok(SpaceInfo {
            capacity: inner.capacity,
            free,
            available: free,
        })
    }

    fn copy_contents(&self, from: &FsPath, to: &FsPath) -> io::Result<()> {
        let mut inner = self.write()?;
        let source = self.walk(&inner, from, true)?;
        let (data, perms) = match &inner.node(source.ino)?.kind {
            NodeKind::File(data) => (data.clone(), inner.node(source.ino)?.perms),
            _ => return Err(other("not a regular file")),
        };
        match self.walk(&inner, to, true) {
            Ok(dest) => {
                let node = inner.node_mut(dest.ino)?;
                match &mut node.kind {
                    NodeKind::File(existing) => *existing = data,
                    _ => return Err(other("is a directory")),
                }
                node.perms = perms;
                node.mtime = FileTime::now();
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let (dir, name) = self.parent_of(&inner, to)?;
                inner
                    .insert(dir, &name, Node::new(NodeKind::File(data), perms))
                    .map(|_| ())
            }
            Err(err) => Err(err),
        }
    }

    fn resize(&self, p: &FsPath, size: u64) -> io::Result<()> {
        let len = usize::try_from(size)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "size too large"))?;
        let mut inner = self.write()?;
        let found = self.walk(&inner, p, true)?;
        let node = inner.node_mut(found.ino)?;
        match &mut node.kind {
            NodeKind::File(data) => data.resize(len, 0),
            _ => return Err(other("not a regular file")),
        }
        node.mtime = FileTime::now();
        Ok(())
    }

    fn rename(&self, from: &FsPath, to: &FsPath) -> io::Result<()> {
        let mut inner = self.write()?;
        let (from_dir, from_name) = self.parent_of(&inner, from)?;
        let moving = inner.child(from_dir, &from_name)?;
        let (to_dir, to_name) = self.parent_of(&inner, to)?;
        if from_dir == to_dir && from_name == to_name {
            return Ok(());
        }

        let moving_dir = matches!(inner.node(moving)?.kind, NodeKind::Directory(_));
        if moving_dir {
            let source = self.walk(&inner, from, false)?;
            let dest_parent = self.walk(&inner, &to.parent_path(), true).or_else(|_| {
                self.walk(&inner, &self.render(&inner.cwd), true)
            })?;
            if dest_parent.names.starts_with(&source.names) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "cannot move a directory into itself",
                ));
            }
        }

        if let Ok(existing) = inner.child(to_dir, &to_name) {
            match (&inner.node(existing)?.kind, moving_dir) {
                (NodeKind::Directory(children), true) if children.is_empty() => {}
                (NodeKind::Directory(_), true) => return Err(other("directory not empty")),
                (NodeKind::Directory(_), false) => return Err(other("is a directory")),
                (_, true) => return Err(other("not a directory")),
                (_, false) => {}
            }
            inner.unlink(to_dir, &to_name)?;
        }

        inner.children_mut(from_dir)?.remove(&from_name);
        inner.children_mut(to_dir)?.insert(to_name, moving);
        inner.touch(from_dir);
        inner.touch(to_dir);
        Ok(())
    }

    fn temp_dir(&self) -> io::Result<FsPath> {
        Ok(self.render(&[Self::temp_name(self.style).to_string()]))
    }
}
