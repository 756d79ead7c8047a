//! Common test utilities for integration tests.
//!
//! Fixtures build small trees either on the host filesystem, inside a
//! temporary directory, or in a [`MemoryProvider`].

use std::fs;
use std::path::Path;

use pathkit::{FileSystem, FsPath, MemoryProvider, OsProvider, Style};
use tempfile::TempDir;

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temporary directory")
}

/// The host path `p` as an [`FsPath`] in the host's style.
#[allow(dead_code)]
pub fn host_path(p: &Path) -> FsPath {
    FsPath::with_style(p.to_string_lossy().into_owned(), Style::native())
}

/// A host filesystem with a populated tree under a fresh temp dir.
///
/// ```text
/// root/
///   a          "alpha"
///   b          "bravo"
///   c/
///     d        "delta"
///     e/
/// ```
#[allow(dead_code)]
pub fn host_tree() -> (TempDir, FileSystem<OsProvider>, FsPath) {
    let temp = create_temp_dir();
    let root = temp.path();
    fs::write(root.join("a"), "alpha").unwrap();
    fs::write(root.join("b"), "bravo").unwrap();
    fs::create_dir_all(root.join("c").join("e")).unwrap();
    fs::write(root.join("c").join("d"), "delta").unwrap();
    let base = host_path(root);
    (temp, FileSystem::native(), base)
}

/// The same tree as [`host_tree`], in memory under `/root` or `C:\root`.
#[allow(dead_code)]
pub fn memory_tree(style: Style) -> (FileSystem<MemoryProvider>, FsPath) {
    let provider = MemoryProvider::new(style);
    let base = match style {
        Style::Posix => provider.path("/root"),
        Style::Windows => provider.path("C:\\root"),
    };
    let fs = FileSystem::new(provider);
    fs.create_directories(&base.join("c").join("e")).unwrap();
    for (name, body) in [("a", "alpha"), ("b", "bravo")] {
        fs.provider().write_file(&base.join(name), body).unwrap();
    }
    fs.provider()
        .write_file(&base.join("c").join("d"), "delta")
        .unwrap();
    (fs, base)
}

/// Sorted file names of a listing.
#[allow(dead_code)]
pub fn sorted_names<'a>(entries: impl IntoIterator<Item = &'a FsPath>) -> Vec<String> {
    let mut names: Vec<String> = entries
        .into_iter()
        .map(|p| p.filename().into_string())
        .collect();
    names.sort();
    names
}
