//! Integration tests for filesystem operations on the host filesystem.

mod common;

use std::fs;

use common::{host_path, host_tree, memory_tree, sorted_names};
use pathkit::{
    CopyOptions, DirectoryOptions, ErrorKind, ExistingPolicy, FileSystem, FileTime, FsPath,
    FsProvider, PermMode, PermOptions, Perms, Style, SymlinkPolicy,
};

/// Joining `base` with the relative form of `p` reaches the same entry as
/// `p`, and `proximate` agrees with `relative` whenever the latter exists.
fn assert_relative_round_trip<P: FsProvider>(fs: &FileSystem<P>, p: &FsPath, base: &FsPath) {
    let rel = fs.relative(p, base).unwrap();
    assert!(!rel.is_empty(), "no relative form of {p} from {base}");
    let rejoined = base.join(&rel);
    assert!(
        fs.equivalent(&rejoined, p).unwrap(),
        "{base} + {rel} does not reach {p}"
    );
    assert_eq!(fs.proximate(p, base).unwrap(), rel);
}

/// Adds `root/far/deep/link -> root/c` to a fixture tree.
fn add_deep_link<P: FsProvider>(fs: &FileSystem<P>, root: &FsPath) -> FsPath {
    let deep = root.join("far").join("deep");
    fs.create_directories(&deep).unwrap();
    let link = deep.join("link");
    fs.create_directory_symlink(&root.join("c"), &link).unwrap();
    link
}

fn check_relative_round_trips<P: FsProvider>(fs: &FileSystem<P>, root: &FsPath) {
    let link = add_deep_link(fs, root);
    let c = root.join("c");

    assert_relative_round_trip(fs, &c.join("d"), root);
    assert_relative_round_trip(fs, &root.join("a"), &c.join("e"));
    assert_relative_round_trip(fs, &c.join("e"), &c.join("e"));

    // Bases and targets reached through the symlink
    assert_relative_round_trip(fs, &root.join("a"), &link);
    assert_relative_round_trip(fs, &link.join("d"), &root.join("far"));
    assert_relative_round_trip(fs, &c.join("d"), &link.join("e"));

    // The relative form is computed from the resolved base, not its spelling.
    let rel = fs.relative(&root.join("a"), &link).unwrap();
    let elements: Vec<String> = rel.iter().map(FsPath::into_string).collect();
    assert_eq!(elements, ["..", "a"]);
}

#[test]
fn test_relative_round_trip_in_memory() {
    for style in [Style::Posix, Style::Windows] {
        let (fs, root) = memory_tree(style);
        check_relative_round_trips(&fs, &root);
    }
}

#[cfg(unix)]
#[test]
fn test_relative_round_trip_on_host() {
    let (_temp, fs, root) = host_tree();
    check_relative_round_trips(&fs, &root);
}

#[test]
fn test_directory_iterator_lists_children() {
    let (_temp, fs, root) = host_tree();
    let entries = fs
        .directory_iterator(&root, DirectoryOptions::default())
        .unwrap();
    assert_eq!(sorted_names(&entries), ["a", "b", "c"]);
}

#[test]
fn test_recursive_iterator_visits_everything() {
    let (_temp, fs, root) = host_tree();
    let entries = fs
        .recursive_directory_iterator(&root, DirectoryOptions::default())
        .unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(sorted_names(&entries), ["a", "b", "c", "d", "e"]);
}

#[test]
fn test_create_directories_then_remove_all() {
    let (_temp, fs, root) = host_tree();
    let deep = root.join("x").join("y").join("z");
    assert!(fs.create_directories(&deep).unwrap());
    assert!(!fs.create_directories(&deep).unwrap());
    assert!(fs.is_directory(&deep).unwrap());

    assert_eq!(fs.remove_all(&root.join("x")).unwrap(), 3);
    assert!(!fs.exists(&root.join("x")).unwrap());
    assert_eq!(fs.remove_all(&root.join("x")).unwrap(), 0);
}

#[test]
fn test_create_directories_through_file_fails() {
    let (_temp, fs, root) = host_tree();
    let err = fs.create_directories(&root.join("a").join("sub")).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::NotADirectory));
}

#[test]
fn test_remove_all_counts_whole_tree() {
    let (temp, fs, root) = host_tree();
    assert_eq!(fs.remove_all(&root).unwrap(), 6);
    assert!(!temp.path().exists());
}

#[test]
fn test_remove_reports_absence() {
    let (_temp, fs, root) = host_tree();
    assert!(fs.remove(&root.join("a")).unwrap());
    assert!(!fs.remove(&root.join("a")).unwrap());
    assert!(fs.remove(&root.join("c")).is_err());
}

#[test]
fn test_recursive_copy() {
    let (temp, fs, root) = host_tree();
    let dest = root.join("copy");
    fs.copy(&root.join("c"), &dest, CopyOptions::default().recursive(true))
        .unwrap();

    assert_eq!(
        fs::read_to_string(temp.path().join("copy").join("d")).unwrap(),
        "delta"
    );
    assert!(fs.is_directory(&dest.join("e")).unwrap());
}

#[test]
fn test_non_recursive_copy_creates_empty_directory() {
    let (_temp, fs, root) = host_tree();
    let dest = root.join("shallow");
    fs.copy(&root.join("c"), &dest, CopyOptions::default()).unwrap();
    assert!(fs.is_directory(&dest).unwrap());
    assert!(fs.is_empty(&dest).unwrap());
}

#[test]
fn test_copy_file_existing_policies() {
    let (temp, fs, root) = host_tree();
    let a = root.join("a");
    let b = root.join("b");

    let err = fs.copy_file(&a, &b, CopyOptions::default()).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::FileExists));

    let skip = CopyOptions::default().existing(ExistingPolicy::Skip);
    assert!(!fs.copy_file(&a, &b, skip).unwrap());
    assert_eq!(fs::read_to_string(temp.path().join("b")).unwrap(), "bravo");

    let overwrite = CopyOptions::default().existing(ExistingPolicy::Overwrite);
    assert!(fs.copy_file(&a, &b, overwrite).unwrap());
    assert_eq!(fs::read_to_string(temp.path().join("b")).unwrap(), "alpha");
}

#[test]
fn test_copy_file_update_only_when_newer() {
    let (temp, fs, root) = host_tree();
    let a = root.join("a");
    let b = root.join("b");
    let update = CopyOptions::default().existing(ExistingPolicy::Update);

    fs.set_last_write_time(&a, FileTime::new(1_000_000, 0).unwrap())
        .unwrap();
    fs.set_last_write_time(&b, FileTime::new(2_000_000, 0).unwrap())
        .unwrap();
    assert!(!fs.copy_file(&a, &b, update).unwrap());
    assert_eq!(fs::read_to_string(temp.path().join("b")).unwrap(), "bravo");

    fs.set_last_write_time(&a, FileTime::new(3_000_000, 0).unwrap())
        .unwrap();
    assert!(fs.copy_file(&a, &b, update).unwrap());
    assert_eq!(fs::read_to_string(temp.path().join("b")).unwrap(), "alpha");
}

#[test]
fn test_copy_onto_itself_fails() {
    let (_temp, fs, root) = host_tree();
    let a = root.join("a");
    let err = fs
        .copy_file(&a, &a, CopyOptions::default().existing(ExistingPolicy::Overwrite))
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::FileExists));
}

#[test]
fn test_file_queries() {
    let (_temp, fs, root) = host_tree();
    assert_eq!(fs.file_size(&root.join("a")).unwrap(), 5);
    assert!(fs.is_regular_file(&root.join("a")).unwrap());
    assert!(fs.is_empty(&root.join("c").join("e")).unwrap());
    assert!(!fs.is_empty(&root.join("c")).unwrap());

    let err = fs.file_size(&root.join("c")).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::IsADirectory));
    assert!(fs.file_size(&root.join("missing")).unwrap_err().is_not_found());
}

#[test]
fn test_hard_links_are_equivalent() {
    let (_temp, fs, root) = host_tree();
    let link = root.join("a-link");
    fs.create_hard_link(&root.join("a"), &link).unwrap();
    assert!(fs.equivalent(&root.join("a"), &link).unwrap());
    assert!(!fs.equivalent(&root.join("a"), &root.join("b")).unwrap());
    assert_eq!(fs.hard_link_count(&link).unwrap(), 2);
}

#[test]
fn test_rename_and_resize() {
    let (_temp, fs, root) = host_tree();
    let moved = root.join("moved");
    fs.rename(&root.join("a"), &moved).unwrap();
    assert!(!fs.exists(&root.join("a")).unwrap());

    fs.resize_file(&moved, 2).unwrap();
    assert_eq!(fs.file_size(&moved).unwrap(), 2);
    fs.resize_file(&moved, 64).unwrap();
    assert_eq!(fs.file_size(&moved).unwrap(), 64);
}

#[test]
fn test_weakly_canonical_keeps_missing_tail() {
    let (_temp, fs, root) = host_tree();
    let canonical_root = fs.canonical(&root).unwrap();
    let p = root.join("c").join("..").join("nope").join("deeper");
    let result = fs.weakly_canonical(&p).unwrap();
    assert_eq!(result, canonical_root.join("nope").join("deeper"));
}

#[test]
fn test_canonical_missing_fails() {
    let (_temp, fs, root) = host_tree();
    assert!(fs.canonical(&root.join("nope")).unwrap_err().is_not_found());
}

#[test]
fn test_temp_directory_path_is_directory() {
    let (_temp, fs, _root) = host_tree();
    let tmp = fs.temp_directory_path().unwrap();
    assert!(fs.is_directory(&tmp).unwrap());
}

#[test]
fn test_last_write_time_round_trip() {
    let (_temp, fs, root) = host_tree();
    let time = FileTime::new(1_500_000_000, 0).unwrap();
    fs.set_last_write_time(&root.join("a"), time).unwrap();
    assert_eq!(fs.last_write_time(&root.join("a")).unwrap(), time);
}

#[cfg(unix)]
mod unix {
    use super::*;

    #[test]
    fn test_symlink_round_trip() {
        let (_temp, fs, root) = host_tree();
        let link = root.join("to-c");
        fs.create_directory_symlink(&root.join("c"), &link).unwrap();
        assert!(fs.is_symlink(&link).unwrap());
        assert!(fs.is_directory(&link).unwrap());
        assert_eq!(fs.read_symlink(&link).unwrap(), root.join("c"));
        assert_eq!(
            fs.canonical(&link.join("d")).unwrap(),
            fs.canonical(&root.join("c").join("d")).unwrap()
        );
        assert!(fs.remove(&link).unwrap());
        assert!(fs.exists(&root.join("c").join("d")).unwrap());
    }

    #[test]
    fn test_copy_symlinks_as_links() {
        let (_temp, fs, root) = host_tree();
        fs.create_symlink(&root.join("a"), &root.join("c").join("la"))
            .unwrap();
        let opts = CopyOptions::default()
            .recursive(true)
            .symlinks(SymlinkPolicy::Copy);
        fs.copy(&root.join("c"), &root.join("c2"), opts).unwrap();
        assert!(fs.is_symlink(&root.join("c2").join("la")).unwrap());
    }

    #[test]
    fn test_permissions_modes() {
        let (_temp, fs, root) = host_tree();
        let a = root.join("a");
        fs.permissions(&a, Perms::from_mode(0o600), PermOptions::new(PermMode::Replace))
            .unwrap();
        fs.permissions(&a, Perms::GROUP_READ, PermOptions::new(PermMode::Add))
            .unwrap();
        fs.permissions(&a, Perms::OWNER_WRITE, PermOptions::new(PermMode::Remove))
            .unwrap();
        let perms = fs.status(&a).unwrap().permissions.unwrap();
        assert_eq!(perms.mode(), 0o440);
    }
}

#[test]
fn test_memory_and_host_agree() {
    let (_temp, host, host_root) = host_tree();
    let (memory, memory_root) = memory_tree(Style::Posix);

    let host_entries = host
        .recursive_directory_iterator(&host_root, DirectoryOptions::default())
        .unwrap();
    let memory_entries = memory
        .recursive_directory_iterator(&memory_root, DirectoryOptions::default())
        .unwrap();
    assert_eq!(sorted_names(&host_entries), sorted_names(&memory_entries));

    assert_eq!(host.remove_all(&host_root.join("c")).unwrap(), 3);
    assert_eq!(memory.remove_all(&memory_root.join("c")).unwrap(), 3);
}

#[test]
fn test_host_path_helper_round_trip() {
    let temp = common::create_temp_dir();
    let p = host_path(temp.path());
    assert!(p.is_absolute());
}
