//! Host filesystem backend.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::FsProvider;
use crate::fs::types::{FileId, FileStatus, FileTime, FileType, Perms, SpaceInfo};
use crate::path::{FsPath, Style};

/// Environment variables consulted for the temporary directory, in order.
pub const TEMP_DIR_VARS: [&str; 4] = ["TMPDIR", "TMP", "TEMP", "TEMPDIR"];

/// The host operating system's filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProvider;

impl OsProvider {
    /// Creates the host provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn host(p: &FsPath) -> &Path {
    Path::new(p.as_str())
}

fn from_host(p: PathBuf) -> io::Result<FsPath> {
    p.into_os_string()
        .into_string()
        .map(FsPath::new)
        .map_err(|raw| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("path is not valid UTF-8: {}", raw.to_string_lossy()),
            )
        })
}

/// An entry name, refused rather than guessed when it is not UTF-8.
fn entry_name(name: OsString) -> io::Result<String> {
    name.into_string().map_err(|raw| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("entry name is not valid UTF-8: {}", raw.to_string_lossy()),
        )
    })
}

/// Nonexistence, including a path prefix that is not a directory.
fn is_missing(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::NotFound {
        return true;
    }
    #[cfg(unix)]
    {
        err.raw_os_error() == Some(nix::errno::Errno::ENOTDIR as i32)
    }
    #[cfg(not(unix))]
    {
        false
    }
}

fn status_of(result: io::Result<fs::Metadata>) -> io::Result<FileStatus> {
    match result {
        Ok(meta) => Ok(FileStatus::new(file_type_of(&meta), perms_of(&meta))),
        Err(err) if is_missing(&err) => Ok(FileStatus::not_found()),
        Err(err) => Err(err),
    }
}

fn file_type_of(meta: &fs::Metadata) -> FileType {
    let ft = meta.file_type();
    if ft.is_symlink() {
        return FileType::Symlink;
    }
    if ft.is_dir() {
        return FileType::Directory;
    }
    if ft.is_file() {
        return FileType::Regular;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if ft.is_block_device() {
            return FileType::Block;
        }
        if ft.is_char_device() {
            return FileType::Character;
        }
        if ft.is_fifo() {
            return FileType::Fifo;
        }
        if ft.is_socket() {
            return FileType::Socket;
        }
    }
    FileType::Unknown
}

#[cfg(unix)]
fn perms_of(meta: &fs::Metadata) -> Perms {
    use std::os::unix::fs::PermissionsExt;
    Perms::from_mode(meta.permissions().mode())
}

#[cfg(not(unix))]
fn perms_of(meta: &fs::Metadata) -> Perms {
    if meta.permissions().readonly() {
        Perms::from_mode(0o555)
    } else {
        Perms::from_mode(0o777)
    }
}

impl FsProvider for OsProvider {
    fn style(&self) -> Style {
        Style::native()
    }

    fn status(&self, p: &FsPath) -> io::Result<FileStatus> {
        status_of(fs::metadata(host(p)))
    }

    fn symlink_status(&self, p: &FsPath) -> io::Result<FileStatus> {
        status_of(fs::symlink_metadata(host(p)))
    }

    #[cfg(unix)]
    fn file_id(&self, p: &FsPath) -> io::Result<FileId> {
        use std::os::unix::fs::MetadataExt;
        let meta = fs::metadata(host(p))?;
        Ok(FileId {
            dev: meta.dev(),
            ino: meta.ino(),
        })
    }

    #[cfg(not(unix))]
    fn file_id(&self, p: &FsPath) -> io::Result<FileId> {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let real = fs::canonicalize(host(p))?;
        let mut hasher = DefaultHasher::new();
        real.hash(&mut hasher);
        Ok(FileId {
            dev: 0,
            ino: hasher.finish(),
        })
    }

    fn file_size(&self, p: &FsPath) -> io::Result<u64> {
        Ok(fs::metadata(host(p))?.len())
    }

    #[cfg(unix)]
    fn hard_link_count(&self, p: &FsPath) -> io::Result<u64> {
        use std::os::unix::fs::MetadataExt;
        Ok(fs::metadata(host(p))?.nlink())
    }

    #[cfg(not(unix))]
    fn hard_link_count(&self, p: &FsPath) -> io::Result<u64> {
        fs::metadata(host(p)).map(|_| 1)
    }

    fn read_dir(&self, p: &FsPath) -> io::Result<Vec<String>> {
        fs::read_dir(host(p))?
            .map(|entry| entry_name(entry?.file_name()))
            .collect()
    }

    fn real_path(&self, p: &FsPath) -> io::Result<FsPath> {
        from_host(fs::canonicalize(host(p))?)
    }

    fn current_dir(&self) -> io::Result<FsPath> {
        from_host(env::current_dir()?)
    }

    fn set_current_dir(&self, p: &FsPath) -> io::Result<()> {
        env::set_current_dir(host(p))
    }

    fn create_dir(&self, p: &FsPath, perms: Option<Perms>) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        if let Some(perms) = perms {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(perms.mode());
        }
        #[cfg(not(unix))]
        let _ = perms;
        builder.create(host(p))
    }

    fn remove_dir(&self, p: &FsPath) -> io::Result<()> {
        fs::remove_dir(host(p))
    }

    fn remove_file(&self, p: &FsPath) -> io::Result<()> {
        fs::remove_file(host(p))
    }

    #[cfg(not(windows))]
    fn remove_symlink(&self, p: &FsPath) -> io::Result<()> {
        fs::remove_file(host(p))
    }

    // Directory symlinks and junctions are removed as directories.
    #[cfg(windows)]
    fn remove_symlink(&self, p: &FsPath) -> io::Result<()> {
        fs::remove_file(host(p)).or_else(|_| fs::remove_dir(host(p)))
    }

    fn hard_link(&self, target: &FsPath, link: &FsPath) -> io::Result<()> {
        fs::hard_link(host(target), host(link))
    }

    fn read_link(&self, p: &FsPath) -> io::Result<FsPath> {
        from_host(fs::read_link(host(p))?)
    }

    #[cfg(unix)]
    fn symlink(&self, target: &FsPath, link: &FsPath, _directory: bool) -> io::Result<()> {
        std::os::unix::fs::symlink(host(target), host(link))
    }

    #[cfg(windows)]
    fn symlink(&self, target: &FsPath, link: &FsPath, directory: bool) -> io::Result<()> {
        if directory {
            std::os::windows::fs::symlink_dir(host(target), host(link))
        } else {
            std::os::windows::fs::symlink_file(host(target), host(link))
        }
    }

    #[cfg(not(any(unix, windows)))]
    fn symlink(&self, _target: &FsPath, _link: &FsPath, _directory: bool) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::Unsupported))
    }

    fn last_write_time(&self, p: &FsPath) -> io::Result<FileTime> {
        let meta = fs::metadata(host(p))?;
        let mtime = filetime::FileTime::from_last_modification_time(&meta);
        Ok(FileTime {
            seconds: mtime.unix_seconds(),
            nanoseconds: mtime.nanoseconds(),
        })
    }

    fn set_last_write_time(&self, p: &FsPath, time: FileTime) -> io::Result<()> {
        filetime::set_file_mtime(
            host(p),
            filetime::FileTime::from_unix_time(time.seconds, time.nanoseconds),
        )
    }

    fn set_permissions(&self, p: &FsPath, perms: Perms, follow: bool) -> io::Result<()> {
        if !follow && fs::symlink_metadata(host(p))?.file_type().is_symlink() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "cannot change the permissions of a symlink itself",
            ));
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(host(p), fs::Permissions::from_mode(perms.mode()))
        }
        #[cfg(not(unix))]
        {
            let mut current = fs::metadata(host(p))?.permissions();
            current.set_readonly(!perms.contains(Perms::OWNER_WRITE));
            fs::set_permissions(host(p), current)
        }
    }

    #[cfg(unix)]
    #[allow(clippy::useless_conversion)]
    fn space(&self, p: &FsPath) -> io::Result<SpaceInfo> {
        let stat = nix::sys::statvfs::statvfs(host(p))?;
        let fragment = u64::from(stat.fragment_size());
        Ok(SpaceInfo {
            capacity: u64::from(stat.blocks()).saturating_mul(fragment),
            free: u64::from(stat.blocks_free()).saturating_mul(fragment),
            available: u64::from(stat.blocks_available()).saturating_mul(fragment),
        })
    }

    #[cfg(not(unix))]
    fn space(&self, p: &FsPath) -> io::Result<SpaceInfo> {
        fs::metadata(host(p)).map(|_| SpaceInfo::UNKNOWN)
    }

    fn copy_contents(&self, from: &FsPath, to: &FsPath) -> io::Result<()> {
        fs::copy(host(from), host(to)).map(|_| ())
    }

    fn resize(&self, p: &FsPath, size: u64) -> io::Result<()> {
        fs::OpenOptions::new().write(true).open(host(p))?.set_len(size)
    }

    fn rename(&self, from: &FsPath, to: &FsPath) -> io::Result<()> {
        fs::rename(host(from), host(to))
    }

    fn temp_dir(&self) -> io::Result<FsPath> {
        if cfg!(windows) {
            return from_host(env::temp_dir());
        }
        let found = TEMP_DIR_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty());
        Ok(FsPath::new(found.unwrap_or_else(|| "/tmp".to_string())))
    }
}
