//! Stat resolver
//!
//! Retrieves metadata for `src` and `dest` with the symlink-traversal
//! policy implied by [`crate::options::CopyOptions::dereference`]. A
//! missing `dest` is not an error here — it is folded into `None` so
//! preflight and the copiers can treat "doesn't exist yet" as an
//! ordinary case rather than a special one.

use std::fs;
use std::io;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;
use std::time::{Duration, SystemTime};

use crate::error::Result;

/// The filesystem object kinds the engine can classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// An ordinary file.
    RegularFile,
    /// A directory.
    Directory,
    /// A symbolic link.
    Symlink,
    /// A block device node.
    BlockDevice,
    /// A character device node.
    CharDevice,
    /// A Unix domain socket.
    Socket,
    /// A named pipe.
    Fifo,
    /// Anything else the platform can report.
    Unknown,
}

/// A snapshot of a path's metadata, wide enough for device ids and
/// inode numbers that exceed 32 bits.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    /// The entry's filesystem kind.
    pub kind: EntryKind,
    /// Permission bits (the low 12 bits of `st_mode`).
    pub mode: u32,
    /// Last access time.
    pub atime: SystemTime,
    /// Last modification time.
    pub mtime: SystemTime,
    /// Device id, wide enough to never truncate.
    pub dev: u64,
    /// Inode number, wide enough to never truncate.
    pub ino: u64,
}

impl Stat {
    /// `true` if this entry is a directory.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    /// Build a `Stat` from an already-retrieved `std::fs::Metadata`,
    /// classifying its file type and widening device/inode to `u64`.
    pub(crate) fn from_metadata(meta: &fs::Metadata) -> Self {
        let file_type = meta.file_type();
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_file() {
            EntryKind::RegularFile
        } else if file_type.is_block_device() {
            EntryKind::BlockDevice
        } else if file_type.is_char_device() {
            EntryKind::CharDevice
        } else if file_type.is_socket() {
            EntryKind::Socket
        } else if file_type.is_fifo() {
            EntryKind::Fifo
        } else {
            EntryKind::Unknown
        };

        Self {
            kind,
            mode: meta.mode() & 0o7777,
            atime: seconds_and_nanos(meta.atime(), meta.atime_nsec()),
            mtime: seconds_and_nanos(meta.mtime(), meta.mtime_nsec()),
            dev: meta.dev(),
            ino: meta.ino(),
        }
    }
}

fn seconds_and_nanos(secs: i64, nanos: i64) -> SystemTime {
    if secs >= 0 {
        SystemTime::UNIX_EPOCH + Duration::new(secs as u64, nanos as u32)
    } else {
        SystemTime::UNIX_EPOCH - Duration::new((-secs) as u64, 0)
    }
}

/// `lstat(2)`: metadata without following a trailing symlink.
pub fn lstat(path: &Path) -> Result<Stat> {
    Ok(Stat::from_metadata(&fs::symlink_metadata(path)?))
}

/// `stat(2)`: metadata following a trailing symlink.
pub fn stat(path: &Path) -> Result<Stat> {
    Ok(Stat::from_metadata(&fs::metadata(path)?))
}

fn stat_or_missing(path: &Path, dereference: bool) -> Result<Option<Stat>> {
    let result = if dereference {
        fs::metadata(path)
    } else {
        fs::symlink_metadata(path)
    };
    match result {
        Ok(meta) => Ok(Some(Stat::from_metadata(&meta))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Resolve stats for `src` (required to exist) and `dest` (may not
/// exist). The `dereference` policy governs stat-vs-lstat for both.
pub fn get_stats(src: &Path, dest: &Path, dereference: bool) -> Result<(Stat, Option<Stat>)> {
    let src_stat = if dereference { stat(src)? } else { lstat(src)? };
    let dest_stat = stat_or_missing(dest, dereference)?;
    Ok((src_stat, dest_stat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_dest_yields_none_not_error() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("src.txt");
        fs::write(&src, b"hi").expect("write src");
        let dest = dir.path().join("does-not-exist.txt");

        let (src_stat, dest_stat) = get_stats(&src, &dest, false).expect("get_stats");
        assert_eq!(src_stat.kind, EntryKind::RegularFile);
        assert!(dest_stat.is_none());
    }

    #[test]
    fn lstat_reports_symlink_kind() {
        let dir = tempdir().expect("tempdir");
        let target = dir.path().join("target.txt");
        fs::write(&target, b"hi").expect("write target");
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).expect("symlink");

        let s = lstat(&link).expect("lstat");
        assert_eq!(s.kind, EntryKind::Symlink);

        let s = stat(&link).expect("stat");
        assert_eq!(s.kind, EntryKind::RegularFile);
    }
}
