//! Error types for the copy engine
//!
//! Errors come in two flavors: pre-flight violations, which carry a
//! symbolic `code` so callers can match on the specific safety rule that
//! was violated, and in-flight failures, which are the raw [`std::io::Error`]
//! from whatever syscall failed. Both are unified behind [`CopyError`] and
//! both carry the same `path`/`syscall`/`errno` triple described by the
//! spec's error table.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Symbolic classification for a pre-flight safety violation.
///
/// These mirror the `ERR_FS_COPY_*` codes of the source system; they are
/// kept as a closed enum (rather than bare strings) so callers can match
/// on them exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// `src` and `dest` are the same inode, or `dest` lies within `src`
    /// (directly, or through a symlink-induced ancestor alias).
    CopyToSubdirectory,
    /// `src` is a directory but `dest` already exists as something else.
    CopyDirToNonDir,
    /// `src` is not a directory but `dest` already exists as a directory.
    CopyNonDirToDir,
    /// `error_on_exist` was set and `dest` already exists.
    CopyEexist,
    /// `src` is a Unix domain socket.
    CopySocket,
    /// `src` is a named pipe (FIFO).
    CopyFifoPipe,
    /// Unlinking the destination symlink would destroy content about to
    /// be written through `src`.
    CopySymlinkToSubdirectory,
    /// `src` is a filesystem entry of a kind this engine does not handle.
    CopyUnknown,
}

impl ErrorCode {
    /// The symbolic code string surfaced on the error, e.g.
    /// `"ERR_FS_COPY_TO_SUBDIRECTORY"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CopyToSubdirectory => "ERR_FS_COPY_TO_SUBDIRECTORY",
            Self::CopyDirToNonDir => "ERR_FS_COPY_DIR_TO_NON_DIR",
            Self::CopyNonDirToDir => "ERR_FS_COPY_NON_DIR_TO_DIR",
            Self::CopyEexist => "ERR_FS_COPY_EEXIST",
            Self::CopySocket => "ERR_FS_COPY_SOCKET",
            Self::CopyFifoPipe => "ERR_FS_COPY_FIFO_PIPE",
            Self::CopySymlinkToSubdirectory => "ERR_FS_COPY_SYMLINK_TO_SUBDIRECTORY",
            Self::CopyUnknown => "ERR_FS_COPY_UNKNOWN",
        }
    }

    /// The numeric errno this code maps to.
    #[must_use]
    pub const fn errno(self) -> i32 {
        match self {
            Self::CopyToSubdirectory
            | Self::CopySocket
            | Self::CopyFifoPipe
            | Self::CopySymlinkToSubdirectory
            | Self::CopyUnknown => libc::EINVAL,
            Self::CopyDirToNonDir => libc::EISDIR,
            Self::CopyNonDirToDir => libc::ENOTDIR,
            Self::CopyEexist => libc::EEXIST,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error type returned by every dialect of `copy`.
#[derive(Debug, Error)]
pub enum CopyError {
    /// A pre-flight safety violation; no mutation happened for this pair.
    #[error("{message}")]
    Classified {
        /// Symbolic error code.
        code: ErrorCode,
        /// Human-readable message.
        message: String,
        /// The destination path this error concerns.
        path: PathBuf,
    },
    /// An in-flight failure from the underlying filesystem, surfaced
    /// as-is (for example the raw `EEXIST` a `symlink(2)` call raises).
    #[error("copy failed: {0}")]
    Io(#[from] io::Error),
}

impl CopyError {
    /// Build a classified pre-flight error.
    pub fn classified(code: ErrorCode, path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Classified {
            code,
            message: message.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The symbolic code, if this is a classified pre-flight error.
    #[must_use]
    pub const fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Classified { code, .. } => Some(*code),
            Self::Io(_) => None,
        }
    }

    /// The destination path this error concerns, when known.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Classified { path, .. } => Some(path),
            Self::Io(_) => None,
        }
    }

    /// The syscall name surfaced on every classified error: always `"copy"`.
    #[must_use]
    pub const fn syscall(&self) -> &'static str {
        "copy"
    }

    /// The numeric errno for this error.
    #[must_use]
    pub fn errno(&self) -> i32 {
        match self {
            Self::Classified { code, .. } => code.errno(),
            Self::Io(e) => e.raw_os_error().unwrap_or(libc::EIO),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CopyError>;
