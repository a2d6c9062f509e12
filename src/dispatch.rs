//! Type dispatcher
//!
//! Classifies `src` and decides which copier handles it. Unsupported
//! kinds are rejected here with the precise error the spec calls for,
//! before any of the three copiers ever runs.

use std::path::Path;

use crate::error::{CopyError, ErrorCode, Result};
use crate::stat::EntryKind;

/// Which copier a given `src` kind routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Handled by the file copier (also used for device nodes).
    File,
    /// Handled by the directory copier.
    Directory,
    /// Handled by the symlink copier.
    Symlink,
}

/// Classify `kind` and route to a copier, or reject it outright.
pub fn route(kind: EntryKind, dest: &Path) -> Result<Route> {
    match kind {
        EntryKind::Directory => Ok(Route::Directory),
        EntryKind::RegularFile | EntryKind::BlockDevice | EntryKind::CharDevice => Ok(Route::File),
        EntryKind::Symlink => Ok(Route::Symlink),
        EntryKind::Socket => Err(CopyError::classified(
            ErrorCode::CopySocket,
            dest,
            "cannot copy a socket",
        )),
        EntryKind::Fifo => Err(CopyError::classified(
            ErrorCode::CopyFifoPipe,
            dest,
            "cannot copy a named pipe",
        )),
        EntryKind::Unknown => Err(CopyError::classified(
            ErrorCode::CopyUnknown,
            dest,
            "cannot copy an entry of unknown type",
        )),
    }
}
