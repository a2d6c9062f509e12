//! The shared copy algorithm.
//!
//! This is the single implementation of the recursive copy algorithm
//! described by the spec: pre-flight, then type dispatch, then one of
//! the three per-kind copiers. All three public dialects (`copy_sync`,
//! the callback form, and `copy_async`) call [`copy_any`] — directly for
//! the blocking dialect, from a worker thread for the callback dialect,
//! and from a `spawn_blocking` task for the async dialect. The algorithm
//! itself is never hand-ported.

mod directory;
mod file;
mod symlink;

use std::path::Path;

use tracing::debug;

use crate::dispatch::{self, Route};
use crate::error::Result;
use crate::options::CopyOptions;
use crate::preflight;
use crate::stat;

/// Copy `src` to `dest` according to `opts`. Recurses internally for
/// directories; `top_level` controls whether a missing destination
/// parent is created recursively (only true for the outermost call —
/// children of a directory always have an already-created parent).
pub(crate) fn copy_any(src: &Path, dest: &Path, opts: &CopyOptions, top_level: bool) -> Result<()> {
    let (src_stat, dest_stat) = stat::get_stats(src, dest, opts.dereference)?;
    preflight::check_paths(src, &src_stat, dest, dest_stat.as_ref())?;
    preflight::check_parent_paths(src, &src_stat, dest)?;

    if let Some(filter) = &opts.filter {
        if !filter(src, dest) {
            debug!(src = %src.display(), dest = %dest.display(), "skipped by filter");
            return Ok(());
        }
    }

    match dispatch::route(src_stat.kind, dest)? {
        Route::Directory => directory::copy_directory(src, dest, &src_stat, dest_stat.as_ref(), opts),
        Route::File => file::copy_file(src, dest, &src_stat, dest_stat.as_ref(), opts, top_level),
        Route::Symlink => symlink::copy_symlink(src, dest, &src_stat, dest_stat.as_ref(), opts),
    }
}
