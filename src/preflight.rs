//! Pre-flight validator
//!
//! `check_paths` and `check_parent_paths` run, in that order, before any
//! mutation for a given `(src, dest)` pair. Both are pure of mutation:
//! they only stat ancestors and compare.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CopyError, ErrorCode, Result};
use crate::identity::{are_identical, is_src_subdir, resolve_lexical};
use crate::stat::Stat;

/// Structural checks on `(src, dest)` that don't require walking
/// ancestors. Raised in priority order because more than one condition
/// can hold simultaneously (e.g. identical paths that also form a
/// subdirectory relation).
pub fn check_paths(src: &Path, src_stat: &Stat, dest: &Path, dest_stat: Option<&Stat>) -> Result<()> {
    if let Some(ds) = dest_stat {
        if are_identical(src_stat, ds) {
            return Err(CopyError::classified(
                ErrorCode::CopyToSubdirectory,
                dest,
                format!(
                    "cannot copy {} to a subdirectory of itself, {}",
                    src.display(),
                    dest.display()
                ),
            ));
        }
    }

    if src_stat.is_dir() && dest_stat.is_some_and(|d| !d.is_dir()) {
        return Err(CopyError::classified(
            ErrorCode::CopyDirToNonDir,
            dest,
            format!(
                "cannot overwrite non-directory {} with directory {}",
                dest.display(),
                src.display()
            ),
        ));
    }

    if !src_stat.is_dir() && dest_stat.is_some_and(Stat::is_dir) {
        return Err(CopyError::classified(
            ErrorCode::CopyNonDirToDir,
            dest,
            format!(
                "cannot overwrite directory {} with non-directory {}",
                dest.display(),
                src.display()
            ),
        ));
    }

    if src_stat.is_dir() && is_src_subdir(src, dest) {
        return Err(CopyError::classified(
            ErrorCode::CopyToSubdirectory,
            dest,
            format!(
                "cannot copy {} to a subdirectory of itself, {}",
                src.display(),
                dest.display()
            ),
        ));
    }

    Ok(())
}

/// Walk `dest`'s ancestors toward the filesystem root looking for one
/// that aliases `src` (typically through a symlink). Termination: the
/// ancestor equals `dirname(src)`, the ancestor is a filesystem root, or
/// statting the ancestor fails with "no such entry" — any other stat
/// error propagates.
pub fn check_parent_paths(src: &Path, src_stat: &Stat, dest: &Path) -> Result<()> {
    let src_parent = src.parent().map(resolve_lexical);
    let mut current_dest = dest.to_path_buf();

    loop {
        let Some(dest_parent) = current_dest.parent().map(Path::to_path_buf) else {
            return Ok(());
        };
        let resolved_dest_parent = resolve_lexical(&dest_parent);
        if Some(&resolved_dest_parent) == src_parent.as_ref() || is_fs_root(&resolved_dest_parent) {
            return Ok(());
        }

        match fs::metadata(&dest_parent) {
            Ok(meta) => {
                let ancestor_stat = Stat::from_metadata(&meta);
                if are_identical(src_stat, &ancestor_stat) {
                    debug!(
                        ancestor = %dest_parent.display(),
                        "destination ancestor aliases source"
                    );
                    return Err(CopyError::classified(
                        ErrorCode::CopyToSubdirectory,
                        dest,
                        format!(
                            "cannot copy {} to a subdirectory of itself, {}",
                            src.display(),
                            dest.display()
                        ),
                    ));
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        }

        current_dest = dest_parent;
    }
}

fn is_fs_root(path: &PathBuf) -> bool {
    path.parent().is_none()
}
