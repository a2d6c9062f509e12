//! Symlink copier
//!
//! Resolves the link target, optionally re-anchors it for dereference
//! mode, enforces the two loop-protection invariants specific to
//! symlinks, and unlinks-then-recreates when the destination already
//! exists as a link.

use std::fs;
use std::io;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use crate::error::{CopyError, ErrorCode, Result};
use crate::identity::{is_src_subdir, resolve_lexical};
use crate::options::CopyOptions;
use crate::stat::Stat;

pub(crate) fn copy_symlink(
    src: &Path,
    dest: &Path,
    _src_stat: &Stat,
    dest_stat: Option<&Stat>,
    opts: &CopyOptions,
) -> Result<()> {
    let raw_target = fs::read_link(src)?;
    let resolved_src = reanchor_if_dereferencing(&raw_target, src.parent(), opts.dereference);

    if dest_stat.is_none() {
        symlink(&resolved_src, dest)?;
        return Ok(());
    }

    let dest_link_target = match fs::read_link(dest) {
        Ok(target) => target,
        Err(e) if e.kind() == io::ErrorKind::InvalidInput => {
            // Destination exists but is not itself a symlink. Attempt the
            // create anyway; the underlying symlink(2) call raises EEXIST,
            // and that raw error surfaces as-is.
            symlink(&resolved_src, dest)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let resolved_dest = reanchor_if_dereferencing(&dest_link_target, dest.parent(), opts.dereference);

    if is_src_subdir(&resolved_src, &resolved_dest) {
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

    let src_target_is_dir = fs::metadata(src).map(|m| m.is_dir()).unwrap_or(false);
    if src_target_is_dir && is_src_subdir(&resolved_dest, &resolved_src) {
        return Err(CopyError::classified(
            ErrorCode::CopySymlinkToSubdirectory,
            dest,
            format!(
                "cannot overwrite symlink {} pointing to a directory that contains {}",
                dest.display(),
                src.display()
            ),
        ));
    }

    fs::remove_file(dest)?;
    symlink(&resolved_src, dest)?;
    Ok(())
}

/// When `dereference` is set, re-anchor a (possibly relative) link
/// target against `base_dir` and collapse it lexically; otherwise
/// return the raw target unchanged.
fn reanchor_if_dereferencing(target: &Path, base_dir: Option<&Path>, dereference: bool) -> PathBuf {
    if !dereference {
        return target.to_path_buf();
    }
    let joined = if target.is_absolute() {
        target.to_path_buf()
    } else {
        base_dir.unwrap_or_else(|| Path::new(".")).join(target)
    };
    resolve_lexical(&joined)
}
