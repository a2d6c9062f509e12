//! Directory copier
//!
//! Creates the destination directory if absent, recurses through the
//! shared dispatcher for every child in readdir order, and restores the
//! directory's mode only after every child has been processed.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::fsops;
use crate::options::CopyOptions;
use crate::stat::Stat;

use super::copy_any;

pub(crate) fn copy_directory(
    src: &Path,
    dest: &Path,
    src_stat: &Stat,
    dest_stat: Option<&Stat>,
    opts: &CopyOptions,
) -> Result<()> {
    if dest_stat.is_none() {
        debug!(dest = %dest.display(), "creating directory");
        fs::create_dir(dest)?;
    }

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let name = entry.file_name();
        let src_child = src.join(&name);
        let dest_child = dest.join(&name);
        copy_any(&src_child, &dest_child, opts, false)?;
    }

    // Runs last: a child copy that needed to widen dest's mode
    // temporarily (see the file copier) must not leave it widened.
    fsops::chmod(dest, src_stat.mode)?;
    Ok(())
}
