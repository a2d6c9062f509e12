//! File copier
//!
//! Handles regular files and, since the engine treats them identically,
//! character/block devices: overwrite policy, byte copy, optional
//! timestamp restoration, and mode restoration last.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{CopyError, ErrorCode, Result};
use crate::fsops;
use crate::options::CopyOptions;
use crate::stat::{self, Stat};

const OWNER_WRITE: u32 = 0o200;

pub(crate) fn copy_file(
    src: &Path,
    dest: &Path,
    src_stat: &Stat,
    dest_stat: Option<&Stat>,
    opts: &CopyOptions,
    top_level: bool,
) -> Result<()> {
    if top_level {
        if let Some(parent) = dest.parent() {
            if fs::metadata(parent).is_err() {
                fs::create_dir_all(parent)?;
            }
        }
    }

    match dest_stat {
        None => {}
        Some(_) if opts.force => remove_existing(dest)?,
        Some(_) if opts.error_on_exist => {
            return Err(CopyError::classified(
                ErrorCode::CopyEexist,
                dest,
                format!("destination {} already exists", dest.display()),
            ));
        }
        Some(_) => {
            debug!(dest = %dest.display(), "destination exists, leaving untouched");
            return Ok(());
        }
    }

    fs::copy(src, dest)?;

    if opts.preserve_timestamps {
        fsops::warn_timestamp_precision_once();
        // The byte copy just perturbed src's atime; restat it so the
        // timestamps we restore are authoritative.
        let fresh = stat::stat(src)?;
        if fresh.mode & OWNER_WRITE == 0 {
            fsops::chmod(dest, fresh.mode | OWNER_WRITE)?;
        }
        fsops::set_times(dest, fresh.atime, fresh.mtime)?;
    }

    // Runs last so any transient write bit from the timestamp step is undone.
    fsops::chmod(dest, src_stat.mode)?;
    Ok(())
}

fn remove_existing(dest: &Path) -> Result<()> {
    match fs::remove_file(dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
