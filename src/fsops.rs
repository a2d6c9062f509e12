//! Thin wrappers over the ambient filesystem primitives the copiers need
//! beyond plain `std::fs`: mode restoration and timestamp restoration.
//!
//! These are deliberately small — the syscalls themselves are the
//! out-of-scope "ambient filesystem API" the spec names as an external
//! collaborator; this module just gives the copiers one place to call
//! them with consistent error mapping.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
#[cfg(target_pointer_width = "32")]
use std::sync::Once;
use std::time::SystemTime;

use filetime::FileTime;
use tracing::debug;
#[cfg(target_pointer_width = "32")]
use tracing::warn;

use crate::error::Result;

/// `chmod(2)`: set the permission bits (low 12 bits of mode) on `path`.
pub fn chmod(path: &Path, mode: u32) -> Result<()> {
    debug!(path = %path.display(), mode = format_args!("{mode:o}"), "chmod");
    fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(target_pointer_width = "32")]
static TIMESTAMP_PRECISION_WARNED: Once = Once::new();

/// Warn once per process that `preserve_timestamps` may lose precision on
/// this host's time representation. Only fires on 32-bit targets, where a
/// narrow `time_t`-equivalent can't carry the same range/precision as on a
/// 64-bit host — the Rust analogue of the source system's
/// `TimestampPrecisionWarning`.
#[cfg(target_pointer_width = "32")]
pub fn warn_timestamp_precision_once() {
    TIMESTAMP_PRECISION_WARNED.call_once(|| {
        warn!(
            "preserve_timestamps requested on a 32-bit host; atime/mtime precision may be insufficient"
        );
    });
}

#[cfg(not(target_pointer_width = "32"))]
pub fn warn_timestamp_precision_once() {}

/// `utimes`-equivalent: set atime/mtime on `path`.
pub fn set_times(path: &Path, atime: SystemTime, mtime: SystemTime) -> Result<()> {
    debug!(path = %path.display(), "restoring timestamps");
    filetime::set_file_times(
        path,
        FileTime::from_system_time(atime),
        FileTime::from_system_time(mtime),
    )?;
    Ok(())
}
