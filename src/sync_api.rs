//! Blocking dialect
//!
//! Every filesystem call blocks the calling thread; recursion uses the
//! native call stack; there are no suspension points.

use std::path::Path;

use tracing::instrument;

use crate::engine;
use crate::error::Result;
use crate::options::CopyOptions;

/// Copy `src` to `dest`, blocking the calling thread until the whole
/// recursive copy completes or the first error is raised.
///
/// # Errors
///
/// Returns [`crate::error::CopyError`] for any pre-flight safety
/// violation (see the crate-level docs for the full list) or for any
/// in-flight filesystem failure.
#[instrument(skip(opts), fields(src = %src.as_ref().display(), dest = %dest.as_ref().display()))]
pub fn copy_sync(src: impl AsRef<Path>, dest: impl AsRef<Path>, opts: &CopyOptions) -> Result<()> {
    engine::copy_any(src.as_ref(), dest.as_ref(), opts, true)
}
