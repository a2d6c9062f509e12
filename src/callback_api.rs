//! Callback dialect
//!
//! The entire blocking algorithm runs on a dedicated worker thread — the
//! Rust analogue of Node's libuv-thread-pool-backed callback API — and
//! the supplied callback fires exactly once with the outcome: `Ok(())`
//! on success, the first raised error on failure.

use std::path::PathBuf;
use std::thread;

use tracing::{debug, error};

use crate::engine;
use crate::error::Result;
use crate::options::CopyOptions;

/// Copy `src` to `dest` on a worker thread, invoking `callback` exactly
/// once with the result once the whole recursive copy has settled.
///
/// `opts` must be `Send` (its optional filter already requires
/// `Send + Sync`) since it is moved onto the worker thread.
pub fn copy<F>(src: impl Into<PathBuf>, dest: impl Into<PathBuf>, opts: CopyOptions, callback: F)
where
    F: FnOnce(Result<()>) + Send + 'static,
{
    let src = src.into();
    let dest = dest.into();
    thread::spawn(move || {
        debug!(src = %src.display(), dest = %dest.display(), "starting callback-dialect copy");
        let result = engine::copy_any(&src, &dest, &opts, true);
        if let Err(ref e) = result {
            error!(error = %e, "callback-dialect copy failed");
        }
        callback(result);
    });
}
