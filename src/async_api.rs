//! Async dialect
//!
//! The shared blocking algorithm runs on the async runtime's blocking-task
//! pool via `compio::runtime::spawn_blocking` — the same primitive this
//! codebase's lineage uses to bridge its own statx/stat syscalls into async
//! code — and is awaited once to completion.

use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::engine;
use crate::error::{CopyError, Result};
use crate::options::CopyOptions;

/// Copy `src` to `dest`, awaiting completion of the whole recursive copy.
///
/// # Errors
///
/// Returns [`CopyError`] for the same conditions as [`crate::copy_sync`].
#[instrument(skip(opts), fields(src = %src.as_ref().display(), dest = %dest.as_ref().display()))]
pub async fn copy_async(
    src: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    opts: CopyOptions,
) -> Result<()> {
    let src: PathBuf = src.as_ref().to_path_buf();
    let dest: PathBuf = dest.as_ref().to_path_buf();

    let join_result =
        compio::runtime::spawn_blocking(move || engine::copy_any(&src, &dest, &opts, true)).await;

    match join_result {
        Ok(inner) => inner,
        Err(e) => Err(CopyError::Io(std::io::Error::other(format!(
            "async copy task panicked: {e:?}"
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[compio::test]
    async fn copies_a_single_file() {
        let dir = tempdir().expect("tempdir");
        let src = dir.path().join("src.txt");
        fs::write(&src, b"hello async").expect("write src");
        let dest = dir.path().join("dest.txt");

        copy_async(&src, &dest, CopyOptions::default())
            .await
            .expect("copy_async");

        assert_eq!(fs::read(&dest).expect("read dest"), b"hello async");
    }

    #[compio::test]
    async fn propagates_preflight_error() {
        let dir = tempdir().expect("tempdir");
        let result = copy_async(dir.path(), dir.path(), CopyOptions::default()).await;
        assert!(result.is_err());
    }
}
