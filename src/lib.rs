//! A recursive filesystem copy engine with three execution dialects over
//! one shared algorithm.
//!
//! - [`copy_sync`] — blocking; returns on success, raises on error.
//! - [`copy`] — callback-completed, backed by a worker thread.
//! - [`copy_async`] — async, backed by the async runtime's blocking-task
//!   pool.
//!
//! All three dialects share one implementation of the traversal,
//! pre-flight safety checks, and per-kind copiers (see [`engine`]); they
//! differ only in how they schedule that shared algorithm. See
//! `SPEC_FULL.md` in the repository root for the full design.
//!
//! # Safety analysis
//!
//! Before any mutation, every `(src, dest)` pair is checked for:
//! identity (same inode), containment (`dest` inside `src`), ancestor
//! aliasing (a symlinked ancestor of `dest` pointing back into `src`),
//! and type compatibility (directory vs non-directory). See
//! [`error::ErrorCode`] for the full list of classified violations.
//!
//! # Example
//!
//! ```no_run
//! use copy_engine::{copy_sync, CopyOptions};
//!
//! let opts = CopyOptions {
//!     preserve_timestamps: true,
//!     ..Default::default()
//! };
//! copy_sync("src", "dest", &opts)?;
//! # Ok::<(), copy_engine::CopyError>(())
//! ```

pub mod cli;
mod dispatch;
mod engine;
pub mod error;
mod fsops;
mod identity;
pub mod options;
mod preflight;
pub mod stat;

mod async_api;
mod callback_api;
mod sync_api;

pub use async_api::copy_async;
pub use callback_api::copy;
pub use error::{CopyError, ErrorCode, Result};
pub use options::CopyOptions;
pub use stat::{EntryKind, Stat};
pub use sync_api::copy_sync;
