//! Copy options
//!
//! `CopyOptions` is the configuration bag threaded through every dialect.
//! It is also exposed as a `clap::Args` struct (`CopyOptionsArgs`) so the
//! CLI can build one from flags; the filter predicate has no CLI
//! equivalent and is only reachable through the library API.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A predicate invoked for every `(src, dest)` pair; returning `false`
/// skips that pair (and, for a directory, its entire subtree).
pub type Filter = Arc<dyn Fn(&Path, &Path) -> bool + Send + Sync>;

/// Configuration for a single copy operation.
///
/// `force` and `error_on_exist` are mutually exclusive in effect: if
/// neither is set, an existing destination file is silently left
/// untouched (see `CopyOptions::default`).
#[derive(Clone, Default)]
pub struct CopyOptions {
    /// Follow symlinks in `src` instead of copying the link itself.
    pub dereference: bool,
    /// Restore atime/mtime on copied files to match `src`.
    pub preserve_timestamps: bool,
    /// Remove and replace an existing destination.
    pub force: bool,
    /// Treat an existing destination as a hard error (only meaningful
    /// when `force` is false).
    pub error_on_exist: bool,
    /// Optional per-pair filter.
    pub filter: Option<Filter>,
}

impl fmt::Debug for CopyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyOptions")
            .field("dereference", &self.dereference)
            .field("preserve_timestamps", &self.preserve_timestamps)
            .field("force", &self.force)
            .field("error_on_exist", &self.error_on_exist)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl CopyOptions {
    /// Attach a filter predicate, returning `self` for chaining.
    #[must_use]
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Path, &Path) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }
}

/// CLI-facing mirror of [`CopyOptions`]; the filter field has no flag
/// equivalent and is always `None` when built this way.
#[derive(clap::Args, Debug, Clone, Default)]
#[command(next_help_heading = "Copy Options")]
pub struct CopyOptionsArgs {
    /// Follow symlinks in the source instead of copying the link itself
    #[arg(short = 'L', long)]
    pub dereference: bool,

    /// Preserve access and modification times on copied files
    #[arg(short = 'p', long = "preserve-timestamps")]
    pub preserve_timestamps: bool,

    /// Remove and replace an existing destination
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Fail if the destination already exists (ignored when --force is set)
    #[arg(long = "error-on-exist")]
    pub error_on_exist: bool,
}

impl From<CopyOptionsArgs> for CopyOptions {
    fn from(args: CopyOptionsArgs) -> Self {
        Self {
            dereference: args.dereference,
            preserve_timestamps: args.preserve_timestamps,
            force: args.force,
            error_on_exist: args.error_on_exist,
            filter: None,
        }
    }
}
