//! Path-identity predicates
//!
//! Pure functions with no filesystem access beyond what the caller has
//! already resolved: inode identity, lexical subdirectory containment,
//! and lexical path normalization. None of these follow symlinks; the
//! loop-detection that requires following symlinks lives in
//! [`crate::preflight`].

use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::stat::Stat;

/// Two stat records refer to the same underlying filesystem object.
///
/// Zero device/inode pairs are never considered identical: some
/// filesystems report zero for synthetic or unsupported entries, and
/// treating those as identical would make every such entry collide.
#[must_use]
pub fn are_identical(a: &Stat, b: &Stat) -> bool {
    a.dev != 0 && a.ino != 0 && a.dev == b.dev && a.ino == b.ino
}

/// Lexically resolve `path` to an absolute, `.`/`..`-collapsed form.
///
/// This never touches the filesystem and never follows symlinks; it is
/// the Rust equivalent of Node's `path.resolve`. A relative path is
/// joined against the current working directory.
#[must_use]
pub fn resolve_lexical(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("/"))
            .join(path)
    };

    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(p) => out.push(p.as_os_str()),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(Component::RootDir.as_os_str());
    }
    out
}

/// The normal (non-root, non-prefix) components of a lexically resolved path.
fn normal_components(path: &Path) -> Vec<OsString> {
    resolve_lexical(path)
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_os_string()),
            _ => None,
        })
        .collect()
}

/// `true` iff `dest`'s normalized component sequence has `src`'s
/// normalized component sequence as a prefix — i.e. `dest` lies at or
/// under `src` on the filesystem, purely by path shape.
///
/// This is a pure string predicate: it does not read the filesystem, and
/// it is symmetric in usage — callers ask "is `dest` inside `src`?" and
/// also "is `src` inside `dest`?" by swapping arguments.
#[must_use]
pub fn is_src_subdir(src: &Path, dest: &Path) -> bool {
    let src_parts = normal_components(src);
    let dest_parts = normal_components(dest);
    if src_parts.len() > dest_parts.len() {
        return false;
    }
    src_parts
        .iter()
        .zip(dest_parts.iter())
        .all(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::EntryKind;

    fn stat(dev: u64, ino: u64) -> Stat {
        Stat {
            kind: EntryKind::RegularFile,
            mode: 0o644,
            atime: std::time::SystemTime::UNIX_EPOCH,
            mtime: std::time::SystemTime::UNIX_EPOCH,
            dev,
            ino,
        }
    }

    #[test]
    fn identical_requires_nonzero_dev_and_ino() {
        assert!(are_identical(&stat(1, 2), &stat(1, 2)));
        assert!(!are_identical(&stat(0, 2), &stat(0, 2)));
        assert!(!are_identical(&stat(1, 2), &stat(1, 3)));
    }

    #[test]
    fn subdir_exact_match_is_subdir() {
        assert!(is_src_subdir(Path::new("/a/b"), Path::new("/a/b")));
    }

    #[test]
    fn subdir_true_for_nested_path() {
        assert!(is_src_subdir(Path::new("/a/b"), Path::new("/a/b/c/d")));
    }

    #[test]
    fn subdir_false_for_sibling_path() {
        assert!(!is_src_subdir(Path::new("/a/b"), Path::new("/a/bc")));
    }

    #[test]
    fn subdir_false_when_dest_is_ancestor() {
        assert!(!is_src_subdir(Path::new("/a/b/c"), Path::new("/a/b")));
    }

    #[test]
    fn resolve_lexical_collapses_dotdot_without_touching_fs() {
        let resolved = resolve_lexical(Path::new("/a/b/../c"));
        assert_eq!(resolved, PathBuf::from("/a/c"));
    }
}
