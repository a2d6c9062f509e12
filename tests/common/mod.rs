//! Shared fixture tree for the end-to-end scenario tests.
//!
//! Every scenario in `scenarios.rs` is seeded from the same `K` shape the
//! source system's own test suite uses: a regular file at the root, a
//! two-level subdirectory holding another file, and a symlink.

use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;

/// Build fixture tree `K` under `root`:
/// `index.js`, `a/b/README2.md`, and `link` pointing at `index.js`.
pub fn seed_tree(root: &Path) {
    fs::create_dir_all(root.join("a/b")).expect("mkdir -p a/b");
    fs::write(root.join("index.js"), b"module.exports = 1;\n").expect("write index.js");
    fs::write(root.join("a/b/README2.md"), b"# nested\n").expect("write README2.md");
    symlink(root.join("index.js"), root.join("link")).expect("create link");
}

/// Recursively assert that `dest` mirrors `src`'s tree shape: every
/// directory, regular file, and symlink in `src` has a same-named,
/// same-kind counterpart in `dest`.
pub fn assert_trees_match(src: &Path, dest: &Path) {
    for entry in fs::read_dir(src).expect("read_dir src") {
        let entry = entry.expect("dir entry");
        let name = entry.file_name();
        let src_child = src.join(&name);
        let dest_child = dest.join(&name);
        let src_kind = fs::symlink_metadata(&src_child).expect("lstat src child");

        assert!(
            dest_child.symlink_metadata().is_ok(),
            "{} missing from destination",
            dest_child.display()
        );
        let dest_kind = fs::symlink_metadata(&dest_child).expect("lstat dest child");

        if src_kind.is_dir() {
            assert!(dest_kind.is_dir(), "{} should be a directory", dest_child.display());
            assert_trees_match(&src_child, &dest_child);
        } else if src_kind.file_type().is_symlink() {
            assert!(
                dest_kind.file_type().is_symlink(),
                "{} should be a symlink",
                dest_child.display()
            );
        } else {
            assert!(dest_kind.is_file(), "{} should be a regular file", dest_child.display());
            assert_eq!(
                fs::read(&src_child).expect("read src child"),
                fs::read(&dest_child).expect("read dest child"),
                "contents differ for {}",
                name.to_string_lossy()
            );
        }
    }
}
