//! Shared test utilities for the storefront-gal test suite.
//!
//! Filesystem fixture helpers for tests that build directory trees under a
//! `tempfile::TempDir`: creating placeholder files and pinning their
//! modification times so ordering tests are deterministic.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Create an empty placeholder file at `root/rel`, creating parent
/// directories as needed. `rel` uses `/` separators.
pub fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, b"").unwrap();
}

/// Pin a file's modification time.
///
/// Scan ordering is mtime-based, so tests set explicit timestamps instead of
/// relying on creation order and filesystem clock resolution.
pub fn set_mtime(path: &Path, when: SystemTime) {
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_times(fs::FileTimes::new().set_modified(when))
        .unwrap();
}
